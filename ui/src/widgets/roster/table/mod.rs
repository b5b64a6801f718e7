//! Table components for the roster panel.
//!
//! The rendering logic is split into smaller, focused components:
//! - `columns`: column definitions and widths
//! - `header`: table header rendering
//! - `row`: individual row rendering with cells
//! - `cells`: cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::Ui;
use egui_extras::TableBuilder;
use roster_business::RosterState;

pub use row::RowIntent;

use row::RowData;

/// Renders the visible rows and returns the intents emitted by row
/// controls; the caller applies them to the roster afterwards.
pub fn roster_table(roster: &RosterState, ui: &mut Ui) -> Vec<RowIntent> {
    let mut intents = Vec::new();
    let visible = roster.visible();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for column in columns::table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(columns::HEADER_HEIGHT, |mut header_row| {
            header::render_table_header(&mut header_row);
        })
        .body(|mut body| {
            for record in visible.iter().copied() {
                body.row(columns::ROW_HEIGHT, |mut table_row| {
                    let id = record.uid();
                    let data = RowData {
                        record,
                        selected: roster.is_selected(id),
                        draft_role: roster.draft(id).map(|draft| draft.role.clone()),
                    };
                    row::render_record_row(&mut table_row, &data, &mut intents);
                });
            }
        });

    intents
}
