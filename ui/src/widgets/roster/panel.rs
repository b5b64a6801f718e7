//! Main panel for the roster table: toolbar, status line, table, and
//! pagination.

use egui::{Color32, RichText, Ui};
use roster_business::{EditField, RosterFetchCompute, RosterFetchResult, RosterState, SearchFilter};

use super::table::RowIntent;
use super::{pagination, table};
use crate::state::State;

/// Displays the roster panel. Row controls emit intents that are applied to
/// the roster after the table has been rendered, to keep borrows simple.
pub fn roster_panel(state: &mut State, ui: &mut Ui) {
    // Toolbar row: search field + bulk delete.
    let mut delete_selected_clicked = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.query_input)
                .hint_text("Search by name, email or role")
                .desired_width(240.0),
        );
        if response.changed() {
            let query = state.query_input.clone();
            state.search.keystroke(state.ctx.runtime(), query);
        }

        let has_selection = state.ctx.state::<RosterState>().has_selection();
        if ui
            .add_enabled(has_selection, egui::Button::new("Delete Selected"))
            .clicked()
        {
            delete_selected_clicked = true;
        }
    });

    status_line(state, ui);
    ui.add_space(8.0);

    let roster = state.ctx.state_mut::<RosterState>();
    let intents = table::roster_table(roster, ui);
    for intent in intents {
        match intent {
            RowIntent::ToggleSelect(id) => roster.toggle_select(id),
            RowIntent::BeginEdit(id) => roster.begin_edit(id),
            RowIntent::RoleEdited(id, value) => roster.update_field(id, EditField::Role, &value),
            RowIntent::CommitEdit(id) => roster.commit_edit(id),
            RowIntent::CancelEdit(id) => roster.cancel_edit(id),
            RowIntent::Delete(id) => roster.delete_one(id),
        }
    }
    if delete_selected_clicked {
        roster.delete_selected();
    }

    if matches!(roster.search(), SearchFilter::NoMatches) {
        ui.label("No records match the search.");
    }

    // Search results are capped, not paged, so the bar only shows for the
    // paginated view.
    if !roster.is_searching() && roster.total_pages() > 1 {
        ui.add_space(8.0);
        if let Some(target) = pagination::pagination_bar(roster.page(), roster.total_pages(), ui) {
            roster.set_page(target);
        }
    }
}

/// Load progress, load errors, or the record count.
fn status_line(state: &State, ui: &mut Ui) {
    let Some(compute) = state.ctx.cached::<RosterFetchCompute>() else {
        return;
    };
    match &compute.result {
        RosterFetchResult::Idle | RosterFetchResult::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading data...");
            });
        }
        RosterFetchResult::Error(message) => {
            ui.colored_label(Color32::RED, format!("Error: {message}"));
        }
        RosterFetchResult::Loaded(_) => {
            let roster = state.ctx.state::<RosterState>();
            let mut line = format!("{} records", roster.total());
            if let Some(loaded_at) = roster.loaded_at() {
                line.push_str(&format!(" (loaded {})", loaded_at.format("%H:%M:%S")));
            }
            ui.label(RichText::new(line).weak());
        }
    }
}
