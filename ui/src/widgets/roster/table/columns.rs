//! Column definitions for the roster table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const SELECT_WIDTH: f32 = 44.0;
pub const ROLE_WIDTH: f32 = 150.0;
pub const ACTIONS_WIDTH: f32 = 180.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration, in order:
/// - Select (fixed checkbox column)
/// - Name (flexible)
/// - Email (flexible, wider)
/// - Role (fixed; becomes a text edit while the row is editing)
/// - Actions (fixed)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(SELECT_WIDTH),
        Column::remainder().at_least(120.0),
        Column::remainder().at_least(160.0),
        Column::exact(ROLE_WIDTH),
        Column::exact(ACTIONS_WIDTH),
    ]
}
