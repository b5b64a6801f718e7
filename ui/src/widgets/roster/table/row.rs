//! Row rendering for the roster table.

use egui_extras::TableRow;
use roster_business::MemberRecord;
use ustr::Ustr;

use super::cells::{
    render_action_buttons, render_role_edit_cell, render_select_cell, render_text_cell,
};

/// Data needed to render one record row.
pub struct RowData<'a> {
    pub record: &'a MemberRecord,
    pub selected: bool,
    /// Present while the row is in edit mode.
    pub draft_role: Option<String>,
}

/// User intents emitted by row controls, applied to the roster after the
/// table closure returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIntent {
    ToggleSelect(Ustr),
    BeginEdit(Ustr),
    RoleEdited(Ustr, String),
    CommitEdit(Ustr),
    CancelEdit(Ustr),
    Delete(Ustr),
}

/// Renders one row: selection checkbox, name, email, role (label or edit
/// box), and action buttons.
#[inline]
pub fn render_record_row(
    row: &mut TableRow<'_, '_>,
    data: &RowData<'_>,
    intents: &mut Vec<RowIntent>,
) {
    let id = data.record.uid();

    row.set_selected(data.selected);

    row.col(|ui| {
        if render_select_cell(ui, data.selected) {
            intents.push(RowIntent::ToggleSelect(id));
        }
    });

    row.col(|ui| {
        render_text_cell(ui, &data.record.name);
    });

    row.col(|ui| {
        render_text_cell(ui, &data.record.email);
    });

    row.col(|ui| match &data.draft_role {
        Some(draft_role) => {
            let mut value = draft_role.clone();
            if render_role_edit_cell(ui, &mut value) {
                intents.push(RowIntent::RoleEdited(id, value));
            }
        }
        None => render_text_cell(ui, &data.record.role),
    });

    row.col(|ui| {
        let editing = data.draft_role.is_some();
        intents.extend(render_action_buttons(ui, id, editing));
    });
}
