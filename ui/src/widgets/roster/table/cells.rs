//! Cell rendering functions for the roster table.

use egui::{TextEdit, Ui};
use ustr::Ustr;

use super::row::RowIntent;

/// Renders the selection checkbox. Returns `true` when toggled.
#[inline]
pub fn render_select_cell(ui: &mut Ui, selected: bool) -> bool {
    let mut checked = selected;
    ui.checkbox(&mut checked, "").changed()
}

/// Renders a plain text cell.
#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Renders the role edit box bound to the draft value. Returns `true` when
/// the draft changed this frame.
#[inline]
pub fn render_role_edit_cell(ui: &mut Ui, value: &mut String) -> bool {
    ui.add(TextEdit::singleline(value).desired_width(f32::INFINITY))
        .changed()
}

/// Renders the action buttons cell: Edit (or Save/Cancel while editing) and
/// Delete. Returns the intents emitted by clicks.
#[inline]
pub fn render_action_buttons(ui: &mut Ui, id: Ustr, editing: bool) -> Vec<RowIntent> {
    let mut intents = Vec::new();

    ui.horizontal(|ui| {
        if editing {
            if ui.button("Save").on_hover_text("Apply the edited role").clicked() {
                intents.push(RowIntent::CommitEdit(id));
            }
            if ui.button("Cancel").on_hover_text("Discard the edit").clicked() {
                intents.push(RowIntent::CancelEdit(id));
            }
        } else if ui.button("Edit").on_hover_text("Edit role").clicked() {
            intents.push(RowIntent::BeginEdit(id));
        }
        if ui.button("Delete").on_hover_text("Delete record").clicked() {
            intents.push(RowIntent::Delete(id));
        }
    });

    intents
}
