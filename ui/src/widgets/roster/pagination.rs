//! Pagination bar: First / Previous / numbered pages / Next / Last.

use egui::{Button, Ui};
use roster_business::{PageControl, Pager};

/// Renders the bar and returns the requested page if a button was clicked.
/// The caller validates the request; out-of-range targets (Previous on page
/// 1, Next on the last page) are rejected there with no state change.
pub fn pagination_bar(current: usize, total_pages: usize, ui: &mut Ui) -> Option<usize> {
    let mut requested = None;

    ui.horizontal(|ui| {
        for control in PageControl::LEADING {
            if ui.button(control.label()).clicked() {
                requested = Some(control.target(current, total_pages));
            }
        }

        for page in Pager::page_numbers(total_pages) {
            let button = Button::new(page.to_string()).selected(page == current);
            if ui.add(button).clicked() {
                requested = Some(page);
            }
        }

        for control in PageControl::TRAILING {
            if ui.button(control.label()).clicked() {
                requested = Some(control.target(current, total_pages));
            }
        }
    });

    requested
}
