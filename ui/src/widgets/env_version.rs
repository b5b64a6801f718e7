use egui::{RichText, Ui};

/// Footer label showing the build version and commit.
pub fn env_version(ui: &mut Ui) {
    ui.label(
        RichText::new(roster_utils::version_info::format_version())
            .small()
            .weak(),
    );
}
