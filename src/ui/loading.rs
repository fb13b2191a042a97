use egui::{RichText, Ui};

use super::theme::AppTheme;

pub const LOADING_TEXT: &str = "Loading ...";

pub fn loading(ui: &mut Ui, theme: &AppTheme) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(RichText::new(LOADING_TEXT).color(theme.secondary_text).size(15.0));
    });
}
