use egui::{RichText, Ui};

use super::button::{button, ButtonProps};
use super::theme::AppTheme;

pub const SEARCH_INPUT_ID: &str = "search_input";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The full text after an edit.
    Changed(String),
    Submitted,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchProps<'a> {
    pub value: &'a str,
    pub submit_label: &'a str,
    pub request_focus: bool,
}

impl<'a> SearchProps<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            submit_label: "Search",
            request_focus: false,
        }
    }
}

/// Controlled query input. The field always shows `props.value`; edits are
/// reported, never kept. Enter in the field and the submit button both emit
/// a single [`SearchEvent::Submitted`]. Returns the submit button's response.
pub fn search(
    ui: &mut Ui,
    theme: &AppTheme,
    props: SearchProps<'_>,
    mut on_event: impl FnMut(SearchEvent),
) -> egui::Response {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Search:").color(theme.text).size(16.0));
        ui.add_space(8.0);

        let mut text = props.value.to_owned();
        let width = (ui.available_width() - 120.0).max(160.0);
        let edit = ui.add_sized(
            [width, 32.0],
            egui::TextEdit::singleline(&mut text)
                .id(egui::Id::new(SEARCH_INPUT_ID))
                .hint_text("Search Hacker News stories...")
                .text_color(theme.text)
                .frame(true),
        );

        if props.request_focus {
            edit.request_focus();
        }
        if edit.changed() {
            on_event(SearchEvent::Changed(text));
        }

        let mut submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(8.0);
        let submit = button(ui, theme, ButtonProps::new(props.submit_label), || submitted = true);

        if submitted {
            on_event(SearchEvent::Submitted);
        }
        submit
    })
    .inner
}
