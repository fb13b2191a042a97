use egui::{CornerRadius, RichText, Ui};

use super::theme::AppTheme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonStyle {
    #[default]
    Default,
    /// Frameless, text-sized; used inside table rows.
    Inline,
}

#[derive(Debug, Clone, Copy)]
pub struct ButtonProps<'a> {
    pub label: &'a str,
    pub style: ButtonStyle,
}

impl<'a> ButtonProps<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: ButtonStyle::Default,
        }
    }

    pub fn inline(label: &'a str) -> Self {
        Self {
            label,
            style: ButtonStyle::Inline,
        }
    }
}

pub fn button(ui: &mut Ui, theme: &AppTheme, props: ButtonProps<'_>, mut on_click: impl FnMut()) -> egui::Response {
    let widget = match props.style {
        ButtonStyle::Default => egui::Button::new(
            RichText::new(props.label)
                .color(theme.button_foreground)
                .size(15.0),
        )
        .min_size(egui::vec2(72.0, 30.0))
        .corner_radius(CornerRadius::same(6))
        .fill(theme.button_background),
        ButtonStyle::Inline => egui::Button::new(
            RichText::new(props.label)
                .color(theme.highlight)
                .size(13.0),
        )
        .frame(false),
    };

    let response = ui.add(widget);
    if response.hovered() {
        ui.output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
    }
    if response.clicked() {
        on_click();
    }
    response
}
