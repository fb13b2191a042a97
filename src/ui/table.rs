use egui::{Align, CornerRadius, Layout, RichText, Stroke, Ui};

use super::button::{button, ButtonProps};
use super::theme::AppTheme;
use crate::models::Hit;

const ROW_HEIGHT: f32 = 28.0;
// title, author, comments, points, dismiss
const COLUMN_SHARES: [f32; 5] = [0.4, 0.3, 0.1, 0.1, 0.1];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    Dismiss(String),
    OpenLink(String),
}

#[derive(Debug, Clone, Copy)]
pub struct TableProps<'a> {
    pub hits: &'a [Hit],
}

/// Widget responses for one rendered row.
#[derive(Debug, Clone)]
pub struct RowResponse {
    pub title: egui::Response,
    pub dismiss: egui::Response,
}

pub fn column_widths(total: f32) -> [f32; 5] {
    COLUMN_SHARES.map(|share| (total * share).floor())
}

/// One row per hit, in the order given. No sorting or filtering happens here.
pub fn table(
    ui: &mut Ui,
    theme: &AppTheme,
    props: TableProps<'_>,
    mut on_event: impl FnMut(TableEvent),
) -> Vec<RowResponse> {
    if props.hits.is_empty() {
        ui.label(
            RichText::new("No stories.")
                .color(theme.secondary_text)
                .italics(),
        );
        return Vec::new();
    }

    let mut rows = Vec::with_capacity(props.hits.len());
    for hit in props.hits {
        let response = ui.push_id(&hit.object_id, |ui| {
            egui::Frame::new()
                .fill(theme.card_background)
                .corner_radius(CornerRadius::same(6))
                .stroke(Stroke::new(1.0, theme.separator))
                .inner_margin(6.0)
                .outer_margin(egui::vec2(0.0, 2.0))
                .show(ui, |ui| {
                    let widths = column_widths(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        row(ui, theme, hit, widths, &mut on_event)
                    })
                    .inner
                })
                .inner
        });
        rows.push(response.inner);
    }
    rows
}

fn row(
    ui: &mut Ui,
    theme: &AppTheme,
    hit: &Hit,
    widths: [f32; 5],
    on_event: &mut impl FnMut(TableEvent),
) -> RowResponse {
    let title = cell(ui, widths[0], |ui| {
        let title = RichText::new(&hit.title).color(theme.text).strong();
        if hit.url.is_empty() {
            return ui.add(egui::Label::new(title).truncate());
        }
        let link = ui.add(
            egui::Label::new(title.underline())
                .truncate()
                .sense(egui::Sense::click()),
        );
        if link.hovered() {
            ui.output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
        }
        if link.clicked() {
            on_event(TableEvent::OpenLink(hit.url.clone()));
        }
        link
    });
    cell(ui, widths[1], |ui| {
        ui.add(egui::Label::new(RichText::new(&hit.author).color(theme.secondary_text)).truncate());
    });
    cell(ui, widths[2], |ui| {
        ui.label(RichText::new(hit.num_comments.to_string()).color(theme.secondary_text));
    });
    cell(ui, widths[3], |ui| {
        ui.label(
            RichText::new(hit.points.to_string())
                .color(theme.score_color(hit.points))
                .strong(),
        );
    });
    let dismiss = cell(ui, widths[4], |ui| {
        let mut dismissed = false;
        let response = button(ui, theme, ButtonProps::inline("Dismiss"), || dismissed = true);
        if dismissed {
            on_event(TableEvent::Dismiss(hit.object_id.clone()));
        }
        response
    });

    RowResponse { title, dismiss }
}

fn cell<R>(ui: &mut Ui, width: f32, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    ui.allocate_ui_with_layout(
        egui::vec2(width, ROW_HEIGHT),
        Layout::left_to_right(Align::Center),
        |ui| {
            ui.set_width(width);
            add_contents(ui)
        },
    )
    .inner
}
