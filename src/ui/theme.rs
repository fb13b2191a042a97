use egui::{Color32, Stroke, Visuals};

const HN_ORANGE: Color32 = Color32::from_rgb(255, 102, 0);

/// Colours the components paint with directly. Everything else comes from
/// egui's stock visuals for the chosen mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppTheme {
    pub dark_mode: bool,
    pub card_background: Color32,
    pub text: Color32,
    pub secondary_text: Color32,
    pub highlight: Color32,
    pub separator: Color32,
    pub error: Color32,
    pub score_high: Color32,
    pub score_medium: Color32,
    pub score_low: Color32,
    pub button_background: Color32,
    pub button_foreground: Color32,
}

impl AppTheme {
    pub fn dark() -> Self {
        Self {
            dark_mode: true,
            card_background: Color32::from_gray(34),
            text: Color32::from_gray(230),
            secondary_text: Color32::from_gray(160),
            highlight: HN_ORANGE,
            separator: Color32::from_gray(52),
            error: Color32::from_rgb(230, 90, 80),
            score_high: Color32::from_rgb(96, 190, 110),
            score_medium: Color32::from_rgb(230, 180, 60),
            score_low: Color32::from_gray(140),
            button_background: Color32::from_gray(56),
            button_foreground: Color32::from_gray(230),
        }
    }

    pub fn light() -> Self {
        Self {
            dark_mode: false,
            // HN's beige page colour.
            card_background: Color32::from_rgb(246, 246, 239),
            text: Color32::from_gray(24),
            secondary_text: Color32::from_gray(110),
            highlight: HN_ORANGE,
            separator: Color32::from_gray(214),
            error: Color32::from_rgb(180, 40, 30),
            score_high: Color32::from_rgb(40, 120, 50),
            score_medium: Color32::from_rgb(170, 110, 0),
            score_low: Color32::from_gray(120),
            button_background: Color32::from_gray(228),
            button_foreground: Color32::from_gray(24),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn visuals(&self) -> Visuals {
        let mut visuals = if self.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        visuals.hyperlink_color = self.highlight;
        visuals.selection.bg_fill = self.highlight.gamma_multiply(0.6);
        visuals.selection.stroke = Stroke::new(1.0, self.highlight);
        visuals.widgets.inactive.weak_bg_fill = self.button_background;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.button_foreground);
        visuals
    }

    pub fn apply_to_ctx(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }

    pub fn score_color(&self, points: i64) -> Color32 {
        if points >= 300 {
            self.score_high
        } else if points >= 100 {
            self.score_medium
        } else {
            self.score_low
        }
    }
}
