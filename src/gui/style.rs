//! Style hooks shared by the widget's panels.

use egui::{Color32, Frame, RichText, Stroke};

pub const ACCENT: Color32 = Color32::from_rgb(255, 99, 71); // Tomato
pub const MUTED: Color32 = Color32::GRAY;
pub const ERROR: Color32 = Color32::from_rgb(220, 53, 69);

/// Width of the form inputs.
pub const INPUT_WIDTH: f32 = 360.0;
pub const TEXTAREA_ROWS: usize = 4;
pub const PIE_HEIGHT: f32 = 260.0;

/// Outer container of the whole widget.
pub fn container(style: &egui::Style) -> Frame {
    Frame::central_panel(style).inner_margin(16.0)
}

/// Card around the feedback form and each optional view.
pub fn section(ui: &egui::Ui) -> Frame {
    Frame::none()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .rounding(8.0)
        .inner_margin(12.0)
}

/// A single entry of the review list.
pub fn review_item(ui: &egui::Ui) -> Frame {
    Frame::none()
        .stroke(Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .rounding(5.0)
        .inner_margin(8.0)
}

/// Dashboard panel, outlined in the accent colour.
pub fn dashboard(ui: &egui::Ui) -> Frame {
    section(ui).stroke(Stroke::new(1.5, ACCENT))
}

pub fn heading(text: &str) -> RichText {
    RichText::new(text).size(18.0).strong()
}

pub fn subheading(text: &str) -> RichText {
    RichText::new(text).size(14.0).strong()
}

pub fn button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).size(14.0))
        .min_size(egui::vec2(120.0, 30.0))
}
