//! Review List Widget
//! Every submitted review, oldest first.

use super::style;
use crate::data::Review;
use egui::RichText;

pub struct ReviewList;

impl ReviewList {
    pub fn show(ui: &mut egui::Ui, reviews: &[Review]) {
        ui.label(style::heading("All Reviews"));
        ui.add_space(8.0);

        if reviews.is_empty() {
            ui.label(RichText::new("No reviews yet.").color(style::MUTED));
            return;
        }

        for review in reviews {
            ui.push_id(review.id, |ui| {
                style::review_item(ui).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(&review.name).strong());
                        ui.label(format!("- {} Stars", review.rating));
                    });
                    ui.label(&review.review);
                });
            });
            ui.add_space(6.0);
        }
    }
}
