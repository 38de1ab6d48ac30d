//! Dashboard Widget
//! Totals, average, per-star breakdown and the distribution pie.

use super::style;
use crate::charts::{PieChart, STAR_PALETTE};
use crate::stats::RatingSummary;
use egui::RichText;

pub struct Dashboard;

impl Dashboard {
    pub fn show(ui: &mut egui::Ui, summary: &RatingSummary) {
        ui.label(style::heading("Review Dashboard"));
        ui.add_space(8.0);

        Self::stat_line(ui, "Total Reviews:", &summary.total.to_string());
        Self::stat_line(
            ui,
            "Average Rating:",
            &format!("{} Stars", summary.average_label()),
        );

        ui.add_space(8.0);
        ui.label(style::subheading("Rating Breakdown:"));
        for (stars, count) in summary.breakdown() {
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2.0, STAR_PALETTE[stars - 1]);
                ui.label(format!("{} Stars: {}", stars, count));
            });
        }

        ui.add_space(12.0);
        ui.label(style::subheading("Rating Distribution"));
        PieChart::draw(ui, summary, style::PIE_HEIGHT);
    }

    fn stat_line(ui: &mut egui::Ui, label: &str, value: &str) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(label).strong());
            ui.label(value);
        });
    }
}
