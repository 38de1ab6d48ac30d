//! Download Banner
//! "Download the app" text with the two store badges.

use super::style;
use crate::assets::{BadgeAssets, BadgeImage};
use egui::load::SizedTexture;
use egui::{RichText, Stroke};

/// Banner at the top of the widget.
pub struct DownloadBanner {
    app_name: String,
    badge_height: f32,
}

impl DownloadBanner {
    pub fn new(app_name: &str, badge_height: f32) -> Self {
        Self {
            app_name: app_name.to_string(),
            badge_height,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, assets: &BadgeAssets) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("For Better Experience Download").size(24.0).strong());
            ui.label(
                RichText::new(&self.app_name)
                    .size(24.0)
                    .strong()
                    .color(style::ACCENT),
            );
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                // Centre the badge row
                let row_width = self.badge_height * 6.0 + ui.spacing().item_spacing.x;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                for badge in assets.iter() {
                    self.show_badge(ui, badge);
                }
            });
        });
    }

    fn show_badge(&self, ui: &mut egui::Ui, badge: &BadgeImage) {
        match &badge.texture {
            Some(texture) => {
                ui.add(
                    egui::Image::from_texture(SizedTexture::from_handle(texture))
                        .max_height(self.badge_height),
                )
                .on_hover_text(badge.badge.alt_text());
            }
            None => {
                egui::Frame::none()
                    .stroke(Stroke::new(1.0, style::MUTED))
                    .rounding(6.0)
                    .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                    .show(ui, |ui| {
                        ui.set_min_height(self.badge_height - 16.0);
                        ui.label(RichText::new(badge.badge.alt_text()).size(14.0));
                    });
            }
        }
    }
}
