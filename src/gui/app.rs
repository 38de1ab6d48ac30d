//! App Download Main Application
//! Single window with the download banner, feedback form and the selected view.

use crate::assets::BadgeAssets;
use crate::config::AppConfig;
use crate::data::{ActiveView, ReviewSession};
use crate::gui::{style, Dashboard, DownloadBanner, FeedbackAction, FeedbackForm, ReviewList};

/// Main application window.
pub struct AppDownloadApp {
    session: ReviewSession,
    banner: DownloadBanner,
    badges: BadgeAssets,
    form: FeedbackForm,
}

impl AppDownloadApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            session: ReviewSession::new(config.submit_policy),
            banner: DownloadBanner::new(&config.app_name, config.badge_height),
            badges: BadgeAssets::load(&cc.egui_ctx, config),
            form: FeedbackForm::new(),
        }
    }

    fn handle_action(&mut self, action: FeedbackAction) {
        match action {
            FeedbackAction::Submit => {
                let result = self.session.submit();
                self.form.set_error(result.err());
            }
            FeedbackAction::ToggleReviews => self.session.toggle_reviews(),
            FeedbackAction::ToggleDashboard => {
                self.session.toggle_dashboard();
                if self.session.view().dashboard_shown() {
                    log::debug!("Dashboard opened: {:?}", self.session.summary());
                }
            }
            FeedbackAction::None => {}
        }
    }
}

impl eframe::App for AppDownloadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(style::container(&ctx.style()))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.banner.show(ui, &self.badges);
                        ui.add_space(20.0);

                        let view = self.session.view();
                        let action = style::section(ui)
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                self.form.show(ui, &mut self.session.draft, view)
                            })
                            .inner;
                        self.handle_action(action);

                        ui.add_space(15.0);

                        match self.session.view() {
                            ActiveView::Hidden => {}
                            ActiveView::Reviews => {
                                style::section(ui).show(ui, |ui| {
                                    ui.set_width(ui.available_width());
                                    ReviewList::show(ui, self.session.reviews());
                                });
                            }
                            ActiveView::Dashboard => {
                                let summary = self.session.summary();
                                style::dashboard(ui).show(ui, |ui| {
                                    ui.set_width(ui.available_width());
                                    Dashboard::show(ui, &summary);
                                });
                            }
                        }
                    });
            });
    }
}
