//! Feedback Form Widget
//! Name, star rating and review inputs plus the three action buttons.

use super::style;
use crate::data::{ActiveView, ReviewDraft, StarRating, SubmitError};
use egui::{ComboBox, RichText, TextEdit};

/// Form chrome. The draft itself lives in the session.
#[derive(Default)]
pub struct FeedbackForm {
    /// Message from the last rejected submission.
    error: Option<SubmitError>,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_error(&mut self, error: Option<SubmitError>) {
        self.error = error;
    }

    /// Draw the form, editing `draft` in place.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        draft: &mut ReviewDraft,
        view: ActiveView,
    ) -> FeedbackAction {
        let mut action = FeedbackAction::None;

        ui.label(style::heading("Give Your Feedback"));
        ui.add_space(8.0);

        ui.add(
            TextEdit::singleline(&mut draft.name)
                .hint_text("Your Name")
                .desired_width(style::INPUT_WIDTH),
        );
        ui.add_space(5.0);

        ComboBox::from_id_salt("star_rating")
            .width(style::INPUT_WIDTH)
            .selected_text(draft.rating.label())
            .show_ui(ui, |ui| {
                for rating in StarRating::all() {
                    ui.selectable_value(&mut draft.rating, rating, rating.label());
                }
            });
        ui.add_space(5.0);

        ui.add(
            TextEdit::multiline(&mut draft.review)
                .hint_text("Write your review here...")
                .desired_rows(style::TEXTAREA_ROWS)
                .desired_width(style::INPUT_WIDTH),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.add(style::button("Submit")).clicked() {
                action = FeedbackAction::Submit;
            }
            if ui.add(style::button(view.reviews_button_label())).clicked() {
                action = FeedbackAction::ToggleReviews;
            }
            if ui.add(style::button(view.dashboard_button_label())).clicked() {
                action = FeedbackAction::ToggleDashboard;
            }
        });

        if let Some(error) = &self.error {
            ui.add_space(5.0);
            ui.label(RichText::new(error.to_string()).size(12.0).color(style::ERROR));
        }

        action
    }
}

/// Actions triggered by the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackAction {
    None,
    Submit,
    ToggleReviews,
    ToggleDashboard,
}
