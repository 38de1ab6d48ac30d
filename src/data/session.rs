//! Review Session
//! All state of the widget for the lifetime of the window.

use super::review::{Review, ReviewDraft, ReviewId, SubmitError, SubmitPolicy};
use super::view::ActiveView;
use crate::stats::RatingSummary;

/// Owns the form draft, the submitted reviews and the visible view.
/// Reviews are kept in submission order and are never removed.
#[derive(Debug)]
pub struct ReviewSession {
    pub draft: ReviewDraft,
    reviews: Vec<Review>,
    next_id: u64,
    view: ActiveView,
    policy: SubmitPolicy,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new(SubmitPolicy::default())
    }
}

impl ReviewSession {
    pub fn new(policy: SubmitPolicy) -> Self {
        Self {
            draft: ReviewDraft::default(),
            reviews: Vec::new(),
            next_id: 1,
            view: ActiveView::Hidden,
            policy,
        }
    }

    /// Append the current draft as a review and clear the form.
    ///
    /// On rejection the draft is left as typed so the user can fix it.
    pub fn submit(&mut self) -> Result<ReviewId, SubmitError> {
        if let Err(e) = self.policy.check(&self.draft) {
            log::warn!("Review rejected: {}", e);
            return Err(e);
        }

        let id = ReviewId(self.next_id);
        self.next_id += 1;

        let review = self.draft.take(id);
        log::info!("Review {} submitted with rating {}", id, review.rating);
        self.reviews.push(review);

        Ok(id)
    }

    /// Submitted reviews in submission order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn view(&self) -> ActiveView {
        self.view
    }

    pub fn toggle_reviews(&mut self) {
        self.view = self.view.toggle_reviews();
        log::info!("View changed to {:?}", self.view);
    }

    pub fn toggle_dashboard(&mut self) {
        self.view = self.view.toggle_dashboard();
        log::info!("View changed to {:?}", self.view);
    }

    /// Aggregate statistics, recomputed from every review on each call.
    pub fn summary(&self) -> RatingSummary {
        RatingSummary::from_reviews(&self.reviews)
    }
}
