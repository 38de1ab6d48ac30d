//! View Selector
//! Which of the two optional panels is visible below the form.

/// The panel shown under the feedback form. At most one is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Hidden,
    Reviews,
    Dashboard,
}

impl ActiveView {
    /// Show the review list, or hide it if it is already showing.
    pub fn toggle_reviews(self) -> Self {
        match self {
            ActiveView::Reviews => ActiveView::Hidden,
            _ => ActiveView::Reviews,
        }
    }

    /// Show the dashboard, or hide it if it is already showing.
    pub fn toggle_dashboard(self) -> Self {
        match self {
            ActiveView::Dashboard => ActiveView::Hidden,
            _ => ActiveView::Dashboard,
        }
    }

    pub fn reviews_shown(self) -> bool {
        self == ActiveView::Reviews
    }

    pub fn dashboard_shown(self) -> bool {
        self == ActiveView::Dashboard
    }

    /// Caption for the review list toggle button.
    pub fn reviews_button_label(self) -> &'static str {
        if self.reviews_shown() {
            "Hide All Reviews"
        } else {
            "See All Reviews"
        }
    }

    /// Caption for the dashboard toggle button.
    pub fn dashboard_button_label(self) -> &'static str {
        if self.dashboard_shown() {
            "Hide Dashboard"
        } else {
            "Show Dashboard"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let view = ActiveView::default();
        assert!(!view.reviews_shown());
        assert!(!view.dashboard_shown());
        assert_eq!(view.reviews_button_label(), "See All Reviews");
        assert_eq!(view.dashboard_button_label(), "Show Dashboard");
    }

    #[test]
    fn test_views_are_exclusive() {
        let view = ActiveView::Hidden.toggle_reviews().toggle_dashboard();
        assert_eq!(view, ActiveView::Dashboard);
        assert!(!view.reviews_shown());

        let view = view.toggle_reviews();
        assert_eq!(view, ActiveView::Reviews);
        assert!(!view.dashboard_shown());
    }

    #[test]
    fn test_toggle_twice_hides() {
        assert_eq!(ActiveView::Hidden.toggle_reviews().toggle_reviews(), ActiveView::Hidden);
        assert_eq!(
            ActiveView::Hidden.toggle_dashboard().toggle_dashboard(),
            ActiveView::Hidden
        );
    }

    #[test]
    fn test_button_labels_follow_state() {
        assert_eq!(ActiveView::Reviews.reviews_button_label(), "Hide All Reviews");
        assert_eq!(ActiveView::Reviews.dashboard_button_label(), "Show Dashboard");
        assert_eq!(ActiveView::Dashboard.dashboard_button_label(), "Hide Dashboard");
    }
}
