//! Rating Summary Module
//! Totals, average and per-star breakdown for the dashboard.

use crate::data::{Review, MAX_STARS};

/// Number of star buckets in the breakdown.
pub const STAR_LEVELS: usize = MAX_STARS as usize;

/// Aggregate statistics over all submitted reviews.
///
/// Always built from the full review list; nothing here is updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    /// Number of reviews, including ones without a rating.
    pub total: usize,
    /// Sum of every rating, unrated reviews adding 0.
    pub rating_sum: u64,
    /// Review count for 1..=5 stars, index 0 holding one-star reviews.
    pub star_counts: [usize; STAR_LEVELS],
}

impl RatingSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut star_counts = [0; STAR_LEVELS];
        for bucket in reviews.iter().filter_map(|r| r.rating.bucket()) {
            star_counts[bucket] += 1;
        }

        Self {
            total: reviews.len(),
            rating_sum: reviews.iter().map(|r| u64::from(r.rating.value())).sum(),
            star_counts,
        }
    }

    /// Average as displayed: one decimal, or a bare `0` with no reviews.
    pub fn average_label(&self) -> String {
        if self.total == 0 {
            "0".to_string()
        } else {
            format_tenths(self.rating_sum, self.total as u64)
        }
    }

    /// `(stars, count)` pairs from one star up.
    pub fn breakdown(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.star_counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (i + 1, count))
    }
}

/// Format `sum / count` with one decimal.
///
/// The quotient is rounded as an f64, like every other float formatting.
/// A quotient landing exactly on a hundredths five (2.75) rounds up.
fn format_tenths(sum: u64, count: u64) -> String {
    // In twentieths an exact tie is an odd multiple of five. Only those
    // survive the division into f64 without error.
    let twentieths = sum * 20;
    if twentieths % count == 0 {
        let t = twentieths / count;
        if t % 2 == 1 && t % 5 == 0 {
            let tenths = (t + 1) / 2;
            return format!("{}.{}", tenths / 10, tenths % 10);
        }
    }

    format!("{:.1}", sum as f64 / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ReviewSession, StarRating};

    fn summary_of(ratings: &[u8]) -> RatingSummary {
        let mut session = ReviewSession::default();
        for &r in ratings {
            session.draft.rating = StarRating::try_from(r).unwrap();
            session.submit().unwrap();
        }
        session.summary()
    }

    #[test]
    fn test_empty_summary() {
        let summary = summary_of(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.rating_sum, 0);
        assert_eq!(summary.average_label(), "0");
        assert_eq!(summary.star_counts, [0; 5]);
    }

    #[test]
    fn test_average_one_decimal() {
        let summary = summary_of(&[5, 4, 4]);
        assert_eq!(summary.average_label(), "4.3");
        assert_eq!(summary_of(&[3]).average_label(), "3.0");
        assert_eq!(summary_of(&[5, 5, 4]).average_label(), "4.7");
    }

    #[test]
    fn test_exact_tie_rounds_up_in_any_order() {
        assert_eq!(summary_of(&[5, 5, 5, 3, 1, 1, 1, 1]).average_label(), "2.8");
        assert_eq!(summary_of(&[1, 1, 1, 1, 3, 5, 5, 5]).average_label(), "2.8");
        assert_eq!(summary_of(&[1, 2, 2, 4]).average_label(), "2.3");
        assert_eq!(summary_of(&[4, 2, 2, 1]).average_label(), "2.3");
    }

    #[test]
    fn test_inexact_tie_follows_float_value() {
        // 3 / 20 is stored just below 0.15
        assert_eq!(format_tenths(3, 20), "0.1");
        // 7 / 20 is stored just below 0.35
        assert_eq!(format_tenths(7, 20), "0.3");
        assert_eq!(format_tenths(49, 10), "4.9");
    }

    #[test]
    fn test_unrated_counts_toward_average_only() {
        let summary = summary_of(&[0, 5]);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.average_label(), "2.5");
        assert_eq!(summary.star_counts, [0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let ratings = [1, 2, 3, 4, 5, 5, 5, 3, 1, 2, 4, 4];
        let summary = summary_of(&ratings);
        assert_eq!(summary.star_counts.iter().sum::<usize>(), ratings.len());
        assert_eq!(summary.star_counts, [2, 2, 2, 3, 3]);
        assert_eq!(summary.rating_sum, 39);
    }

    #[test]
    fn test_breakdown_order() {
        let summary = summary_of(&[2, 2, 5]);
        let rows: Vec<(usize, usize)> = summary.breakdown().collect();
        assert_eq!(rows, vec![(1, 0), (2, 2), (3, 0), (4, 0), (5, 1)]);
    }
}
