//! Review Model
//! Star ratings, submitted reviews and the editable form draft.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Highest selectable star value.
pub const MAX_STARS: u8 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please choose a star rating")]
    MissingRating,
    #[error("Please write a review")]
    MissingReview,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Star rating must be between 0 and {}, got {}", MAX_STARS, .0)]
pub struct InvalidRating(pub u8);

/// Star rating from 0 (unset) to 5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarRating(u8);

impl StarRating {
    /// The "Star Rating" placeholder entry of the drop-down.
    pub const UNSET: StarRating = StarRating(0);

    /// Every selectable value, placeholder first.
    pub fn all() -> impl Iterator<Item = StarRating> {
        (0..=MAX_STARS).map(StarRating)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_set(self) -> bool {
        self != Self::UNSET
    }

    /// Breakdown index (0 for one star) or None when unset.
    pub fn bucket(self) -> Option<usize> {
        self.is_set().then(|| usize::from(self.0) - 1)
    }

    /// Drop-down label for this value.
    pub fn label(self) -> String {
        match self.0 {
            0 => "Star Rating".to_string(),
            1 => "1 Star".to_string(),
            n => format!("{} Stars", n),
        }
    }
}

impl TryFrom<u8> for StarRating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= MAX_STARS {
            Ok(StarRating(value))
        } else {
            Err(InvalidRating(value))
        }
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned to a review when it is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReviewId(pub u64);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submitted review. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: ReviewId,
    pub name: String,
    pub rating: StarRating,
    pub review: String,
}

/// How strictly a draft is checked before it becomes a review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// Everything is accepted, including empty fields and no rating.
    #[default]
    Permissive,
    /// Name, rating and review text must all be filled in.
    RequireComplete,
}

impl SubmitPolicy {
    pub fn check(self, draft: &ReviewDraft) -> Result<(), SubmitError> {
        match self {
            SubmitPolicy::Permissive => Ok(()),
            SubmitPolicy::RequireComplete => {
                if draft.name.trim().is_empty() {
                    Err(SubmitError::MissingName)
                } else if !draft.rating.is_set() {
                    Err(SubmitError::MissingRating)
                } else if draft.review.trim().is_empty() {
                    Err(SubmitError::MissingReview)
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Current contents of the feedback form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: StarRating,
    pub review: String,
}

impl ReviewDraft {
    /// Turn the draft into a review, leaving the form cleared.
    pub fn take(&mut self, id: ReviewId) -> Review {
        let draft = std::mem::take(self);
        Review {
            id,
            name: draft.name,
            rating: draft.rating,
            review: draft.review,
        }
    }
}
