//! Data module - Reviews and session state

mod review;
mod session;
mod view;

pub use review::{Review, ReviewDraft, StarRating, SubmitError, SubmitPolicy, MAX_STARS};
pub use session::ReviewSession;
pub use view::ActiveView;
