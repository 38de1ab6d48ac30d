//! GUI module - User interface components

mod app;
mod dashboard;
mod feedback_form;
mod promo;
mod review_list;
mod style;

pub use app::AppDownloadApp;
pub use dashboard::Dashboard;
pub use feedback_form::{FeedbackAction, FeedbackForm};
pub use promo::DownloadBanner;
pub use review_list::ReviewList;
