//! Calculation logic and the state kept around it.
//!
//! - [`calculator`] - the pure network/IP calculation
//! - [`session`] - inputs and last outcome held by a caller
//! - [`feedback`] - timed "copied" indicator

mod calculator;
mod feedback;
mod session;

// Re-export public functions
pub use calculator::{calculate, parse_network};
pub use feedback::{
    CopyFeedback, FeedbackState, FeedbackTimings, DEFAULT_FADE_AFTER, DEFAULT_HIDE_AFTER,
};
pub use session::{Session, SessionState};
