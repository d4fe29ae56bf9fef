//! Feedback TUI - embeddable feedback dialog
//!
//! A Ratatui-based modal that lets a user share feedback, report a bug,
//! join a mailing list or open a support case. The page controller lives in
//! [`state::FeedbackModal`]; everything under [`ui`] only renders it.

pub mod actions;
pub mod app;
pub mod config;
pub mod error;
pub mod messages;
pub mod platform;
pub mod state;
pub mod ui;

pub use actions::{ActionSlot, FeedbackActions, HomeAction, Submission, SubmitHandler};
pub use error::FeedbackError;
pub use messages::Messages;
pub use state::{FeedbackModal, Page};
