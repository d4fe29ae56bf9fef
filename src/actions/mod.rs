//! Caller-supplied feedback actions and the handlers that back them

mod log;
mod opener;
mod slot;
mod webhook;

pub use log::LogHandler;
pub use opener::{LinkOpener, SystemOpener};
pub use slot::{
    ActionSlot, ActionTarget, FeedbackActions, HomeAction, Submission, SubmissionFuture,
    SubmitHandler,
};
pub use webhook::WebhookHandler;

#[cfg(test)]
pub use opener::MockLinkOpener;
