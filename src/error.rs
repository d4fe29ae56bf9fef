//! Controller error types

use crate::actions::HomeAction;
use crate::state::Page;
use thiserror::Error;

/// Ways a caller can misuse the feedback controller.
///
/// None of these change the current page.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("no form is shown on the {0} page")]
    NotOnForm(Page),

    #[error("home actions can only be selected from the home page (current page: {0})")]
    NotOnHome(Page),

    #[error("{0} is not configured")]
    ActionUnavailable(HomeAction),

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("pending submissions need a running tokio runtime")]
    NoRuntime,

    #[error("the {0} has no link configured")]
    NoDescriptionLink(Page),

    #[error("failed to open {url}: {source}")]
    LinkOpen {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
