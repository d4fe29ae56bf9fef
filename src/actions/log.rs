//! Handler that records submissions in the log

use super::slot::{HomeAction, Submission, SubmitHandler};

/// Accepts every submission and writes it to the tracing log
#[derive(Debug, Clone, Copy)]
pub struct LogHandler {
    kind: HomeAction,
}

impl LogHandler {
    pub fn new(kind: HomeAction) -> Self {
        Self { kind }
    }
}

impl SubmitHandler for LogHandler {
    fn submit(&self, email: &str, text: Option<&str>) -> Submission {
        tracing::info!(
            kind = %self.kind,
            email,
            text = text.unwrap_or_default(),
            "feedback received"
        );
        Submission::Immediate(true)
    }
}
