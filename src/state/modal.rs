//! Page controller for the feedback dialog
//!
//! Owns the current [`Page`] and the remembered email, and turns home
//! selections, form submissions, back and close into page transitions.
//! Asynchronous submissions are spawned on the tokio runtime; their
//! outcomes come back over a channel and are applied by [`FeedbackModal::poll_outcomes`]
//! or [`FeedbackModal::settle`]. An outcome is only applied if its submission
//! is still the one in flight, so closing the dialog or going back while a
//! request is pending never lets a late result move the page.

use super::page::Page;
use crate::actions::{
    ActionTarget, FeedbackActions, HomeAction, LinkOpener, Submission, SubmissionFuture,
};
use crate::error::FeedbackError;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Callback invoked every time the dialog is closed
pub type CloseCallback = Box<dyn FnMut() + Send>;

/// Settled result of an asynchronous submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub generation: u64,
    pub success_page: Page,
    pub succeeded: bool,
}

/// What a home selection did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeOutcome {
    OpenedLink(String),
    Navigated(Page),
}

pub struct FeedbackModal {
    page: Page,
    email: String,
    actions: FeedbackActions,
    opener: Box<dyn LinkOpener>,
    on_close: Option<CloseCallback>,
    generation: u64,
    in_flight: Option<u64>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
}

impl FeedbackModal {
    pub fn new(actions: FeedbackActions, opener: impl LinkOpener + 'static) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            page: Page::Home,
            email: String::new(),
            actions,
            opener: Box::new(opener),
            on_close: None,
            generation: 0,
            in_flight: None,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Prefill the email shown in every form
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Register the host's close callback
    pub fn on_close(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Home actions to offer, in display order
    pub fn offered_actions(&self) -> Vec<HomeAction> {
        self.actions.offered()
    }

    pub fn is_external(&self, action: HomeAction) -> bool {
        self.actions.is_external(action)
    }

    /// URL behind the link in the current form's description, if configured
    pub fn description_link(&self) -> Option<&str> {
        self.actions.description_link(self.page)
    }

    /// The host made the dialog visible. The page is only reset by `close`.
    pub fn open(&mut self) {
        tracing::debug!(page = %self.page, "feedback dialog opened");
    }

    /// Handle a choice on the home page.
    ///
    /// Link actions open in the browser and leave the page alone; handler
    /// actions move to their form.
    pub fn select_home_action(&mut self, action: HomeAction) -> Result<HomeOutcome, FeedbackError> {
        if self.page != Page::Home {
            return Err(FeedbackError::NotOnHome(self.page));
        }

        match self.actions.target(action) {
            ActionTarget::Link(url) => {
                tracing::info!(%action, %url, "opening external link");
                self.open_link(&url)?;
                Ok(HomeOutcome::OpenedLink(url))
            }
            ActionTarget::Form(page) => {
                self.transition(page);
                Ok(HomeOutcome::Navigated(page))
            }
            ActionTarget::Unavailable => Err(FeedbackError::ActionUnavailable(action)),
        }
    }

    /// Open the link embedded in the current form's description.
    ///
    /// The bug form links to the support case, the mailing-list form to the
    /// research team. The page does not change.
    pub fn open_description_link(&mut self) -> Result<String, FeedbackError> {
        if !self.page.is_form() {
            return Err(FeedbackError::NotOnForm(self.page));
        }
        let Some(url) = self.description_link().map(str::to_string) else {
            return Err(FeedbackError::NoDescriptionLink(self.page));
        };
        tracing::info!(page = %self.page, %url, "opening description link");
        self.open_link(&url)?;
        Ok(url)
    }

    /// Submit the form on the current page.
    ///
    /// The email is remembered right away when it is non-empty and new,
    /// whatever the submission's result. Immediate results move the page now;
    /// pending ones keep the form shown until they settle. A pending result
    /// needs a tokio runtime; without one the page is left alone and
    /// [`FeedbackError::NoRuntime`] is returned.
    pub fn submit_form(&mut self, email: &str, text: &str) -> Result<(), FeedbackError> {
        let Some(success_page) = self.page.success_page() else {
            return Err(FeedbackError::NotOnForm(self.page));
        };
        if self.in_flight.is_some() {
            return Err(FeedbackError::SubmissionInFlight);
        }

        let submission = match self.actions.handler_for(self.page) {
            Some(handler) => {
                let text = self.page.has_text_field().then_some(text);
                tracing::info!(page = %self.page, "submitting form");
                handler.submit(email, text)
            }
            // Nothing to call still counts as sent
            None => Submission::Immediate(true),
        };

        self.update_email(email);

        match submission {
            Submission::Immediate(succeeded) => self.finish(success_page, succeeded),
            Submission::Pending(future) => self.spawn_pending(future, success_page)?,
        }
        Ok(())
    }

    /// Leave a form without submitting
    pub fn click_back(&mut self) -> Result<(), FeedbackError> {
        if !self.page.is_form() {
            return Err(FeedbackError::NotOnForm(self.page));
        }
        self.cancel_in_flight();
        self.transition(Page::Home);
        Ok(())
    }

    /// Notify the host and return to the home page. The email is kept.
    pub fn close(&mut self) {
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
        self.cancel_in_flight();
        self.transition(Page::Home);
    }

    /// Apply every outcome that has arrived. Returns true if the page changed.
    pub fn poll_outcomes(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            changed |= self.apply_outcome(outcome);
        }
        changed
    }

    /// Wait for the in-flight submission, if any, and return the resulting page
    pub async fn settle(&mut self) -> Page {
        while self.in_flight.is_some() {
            match self.outcome_rx.recv().await {
                Some(outcome) => {
                    self.apply_outcome(outcome);
                }
                None => break,
            }
        }
        self.page
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) -> bool {
        if self.in_flight != Some(outcome.generation) {
            tracing::warn!(
                generation = outcome.generation,
                succeeded = outcome.succeeded,
                "discarding stale submission result"
            );
            return false;
        }
        self.in_flight = None;
        self.finish(outcome.success_page, outcome.succeeded);
        true
    }

    fn open_link(&self, url: &str) -> Result<(), FeedbackError> {
        self.opener
            .open(url)
            .map_err(|source| FeedbackError::LinkOpen {
                url: url.to_string(),
                source,
            })
    }

    fn spawn_pending(
        &mut self,
        future: SubmissionFuture,
        success_page: Page,
    ) -> Result<(), FeedbackError> {
        let runtime = Handle::try_current().map_err(|_| FeedbackError::NoRuntime)?;
        let generation = self.generation + 1;
        let tx = self.outcome_tx.clone();

        runtime.spawn(async move {
            let succeeded = match AssertUnwindSafe(future).catch_unwind().await {
                Ok(Ok(succeeded)) => succeeded,
                Ok(Err(err)) => {
                    tracing::warn!(error = %err, "submission failed");
                    false
                }
                Err(_) => {
                    tracing::warn!("submission handler panicked");
                    false
                }
            };
            // Receiver gone means the dialog was dropped
            let _ = tx.send(SubmissionOutcome {
                generation,
                success_page,
                succeeded,
            });
        });

        self.generation = generation;
        self.in_flight = Some(generation);
        Ok(())
    }

    fn cancel_in_flight(&mut self) {
        if let Some(generation) = self.in_flight.take() {
            tracing::debug!(generation, "abandoning in-flight submission");
        }
    }

    fn finish(&mut self, success_page: Page, succeeded: bool) {
        if succeeded {
            self.transition(success_page);
        } else {
            tracing::warn!(page = %self.page, "submission reported failure");
            self.transition(Page::Error);
        }
    }

    fn update_email(&mut self, email: &str) {
        if !email.is_empty() && self.email != email {
            self.email = email.to_string();
        }
    }

    fn transition(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!(from = %self.page, to = %page, "page transition");
        }
        self.page = page;
    }
}

impl std::fmt::Debug for FeedbackModal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackModal")
            .field("page", &self.page)
            .field("email", &self.email)
            .field("actions", &self.actions)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
