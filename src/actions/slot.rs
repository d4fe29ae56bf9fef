//! Action slots offered on the home page

use crate::state::Page;
use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Future produced by an asynchronous submission.
///
/// An `Err` is treated the same as resolving to `false`.
pub type SubmissionFuture = BoxFuture<'static, anyhow::Result<bool>>;

/// Result of invoking a submit handler
pub enum Submission {
    /// The handler already knows whether it succeeded
    Immediate(bool),
    /// The handler finishes later; the page changes once it settles
    Pending(SubmissionFuture),
}

impl Submission {
    /// Wrap a future as a pending submission
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = anyhow::Result<bool>> + Send + 'static,
    {
        Self::Pending(Box::pin(future))
    }
}

impl From<bool> for Submission {
    fn from(value: bool) -> Self {
        Self::Immediate(value)
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(ok) => f.debug_tuple("Immediate").field(ok).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// Receives a submitted form.
///
/// `text` is `None` for the mailing-list form, which has no text field.
pub trait SubmitHandler: Send + Sync {
    fn submit(&self, email: &str, text: Option<&str>) -> Submission;
}

impl<F> SubmitHandler for F
where
    F: Fn(&str, Option<&str>) -> Submission + Send + Sync,
{
    fn submit(&self, email: &str, text: Option<&str>) -> Submission {
        self(email, text)
    }
}

/// One configurable feedback action
#[derive(Clone, Default)]
pub enum ActionSlot {
    #[default]
    Absent,
    /// Opened externally, never changes the page
    Url(String),
    /// Shows a form and hands the submission to the handler
    Handler(Arc<dyn SubmitHandler>),
}

impl ActionSlot {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    pub fn handler(handler: impl SubmitHandler + 'static) -> Self {
        Self::Handler(Arc::new(handler))
    }
}

impl fmt::Debug for ActionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Url(url) => f.debug_tuple("Url").field(url).finish(),
            Self::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

/// The four choices shown on the home page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeAction {
    ShareFeedback,
    ReportBug,
    OpenSupportCase,
    JoinMailingList,
}

impl HomeAction {
    pub const ALL: [HomeAction; 4] = [
        HomeAction::ShareFeedback,
        HomeAction::ReportBug,
        HomeAction::OpenSupportCase,
        HomeAction::JoinMailingList,
    ];

    /// Form page shown when the action is backed by a handler
    pub fn form_page(self) -> Option<Page> {
        match self {
            Self::ShareFeedback => Some(Page::FeedbackForm),
            Self::ReportBug => Some(Page::BugForm),
            Self::JoinMailingList => Some(Page::MailingForm),
            Self::OpenSupportCase => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ShareFeedback => "share feedback",
            Self::ReportBug => "report a bug",
            Self::OpenSupportCase => "open a support case",
            Self::JoinMailingList => "join mailing list",
        }
    }
}

impl fmt::Display for HomeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What selecting a home action leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionTarget {
    Link(String),
    Form(Page),
    Unavailable,
}

/// All action slots supplied by the host
#[derive(Debug, Clone, Default)]
pub struct FeedbackActions {
    pub share_feedback: ActionSlot,
    pub report_bug: ActionSlot,
    pub join_mailing_list: ActionSlot,
    /// Support cases are always handled externally
    pub open_support_case: Option<String>,
    /// Research team page linked from the mailing-list form
    pub user_research: Option<String>,
}

impl FeedbackActions {
    fn slot(&self, action: HomeAction) -> Option<&ActionSlot> {
        match action {
            HomeAction::ShareFeedback => Some(&self.share_feedback),
            HomeAction::ReportBug => Some(&self.report_bug),
            HomeAction::JoinMailingList => Some(&self.join_mailing_list),
            HomeAction::OpenSupportCase => None,
        }
    }

    /// Resolve where a home action leads.
    ///
    /// Share feedback is always offered: without a slot it still shows the
    /// form and its submission counts as a success.
    pub fn target(&self, action: HomeAction) -> ActionTarget {
        if action == HomeAction::OpenSupportCase {
            return match &self.open_support_case {
                Some(url) => ActionTarget::Link(url.clone()),
                None => ActionTarget::Unavailable,
            };
        }

        let Some(page) = action.form_page() else {
            return ActionTarget::Unavailable;
        };
        match self.slot(action) {
            Some(ActionSlot::Url(url)) => ActionTarget::Link(url.clone()),
            Some(ActionSlot::Handler(_)) => ActionTarget::Form(page),
            Some(ActionSlot::Absent) | None if action == HomeAction::ShareFeedback => {
                ActionTarget::Form(page)
            }
            Some(ActionSlot::Absent) | None => ActionTarget::Unavailable,
        }
    }

    /// Actions to show on the home page, in display order
    pub fn offered(&self) -> Vec<HomeAction> {
        HomeAction::ALL
            .into_iter()
            .filter(|action| self.target(*action) != ActionTarget::Unavailable)
            .collect()
    }

    /// Whether selecting the action leaves the dialog for a browser
    pub fn is_external(&self, action: HomeAction) -> bool {
        matches!(self.target(action), ActionTarget::Link(_))
    }

    /// Link embedded in a form's description
    pub fn description_link(&self, page: Page) -> Option<&str> {
        match page {
            Page::BugForm => self.open_support_case.as_deref(),
            Page::MailingForm => self.user_research.as_deref(),
            _ => None,
        }
    }

    /// Handler backing a form page, if the slot holds one
    pub fn handler_for(&self, page: Page) -> Option<Arc<dyn SubmitHandler>> {
        let action = page.form_action()?;
        match self.slot(action)? {
            ActionSlot::Handler(handler) => Some(Arc::clone(handler)),
            ActionSlot::Url(_) | ActionSlot::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_handler() -> ActionSlot {
        ActionSlot::handler(|_: &str, _: Option<&str>| Submission::Immediate(true))
    }

    mod targets {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_url_slots_resolve_to_links() {
            let actions = FeedbackActions {
                share_feedback: ActionSlot::url("https://example.com/feedback"),
                report_bug: ActionSlot::url("https://example.com/bugs"),
                join_mailing_list: ActionSlot::url("https://example.com/list"),
                open_support_case: Some("https://example.com/support".to_string()),
                user_research: None,
            };
            for action in HomeAction::ALL {
                assert!(matches!(actions.target(action), ActionTarget::Link(_)));
                assert!(actions.is_external(action));
            }
        }

        #[test]
        fn test_handler_slots_resolve_to_their_form() {
            let actions = FeedbackActions {
                share_feedback: ok_handler(),
                report_bug: ok_handler(),
                join_mailing_list: ok_handler(),
                open_support_case: None,
                user_research: None,
            };
            assert_eq!(
                actions.target(HomeAction::ShareFeedback),
                ActionTarget::Form(Page::FeedbackForm)
            );
            assert_eq!(
                actions.target(HomeAction::ReportBug),
                ActionTarget::Form(Page::BugForm)
            );
            assert_eq!(
                actions.target(HomeAction::JoinMailingList),
                ActionTarget::Form(Page::MailingForm)
            );
        }

        #[test]
        fn test_absent_share_feedback_still_shows_form() {
            let actions = FeedbackActions::default();
            assert_eq!(
                actions.target(HomeAction::ShareFeedback),
                ActionTarget::Form(Page::FeedbackForm)
            );
        }

        #[test]
        fn test_other_absent_slots_are_unavailable() {
            let actions = FeedbackActions::default();
            assert_eq!(
                actions.target(HomeAction::ReportBug),
                ActionTarget::Unavailable
            );
            assert_eq!(
                actions.target(HomeAction::JoinMailingList),
                ActionTarget::Unavailable
            );
            assert_eq!(
                actions.target(HomeAction::OpenSupportCase),
                ActionTarget::Unavailable
            );
        }
    }

    mod offered {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_offers_only_share_feedback() {
            assert_eq!(
                FeedbackActions::default().offered(),
                vec![HomeAction::ShareFeedback]
            );
        }

        #[test]
        fn test_offered_keeps_display_order() {
            let actions = FeedbackActions {
                share_feedback: ok_handler(),
                report_bug: ok_handler(),
                join_mailing_list: ActionSlot::url("https://example.com/list"),
                open_support_case: Some("https://example.com/support".to_string()),
                user_research: None,
            };
            assert_eq!(actions.offered(), HomeAction::ALL.to_vec());
        }
    }

    mod handlers {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_handler_for_form_page() {
            let actions = FeedbackActions {
                report_bug: ok_handler(),
                ..Default::default()
            };
            assert!(actions.handler_for(Page::BugForm).is_some());
            assert!(actions.handler_for(Page::FeedbackForm).is_none());
            assert!(actions.handler_for(Page::Home).is_none());
        }

        #[test]
        fn test_description_links_per_form() {
            let actions = FeedbackActions {
                open_support_case: Some("https://example.com/support".to_string()),
                user_research: Some("https://example.com/research".to_string()),
                ..Default::default()
            };
            assert_eq!(
                actions.description_link(Page::BugForm),
                Some("https://example.com/support")
            );
            assert_eq!(
                actions.description_link(Page::MailingForm),
                Some("https://example.com/research")
            );
            assert_eq!(actions.description_link(Page::FeedbackForm), None);
            assert_eq!(actions.description_link(Page::Home), None);
        }

        #[test]
        fn test_url_slot_has_no_handler() {
            let actions = FeedbackActions {
                share_feedback: ActionSlot::url("https://example.com"),
                ..Default::default()
            };
            assert!(actions.handler_for(Page::FeedbackForm).is_none());
        }

        #[test]
        fn test_closure_handler_receives_arguments() {
            let slot = ActionSlot::handler(|email: &str, text: Option<&str>| {
                Submission::from(email == "a@x.com" && text == Some("hi"))
            });
            let ActionSlot::Handler(handler) = slot else {
                panic!("expected handler slot");
            };
            assert!(matches!(
                handler.submit("a@x.com", Some("hi")),
                Submission::Immediate(true)
            ));
            assert!(matches!(
                handler.submit("a@x.com", None),
                Submission::Immediate(false)
            ));
        }

        #[test]
        fn test_debug_hides_handler_internals() {
            assert_eq!(format!("{:?}", ok_handler()), "Handler(..)");
            assert_eq!(
                format!("{:?}", Submission::pending(async { Ok::<_, anyhow::Error>(true) })),
                "Pending(..)"
            );
        }
    }
}
