//! Pages of the feedback dialog

use crate::actions::HomeAction;
use std::fmt;

/// Page currently shown inside the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    FeedbackForm,
    FeedbackSuccess,
    BugForm,
    BugSuccess,
    MailingForm,
    MailingSuccess,
    Error,
}

impl Page {
    pub fn is_form(self) -> bool {
        matches!(self, Self::FeedbackForm | Self::BugForm | Self::MailingForm)
    }

    pub fn is_result(self) -> bool {
        matches!(
            self,
            Self::FeedbackSuccess | Self::BugSuccess | Self::MailingSuccess | Self::Error
        )
    }

    /// Page shown after a successful submission of this form
    pub fn success_page(self) -> Option<Page> {
        match self {
            Self::FeedbackForm => Some(Self::FeedbackSuccess),
            Self::BugForm => Some(Self::BugSuccess),
            Self::MailingForm => Some(Self::MailingSuccess),
            _ => None,
        }
    }

    /// Home action whose slot receives this form's submission
    pub fn form_action(self) -> Option<HomeAction> {
        match self {
            Self::FeedbackForm => Some(HomeAction::ShareFeedback),
            Self::BugForm => Some(HomeAction::ReportBug),
            Self::MailingForm => Some(HomeAction::JoinMailingList),
            _ => None,
        }
    }

    /// Whether the form collects free text (the mailing list only wants an email)
    pub fn has_text_field(self) -> bool {
        matches!(self, Self::FeedbackForm | Self::BugForm)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::FeedbackForm => "feedback form",
            Self::FeedbackSuccess => "feedback sent",
            Self::BugForm => "bug report form",
            Self::BugSuccess => "bug reported",
            Self::MailingForm => "mailing list form",
            Self::MailingSuccess => "mailing list joined",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Page; 8] = [
        Page::Home,
        Page::FeedbackForm,
        Page::FeedbackSuccess,
        Page::BugForm,
        Page::BugSuccess,
        Page::MailingForm,
        Page::MailingSuccess,
        Page::Error,
    ];

    #[test]
    fn test_default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_every_form_has_a_success_page() {
        for page in ALL {
            assert_eq!(page.is_form(), page.success_page().is_some());
            assert_eq!(page.is_form(), page.form_action().is_some());
        }
    }

    #[test]
    fn test_form_and_home_action_round_trip() {
        for page in ALL.into_iter().filter(|p| p.is_form()) {
            let action = page.form_action().unwrap();
            assert_eq!(action.form_page(), Some(page));
        }
    }

    #[test]
    fn test_pages_are_home_form_or_result() {
        for page in ALL {
            let kinds = [page == Page::Home, page.is_form(), page.is_result()];
            assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{page}");
        }
    }

    #[test]
    fn test_mailing_form_has_no_text_field() {
        assert!(Page::FeedbackForm.has_text_field());
        assert!(Page::BugForm.has_text_field());
        assert!(!Page::MailingForm.has_text_field());
    }
}
