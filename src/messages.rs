//! Localized text shown by the dialog
//!
//! Messages are plain data handed to the app at construction. A JSON file
//! with camelCase keys can override any subset of the English defaults.

use crate::state::Page;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Messages {
    // Home page
    pub tell_about_experience: String,
    pub help_us_improve: String,
    pub share_feedback: String,
    pub how_is_console_experience: String,
    pub report_a_bug: String,
    pub describe_bug_urgent_cases: String,
    pub open_support_case: String,
    pub get_support: String,
    pub inform_direction: String,
    pub learn_about_research_opportunities: String,
    pub cancel: String,

    // Forms
    pub share_your_feedback: String,
    pub enter_feedback: String,
    pub submit_feedback: String,
    pub describe_report_bug: String,
    pub we_never_share_personal_information: String,
    pub inform_direction_description: String,
    pub user_research_team: String,
    pub direct_influence: String,
    pub join_mailing_list: String,
    pub email: String,
    pub back: String,
    pub sending: String,

    // Results
    pub feedback_sent: String,
    pub thank_you_for_feedback: String,
    pub bug_reported: String,
    pub team_will_review_bug: String,
    pub response_sent: String,
    pub thank_you_for_interest: String,
    pub something_went_wrong: String,
    pub problem_processing_request: String,
    pub close: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            tell_about_experience: "Tell us about your experience".into(),
            help_us_improve: "Help us improve the console.".into(),
            share_feedback: "Share feedback".into(),
            how_is_console_experience: "How is your experience using the console?".into(),
            report_a_bug: "Report a bug".into(),
            describe_bug_urgent_cases:
                "Describe the bug you encountered. For urgent issues, open a support case instead."
                    .into(),
            open_support_case: "Open a support case".into(),
            get_support: "Get help from the support team.".into(),
            inform_direction: "Inform the direction of the product".into(),
            learn_about_research_opportunities:
                "Learn about opportunities to share your feedback with our User Research Team."
                    .into(),
            cancel: "Cancel".into(),
            share_your_feedback: "Share your feedback with us!".into(),
            enter_feedback: "Enter your feedback".into(),
            submit_feedback: "Submit feedback".into(),
            describe_report_bug:
                "Describe the bug you encountered. Include where it is located and what action caused it. If this issue is urgent or blocking your workflow, open a support case."
                    .into(),
            we_never_share_personal_information:
                "We never share your personal information, and you can opt out at any time."
                    .into(),
            inform_direction_description:
                "By participating in feedback sessions, usability tests, and interviews with our "
                    .into(),
            user_research_team: "User Research Team".into(),
            direct_influence: ", you can directly influence the future of the product.".into(),
            join_mailing_list: "Join mailing list".into(),
            email: "Email".into(),
            back: "Back".into(),
            sending: "Sending…".into(),
            feedback_sent: "Feedback sent".into(),
            thank_you_for_feedback: "Thank you, we appreciate your feedback.".into(),
            bug_reported: "Bug reported".into(),
            team_will_review_bug:
                "We appreciate your feedback. Our team will review the bug and prioritize it accordingly."
                    .into(),
            response_sent: "Response sent".into(),
            thank_you_for_interest:
                "Thank you for your interest in user research. You have been added to our mailing list."
                    .into(),
            something_went_wrong: "Something went wrong".into(),
            problem_processing_request:
                "There was a problem processing the request. Try again or contact support.".into(),
            close: "Close".into(),
        }
    }
}

/// Text for one form page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCopy {
    pub title: String,
    pub description: Option<String>,
    /// `None` when the form has no text field
    pub text_label: Option<String>,
    /// Label of the link embedded in the description
    pub link_label: Option<String>,
    pub note: String,
    pub submit: String,
}

/// Text for a success or error page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCopy<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub is_error: bool,
}

impl Messages {
    /// Load overrides from a JSON file; keys that are missing keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading messages from {}", path.display()))?;
        let messages = serde_json::from_str(&content)
            .with_context(|| format!("parsing messages in {}", path.display()))?;
        Ok(messages)
    }

    pub fn form_copy(&self, page: Page) -> Option<FormCopy> {
        let copy = match page {
            Page::FeedbackForm => FormCopy {
                title: self.share_your_feedback.clone(),
                description: None,
                text_label: Some(self.enter_feedback.clone()),
                link_label: None,
                note: self.learn_about_research_opportunities.clone(),
                submit: self.submit_feedback.clone(),
            },
            Page::BugForm => FormCopy {
                title: self.report_a_bug.clone(),
                description: Some(self.describe_report_bug.clone()),
                text_label: Some(self.enter_feedback.clone()),
                link_label: Some(self.open_support_case.clone()),
                note: format!(
                    "{} {}",
                    self.learn_about_research_opportunities,
                    self.we_never_share_personal_information
                ),
                submit: self.submit_feedback.clone(),
            },
            Page::MailingForm => FormCopy {
                title: self.inform_direction.clone(),
                description: Some(format!(
                    "{}{}{}",
                    self.inform_direction_description,
                    self.user_research_team,
                    self.direct_influence
                )),
                text_label: None,
                link_label: Some(self.user_research_team.clone()),
                note: self.we_never_share_personal_information.clone(),
                submit: self.join_mailing_list.clone(),
            },
            _ => return None,
        };
        Some(copy)
    }

    pub fn result_copy(&self, page: Page) -> Option<ResultCopy<'_>> {
        let (title, description) = match page {
            Page::FeedbackSuccess => (&self.feedback_sent, &self.thank_you_for_feedback),
            Page::BugSuccess => (&self.bug_reported, &self.team_will_review_bug),
            Page::MailingSuccess => (&self.response_sent, &self.thank_you_for_interest),
            Page::Error => (&self.something_went_wrong, &self.problem_processing_request),
            _ => return None,
        };
        Some(ResultCopy {
            title: title.as_str(),
            description: description.as_str(),
            is_error: page == Page::Error,
        })
    }

    /// Card title and body for a home action
    pub fn card(&self, action: crate::actions::HomeAction) -> (&str, &str) {
        use crate::actions::HomeAction;

        let (title, body) = match action {
            HomeAction::ShareFeedback => (&self.share_feedback, &self.how_is_console_experience),
            HomeAction::ReportBug => (&self.report_a_bug, &self.describe_bug_urgent_cases),
            HomeAction::OpenSupportCase => (&self.open_support_case, &self.get_support),
            HomeAction::JoinMailingList => (
                &self.inform_direction,
                &self.learn_about_research_opportunities,
            ),
        };
        (title.as_str(), body.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::HomeAction;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{"shareFeedback": "Donner votre avis"}"#;
        let messages: Messages = serde_json::from_str(json).unwrap();
        assert_eq!(messages.share_feedback, "Donner votre avis");
        assert_eq!(messages.report_a_bug, Messages::default().report_a_bug);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{"cancel": "Annuler", "helpUsImproveHCC": "legacy"}"#;
        let messages: Messages = serde_json::from_str(json).unwrap();
        assert_eq!(messages.cancel, "Annuler");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "feedback-tui-messages-{}.json",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"close": "Fermer"}}"#).unwrap();

        let messages = Messages::load(&path).unwrap();
        assert_eq!(messages.close, "Fermer");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = Path::new("/nonexistent/feedback-tui/messages.json");
        let err = Messages::load(path).unwrap_err();
        assert!(err.to_string().contains("messages.json"));
    }

    #[test]
    fn test_form_copy_only_for_forms() {
        let messages = Messages::default();
        assert!(messages.form_copy(Page::FeedbackForm).is_some());
        assert!(messages.form_copy(Page::Home).is_none());
        assert!(messages.form_copy(Page::Error).is_none());
    }

    #[test]
    fn test_mailing_form_has_no_text_label() {
        let messages = Messages::default();
        let copy = messages.form_copy(Page::MailingForm).unwrap();
        assert!(copy.text_label.is_none());
        assert_eq!(copy.submit, messages.join_mailing_list);
        assert!(copy.description.unwrap().contains("User Research Team"));
        assert_eq!(copy.link_label.as_deref(), Some("User Research Team"));
    }

    #[test]
    fn test_result_copy_marks_error() {
        let messages = Messages::default();
        assert!(messages.result_copy(Page::Error).unwrap().is_error);
        let sent = messages.result_copy(Page::BugSuccess).unwrap();
        assert!(!sent.is_error);
        assert_eq!(sent.title, "Bug reported");
        assert!(messages.result_copy(Page::BugForm).is_none());
    }

    #[test]
    fn test_every_action_has_a_card() {
        let messages = Messages::default();
        for action in HomeAction::ALL {
            let (title, body) = messages.card(action);
            assert!(!title.is_empty());
            assert!(!body.is_empty());
        }
    }
}
