//! Handler that posts submissions to an HTTP endpoint

use super::slot::{HomeAction, Submission, SubmitHandler};
use reqwest::Client;
use serde::Serialize;

/// JSON body sent to the webhook
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WebhookPayload {
    pub kind: &'static str,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

fn kind_tag(kind: HomeAction) -> &'static str {
    match kind {
        HomeAction::ShareFeedback => "feedback",
        HomeAction::ReportBug => "bug",
        HomeAction::JoinMailingList => "mailing_list",
        HomeAction::OpenSupportCase => "support_case",
    }
}

/// Posts each submission as JSON; any 2xx response counts as success
#[derive(Debug, Clone)]
pub struct WebhookHandler {
    client: Client,
    endpoint: String,
    kind: HomeAction,
}

impl WebhookHandler {
    pub fn new(client: Client, endpoint: impl Into<String>, kind: HomeAction) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            kind,
        }
    }

    pub fn payload(&self, email: &str, text: Option<&str>) -> WebhookPayload {
        WebhookPayload {
            kind: kind_tag(self.kind),
            email: email.to_string(),
            text: text.map(str::to_string),
        }
    }
}

impl SubmitHandler for WebhookHandler {
    fn submit(&self, email: &str, text: Option<&str>) -> Submission {
        let request = self.client.post(&self.endpoint).json(&self.payload(email, text));
        let endpoint = self.endpoint.clone();

        Submission::pending(async move {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                tracing::warn!(%endpoint, %status, "webhook rejected submission");
            }
            Ok::<_, anyhow::Error>(status.is_success())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn handler(kind: HomeAction) -> WebhookHandler {
        WebhookHandler::new(Client::new(), "http://127.0.0.1:1/feedback", kind)
    }

    #[test]
    fn test_payload_includes_text() {
        let payload = handler(HomeAction::ShareFeedback).payload("a@x.com", Some("nice"));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "feedback", "email": "a@x.com", "text": "nice"})
        );
    }

    #[test]
    fn test_payload_omits_missing_text() {
        let payload = handler(HomeAction::JoinMailingList).payload("a@x.com", None);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "mailing_list", "email": "a@x.com"})
        );
    }

    #[test]
    fn test_submit_is_pending() {
        let submission = handler(HomeAction::ReportBug).submit("a@x.com", Some("crash"));
        assert!(matches!(submission, Submission::Pending(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let Submission::Pending(future) = handler(HomeAction::ReportBug).submit("", None) else {
            panic!("expected pending submission");
        };
        assert!(future.await.is_err());
    }
}
