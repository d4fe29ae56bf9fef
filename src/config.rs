//! Configuration handling for the TUI

use crate::actions::{ActionSlot, FeedbackActions, HomeAction, LogHandler, WebhookHandler};
use crate::messages::Messages;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How one feedback action is handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionConfig {
    /// Open a URL in the browser instead of showing a form
    Link { url: String },
    /// Post the form as JSON to an HTTP endpoint
    Webhook { endpoint: String },
    /// Accept the form and write it to the log
    Log,
}

impl ActionConfig {
    fn into_slot(self, kind: HomeAction, client: &reqwest::Client) -> ActionSlot {
        match self {
            Self::Link { url } => ActionSlot::Url(url),
            Self::Webhook { endpoint } => {
                ActionSlot::handler(WebhookHandler::new(client.clone(), endpoint, kind))
            }
            Self::Log => ActionSlot::handler(LogHandler::new(kind)),
        }
    }
}

/// User configuration for the feedback dialog
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FeedbackConfig {
    /// Email pre-filled into every form
    pub email: Option<String>,
    pub share_feedback: Option<ActionConfig>,
    pub report_bug: Option<ActionConfig>,
    pub join_mailing_list: Option<ActionConfig>,
    /// Support case URL
    pub open_support_case: Option<String>,
    /// Research team page linked from the mailing-list form
    pub user_research: Option<String>,
    /// JSON file overriding message text
    pub messages_file: Option<PathBuf>,
}

impl FeedbackConfig {
    /// Configuration used when no file exists: every form is logged
    pub fn starter() -> Self {
        Self {
            share_feedback: Some(ActionConfig::Log),
            report_bug: Some(ActionConfig::Log),
            join_mailing_list: Some(ActionConfig::Log),
            ..Default::default()
        }
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "feedback", "feedback-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::starter()),
        }
    }

    /// Load configuration from `path`, or the starter config if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::starter());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let config: FeedbackConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Write pretty JSON to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Build the action slots, sharing one HTTP client between webhooks
    pub fn actions(&self, client: &reqwest::Client) -> FeedbackActions {
        let slot = |config: &Option<ActionConfig>, kind| {
            config
                .clone()
                .map(|c| c.into_slot(kind, client))
                .unwrap_or_default()
        };
        FeedbackActions {
            share_feedback: slot(&self.share_feedback, HomeAction::ShareFeedback),
            report_bug: slot(&self.report_bug, HomeAction::ReportBug),
            join_mailing_list: slot(&self.join_mailing_list, HomeAction::JoinMailingList),
            open_support_case: self.open_support_case.clone(),
            user_research: self.user_research.clone(),
        }
    }

    /// Messages with the configured overrides applied
    pub fn messages(&self) -> Result<Messages> {
        match &self.messages_file {
            Some(path) => Messages::load(path),
            None => Ok(Messages::default()),
        }
    }
}
