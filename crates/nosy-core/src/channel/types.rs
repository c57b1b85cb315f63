//! Channel type definitions
//!
//! # Model
//! ```text
//! Channel
//! ├── id       opaque, unique, stable
//! ├── name     mailbox address or chat-channel name
//! ├── kind     MailSource (Outlook) | ChatSource (Slack), fixed at creation
//! ├── enabled  actively monitored?
//! └── profile  Option<ChannelProfile { audience, data_sources }>
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a channel
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ChannelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind of communication source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    /// Mailbox (Outlook)
    #[serde(rename = "outlook", alias = "mail")]
    MailSource,
    /// Chat channel (Slack)
    #[serde(rename = "slack", alias = "chat")]
    ChatSource,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MailSource => "outlook",
            Self::ChatSource => "slack",
        }
    }

    /// Badge label shown next to the channel name
    pub fn label(&self) -> &'static str {
        match self {
            Self::MailSource => "Outlook",
            Self::ChatSource => "Slack",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ChannelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "outlook" | "mail" => Ok(Self::MailSource),
            "slack" | "chat" => Ok(Self::ChatSource),
            other => Err(format!("unknown channel kind '{other}' (expected mail or chat)")),
        }
    }
}

/// Summarization profile attached to a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelProfile {
    /// Who the summaries are written for
    pub audience: String,
    /// Named data sources, in display order
    #[serde(default)]
    pub data_sources: Vec<String>,
}

impl ChannelProfile {
    pub fn new<I, S>(audience: impl Into<String>, data_sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            audience: audience.into(),
            data_sources: data_sources.into_iter().map(Into::into).collect(),
        }
    }
}

/// A registered monitoring target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Channel {
    id: ChannelId,
    /// Display label
    pub name: String,
    kind: ChannelKind,
    /// Whether this channel is actively monitored
    pub enabled: bool,
    /// Attached profile, `None` until configured
    pub profile: Option<ChannelProfile>,
}

impl Channel {
    /// Create an enabled channel without a profile
    pub fn new(id: impl Into<ChannelId>, name: impl Into<String>, kind: ChannelKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            enabled: true,
            profile: None,
        }
    }

    /// Create a mailbox channel
    pub fn mail(id: impl Into<ChannelId>, address: impl Into<String>) -> Self {
        Self::new(id, address, ChannelKind::MailSource)
    }

    /// Create a chat channel
    pub fn chat(id: impl Into<ChannelId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ChannelKind::ChatSource)
    }

    /// Attach a profile
    pub fn with_profile(mut self, profile: ChannelProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Disable this channel
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn id(&self) -> &ChannelId {
        &self.id
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_constructors() {
        let mail = Channel::mail("2", "sales@company.com");
        assert_eq!(mail.kind(), ChannelKind::MailSource);
        assert!(mail.enabled);
        assert!(!mail.has_profile());

        let chat = Channel::chat("3", "Engineering Updates").disabled();
        assert_eq!(chat.kind(), ChannelKind::ChatSource);
        assert!(!chat.enabled);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(ChannelKind::MailSource.label(), "Outlook");
        assert_eq!(ChannelKind::ChatSource.label(), "Slack");
        assert_eq!(ChannelKind::ChatSource.to_string(), "slack");
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("mail".parse::<ChannelKind>(), Ok(ChannelKind::MailSource));
        assert_eq!("Slack".parse::<ChannelKind>(), Ok(ChannelKind::ChatSource));
        assert!("teams".parse::<ChannelKind>().is_err());
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(ChannelId::generate(), ChannelId::generate());
    }

    #[test]
    fn profile_keeps_duplicates_and_order() {
        let profile = ChannelProfile::new("Sales Team", ["CRM Data", "Lead Scores", "CRM Data"]);
        assert_eq!(
            profile.data_sources,
            vec!["CRM Data", "Lead Scores", "CRM Data"]
        );
    }
}
