//! Dialog collaborators
//!
//! The dashboard drives two dialogs it does not render itself:
//!
//! - the channel profile dialog, opened on a target channel and resolved
//!   with a [`DialogOutcome`]
//! - the summary configuration dialog, which only receives open/close
//!
//! Front ends implement the traits; the core never looks at form fields.

use crate::channel::{Channel, ChannelId, ChannelProfile};
use crate::error::{NosyError, Result};

/// Channel profile dialog
pub trait ProfileDialog {
    /// Open (or re-target) the dialog on `target`, pre-filled from its profile
    fn open(&mut self, target: &Channel);

    fn close(&mut self);

    fn is_open(&self) -> bool;
}

/// Summary configuration dialog (open/close only)
pub trait SummaryConfigDialog {
    fn set_open(&mut self, open: bool);

    fn is_open(&self) -> bool;
}

/// How the user left the profile dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Save pressed; emitted at most once per opening
    Saved {
        channel_id: ChannelId,
        profile: ChannelProfile,
    },
    /// Closed without saving
    Dismissed,
}

/// Editable copy of a channel's profile held by an open dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub channel_id: Option<ChannelId>,
    pub channel_name: String,
    pub audience: String,
    pub data_sources: Vec<String>,
}

impl ProfileDraft {
    /// Pre-populate from the channel's current profile, or start empty
    pub fn from_channel(channel: &Channel) -> Self {
        let (audience, data_sources) = match &channel.profile {
            Some(profile) => (profile.audience.clone(), profile.data_sources.clone()),
            None => (String::new(), Vec::new()),
        };
        Self {
            channel_id: Some(channel.id().clone()),
            channel_name: channel.name.clone(),
            audience,
            data_sources,
        }
    }

    pub fn add_data_source(&mut self, source: impl Into<String>) {
        let source = source.into();
        let trimmed = source.trim();
        if !trimmed.is_empty() {
            self.data_sources.push(trimmed.to_string());
        }
    }

    /// Remove the data source at `index`, returning it if present
    pub fn remove_data_source(&mut self, index: usize) -> Option<String> {
        (index < self.data_sources.len()).then(|| self.data_sources.remove(index))
    }

    /// Finish editing and produce the save payload
    ///
    /// A draft without a target resolves to [`DialogOutcome::Dismissed`].
    pub fn into_outcome(self) -> Result<DialogOutcome> {
        let Some(channel_id) = self.channel_id else {
            return Ok(DialogOutcome::Dismissed);
        };
        let audience = self.audience.trim();
        if audience.is_empty() {
            return Err(NosyError::EmptyAudience);
        }
        Ok(DialogOutcome::Saved {
            channel_id,
            profile: ChannelProfile::new(audience, self.data_sources),
        })
    }
}
