//! Channel registry
//!
//! Holds the session's channel collection in insertion order. Lookups by an
//! unknown id never fail: mutations degrade to no-ops so a late dialog
//! callback cannot take the view down.

use std::collections::HashSet;

use crate::error::{NosyError, Result};

use super::types::{Channel, ChannelId, ChannelKind, ChannelProfile};

/// The authoritative, ordered channel collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRegistry {
    channels: Vec<Channel>,
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ChannelRegistry {
    /// Registry with the four built-in seed channels
    pub fn with_defaults() -> Self {
        Self {
            channels: default_channels(),
        }
    }

    /// Build a registry from seed records, rejecting repeated ids
    pub fn from_channels(channels: Vec<Channel>) -> Result<Self> {
        let mut seen = HashSet::new();
        for channel in &channels {
            if !seen.insert(channel.id()) {
                return Err(NosyError::DuplicateChannelId {
                    id: channel.id().to_string(),
                });
            }
        }
        tracing::info!(count = channels.len(), "seeded channel registry");
        Ok(Self { channels })
    }

    /// Flip `enabled` on the matching channel
    ///
    /// Returns the new state, or `None` when no channel has this id.
    pub fn toggle(&mut self, id: &ChannelId) -> Option<bool> {
        match self.get_mut(id) {
            Some(channel) => {
                channel.enabled = !channel.enabled;
                tracing::debug!(%id, enabled = channel.enabled, "toggled channel");
                Some(channel.enabled)
            }
            None => {
                tracing::debug!(%id, "toggle ignored: unknown channel");
                None
            }
        }
    }

    /// Replace the matching channel's profile wholesale
    ///
    /// Returns `false` when no channel has this id.
    pub fn set_profile(&mut self, id: &ChannelId, profile: ChannelProfile) -> bool {
        match self.get_mut(id) {
            Some(channel) => {
                tracing::debug!(%id, audience = %profile.audience, "updated channel profile");
                channel.profile = Some(profile);
                true
            }
            None => {
                tracing::debug!(%id, "profile update ignored: unknown channel");
                false
            }
        }
    }

    /// Append a new enabled channel with a fresh id
    pub fn add(&mut self, name: impl Into<String>, kind: ChannelKind) -> ChannelId {
        let mut id = ChannelId::generate();
        while self.contains(&id) {
            id = ChannelId::generate();
        }
        let channel = Channel::new(id.clone(), name, kind);
        tracing::debug!(%id, name = %channel.name, %kind, "added channel");
        self.channels.push(channel);
        id
    }

    /// Get a channel by id
    pub fn get(&self, id: &ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id() == id)
    }

    fn get_mut(&mut self, id: &ChannelId) -> Option<&mut Channel> {
        self.channels.iter_mut().find(|c| c.id() == id)
    }

    /// List all channels
    pub fn list(&self) -> &[Channel] {
        &self.channels
    }

    /// List enabled channels
    pub fn list_enabled(&self) -> Vec<&Channel> {
        self.channels.iter().filter(|c| c.enabled).collect()
    }

    /// Number of enabled channels ("Active Channels")
    pub fn enabled_count(&self) -> usize {
        self.channels.iter().filter(|c| c.enabled).count()
    }

    /// List channels by kind
    pub fn list_by_kind(&self, kind: ChannelKind) -> Vec<&Channel> {
        self.channels.iter().filter(|c| c.kind() == kind).collect()
    }

    /// Check if a channel exists
    pub fn contains(&self, id: &ChannelId) -> bool {
        self.channels.iter().any(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

fn default_channels() -> Vec<Channel> {
    vec![
        Channel::chat("1", "Customer Support").with_profile(ChannelProfile::new(
            "Customer Success Team",
            ["Support Tickets", "Usage Analytics"],
        )),
        Channel::mail("2", "sales@company.com")
            .with_profile(ChannelProfile::new("Sales Team", ["CRM Data", "Lead Scores"])),
        Channel::chat("3", "Engineering Updates").disabled(),
        Channel::mail("4", "team@company.com"),
    ]
}
