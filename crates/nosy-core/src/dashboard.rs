//! Dashboard view state
//!
//! [`Dashboard`] is the single owner of everything the channel page mutates:
//! the registry, the profile editing flow and both dialogs. Front ends feed
//! it one user event at a time.

use crate::channel::{Channel, ChannelId, ChannelKind, ChannelProfile, ChannelRegistry};
use crate::dialog::{DialogOutcome, ProfileDialog, SummaryConfigDialog};
use crate::editor::ProfileEditor;

pub struct Dashboard<P, S> {
    registry: ChannelRegistry,
    editor: ProfileEditor,
    profile_dialog: P,
    summary_dialog: S,
}

impl<P: ProfileDialog, S: SummaryConfigDialog> Dashboard<P, S> {
    pub fn new(registry: ChannelRegistry, profile_dialog: P, summary_dialog: S) -> Self {
        Self {
            registry,
            editor: ProfileEditor::new(),
            profile_dialog,
            summary_dialog,
        }
    }

    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    pub fn editor(&self) -> &ProfileEditor {
        &self.editor
    }

    pub fn profile_dialog(&self) -> &P {
        &self.profile_dialog
    }

    pub fn profile_dialog_mut(&mut self) -> &mut P {
        &mut self.profile_dialog
    }

    pub fn summary_dialog(&self) -> &S {
        &self.summary_dialog
    }

    pub fn summary_dialog_mut(&mut self) -> &mut S {
        &mut self.summary_dialog
    }

    /// Flip monitoring for a channel; unknown ids are ignored
    pub fn toggle_channel(&mut self, id: &ChannelId) -> Option<bool> {
        self.registry.toggle(id)
    }

    /// Open the profile dialog on a channel; unknown ids are ignored
    pub fn open_channel_profile(&mut self, id: &ChannelId) -> bool {
        match self.registry.get(id) {
            Some(channel) => {
                self.editor.begin(channel, &mut self.profile_dialog);
                true
            }
            None => {
                tracing::debug!(%id, "profile dialog not opened: unknown channel");
                false
            }
        }
    }

    /// The profile dialog's save callback
    pub fn save_channel_profile(&mut self, id: &ChannelId, profile: ChannelProfile) -> bool {
        self.editor
            .submit(id, profile, &mut self.registry, &mut self.profile_dialog)
    }

    /// The profile dialog was closed without saving
    pub fn cancel_channel_profile(&mut self) {
        self.editor.cancel(&mut self.profile_dialog);
    }

    /// Apply whatever the profile dialog resolved to
    pub fn resolve_profile_dialog(&mut self, outcome: DialogOutcome) -> bool {
        self.editor
            .handle(outcome, &mut self.registry, &mut self.profile_dialog)
    }

    pub fn open_summary_config(&mut self) {
        self.summary_dialog.set_open(true);
    }

    pub fn close_summary_config(&mut self) {
        self.summary_dialog.set_open(false);
    }

    /// Append a new channel with a fresh id
    pub fn add_channel(&mut self, name: impl Into<String>, kind: ChannelKind) -> ChannelId {
        self.registry.add(name, kind)
    }

    pub fn channels(&self) -> &[Channel] {
        self.registry.list()
    }

    pub fn enabled_channels(&self) -> Vec<&Channel> {
        self.registry.list_enabled()
    }

    /// "Active Channels" counter
    pub fn active_channel_count(&self) -> usize {
        self.registry.enabled_count()
    }
}
