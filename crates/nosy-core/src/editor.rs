//! Profile editing flow
//!
//! Tracks which channel the profile dialog is currently editing and routes a
//! saved profile back into the registry.
//!
//! ```text
//!          begin(c)                 submit(c.id, p) / cancel()
//!   Idle ───────────▶ Selecting(c) ─────────────────────────────▶ Idle
//!                      │     ▲
//!                      └─────┘ begin(d): selection replaced, dialog re-targeted
//! ```

use crate::channel::{Channel, ChannelId, ChannelProfile, ChannelRegistry};
use crate::dialog::{DialogOutcome, ProfileDialog};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Selecting {
        channel_id: ChannelId,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ProfileEditor {
    state: EditState,
}

impl ProfileEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Channel currently being edited
    pub fn selected(&self) -> Option<&ChannelId> {
        match &self.state {
            EditState::Selecting { channel_id } => Some(channel_id),
            EditState::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Selecting { .. })
    }

    /// Select `channel` and open the dialog on it
    ///
    /// An existing selection is replaced.
    pub fn begin(&mut self, channel: &Channel, dialog: &mut impl ProfileDialog) {
        if let Some(previous) = self.selected() {
            tracing::debug!(%previous, next = %channel.id(), "re-targeting profile dialog");
        }
        self.state = EditState::Selecting {
            channel_id: channel.id().clone(),
        };
        dialog.open(channel);
    }

    /// Apply a saved profile to the selected channel
    ///
    /// Ignored unless `channel_id` is the current selection. Returns whether
    /// the save was accepted.
    pub fn submit(
        &mut self,
        channel_id: &ChannelId,
        profile: ChannelProfile,
        registry: &mut ChannelRegistry,
        dialog: &mut impl ProfileDialog,
    ) -> bool {
        if self.selected() != Some(channel_id) {
            tracing::warn!(
                %channel_id,
                selected = ?self.selected().map(ChannelId::as_str),
                "ignoring profile save for a channel that is not being edited"
            );
            return false;
        }
        registry.set_profile(channel_id, profile);
        self.state = EditState::Idle;
        dialog.close();
        true
    }

    /// Drop the selection without touching the registry; no-op while idle
    pub fn cancel(&mut self, dialog: &mut impl ProfileDialog) {
        if let EditState::Selecting { channel_id } = &self.state {
            tracing::debug!(%channel_id, "profile edit cancelled");
            self.state = EditState::Idle;
            dialog.close();
        }
    }

    /// Route a dialog outcome to `submit` or `cancel`
    pub fn handle(
        &mut self,
        outcome: DialogOutcome,
        registry: &mut ChannelRegistry,
        dialog: &mut impl ProfileDialog,
    ) -> bool {
        match outcome {
            DialogOutcome::Saved {
                channel_id,
                profile,
            } => self.submit(&channel_id, profile, registry, dialog),
            DialogOutcome::Dismissed => {
                self.cancel(dialog);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records what the flow asked of the dialog
    #[derive(Default)]
    struct RecordingDialog {
        open_on: Option<ChannelId>,
        opened: Vec<ChannelId>,
        closes: usize,
    }

    impl ProfileDialog for RecordingDialog {
        fn open(&mut self, target: &Channel) {
            self.open_on = Some(target.id().clone());
            self.opened.push(target.id().clone());
        }

        fn close(&mut self) {
            self.open_on = None;
            self.closes += 1;
        }

        fn is_open(&self) -> bool {
            self.open_on.is_some()
        }
    }

    fn channel(registry: &ChannelRegistry, id: &str) -> Channel {
        registry.get(&id.into()).unwrap().clone()
    }

    #[test]
    fn begin_opens_dialog() {
        let registry = ChannelRegistry::with_defaults();
        let mut editor = ProfileEditor::new();
        let mut dialog = RecordingDialog::default();

        editor.begin(&channel(&registry, "1"), &mut dialog);

        assert!(editor.is_editing());
        assert_eq!(editor.selected(), Some(&"1".into()));
        assert!(dialog.is_open());
        assert_eq!(dialog.open_on, Some("1".into()));
    }

    #[test]
    fn submit_updates_selected_channel() {
        let mut registry = ChannelRegistry::with_defaults();
        let mut editor = ProfileEditor::new();
        let mut dialog = RecordingDialog::default();
        let profile = ChannelProfile::new("Platform Team", ["Deploy Log"]);

        editor.begin(&channel(&registry, "3"), &mut dialog);
        assert!(editor.submit(&"3".into(), profile.clone(), &mut registry, &mut dialog));

        assert_eq!(editor.state(), &EditState::Idle);
        assert!(!dialog.is_open());
        assert_eq!(channel(&registry, "3").profile, Some(profile));
    }

    #[test]
    fn rebegin_replaces_selection() {
        let mut registry = ChannelRegistry::with_defaults();
        let mut editor = ProfileEditor::new();
        let mut dialog = RecordingDialog::default();
        let two_before = channel(&registry, "2").profile;
        let profile = ChannelProfile::new("Platform Team", ["Deploy Log"]);

        editor.begin(&channel(&registry, "2"), &mut dialog);
        editor.begin(&channel(&registry, "3"), &mut dialog);
        assert_eq!(editor.selected(), Some(&"3".into()));
        assert_eq!(dialog.open_on, Some("3".into()));
        assert_eq!(dialog.opened, vec![ChannelId::from("2"), ChannelId::from("3")]);

        // stale target must be rejected
        assert!(!editor.submit(&"2".into(), profile.clone(), &mut registry, &mut dialog));
        assert_eq!(channel(&registry, "2").profile, two_before);

        assert!(editor.submit(&"3".into(), profile.clone(), &mut registry, &mut dialog));
        assert_eq!(channel(&registry, "3").profile, Some(profile));
        assert_eq!(channel(&registry, "2").profile, two_before);
    }

    #[test]
    fn cancel_leaves_profile_untouched() {
        let mut registry = ChannelRegistry::with_defaults();
        let before = registry.clone();
        let mut editor = ProfileEditor::new();
        let mut dialog = RecordingDialog::default();

        editor.begin(&channel(&registry, "1"), &mut dialog);
        editor.cancel(&mut dialog);

        assert_eq!(editor.state(), &EditState::Idle);
        assert!(!dialog.is_open());
        assert_eq!(registry, before);

        // the flow is re-entrant after cancelling
        editor.begin(&channel(&registry, "1"), &mut dialog);
        assert!(editor.handle(
            DialogOutcome::Saved {
                channel_id: "1".into(),
                profile: ChannelProfile::new("Support Leads", ["Support Tickets"]),
            },
            &mut registry,
            &mut dialog,
        ));
        assert_eq!(
            channel(&registry, "1").profile.unwrap().audience,
            "Support Leads"
        );
    }

    #[test]
    fn submit_while_idle_is_ignored() {
        let mut registry = ChannelRegistry::with_defaults();
        let before = registry.clone();
        let mut editor = ProfileEditor::new();
        let mut dialog = RecordingDialog::default();

        assert!(!editor.submit(
            &"1".into(),
            ChannelProfile::new("x", ["y"]),
            &mut registry,
            &mut dialog
        ));
        assert_eq!(registry, before);
        assert_eq!(dialog.closes, 0);
    }

    #[test]
    fn dismissed_outcome_cancels() {
        let mut registry = ChannelRegistry::with_defaults();
        let before = registry.clone();
        let mut editor = ProfileEditor::new();
        let mut dialog = RecordingDialog::default();

        editor.begin(&channel(&registry, "4"), &mut dialog);
        assert!(!editor.handle(DialogOutcome::Dismissed, &mut registry, &mut dialog));

        assert!(!editor.is_editing());
        assert_eq!(dialog.closes, 1);
        assert_eq!(registry, before);
    }
}
