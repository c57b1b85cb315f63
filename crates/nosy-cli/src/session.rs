//! Interactive terminal dashboard
//!
//! Reads one command per line and applies it to a [`Dashboard`]. Each line is
//! a single user event, handled to completion before the next is read.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use nosy_core::{
    Channel, ChannelId, ChannelRegistry, Dashboard, DialogOutcome, ProfileDialog, ProfileDraft,
    SummaryConfigDialog,
};

use crate::args::{DialogState, SessionEvent, SessionLine, SourceAction};
use crate::view;

/// Profile dialog rendered as a text panel
#[derive(Debug, Default)]
pub struct TerminalProfileDialog {
    draft: Option<ProfileDraft>,
}

impl TerminalProfileDialog {
    pub fn draft(&self) -> Option<&ProfileDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProfileDraft> {
        self.draft.as_mut()
    }
}

impl ProfileDialog for TerminalProfileDialog {
    fn open(&mut self, target: &Channel) {
        self.draft = Some(ProfileDraft::from_channel(target));
    }

    fn close(&mut self) {
        self.draft = None;
    }

    fn is_open(&self) -> bool {
        self.draft.is_some()
    }
}

#[derive(Debug, Default)]
pub struct SummaryConfigPanel {
    open: bool,
}

impl SummaryConfigDialog for SummaryConfigPanel {
    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

pub type TerminalDashboard = Dashboard<TerminalProfileDialog, SummaryConfigPanel>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Session {
    dashboard: TerminalDashboard,
    title: String,
}

impl Session {
    pub fn new(registry: ChannelRegistry, title: impl Into<String>) -> Self {
        Self {
            dashboard: Dashboard::new(
                registry,
                TerminalProfileDialog::default(),
                SummaryConfigPanel::default(),
            ),
            title: title.into(),
        }
    }

    pub fn dashboard(&self) -> &TerminalDashboard {
        &self.dashboard
    }

    /// Run the event loop until `quit` or end of input
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.render(out)?;
        writeln!(out, "{}", "Type 'help' for commands.".dimmed())?;
        prompt(out)?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                prompt(out)?;
                continue;
            }

            match SessionLine::parse_line(line) {
                Ok(event) => {
                    tracing::debug!(?event, "dashboard event");
                    if self.apply(event, out)? == Control::Quit {
                        return Ok(());
                    }
                }
                Err(e) => {
                    let message = e.to_string();
                    let first = message.lines().next().unwrap_or_default();
                    writeln!(out, "{} {}", "[ERROR]".red().bold(), first)?;
                    writeln!(out, "{}", "Type 'help' for commands.".dimmed())?;
                }
            }
            prompt(out)?;
        }

        Ok(())
    }

    /// Apply one event to the dashboard
    pub fn apply(&mut self, event: SessionEvent, out: &mut impl Write) -> io::Result<Control> {
        match event {
            SessionEvent::List => self.render(out)?,
            SessionEvent::Toggle { id } => self.toggle(&ChannelId::from(id), out)?,
            SessionEvent::Edit { id } => {
                let id = ChannelId::from(id);
                if self.dashboard.open_channel_profile(&id) {
                    self.render_dialog(out)?;
                } else {
                    unknown_channel(out, &id)?;
                }
            }
            SessionEvent::Audience { text } => {
                if let Some(draft) = self.dashboard.profile_dialog_mut().draft_mut() {
                    draft.audience = text.join(" ");
                }
                self.render_dialog(out)?;
            }
            SessionEvent::Source { action } => self.edit_sources(action, out)?,
            SessionEvent::Save => self.save(out)?,
            SessionEvent::Cancel => {
                if self.dashboard.profile_dialog().is_open() {
                    self.dashboard
                        .resolve_profile_dialog(DialogOutcome::Dismissed);
                    writeln!(out, "Profile dialog closed without saving.")?;
                } else {
                    no_dialog(out)?;
                }
            }
            SessionEvent::Add { kind, name } => {
                let name = name.join(" ");
                let id = self.dashboard.add_channel(name.clone(), kind.into());
                writeln!(out, "{} {} ({})", "Added:".green(), name, id)?;
                view::status(out, self.dashboard.active_channel_count())?;
            }
            SessionEvent::Summary { state } => match state {
                DialogState::Open => {
                    self.dashboard.open_summary_config();
                    view::summary_config(out)?;
                }
                DialogState::Close => {
                    self.dashboard.close_summary_config();
                    writeln!(out, "Summary configuration closed.")?;
                }
            },
            SessionEvent::Help => view::help(out)?,
            SessionEvent::Quit => return Ok(Control::Quit),
        }
        Ok(Control::Continue)
    }

    fn toggle(&mut self, id: &ChannelId, out: &mut impl Write) -> io::Result<()> {
        match self.dashboard.toggle_channel(id) {
            Some(enabled) => {
                let name = self
                    .dashboard
                    .registry()
                    .get(id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                let state = if enabled {
                    "enabled".green()
                } else {
                    "disabled".yellow()
                };
                writeln!(out, "Monitoring {} for {}", state, name.bold())?;
                view::status(out, self.dashboard.active_channel_count())
            }
            None => unknown_channel(out, id),
        }
    }

    fn edit_sources(&mut self, action: SourceAction, out: &mut impl Write) -> io::Result<()> {
        let Some(draft) = self.dashboard.profile_dialog_mut().draft_mut() else {
            return no_dialog(out);
        };
        match action {
            SourceAction::Add { name } => draft.add_data_source(name.join(" ")),
            SourceAction::Remove { index } => {
                let removed = index
                    .checked_sub(1)
                    .and_then(|i| draft.remove_data_source(i));
                if removed.is_none() {
                    writeln!(out, "No data source #{index}")?;
                }
            }
            SourceAction::Clear => draft.data_sources.clear(),
        }
        self.render_dialog(out)
    }

    fn save(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some(draft) = self.dashboard.profile_dialog().draft().cloned() else {
            return no_dialog(out);
        };
        let name = draft.channel_name.clone();

        match draft.into_outcome() {
            Ok(outcome) => {
                if self.dashboard.resolve_profile_dialog(outcome) {
                    writeln!(out, "{} profile for {}", "Saved:".green(), name.bold())?;
                } else {
                    writeln!(out, "Profile not saved: {} is no longer being edited.", name)?;
                }
                Ok(())
            }
            Err(e) => writeln!(out, "{} {}", "[ERROR]".red().bold(), e),
        }
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        view::header(out, &self.title)?;
        view::status(out, self.dashboard.active_channel_count())?;
        writeln!(out)?;
        view::channels(out, self.dashboard.channels())?;
        view::activity(out)?;
        if self.dashboard.summary_dialog().is_open() {
            view::summary_config(out)?;
        }
        Ok(())
    }

    fn render_dialog(&self, out: &mut impl Write) -> io::Result<()> {
        match self.dashboard.profile_dialog().draft() {
            Some(draft) => view::profile_dialog(out, draft),
            None => no_dialog(out),
        }
    }
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn unknown_channel(out: &mut impl Write, id: &ChannelId) -> io::Result<()> {
    writeln!(out, "No channel with id {}", id.as_str().bold())
}

fn no_dialog(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "No profile dialog is open. Use 'edit <id>' to open one."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nosy_core::ChannelProfile;

    fn run_script(script: &str) -> (Session, String) {
        colored::control::set_override(false);
        let mut session = Session::new(ChannelRegistry::with_defaults(), "NosyWorker Dashboard");
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    fn profile(session: &Session, id: &str) -> Option<ChannelProfile> {
        session
            .dashboard()
            .registry()
            .get(&id.into())
            .and_then(|c| c.profile.clone())
    }

    #[test]
    fn initial_render() {
        let (_, out) = run_script("");
        assert!(out.contains("NosyWorker Dashboard"));
        assert!(out.contains("Active Channels: 3"));
        assert!(out.contains("Engineering Updates"));
        assert!(out.contains("Recent Activity"));
    }

    #[test]
    fn toggle_updates_active_count() {
        let (session, out) = run_script("toggle 3\n");
        assert!(out.contains("Monitoring enabled for Engineering Updates"));
        assert!(out.contains("Active Channels: 4"));
        assert_eq!(session.dashboard().active_channel_count(), 4);
    }

    #[test]
    fn toggle_unknown_id_reports_and_continues() {
        let (session, out) = run_script("toggle 42\ntoggle 1\n");
        assert!(out.contains("No channel with id 42"));
        assert_eq!(session.dashboard().active_channel_count(), 2);
    }

    #[test]
    fn edit_and_save_profile() {
        let (session, out) = run_script(
            "edit 3\naudience Platform Team\nsource add Deploy Log\nsource add Jira\nsource remove 2\nsave\n",
        );
        assert!(out.contains("Channel Profile: Engineering Updates"));
        assert!(out.contains("Saved: profile for Engineering Updates"));
        assert_eq!(
            profile(&session, "3"),
            Some(ChannelProfile::new("Platform Team", ["Deploy Log"]))
        );
        assert!(!session.dashboard().profile_dialog().is_open());
    }

    #[test]
    fn edit_prefills_existing_profile() {
        let (_, out) = run_script("edit 2\n");
        assert!(out.contains("Audience: Sales Team"));
        assert!(out.contains("1. CRM Data"));
        assert!(out.contains("2. Lead Scores"));
    }

    #[test]
    fn reedit_retargets_dialog() {
        let (session, _) = run_script("edit 2\nedit 3\naudience Platform Team\nsave\n");
        assert_eq!(profile(&session, "2").unwrap().audience, "Sales Team");
        assert_eq!(profile(&session, "3").unwrap().audience, "Platform Team");
    }

    #[test]
    fn cancel_discards_changes() {
        let (session, out) = run_script("edit 1\naudience Someone Else\nsource clear\ncancel\n");
        assert!(out.contains("closed without saving"));
        assert_eq!(
            profile(&session, "1"),
            Some(ChannelProfile::new(
                "Customer Success Team",
                ["Support Tickets", "Usage Analytics"]
            ))
        );
    }

    #[test]
    fn save_without_audience_keeps_dialog_open() {
        let (session, out) = run_script("edit 4\nsave\n");
        assert!(out.contains("audience must not be empty"));
        assert!(session.dashboard().profile_dialog().is_open());
        assert_eq!(profile(&session, "4"), None);
    }

    #[test]
    fn dialog_commands_need_open_dialog() {
        let (_, out) = run_script("save\ncancel\nsource add X\n");
        assert_eq!(out.matches("No profile dialog is open").count(), 3);
    }

    #[test]
    fn add_channel_and_summary_dialog() {
        let (session, out) = run_script("add chat Incident Room\nsummary open\nsummary close\n");
        assert!(out.contains("Added: Incident Room"));
        assert!(out.contains("Summary Configuration"));
        assert_eq!(session.dashboard().channels().len(), 5);
        assert_eq!(session.dashboard().channels()[4].name, "Incident Room");
        assert!(!session.dashboard().summary_dialog().is_open());
    }

    #[test]
    fn quit_stops_processing() {
        let (session, _) = run_script("quit\ntoggle 3\n");
        assert_eq!(session.dashboard().active_channel_count(), 3);
    }

    #[test]
    fn parse_errors_are_reported() {
        let (_, out) = run_script("frobnicate\n");
        assert!(out.contains("[ERROR]"));
    }
}
