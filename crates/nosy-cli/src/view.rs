//! Terminal rendering of the dashboard

use std::io::{self, Write};

use colored::Colorize;

use nosy_core::{Channel, ChannelKind, ProfileDraft};

pub fn header(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bold())?;
    writeln!(out, "{}", "Your Intelligent Operations Assistant".dimmed())?;
    writeln!(out)
}

pub fn status(out: &mut impl Write, active: usize) -> io::Result<()> {
    writeln!(out, "Active Channels: {}", active.to_string().green().bold())
}

fn kind_badge(kind: ChannelKind) -> String {
    match kind {
        ChannelKind::MailSource => format!("[{}]", kind.label()).blue().to_string(),
        ChannelKind::ChatSource => format!("[{}]", kind.label()).green().to_string(),
    }
}

pub fn channel_row(out: &mut impl Write, channel: &Channel) -> io::Result<()> {
    let switch = if channel.enabled {
        "[on] ".green()
    } else {
        "[off]".dimmed()
    };
    let profile = if channel.has_profile() {
        "Profile Configured".cyan().to_string()
    } else {
        "No Profile".dimmed().to_string()
    };
    writeln!(
        out,
        "  {} {:<4} {} {}  {}",
        switch,
        channel.id().as_str(),
        channel.name.bold(),
        kind_badge(channel.kind()),
        profile
    )
}

pub fn channels(out: &mut impl Write, channels: &[Channel]) -> io::Result<()> {
    writeln!(out, "{}", "Communication Channels".bold())?;
    writeln!(
        out,
        "{}",
        "Select which Outlook emails and Slack channels to monitor and summarize".dimmed()
    )?;
    if channels.is_empty() {
        writeln!(out, "  No channels registered. Use 'add mail|chat <name>'.")?;
    }
    for channel in channels {
        channel_row(out, channel)?;
    }
    writeln!(out)
}

/// Recent activity; fixed sample entries, not derived from the channels
pub fn activity(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Recent Activity".bold())?;
    writeln!(
        out,
        "  {} {}",
        "Customer Support Summary".bold(),
        "[Action Required]".yellow()
    )?;
    writeln!(
        out,
        "    3 new support tickets requiring attention. 2 customers reporting login issues. {}",
        "(2 minutes ago)".dimmed()
    )?;
    writeln!(
        out,
        "  {} {}",
        "Sales Team Update".bold(),
        "[Informational]".cyan()
    )?;
    writeln!(
        out,
        "    New lead from enterprise client. Follow-up meeting scheduled for tomorrow. {}",
        "(15 minutes ago)".dimmed()
    )?;
    writeln!(out)
}

pub fn profile_dialog(out: &mut impl Write, draft: &ProfileDraft) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {}",
        "Channel Profile:".bold(),
        draft.channel_name.cyan()
    )?;
    let audience = if draft.audience.is_empty() {
        "(not set)".dimmed().to_string()
    } else {
        draft.audience.clone()
    };
    writeln!(out, "  Audience: {}", audience)?;
    writeln!(out, "  Data sources:")?;
    if draft.data_sources.is_empty() {
        writeln!(out, "    {}", "(none)".dimmed())?;
    }
    for (i, source) in draft.data_sources.iter().enumerate() {
        writeln!(out, "    {}. {}", i + 1, source)?;
    }
    writeln!(
        out,
        "  {}",
        "audience <text> | source add <name> | source remove <n> | source clear | save | cancel"
            .dimmed()
    )
}

pub fn summary_config(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Summary Configuration".bold())?;
    writeln!(
        out,
        "  Summary settings apply to every enabled channel. Type 'summary close' when done."
    )
}

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Commands:".bold())?;
    for (cmd, desc) in [
        ("list", "Show the dashboard"),
        ("toggle <id>", "Enable or disable monitoring"),
        ("edit <id>", "Open the profile dialog for a channel"),
        ("audience <text>", "Set the audience (profile dialog)"),
        ("source add <name>", "Append a data source (profile dialog)"),
        ("source remove <n>", "Remove data source number n (profile dialog)"),
        ("source clear", "Remove all data sources (profile dialog)"),
        ("save", "Save the profile"),
        ("cancel", "Close the profile dialog without saving"),
        ("add mail|chat <name>", "Add a channel"),
        ("summary open|close", "Summary configuration"),
        ("quit", "Leave the dashboard"),
    ] {
        writeln!(out, "  {:<22} {}", cmd.cyan(), desc)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nosy_core::ChannelProfile;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn channel_row_shows_state_and_badges() {
        let channel = Channel::mail("2", "sales@company.com")
            .with_profile(ChannelProfile::new("Sales Team", ["CRM Data"]));
        let text = render(|out| channel_row(out, &channel));
        assert!(text.contains("[on]"));
        assert!(text.contains("sales@company.com"));
        assert!(text.contains("[Outlook]"));
        assert!(text.contains("Profile Configured"));

        let text = render(|out| channel_row(out, &Channel::chat("3", "Eng").disabled()));
        assert!(text.contains("[off]"));
        assert!(text.contains("[Slack]"));
        assert!(text.contains("No Profile"));
    }

    #[test]
    fn profile_dialog_lists_numbered_sources() {
        let draft = ProfileDraft {
            channel_id: Some("1".into()),
            channel_name: "Customer Support".to_string(),
            audience: String::new(),
            data_sources: vec!["Support Tickets".to_string(), "Usage Analytics".to_string()],
        };
        let text = render(|out| profile_dialog(out, &draft));
        assert!(text.contains("Channel Profile: Customer Support"));
        assert!(text.contains("(not set)"));
        assert!(text.contains("1. Support Tickets"));
        assert!(text.contains("2. Usage Analytics"));
    }
}
