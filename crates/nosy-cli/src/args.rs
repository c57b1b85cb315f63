use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use nosy_core::ChannelKind;

#[derive(Parser)]
#[command(name = "nosy-worker")]
#[command(about = "Your intelligent operations assistant: monitor mail and chat channels")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (default: $NOSY_WORKER_CONFIG or ~/.nosy-worker/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Launch GUI (requires the gui feature)
    #[arg(long)]
    pub gui: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive channel dashboard (default)
    Dashboard,

    /// Print the channels the dashboard starts with
    Channels {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Only enabled channels
        #[arg(long)]
        enabled: bool,

        /// Only channels of this kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., log.level)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., dashboard.title)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}

/// One line typed into the interactive dashboard
#[derive(Parser, Debug)]
#[command(
    name = "dashboard",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub event: SessionEvent,
}

impl SessionLine {
    /// Parse a whitespace-separated input line
    pub fn parse_line(line: &str) -> Result<SessionEvent, clap::Error> {
        Self::try_parse_from(line.split_whitespace()).map(|parsed| parsed.event)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Show the dashboard
    #[command(alias = "ls")]
    List,

    /// Enable or disable monitoring of a channel
    Toggle {
        /// Channel id
        id: String,
    },

    /// Open the profile dialog for a channel
    Edit {
        /// Channel id
        id: String,
    },

    /// Set the audience in the open profile dialog
    Audience {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Edit data sources in the open profile dialog
    Source {
        #[command(subcommand)]
        action: SourceAction,
    },

    /// Save the open profile dialog
    Save,

    /// Close the open profile dialog without saving
    Cancel,

    /// Add a channel
    Add {
        /// Channel kind
        #[arg(value_enum)]
        kind: KindArg,

        /// Mailbox address or channel name
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Open or close the summary configuration dialog
    Summary {
        #[arg(value_enum)]
        state: DialogState,
    },

    /// Show available commands
    Help,

    /// Leave the dashboard
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SourceAction {
    /// Append a data source
    Add {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Remove a data source by its number in the list
    Remove { index: usize },

    /// Remove all data sources
    Clear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    #[value(alias = "outlook")]
    Mail,
    #[value(alias = "slack")]
    Chat,
}

impl From<KindArg> for ChannelKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Mail => ChannelKind::MailSource,
            KindArg::Chat => ChannelKind::ChatSource,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DialogState {
    Open,
    Close,
}
