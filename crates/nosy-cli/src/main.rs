use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use nosy_core::config::Config;
use nosy_core::Result;

mod args;
mod logging;
mod session;
mod view;

use args::{Cli, Commands, ConfigAction, KindArg, Shell};
use session::Session;

#[cfg(feature = "gui")]
mod gui;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = Config::path(cli.config.as_deref()).and_then(|path| {
        logging::init(cli.verbose, cli.quiet, &configured_level(&path));
        run(cli, &path)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Log level from the config file; an unreadable file is reported by the
/// command that actually needs it
fn configured_level(path: &Path) -> String {
    Config::load(path)
        .map(|config| config.log.level)
        .unwrap_or_else(|_| logging::DEFAULT_LEVEL.to_string())
}

fn run(cli: Cli, config_path: &Path) -> Result<()> {
    // Handle GUI flag
    #[cfg(feature = "gui")]
    if cli.gui {
        return gui::run(Config::load(config_path)?);
    }

    #[cfg(not(feature = "gui"))]
    if cli.gui {
        return Err(nosy_core::NosyError::Gui(
            "GUI not available. Build with: cargo install --path crates/nosy-cli --features gui"
                .to_string(),
        ));
    }

    match cli.command {
        None | Some(Commands::Dashboard) => handle_dashboard(config_path),
        Some(Commands::Channels {
            json,
            enabled,
            kind,
        }) => handle_channels(config_path, json, enabled, kind),
        Some(Commands::Config { action }) => {
            handle_config(action, config_path, &mut io::stdout())
        }
        Some(Commands::Completions { shell }) => {
            handle_completions(shell, &mut io::stdout());
            Ok(())
        }
    }
}

fn handle_completions(shell: Shell, out: &mut impl Write) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "nosy-worker", out);
}

fn handle_dashboard(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let registry = config.seed_registry()?;
    let mut session = Session::new(registry, config.dashboard.title);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    writeln!(stdout)?;

    tracing::debug!(
        active = session.dashboard().active_channel_count(),
        "dashboard closed"
    );
    Ok(())
}

fn handle_channels(
    config_path: &Path,
    json: bool,
    enabled_only: bool,
    kind: Option<KindArg>,
) -> Result<()> {
    let registry = Config::load(config_path)?.seed_registry()?;
    let mut channels: Vec<_> = match kind {
        Some(kind) => registry.list_by_kind(kind.into()),
        None => registry.list().iter().collect(),
    };
    if enabled_only {
        channels.retain(|channel| channel.enabled);
    }

    if json {
        let output = serde_json::to_string_pretty(&channels).map_err(io::Error::from)?;
        println!("{}", output);
        return Ok(());
    }

    let mut stdout = io::stdout();
    println!();
    for channel in channels {
        view::channel_row(&mut stdout, channel)?;
    }
    println!();
    view::status(&mut stdout, registry.enabled_count())?;
    Ok(())
}

fn handle_config(action: ConfigAction, path: &Path, out: &mut impl Write) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(path)?;
            writeln!(out, "{}", config.get(&key)?)?;
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(path)?;
            config.set(&key, &value)?;
            config.save(path)?;
            writeln!(out, "{} {} = {}", "Set:".green(), key, value)?;
        }
        ConfigAction::List => {
            let config = Config::load(path)?;
            writeln!(out)?;
            for (key, value) in config.list() {
                writeln!(out, "{} = {}", key.cyan(), value)?;
            }
            writeln!(out)?;
        }
        ConfigAction::Path => {
            writeln!(out, "{}", path.display())?;
        }
        ConfigAction::Init => {
            let path = Config::init(path)?;
            writeln!(out, "{} {}", "Initialized:".green(), path.display())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use nosy_core::NosyError;

    fn broken_config(temp: &TempDir) -> std::path::PathBuf {
        let path = temp.path().join("bad.toml");
        fs::write(&path, "[log\nlevel=").unwrap();
        path
    }

    fn config_output(action: ConfigAction, path: &Path) -> Result<String> {
        let mut out = Vec::new();
        handle_config(action, path, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn config_path_ignores_unparsable_file() {
        let temp = TempDir::new().unwrap();
        let path = broken_config(&temp);

        let output = config_output(ConfigAction::Path, &path).unwrap();
        assert_eq!(output.trim(), path.display().to_string());
    }

    #[test]
    fn config_init_keeps_unparsable_file() {
        let temp = TempDir::new().unwrap();
        let path = broken_config(&temp);

        config_output(ConfigAction::Init, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[log\nlevel=");
    }

    #[test]
    fn config_reads_report_unparsable_file() {
        let temp = TempDir::new().unwrap();
        let path = broken_config(&temp);

        let err = config_output(
            ConfigAction::Get {
                key: "log.level".to_string(),
            },
            &path,
        )
        .unwrap_err();
        assert!(matches!(err, NosyError::ConfigParse { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(config_output(ConfigAction::List, &path).is_err());
        assert!(handle_dashboard(&path).is_err());
    }

    #[test]
    fn completions_ignore_config() {
        let mut out = Vec::new();
        handle_completions(Shell::Bash, &mut out);
        assert!(String::from_utf8(out).unwrap().contains("nosy-worker"));
    }

    #[test]
    fn log_level_falls_back_on_unparsable_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(configured_level(&broken_config(&temp)), logging::DEFAULT_LEVEL);

        let path = temp.path().join("ok.toml");
        fs::write(&path, "[log]\nlevel = \"info\"\n").unwrap();
        assert_eq!(configured_level(&path), "info");
    }
}
