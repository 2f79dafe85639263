use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::tui::View;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "lifeos",
    version,
    about = "Terminal front end for the LifeOS task tracker.",
    after_help = "Examples:\n  lifeos                      Launch the TUI on the Dashboard\n  lifeos tui --view tasks\n  lifeos add Renew passport\n  lifeos --api-base http://10.0.0.5:8000 list"
)]
pub struct Cli {
    /// Base URL of the LifeOS backend (defaults to LIFEOS_API_BASE or http://127.0.0.1:8000)
    #[arg(long = "api-base", value_name = "URL", global = true)]
    pub api_base: Option<String>,

    /// Override the data directory used for the log file
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Override the tracing filter (e.g. "info", "debug", or full directives)
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Launch the terminal UI (default command)
    Tui(TuiArgs),
    /// Print every task reported by the backend
    List,
    /// Create a task, then print the refreshed list
    Add(AddArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct TuiArgs {
    /// Panel to show first
    #[arg(long, value_enum, default_value_t = View::Dashboard)]
    pub view: View,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Task title; multiple words are joined with spaces
    #[arg(value_name = "TITLE", required = true)]
    pub title: Vec<String>,
}

impl AddArgs {
    pub fn title(&self) -> String {
        self.title.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["lifeos"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(cli.api_base.is_none());
    }

    #[test]
    fn tui_view_defaults_to_dashboard() {
        let cli = Cli::try_parse_from(["lifeos", "tui"]).expect("parse");
        match cli.command {
            Some(CliCommand::Tui(args)) => assert_eq!(args.view, View::Dashboard),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn add_joins_words_and_accepts_global_flags_anywhere() {
        let cli = Cli::try_parse_from([
            "lifeos",
            "add",
            "Renew",
            "passport",
            "--api-base",
            "http://10.0.0.5:8000",
        ])
        .expect("parse");

        assert_eq!(cli.api_base.as_deref(), Some("http://10.0.0.5:8000"));
        match cli.command {
            Some(CliCommand::Add(args)) => assert_eq!(args.title(), "Renew passport"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn add_requires_a_title() {
        assert!(Cli::try_parse_from(["lifeos", "add"]).is_err());
    }
}
