//! CLI - Command Line Interface for showdetail
//!
//! Every screen the TUI shows can be produced from the command line.
//! Output is JSON when `--json` is passed or stdout is not a terminal.
//!
//! # Examples
//!
//! ```bash
//! # Browse the bundled demo catalog
//! showdetail
//!
//! # List shows in a catalog
//! showdetail --catalog shows.json list
//!
//! # Print the details items for one show
//! showdetail items 1390 --json
//! ```

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Show not found
    NotFound = 3,
    /// Details list could not be built
    BuildFailed = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// showdetail - neon TUI for show details
///
/// Run without a subcommand to launch the interactive TUI.
#[derive(Parser, Debug)]
#[command(
    name = "showdetail",
    version,
    about = "Neon TUI for browsing show details and related shows",
    after_help = "EXAMPLES:\n\
                  showdetail                              Browse the demo catalog\n\
                  showdetail --catalog shows.json --show 1390\n\
                  showdetail list --json                  List shows\n\
                  showdetail items 1390                   Print details items"
)]
pub struct Cli {
    /// Show catalog JSON file (defaults to the bundled demo catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Log filter, e.g. "debug" or "showdetail=trace"
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Show to open in the TUI (trakt id)
    #[arg(long, short = 's')]
    pub show: Option<u64>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List shows in the catalog
    #[command(visible_alias = "ls")]
    List,

    /// Build and print the details items for a show
    #[command(visible_alias = "i")]
    Items(ItemsCmd),
}

#[derive(Args, Debug)]
pub struct ItemsCmd {
    /// Trakt id of the show
    pub trakt_id: u64,

    /// Leave out the related section even if the catalog has one
    #[arg(long)]
    pub no_related: bool,
}

// =============================================================================
// Response Types
// =============================================================================

/// Standard JSON envelope
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

#[derive(Debug, Serialize)]
pub struct JsonError {
    pub message: String,
    pub code: i32,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl JsonOutput<()> {
    pub fn error_msg(message: &str, code: ExitCode) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(JsonError {
                message: message.to_string(),
                code: code.into(),
            }),
        }
    }
}

/// One row of `list` output
#[derive(Debug, Serialize)]
pub struct ShowSummary {
    pub trakt_id: Option<u64>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub has_related: bool,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data wrapped in the JSON envelope
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let output = JsonOutput::success(data);
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    /// Print a plain line (human mode)
    pub fn line(&self, msg: impl std::fmt::Display) {
        println!("{}", msg);
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        log::error!("{}", msg);
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::NotFound), 3);
        assert_eq!(i32::from(ExitCode::BuildFailed), 4);
    }

    #[test]
    fn test_error_envelope() {
        let out = JsonOutput::<()>::error_msg("nope", ExitCode::NotFound);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], 3);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_no_subcommand_is_tui_mode() {
        let cli = Cli::try_parse_from(["showdetail"]).unwrap();
        assert!(!cli.is_cli_mode());
    }
}
