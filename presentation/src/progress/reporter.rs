//! Progress reporting for relay runs

use colored::Colorize;
use relay_application::RelayProgress;
use relay_domain::{ToolCall, ToolResult};

/// Prints each round of a relay run to stderr
pub struct ConsoleProgress;

impl ConsoleProgress {
    fn round_label(round: usize) -> String {
        if round == 0 {
            "initial".to_string()
        } else {
            format!("round {}", round)
        }
    }
}

impl RelayProgress for ConsoleProgress {
    fn on_model_reply(&self, round: usize, status: u16) {
        let status = if (200..300).contains(&status) {
            status.to_string().green()
        } else {
            status.to_string().red()
        };
        eprintln!("{} model replied ({}) {}", "·".dimmed(), Self::round_label(round), status);
    }

    fn on_tool_call(&self, round: usize, call: &ToolCall) {
        eprintln!(
            "{} {} {}",
            "→".cyan(),
            format!("tool call ({}):", Self::round_label(round)).bold(),
            call
        );
    }

    fn on_tool_result(&self, _round: usize, result: &ToolResult) {
        let marker = if result.is_success() {
            "v".green()
        } else {
            "x".red()
        };
        eprintln!("  {} status {}", marker, result.status);
    }

    fn on_provisioning(&self, model: &str) {
        eprintln!("{} pulling model {}", "!".yellow(), model.bold());
    }
}
