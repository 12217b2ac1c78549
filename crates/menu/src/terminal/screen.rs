//! Screen management

use super::components::{Component, Header};
use crate::renderer::Screen;
use colored::*;
use std::io::{self, Write};

/// [`Screen`] writing to the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalScreen {
    tool_title: Option<String>,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title drawn at the top of every view
    pub fn with_tool_title(mut self, title: impl Into<String>) -> Self {
        self.tool_title = Some(title.into());
        self
    }

    /// Clear the screen using the most appropriate method
    pub fn clear_terminal() {
        if std::env::var("NO_CLEAR_SCREEN").is_ok() || !console::Term::stdout().is_term() {
            // Just add some padding if clearing is disabled or output is piped
            println!("\n\n");
            return;
        }

        if Self::try_ansi_clear() {
            return;
        }

        if Self::try_command_clear() {
            return;
        }

        println!("\n\n");
    }

    /// Try to clear using ANSI escape codes
    fn try_ansi_clear() -> bool {
        match std::env::var("TERM") {
            Ok(term)
                if term.contains("xterm") || term.contains("screen") || term.contains("tmux") =>
            {
                print!("\x1B[2J\x1B[1;1H");
                let _ = io::stdout().flush();
                true
            }
            _ => false,
        }
    }

    /// Try to clear using system command
    fn try_command_clear() -> bool {
        #[cfg(unix)]
        {
            if let Ok(mut child) = std::process::Command::new("clear").spawn() {
                let _ = child.wait();
                return true;
            }
        }

        #[cfg(windows)]
        {
            if let Ok(mut child) = std::process::Command::new("cmd")
                .args(["/C", "cls"])
                .spawn()
            {
                let _ = child.wait();
                return true;
            }
        }

        false
    }
}

/// Breadcrumb trail as a single line
pub fn format_trail(trail: &[String]) -> String {
    trail.join(" › ")
}

impl Screen for TerminalScreen {
    fn clear(&mut self) {
        Self::clear_terminal();
        if let Some(title) = &self.tool_title {
            Header::new(title.as_str()).render();
        }
    }

    fn breadcrumbs(&mut self, trail: &[String]) {
        println!("{}", format_trail(trail).dimmed());
        println!();
    }

    fn error(&mut self, message: &str) {
        println!("{} {}", "✖".bright_red().bold(), message.bright_red());
        println!();
    }
}
