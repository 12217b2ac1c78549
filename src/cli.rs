//! 命令行界面定义
//!
//! 定义了主程序的命令行参数和选项
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "switchboard")]
#[command(version)]
#[command(about = "Interactive terminal menu for managing a set of Discord accounts")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Configuration file path (defaults to searching standard locations)
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Log at debug level regardless of the configured filter
    #[arg(short, long, global = true)]
    pub(crate) debug: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Open the interactive menu (default)
    Menu,
    /// Print the stored accounts with redacted tokens
    List,
    /// Validate the configuration file and exit
    CheckConfig,
}

impl Cli {
    pub(crate) fn effective_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Menu)
    }
}
