//! switchboard 主程序
//!
//! 在终端中以多级菜单的形式管理一组 Discord 账户

mod app;
mod cli;
mod error;
mod observability;
mod store;

use app::AppContext;
use clap::Parser;
use menu::{DialoguerRenderer, TerminalScreen};
use observability::init_observability;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use store::{SharedStore, StoreGuard};
use switchboard_common::{AccountStore, AppConfig};
use tracing::{error, info};

use cli::{Cli, Commands};
use error::{Error, Result};

/// Exit status after Ctrl+C outside a prompt
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Application launcher utilities
struct ApplicationLauncher;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_path) = AppConfig::discover(cli.config.as_deref())?;
    let _observability = init_observability(&config.observability, cli.debug)?;
    if let Some(path) = &config_path {
        info!("Using config file: {}", path.display());
    }

    match cli.effective_command() {
        Commands::CheckConfig => ApplicationLauncher::check_config(&config, config_path.as_deref()),
        Commands::List => ApplicationLauncher::list_accounts(&config),
        Commands::Menu => ApplicationLauncher::run_menu(config, config_path),
    }
}

impl ApplicationLauncher {
    /// 校验配置文件并打印结果
    fn check_config(config: &AppConfig, config_path: Option<&Path>) -> Result<()> {
        match config_path {
            Some(path) => println!("✅ Parsed config file: {}", path.display()),
            None => println!("No config file found, checking built-in defaults"),
        }

        match config.validate() {
            Ok(()) => {
                println!("✅ Configuration is valid");
                Ok(())
            }
            Err(errors) => {
                eprintln!("❌ Configuration problems:");
                for (i, err) in errors.iter().enumerate() {
                    eprintln!("  {}. {}", i + 1, err);
                }
                Err(Error::custom("configuration validation failed"))
            }
        }
    }

    /// 打印账户列表（令牌脱敏）
    fn list_accounts(config: &AppConfig) -> Result<()> {
        let store = AccountStore::load(&config.accounts_file)?;

        if store.is_empty() {
            println!("No accounts stored in {}", store.path().display());
            return Ok(());
        }

        for (i, account) in store.accounts().iter().enumerate() {
            println!(
                "{:>3}. {} ({})  {}",
                i + 1,
                account.name,
                account.id,
                account.redacted_token()
            );
            if let Some(aliases) = account.aliases.as_ref().filter(|a| !a.is_empty()) {
                println!("     aliases: {}", aliases.join(", "));
            }
        }
        Ok(())
    }

    /// 运行交互式菜单的主入口
    fn run_menu(config: AppConfig, config_path: Option<PathBuf>) -> Result<()> {
        config.ensure_valid()?;

        let store = SharedStore::new(AccountStore::load(&config.accounts_file)?);
        // flushes on every way out of this function, unwinding included
        let _guard = StoreGuard::new(store.clone());

        let handler_store = store.clone();
        ctrlc::set_handler(move || {
            handler_store.flush_quietly();
            std::process::exit(INTERRUPTED_EXIT_CODE);
        })
        .map_err(|e| Error::custom(format!("Failed to install Ctrl+C handler: {e}")))?;

        // Create Tokio runtime for the HTTP calls made by pages
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let ctx = Rc::new(AppContext {
            config,
            config_path,
            store,
            runtime: runtime.handle().clone(),
        });

        let screen = TerminalScreen::new().with_tool_title("Switchboard");
        let mut nav = app::build_navigator(ctx, DialoguerRenderer::new(), screen)?;

        if let Err(e) = nav.run() {
            error!("Menu stopped: {}", e);
            return Err(e.into());
        }

        info!("Session ended");
        Ok(())
    }
}
