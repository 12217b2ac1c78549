//! 交互式菜单的页面集合
//!
//! 所有内置页面在这里注册到导航器；配置文件中声明的页面与之并列，
//! 但不能占用内置页面的 id。

mod about;
mod account;
mod accounts;
mod add_account;
mod aliases;
mod main_menu;
mod profile;
mod remove_account;

use crate::error::Result;
use crate::store::SharedStore;
use anyhow::anyhow;
use menu::{ChoiceRenderer, NavError, Navigator, Params, Screen};
use serde_json::Value;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use switchboard_common::AppConfig;
use tracing::debug;

pub const MAIN: &str = "main";
pub const ACCOUNTS: &str = "accounts";
pub const ADD_ACCOUNT: &str = "add-account";
pub const EDIT_ALIASES: &str = "edit-aliases";
pub const REMOVE_ACCOUNT: &str = "remove-account";
pub const PROFILE: &str = "profile";
pub const EXIT: &str = "exit";

/// Ids configuration files may not register
pub const BUILTIN_PAGES: [&str; 7] = [
    MAIN,
    ACCOUNTS,
    ADD_ACCOUNT,
    EDIT_ALIASES,
    REMOVE_ACCOUNT,
    PROFILE,
    EXIT,
];

/// Everything pages need, shared by their closures
pub struct AppContext {
    pub config: AppConfig,
    pub config_path: Option<PathBuf>,
    pub store: SharedStore,
    /// Runs HTTP calls to completion inside synchronous hooks
    pub runtime: tokio::runtime::Handle,
}

pub type Ctx = Rc<AppContext>;

impl AppContext {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.request_timeout_secs)
    }
}

/// Build a navigator with every built-in and configured page registered
pub fn build_navigator(
    ctx: Ctx,
    renderer: impl ChoiceRenderer + 'static,
    screen: impl Screen + 'static,
) -> Result<Navigator> {
    let mut nav = Navigator::new(renderer, screen)
        .with_initial_page(MAIN)
        .with_default_message(ctx.config.prompt.message.clone());
    if let Some(hint) = ctx.config.prompt.hint() {
        nav = nav.with_default_hint(hint);
    }

    for (id, page) in ctx.config.build_pages()? {
        if BUILTIN_PAGES.contains(&id.as_str()) {
            return Err(NavError::configuration(format!(
                "page id '{id}' is reserved for a built-in page"
            ))
            .into());
        }
        debug!(page = %id, "registering configured page");
        nav.register(id, page);
    }

    nav.register(MAIN, main_menu::page(&ctx)?);
    nav.register(ACCOUNTS, accounts::page(ctx.clone()));
    nav.register(ADD_ACCOUNT, add_account::page(ctx.clone()));
    nav.register(EDIT_ALIASES, aliases::page(ctx.clone()));
    nav.register(REMOVE_ACCOUNT, remove_account::page(ctx.clone()));
    nav.register(PROFILE, profile::page(ctx));
    nav.register(EXIT, main_menu::exit_page());

    Ok(nav)
}

/// Parameters addressing one account
pub fn account_params(id: &str) -> Params {
    let mut params = Params::new();
    params.insert("id".to_string(), Value::String(id.to_string()));
    params
}

/// Account id carried in a page's parameters
pub fn account_id(params: &Params) -> anyhow::Result<&str> {
    params
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("no account id given"))
}
