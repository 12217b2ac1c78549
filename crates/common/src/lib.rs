//! switchboard 基础设施库
//!
//! 为菜单程序提供错误类型、配置加载与账户存储等通用组件

pub mod accounts;
pub mod config;
pub mod error;

pub use accounts::{Account, AccountStore, sanitize_token};
pub use config::{AppConfig, LogConfig, ObservabilityConfig, PromptConfig};
pub use error::{BaseError, ConfigError, Result, SerializationError, ValidationError};
