//! 统一错误处理模型
//!
//! 提供主程序 switchboard 的顶层错误类型，聚合所有子模块和依赖 crate 的错误

use thiserror::Error;

/// 主程序的统一错误枚举
#[derive(Debug, Error)]
pub enum Error {
    // ========== 基础库错误 ==========
    /// 配置、账户存储等基础库错误
    #[error("{0}")]
    Base(Box<switchboard_common::BaseError>),

    // ========== 菜单与接口错误 ==========
    /// 菜单导航错误（只有配置类错误会传播到这里）
    #[error("Menu error: {0}")]
    Menu(#[from] menu::NavError),

    /// Discord API 客户端错误
    #[error("Discord client error: {0}")]
    Client(#[from] discord_client::ClientError),

    // ========== 系统级错误 ==========
    /// I/O 操作错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ========== 通用错误 ==========
    /// Anyhow 错误兼容层
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),

    /// 自定义错误消息
    #[error("Application error: {message}")]
    Custom { message: String },
}

impl From<switchboard_common::BaseError> for Error {
    fn from(err: switchboard_common::BaseError) -> Self {
        Error::Base(Box::new(err))
    }
}

impl From<switchboard_common::ConfigError> for Error {
    fn from(err: switchboard_common::ConfigError) -> Self {
        switchboard_common::BaseError::from(err).into()
    }
}

/// 统一的 Result 类型
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// 创建自定义错误
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}
