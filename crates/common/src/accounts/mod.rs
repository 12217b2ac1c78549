//! 账户管理模块
//!
//! 账户数据模型、JSON 文件存储与令牌脱敏

mod account;
mod store;
mod token;

pub use account::Account;
pub use store::AccountStore;
pub use token::sanitize_token;
