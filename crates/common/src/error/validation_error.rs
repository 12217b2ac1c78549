//! 验证相关错误类型
//!
//! 定义所有与账户数据校验相关的错误

use thiserror::Error;

/// 验证相关错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    Required { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Duplicate {field}: {value}")]
    Duplicate { field: String, value: String },

    #[error("No account at index {index}")]
    NotFound { index: usize },
}
