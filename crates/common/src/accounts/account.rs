//! 账户数据模型

use super::token::sanitize_token;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// 一个 Discord 账户
///
/// 序列化格式与账户文件一致：没有别名时省略 `aliases` 字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub id: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

impl Account {
    pub fn new(name: impl Into<String>, id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            token: token.into(),
            aliases: None,
        }
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// 脱敏后的令牌，用于展示与日志
    pub fn redacted_token(&self) -> String {
        sanitize_token(&self.token)
    }

    /// 名称或任一别名匹配（不区分大小写）
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.eq_ignore_ascii_case(query)
            || self.id == query
            || self
                .aliases
                .iter()
                .flatten()
                .any(|alias| alias.eq_ignore_ascii_case(query))
    }

    /// 校验必填字段与 id 格式
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("name", &self.name), ("id", &self.id), ("token", &self.token)] {
            if value.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: field.to_string(),
                });
            }
        }

        if !self.id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "id".to_string(),
            });
        }

        if self.token.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidFormat {
                field: "token".to_string(),
            });
        }

        Ok(())
    }
}
