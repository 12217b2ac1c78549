//! 统一配置管理
//!
//! switchboard 的所有配置项、默认值与查找规则都在这里定义。
//! 配置文件使用 TOML 格式，缺省时整套配置均有可用的默认值。

pub mod observability;

pub use observability::{LogConfig, ObservabilityConfig};

use crate::error::{BaseError, ConfigError, Result};
use menu::{Choice, ChoiceSpec, Page, PageSpec};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 当前目录下的默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "switchboard.toml";

/// Discord REST API v9 的基础地址
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v9/";

/// switchboard 主配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// 账户文件路径
    ///
    /// JSON 数组，每个元素为 `{ name, id, token, aliases? }`。
    /// 文件不存在时在首次加载时创建。
    #[serde(
        default = "default_accounts_file",
        serialize_with = "serialize_pathbuf",
        deserialize_with = "deserialize_pathbuf"
    )]
    pub accounts_file: PathBuf,

    /// Discord API 基础地址，请求路径拼接在其后
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// HTTP 请求超时（秒）
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// 菜单提示文本
    #[serde(default)]
    pub prompt: PromptConfig,

    /// 可观测性配置
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// 用户自定义页面，键为页面 id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pages: BTreeMap<String, PageSpec>,

    /// 追加到主菜单的条目
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menu: Vec<ChoiceSpec>,
}

/// 页面未声明 message / hint 时使用的默认值
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PromptConfig {
    #[serde(default = "default_prompt_message")]
    pub message: String,

    /// 设为空字符串可关闭提示
    #[serde(default = "default_prompt_hint")]
    pub hint: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            message: default_prompt_message(),
            hint: default_prompt_hint(),
        }
    }
}

impl PromptConfig {
    /// 非空时返回提示
    pub fn hint(&self) -> Option<&str> {
        let hint = self.hint.trim();
        (!hint.is_empty()).then_some(hint)
    }
}

fn default_accounts_file() -> PathBuf {
    PathBuf::from("accounts.json")
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_prompt_message() -> String {
    menu::DEFAULT_MESSAGE.to_string()
}

fn default_prompt_hint() -> String {
    "↑/↓ to move, Enter to select, Esc to go back".to_string()
}

fn serialize_pathbuf<S>(path: &Path, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    path.display().to_string().serialize(serializer)
}

fn deserialize_pathbuf<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            accounts_file: default_accounts_file(),
            api_base: default_api_base(),
            request_timeout_secs: default_request_timeout(),
            prompt: PromptConfig::default(),
            observability: ObservabilityConfig::default(),
            pages: BTreeMap::new(),
            menu: Vec::new(),
        }
    }
}

impl AppConfig {
    /// 从 TOML 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path_ref.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path_ref)?;
        Ok(Self::from_toml(&content)?)
    }

    /// 从 TOML 字符串加载配置
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 序列化为 TOML 字符串
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// 按优先级查找配置文件
    ///
    /// 显式路径必须存在；否则依次尝试当前目录的 `switchboard.toml`
    /// 与用户配置目录下的 `switchboard/config.toml`，都不存在时返回 `None`。
    pub fn locate(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Ok(Some(local));
        }

        let user = dirs::config_dir().map(|dir| dir.join("switchboard").join("config.toml"));
        Ok(user.filter(|path| path.is_file()))
    }

    /// 查找并加载配置，找不到文件时使用默认值
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        match Self::locate(explicit)? {
            Some(path) => {
                let config = Self::from_file(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    /// 验证配置，返回所有发现的问题
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.accounts_file.as_os_str().is_empty() {
            errors.push("accounts_file cannot be empty".to_string());
        }

        let api_base = self.api_base.trim();
        if api_base.is_empty() {
            errors.push("api_base cannot be empty".to_string());
        } else if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            errors.push(format!(
                "Invalid api_base '{}', must start with http:// or https://",
                self.api_base
            ));
        }

        if self.request_timeout_secs == 0 {
            errors.push("request_timeout_secs must be greater than 0".to_string());
        }

        if self.prompt.message.trim().is_empty() {
            errors.push("prompt.message cannot be empty".to_string());
        }

        errors.extend(self.observability.problems());

        for (id, spec) in &self.pages {
            if id.trim().is_empty() {
                errors.push("Page ids cannot be empty".to_string());
            }
            if let Err(e) = spec.to_page() {
                errors.push(format!("pages.{id}: {e}"));
            }
        }

        for (index, spec) in self.menu.iter().enumerate() {
            if let Err(e) = spec.to_choice() {
                errors.push(format!("menu[{index}]: {e}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// 验证失败时转换为 [`ConfigError::Validation`]
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| BaseError::Config(ConfigError::Validation { errors }))
    }

    /// 构建配置文件声明的所有页面
    pub fn build_pages(&self) -> std::result::Result<Vec<(String, Page)>, ConfigError> {
        self.pages
            .iter()
            .map(|(id, spec)| {
                spec.to_page()
                    .map(|page| (id.clone(), page))
                    .map_err(|source| ConfigError::InvalidPage {
                        page_id: id.clone(),
                        source,
                    })
            })
            .collect()
    }

    /// 构建追加到主菜单的条目
    pub fn menu_choices(&self) -> std::result::Result<Vec<Choice>, ConfigError> {
        self.menu
            .iter()
            .map(|spec| {
                spec.to_choice().map_err(|source| ConfigError::InvalidPage {
                    page_id: "main".to_string(),
                    source,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.accounts_file, PathBuf::from("accounts.json"));
        assert_eq!(config.api_base, "https://discord.com/api/v9/");
        assert_eq!(config.prompt.message, "Choose an option");
        assert!(config.prompt.hint().is_some());
        assert!(config.pages.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_toml(
            r#"
accounts_file = "/tmp/alts.json"
api_base = "http://127.0.0.1:9000/api/"

[prompt]
message = "Pick one"
hint = ""

[observability]
filter_level = "debug"

[observability.log]
output = "file"
path = "/tmp/switchboard-logs"
rotate = true
"#,
        )
        .unwrap();

        assert_eq!(config.accounts_file, PathBuf::from("/tmp/alts.json"));
        assert_eq!(config.api_base, "http://127.0.0.1:9000/api/");
        assert_eq!(config.prompt.message, "Pick one");
        assert_eq!(config.prompt.hint(), None);
        assert_eq!(config.observability.filter_level, "debug");
        assert!(!config.observability.is_console_logging());
        assert!(config.observability.log.rotate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_declarative_pages() {
        let config = AppConfig::from_toml(
            r#"
[[menu]]
label = "Links"
page = "links"

[pages.links]
title = "Links"
text = ["Useful places"]

[[pages.links.choices]]
label = "Status"
noop = true
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        let pages = config.build_pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].0, "links");
        assert_eq!(config.menu_choices().unwrap().len(), 1);
    }

    #[test]
    fn test_validation_collects_errors() {
        let mut config = AppConfig::from_toml(
            r#"
[[menu]]
label = "Nowhere"
"#,
        )
        .unwrap();
        config.api_base = "  ".to_string();
        config.accounts_file = PathBuf::new();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("api_base")));
        assert!(errors.iter().any(|e| e.contains("accounts_file")));
        assert!(errors.iter().any(|e| e.starts_with("menu[0]")));
        assert!(config.menu_choices().is_err());
        assert!(matches!(
            config.ensure_valid(),
            Err(BaseError::Config(ConfigError::Validation { .. }))
        ));
    }

    #[test]
    fn test_unknown_page_field_rejected() {
        let result = AppConfig::from_toml(
            r#"
[pages.broken]
colour = "red"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_serialization() {
        let config = AppConfig::default();
        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("accounts_file = \"accounts.json\""));

        let parsed = AppConfig::from_toml(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "accounts_file = \"mine.json\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.accounts_file, PathBuf::from("mine.json"));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = AppConfig::locate(Some(&missing)).unwrap_err();
        assert!(matches!(
            err,
            BaseError::Config(ConfigError::FileNotFound { .. })
        ));
        assert!(AppConfig::from_file(&missing).is_err());
    }

    #[test]
    fn test_discover_with_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "request_timeout_secs = 5").unwrap();

        let (config, path) = AppConfig::discover(Some(file.path())).unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(path.as_deref(), Some(file.path()));
    }
}
