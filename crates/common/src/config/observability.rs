//! 可观测性配置
//!
//! 日志过滤级别与输出目标

use serde::{Deserialize, Serialize};

/// 可观测性配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ObservabilityConfig {
    /// 过滤级别
    ///
    /// 支持 EnvFilter 语法（如 "info,reqwest=warn"）。默认值 "warn"，
    /// 避免日志打断交互式菜单。`RUST_LOG` 环境变量优先。
    #[serde(default = "default_filter_level")]
    pub filter_level: String,

    #[serde(default)]
    pub log: LogConfig,
}

/// 日志配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    /// 日志输出目标
    ///
    /// - "console": 输出到标准错误（默认）
    /// - "file": 输出到 `path` 目录下的文件
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 当 output = "file" 时有效：true 按天轮转，false 追加到单个文件
    #[serde(default)]
    pub rotate: bool,

    /// 日志文件目录
    #[serde(default = "default_log_path")]
    pub path: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter_level: default_filter_level(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output: default_log_output(),
            rotate: false,
            path: default_log_path(),
        }
    }
}

impl ObservabilityConfig {
    pub fn is_console_logging(&self) -> bool {
        self.log.output == "console"
    }

    /// 校验过滤级别与输出目标，返回所有问题
    pub fn problems(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let main_level = self.filter_level.split(',').next().unwrap_or("").trim();
        if !["trace", "debug", "info", "warn", "error", "off"].contains(&main_level) {
            errors.push(format!(
                "Invalid filter level '{}', must start with one of: trace, debug, info, warn, error, off",
                self.filter_level
            ));
        }

        if !["console", "file"].contains(&self.log.output.as_str()) {
            errors.push(format!(
                "Invalid log output '{}' (observability.log.output), must be 'console' or 'file'",
                self.log.output
            ));
        }

        if self.log.output == "file" && self.log.path.trim().is_empty() {
            errors.push("observability.log.path cannot be empty when logging to a file".to_string());
        }

        errors
    }
}

fn default_log_output() -> String {
    "console".to_string()
}

fn default_log_path() -> String {
    "logs/".to_string()
}

fn default_filter_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ObservabilityConfig::default();
        assert!(config.is_console_logging());
        assert!(config.problems().is_empty());
    }

    #[test]
    fn test_directive_syntax_accepted() {
        let config = ObservabilityConfig {
            filter_level: "debug,reqwest=warn".to_string(),
            ..Default::default()
        };
        assert!(config.problems().is_empty());
    }

    #[test]
    fn test_bad_values_reported() {
        let config = ObservabilityConfig {
            filter_level: "loud".to_string(),
            log: LogConfig {
                output: "syslog".to_string(),
                ..Default::default()
            },
        };
        assert_eq!(config.problems().len(), 2);
    }
}
