//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,

    /// 初始数据
    #[serde(default)]
    pub seed: SeedConfig,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别（RUST_LOG 优先）
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 初始数据配置
///
/// 文章通过名称引用作者与杂志，名称须在 `authors` / `magazines` 中出现。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub authors: Vec<String>,

    #[serde(default)]
    pub magazines: Vec<MagazineSeed>,

    #[serde(default)]
    pub articles: Vec<ArticleSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MagazineSeed {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSeed {
    /// 作者名
    pub author: String,
    /// 杂志名
    pub magazine: String,
    pub title: String,
}
