//! Masthead - 作者 / 杂志 / 文章多对多关系模型
//!
//! 领域层 (domain/):
//! - Catalog Context: Author、Magazine、Article 实体与关系查询
//!
//! 应用层 (application/):
//! - Seed: 由初始数据构建 Catalog
//! - Report: 关系报告
//!
//! 配置 (config/): 默认值 < 配置文件 < 环境变量

pub mod application;
pub mod config;
pub mod domain;

pub use config::{load_config, AppConfig};
pub use domain::{Article, Author, Catalog, Magazine, ValidationError};
