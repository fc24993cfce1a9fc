//! 应用层 - 用例编排
//!
//! 包含：
//! - seed: 由初始数据构建 Catalog
//! - report: 汇总关系查询结果

pub mod report;
pub mod seed;

pub use report::{AuthorSummary, CatalogReport, MagazineSummary};
pub use seed::{build_catalog, SeedError};
