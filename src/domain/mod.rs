//! Domain Layer - 领域层
//!
//! Catalog Context: 作者、杂志与文章的多对多关系模型
//! - Article 是连接实体，持有一个 Author 与一个 Magazine 的引用
//! - 关系查询全部通过扫描 Catalog 中的文章推导

mod article;
mod author;
mod catalog;
mod errors;
mod magazine;
mod queries;
mod value_objects;

pub use article::Article;
pub use author::Author;
pub use catalog::Catalog;
pub use errors::ValidationError;
pub use magazine::Magazine;
pub use queries::FREQUENT_CONTRIBUTOR_THRESHOLD;
pub use value_objects::{
    ArticleId, AuthorId, MagazineId, ARTICLE_TITLE_MAX_LEN, ARTICLE_TITLE_MIN_LEN,
    MAGAZINE_NAME_MAX_LEN, MAGAZINE_NAME_MIN_LEN,
};
