//! Seed Use Case
//!
//! 根据声明式的初始数据构建 Catalog

use std::collections::HashMap;

use thiserror::Error;

use crate::config::SeedConfig;
use crate::domain::{AuthorId, Catalog, MagazineId};

/// 初始数据错误
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seed article '{title}' references unknown author '{author}'")]
    UnknownAuthor { title: String, author: String },

    #[error("Seed article '{title}' references unknown magazine '{magazine}'")]
    UnknownMagazine { title: String, magazine: String },
}

/// 按 authors -> magazines -> articles 的顺序构建 Catalog
///
/// 实体属性仍走正常的构造流程，无效值被静默忽略；
/// 只有无法解析的名称引用才会报错。同名条目以第一次出现的为准。
pub fn build_catalog(seed: &SeedConfig) -> Result<Catalog, SeedError> {
    let mut catalog = Catalog::new();

    let mut authors: HashMap<&str, AuthorId> = HashMap::new();
    for name in &seed.authors {
        let id = catalog.create_author(name.as_str());
        authors.entry(name.as_str()).or_insert(id);
    }

    let mut magazines: HashMap<&str, MagazineId> = HashMap::new();
    for magazine in &seed.magazines {
        let id = catalog.create_magazine(magazine.name.as_str(), magazine.category.as_str());
        magazines.entry(magazine.name.as_str()).or_insert(id);
    }

    for article in &seed.articles {
        let author = *authors
            .get(article.author.as_str())
            .ok_or_else(|| SeedError::UnknownAuthor {
                title: article.title.clone(),
                author: article.author.clone(),
            })?;
        let magazine = *magazines
            .get(article.magazine.as_str())
            .ok_or_else(|| SeedError::UnknownMagazine {
                title: article.title.clone(),
                magazine: article.magazine.clone(),
            })?;
        catalog.add_article(author, magazine, article.title.as_str());
    }

    tracing::info!(
        authors = catalog.authors().len(),
        magazines = catalog.magazines().len(),
        articles = catalog.articles().len(),
        "Catalog seeded"
    );

    Ok(catalog)
}
