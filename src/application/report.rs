//! Report Use Case
//!
//! 汇总 Catalog 中的全部关系查询结果，可序列化为 JSON

use serde::Serialize;

use crate::domain::{ArticleId, Author, AuthorId, Catalog, Magazine, MagazineId};

/// 作者摘要
#[derive(Debug, Clone, Serialize)]
pub struct AuthorSummary {
    pub id: AuthorId,
    pub name: Option<String>,
    pub articles: Vec<ArticleId>,
    pub magazines: Vec<String>,
    pub topic_areas: Option<Vec<Option<String>>>,
}

/// 杂志摘要
#[derive(Debug, Clone, Serialize)]
pub struct MagazineSummary {
    pub id: MagazineId,
    pub name: Option<String>,
    pub category: Option<String>,
    pub contributors: Vec<String>,
    pub article_titles: Option<Vec<Option<String>>>,
    pub contributing_authors: Option<Vec<String>>,
}

/// Catalog 关系报告
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub authors: Vec<AuthorSummary>,
    pub magazines: Vec<MagazineSummary>,
    pub top_publisher: Option<MagazineId>,
}

impl CatalogReport {
    pub fn build(catalog: &Catalog) -> Self {
        let authors = catalog
            .authors()
            .iter()
            .map(|author| AuthorSummary {
                id: author.id(),
                name: owned(author.name()),
                articles: catalog
                    .author_articles(author.id())
                    .iter()
                    .map(|a| a.id())
                    .collect(),
                magazines: catalog
                    .author_magazines(author.id())
                    .into_iter()
                    .map(magazine_label)
                    .collect(),
                topic_areas: catalog
                    .author_topic_areas(author.id())
                    .map(|areas| areas.into_iter().map(owned).collect()),
            })
            .collect();

        let magazines = catalog
            .magazines()
            .iter()
            .map(|magazine| MagazineSummary {
                id: magazine.id(),
                name: owned(magazine.name()),
                category: owned(magazine.category()),
                contributors: catalog
                    .magazine_contributors(magazine.id())
                    .into_iter()
                    .map(author_label)
                    .collect(),
                article_titles: catalog
                    .magazine_article_titles(magazine.id())
                    .map(|titles| titles.into_iter().map(owned).collect()),
                contributing_authors: catalog
                    .magazine_contributing_authors(magazine.id())
                    .map(|authors| authors.into_iter().map(author_label).collect()),
            })
            .collect();

        Self {
            authors,
            magazines,
            top_publisher: catalog.top_publisher().map(|m| m.id()),
        }
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

// 未设置名称的实体以标识代替
fn author_label(author: &Author) -> String {
    author
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| author.id().to_string())
}

fn magazine_label(magazine: &Magazine) -> String {
    magazine
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| magazine.id().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_mirrors_queries() {
        let mut catalog = Catalog::new();
        let carol = catalog.create_author("Carol");
        let idle = catalog.create_author("Idle");
        let vogue = catalog.create_magazine("Vogue", "Fashion");
        catalog.create_magazine("Empty", "Misc");

        catalog.add_article(carol, vogue, "Fashion Forward");
        catalog.add_article(carol, vogue, "Spring Collections");
        catalog.add_article(carol, vogue, "Runway Report");

        let report = CatalogReport::build(&catalog);
        assert_eq!(report.top_publisher, Some(vogue));

        let carol_summary = report.authors.iter().find(|a| a.id == carol).unwrap();
        assert_eq!(carol_summary.articles.len(), 3);
        assert_eq!(carol_summary.magazines, vec!["Vogue".to_string()]);
        assert_eq!(
            carol_summary.topic_areas,
            Some(vec![Some("Fashion".to_string())])
        );

        let idle_summary = report.authors.iter().find(|a| a.id == idle).unwrap();
        assert!(idle_summary.magazines.is_empty());
        assert_eq!(idle_summary.topic_areas, None);

        let vogue_summary = &report.magazines[0];
        assert_eq!(vogue_summary.contributors, vec!["Carol".to_string()]);
        assert_eq!(
            vogue_summary.contributing_authors,
            Some(vec!["Carol".to_string()])
        );
        assert_eq!(report.magazines[1].article_titles, None);
    }

    #[test]
    fn test_report_serializes_absent_results_as_null() {
        let mut catalog = Catalog::new();
        catalog.create_magazine("AB", "Tech");

        let json = serde_json::to_value(CatalogReport::build(&catalog)).unwrap();
        assert!(json["top_publisher"].is_null());
        assert!(json["magazines"][0]["article_titles"].is_null());
        assert!(json["magazines"][0]["contributors"]
            .as_array()
            .unwrap()
            .is_empty());
    }
}
