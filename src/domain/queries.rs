//! Catalog - Relationship Queries
//!
//! 所有关系都通过扫描文章登记簿推导，Author 与 Magazine 不保存反向引用。
//! 去重按实体身份（标识）进行，结果保持首次出现的顺序。
//!
//! 空结果的约定并不统一，各查询按各自的约定返回:
//! - `author_magazines` / `magazine_contributors` 没有结果时返回空集合
//! - `author_topic_areas` / `magazine_article_titles` / `magazine_contributing_authors`
//!   没有结果时返回 `None`

use std::collections::{HashMap, HashSet};

use super::{Article, Author, AuthorId, Catalog, Magazine, MagazineId};

/// 在某本杂志发表超过该篇数的作者才算常驻作者
pub const FREQUENT_CONTRIBUTOR_THRESHOLD: usize = 2;

impl Catalog {
    /// 作者的全部文章，按登记顺序
    pub fn author_articles(&self, author: AuthorId) -> Vec<&Article> {
        self.articles()
            .iter()
            .filter(|a| a.author() == Some(author))
            .collect()
    }

    /// 作者发表过文章的杂志（去重），没有文章时返回空集合
    pub fn author_magazines(&self, author: AuthorId) -> Vec<&Magazine> {
        let ids = distinct(
            self.author_articles(author)
                .into_iter()
                .filter_map(|a| a.magazine()),
        );
        ids.into_iter().filter_map(|id| self.magazine(id)).collect()
    }

    /// 作者涉及的杂志类别（去重，未设置的类别记为 `None`）；
    /// 没有杂志时返回 `None`，否则结果至少有一项
    pub fn author_topic_areas(&self, author: AuthorId) -> Option<Vec<Option<&str>>> {
        let magazines = self.author_magazines(author);
        if magazines.is_empty() {
            return None;
        }
        Some(distinct(magazines.into_iter().map(|m| m.category())))
    }

    /// 杂志的全部文章，按登记顺序
    pub fn magazine_articles(&self, magazine: MagazineId) -> Vec<&Article> {
        self.articles()
            .iter()
            .filter(|a| a.magazine() == Some(magazine))
            .collect()
    }

    /// 为杂志撰稿的作者（去重）
    pub fn magazine_contributors(&self, magazine: MagazineId) -> Vec<&Author> {
        let ids = distinct(
            self.magazine_articles(magazine)
                .into_iter()
                .filter_map(|a| a.author()),
        );
        ids.into_iter().filter_map(|id| self.author(id)).collect()
    }

    /// 杂志所有文章的标题，每篇文章一项（未设置的标题为 `None`）；
    /// 杂志没有文章时返回 `None`
    pub fn magazine_article_titles(&self, magazine: MagazineId) -> Option<Vec<Option<&str>>> {
        let titles: Vec<_> = self
            .magazine_articles(magazine)
            .into_iter()
            .map(|a| a.title())
            .collect();
        if titles.is_empty() {
            None
        } else {
            Some(titles)
        }
    }

    /// 在该杂志发表超过 2 篇文章的作者；没有时返回 `None`
    pub fn magazine_contributing_authors(&self, magazine: MagazineId) -> Option<Vec<&Author>> {
        let articles = self.magazine_articles(magazine);

        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for author in articles.iter().filter_map(|a| a.author()) {
            *counts.entry(author).or_insert(0) += 1;
        }

        let frequent: Vec<_> = distinct(articles.iter().filter_map(|a| a.author()))
            .into_iter()
            .filter(|id| counts.get(id).copied().unwrap_or(0) > FREQUENT_CONTRIBUTOR_THRESHOLD)
            .filter_map(|id| self.author(id))
            .collect();

        if frequent.is_empty() {
            None
        } else {
            Some(frequent)
        }
    }

    /// 文章数最多的杂志
    ///
    /// 文章登记簿为空或没有杂志时返回 `None`。
    /// 并列时取登记顺序中最先出现的杂志。
    pub fn top_publisher(&self) -> Option<&Magazine> {
        if self.articles().is_empty() {
            return None;
        }

        let mut best: Option<(&Magazine, usize)> = None;
        for magazine in self.magazines() {
            let count = self.magazine_articles(magazine.id()).len();
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((magazine, count));
            }
        }
        best.map(|(magazine, _)| magazine)
    }
}

/// 按首次出现顺序去重
fn distinct<T, I>(items: I) -> Vec<T>
where
    T: Copy + Eq + std::hash::Hash,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}
