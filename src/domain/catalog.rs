//! Catalog - Registry
//!
//! 持有全部作者、杂志与文章，三者都按构造顺序追加，永不删除。
//! 每个 Catalog 相互独立，测试之间不会共享状态。

use super::{Article, ArticleId, Author, AuthorId, Magazine, MagazineId, ValidationError};

/// 实体登记簿
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记新作者，name 无效时作者仍被创建，只是 name 未设置
    pub fn create_author(&mut self, name: impl Into<String>) -> AuthorId {
        let author = Author::new(name);
        let id = author.id();
        tracing::debug!(author_id = %id, name = ?author.name(), "Author registered");
        self.authors.push(author);
        id
    }

    /// 登记新杂志
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> MagazineId {
        let magazine = Magazine::new(name, category);
        let id = magazine.id();
        tracing::debug!(
            magazine_id = %id,
            name = ?magazine.name(),
            category = ?magazine.category(),
            "Magazine registered"
        );
        self.magazines.push(magazine);
        id
    }

    /// 创建并登记文章
    ///
    /// 依次赋值 author、magazine、title；任一赋值被拒绝都不影响构造，
    /// 文章总会被追加到登记簿中。
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ArticleId {
        let mut article = Article::empty();
        let id = article.id();

        if self.contains_author(author) {
            article.assign_author(author);
        } else {
            tracing::debug!(article_id = %id, author_id = %author, "Unknown author ignored");
        }
        if self.contains_magazine(magazine) {
            article.assign_magazine(magazine);
        } else {
            tracing::debug!(article_id = %id, magazine_id = %magazine, "Unknown magazine ignored");
        }
        let _ = article.set_title(title);

        tracing::debug!(article_id = %id, title = ?article.title(), "Article registered");
        self.articles.push(article);
        id
    }

    /// 以作者身份发表文章，等价于 `create_article(author, magazine, title)`
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ArticleId {
        self.create_article(author, magazine, title)
    }

    /// 修改文章作者，只接受本登记簿中的作者
    pub fn set_article_author(
        &mut self,
        article: ArticleId,
        author: AuthorId,
    ) -> Result<(), ValidationError> {
        if !self.contains_author(author) {
            tracing::debug!(article_id = %article, author_id = %author, "Unknown author ignored");
            return Err(ValidationError::UnknownAuthor(author));
        }
        let article = self
            .article_mut(article)
            .ok_or(ValidationError::UnknownArticle(article))?;
        article.assign_author(author);
        Ok(())
    }

    /// 修改文章所属杂志，只接受本登记簿中的杂志
    pub fn set_article_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> Result<(), ValidationError> {
        if !self.contains_magazine(magazine) {
            tracing::debug!(article_id = %article, magazine_id = %magazine, "Unknown magazine ignored");
            return Err(ValidationError::UnknownMagazine(magazine));
        }
        let article = self
            .article_mut(article)
            .ok_or(ValidationError::UnknownArticle(article))?;
        article.assign_magazine(magazine);
        Ok(())
    }

    // Lookups
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|a| a.id() == id)
    }

    pub fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.authors.iter_mut().find(|a| a.id() == id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.iter().find(|m| m.id() == id)
    }

    pub fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.iter_mut().find(|m| m.id() == id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id() == id)
    }

    pub fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.iter_mut().find(|a| a.id() == id)
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn contains_author(&self, id: AuthorId) -> bool {
        self.authors.iter().any(|a| a.id() == id)
    }

    fn contains_magazine(&self, id: MagazineId) -> bool {
        self.magazines.iter().any(|m| m.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_registered_even_when_title_invalid() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Carol");
        let magazine = catalog.create_magazine("Vogue", "Fashion");

        let id = catalog.create_article(author, magazine, "Hi");

        assert_eq!(catalog.articles().len(), 1);
        let article = catalog.article(id).unwrap();
        assert_eq!(article.title(), None);
        assert_eq!(article.author(), Some(author));
        assert_eq!(article.magazine(), Some(magazine));
    }

    #[test]
    fn test_articles_keep_construction_order() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Carol");
        let magazine = catalog.create_magazine("Vogue", "Fashion");

        let ids: Vec<_> = ["First Piece", "Second Piece", "Third Piece"]
            .into_iter()
            .map(|t| catalog.add_article(author, magazine, t))
            .collect();

        let registered: Vec<_> = catalog.articles().iter().map(|a| a.id()).collect();
        assert_eq!(registered, ids);
    }

    #[test]
    fn test_foreign_references_are_ignored_at_construction() {
        let mut other = Catalog::new();
        let foreign_author = other.create_author("Stranger");
        let foreign_magazine = other.create_magazine("Elsewhere", "Misc");

        let mut catalog = Catalog::new();
        let id = catalog.create_article(foreign_author, foreign_magazine, "Lost Article");

        let article = catalog.article(id).unwrap();
        assert_eq!(article.author(), None);
        assert_eq!(article.magazine(), None);
        assert_eq!(article.title(), Some("Lost Article"));
        assert_eq!(catalog.articles().len(), 1);
    }

    #[test]
    fn test_reassign_author_and_magazine() {
        let mut catalog = Catalog::new();
        let carol = catalog.create_author("Carol");
        let dana = catalog.create_author("Dana");
        let vogue = catalog.create_magazine("Vogue", "Fashion");
        let wired = catalog.create_magazine("Wired", "Tech");
        let article = catalog.create_article(carol, vogue, "Fashion Forward");

        // 有效引用允许反复替换
        assert!(catalog.set_article_author(article, dana).is_ok());
        assert!(catalog.set_article_magazine(article, wired).is_ok());
        assert!(catalog.set_article_author(article, carol).is_ok());

        // 无效引用不会替换当前值
        let stranger = AuthorId::new();
        assert_eq!(
            catalog.set_article_author(article, stranger),
            Err(ValidationError::UnknownAuthor(stranger))
        );
        let nowhere = MagazineId::new();
        assert_eq!(
            catalog.set_article_magazine(article, nowhere),
            Err(ValidationError::UnknownMagazine(nowhere))
        );

        let article = catalog.article(article).unwrap();
        assert_eq!(article.author(), Some(carol));
        assert_eq!(article.magazine(), Some(wired));
    }

    #[test]
    fn test_set_reference_on_unknown_article() {
        let mut catalog = Catalog::new();
        let carol = catalog.create_author("Carol");
        let missing = ArticleId::new();

        assert_eq!(
            catalog.set_article_author(missing, carol),
            Err(ValidationError::UnknownArticle(missing))
        );
    }

    #[test]
    fn test_entity_mutation_through_catalog() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Carol");
        let magazine = catalog.create_magazine("Vogue", "Fashion");

        assert!(catalog.author_mut(author).unwrap().set_name("Alice").is_err());
        assert!(catalog.magazine_mut(magazine).unwrap().set_name("Vogue Paris").is_ok());

        assert_eq!(catalog.author(author).unwrap().name(), Some("Carol"));
        assert_eq!(catalog.magazine(magazine).unwrap().name(), Some("Vogue Paris"));
    }

    #[test]
    fn test_catalogs_are_isolated() {
        let mut first = Catalog::new();
        let author = first.create_author("Carol");
        let magazine = first.create_magazine("Vogue", "Fashion");
        first.create_article(author, magazine, "Fashion Forward");

        let second = Catalog::new();
        assert!(second.articles().is_empty());
        assert!(second.magazines().is_empty());
    }
}
