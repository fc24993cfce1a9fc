//! Catalog - Article Entity
//!
//! Article 是 Author 与 Magazine 之间的连接实体。

use super::value_objects::{require_len_between, ARTICLE_TITLE_MAX_LEN, ARTICLE_TITLE_MIN_LEN};
use super::{ArticleId, AuthorId, MagazineId, ValidationError};

/// 文章
///
/// 不变量:
/// - title 一旦设置成功便不再改变（之后的赋值无论是否有效都被忽略）
/// - author / magazine 只接受已登记的引用，有效引用可以被再次替换
#[derive(Debug, Clone)]
pub struct Article {
    id: ArticleId,
    author: Option<AuthorId>,
    magazine: Option<MagazineId>,
    title: Option<String>,
}

impl Article {
    /// 创建空文章，引用与标题由 Catalog 按 author -> magazine -> title 顺序赋值
    pub(crate) fn empty() -> Self {
        Self {
            id: ArticleId::new(),
            author: None,
            magazine: None,
            title: None,
        }
    }

    /// 设置标题（只允许成功设置一次，长度须在 5..=50 之间）
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        if self.title.is_some() {
            tracing::debug!(article_id = %self.id, "Article title already set, ignoring");
            return Err(ValidationError::AlreadySet { field: "title" });
        }

        let title = title.into();
        if let Err(e) =
            require_len_between("title", &title, ARTICLE_TITLE_MIN_LEN, ARTICLE_TITLE_MAX_LEN)
        {
            tracing::debug!(article_id = %self.id, error = %e, "Article title rejected");
            return Err(e);
        }

        self.title = Some(title);
        Ok(())
    }

    // 引用的合法性由 Catalog 校验
    pub(crate) fn assign_author(&mut self, author: AuthorId) {
        self.author = Some(author);
    }

    pub(crate) fn assign_magazine(&mut self, magazine: MagazineId) {
        self.magazine = Some(magazine);
    }

    // Getters
    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> Option<AuthorId> {
        self.author
    }

    pub fn magazine(&self) -> Option<MagazineId> {
        self.magazine
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_set_once() {
        let mut article = Article::empty();
        assert!(article.set_title("Fashion Forward").is_ok());

        assert_eq!(
            article.set_title("Another Title"),
            Err(ValidationError::AlreadySet { field: "title" })
        );
        assert_eq!(
            article.set_title("Hi"),
            Err(ValidationError::AlreadySet { field: "title" })
        );
        assert_eq!(article.title(), Some("Fashion Forward"));
    }

    #[test]
    fn test_title_length_bounds() {
        let mut article = Article::empty();
        assert!(article.set_title("Hi").is_err());
        assert!(article.set_title("x".repeat(51)).is_err());
        assert_eq!(article.title(), None);

        assert!(article.set_title("x".repeat(50)).is_ok());

        let mut article = Article::empty();
        assert!(article.set_title("Short").is_ok());
        assert_eq!(article.title(), Some("Short"));
    }

    #[test]
    fn test_multibyte_title_boundary() {
        // 50 个汉字 = 150 字节，按字符计仍在范围内
        let mut article = Article::empty();
        assert!(article.set_title("文".repeat(50)).is_ok());
        assert_eq!(article.title().map(|t| t.chars().count()), Some(50));

        let mut article = Article::empty();
        assert_eq!(
            article.set_title("文".repeat(51)),
            Err(ValidationError::LengthOutOfRange {
                field: "title",
                len: 51,
                min: ARTICLE_TITLE_MIN_LEN,
                max: ARTICLE_TITLE_MAX_LEN,
            })
        );
        assert_eq!(article.title(), None);
    }
}
