//! Catalog - Errors

use thiserror::Error;

use super::{ArticleId, AuthorId, MagazineId};

/// 赋值被拒绝
///
/// 所有 setter 共用这一种失败：返回 `Err` 时实体状态保持不变，
/// 调用方可以忽略该结果（静默策略），也可以据此判断赋值是否生效。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} 已设置，不可修改")]
    AlreadySet { field: &'static str },

    #[error("{field} 不能为空")]
    Empty { field: &'static str },

    #[error("{field} 长度 {len} 不在 [{min}, {max}] 范围内")]
    LengthOutOfRange {
        field: &'static str,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("作者未登记: {0}")]
    UnknownAuthor(AuthorId),

    #[error("杂志未登记: {0}")]
    UnknownMagazine(MagazineId),

    #[error("文章未登记: {0}")]
    UnknownArticle(ArticleId),
}
