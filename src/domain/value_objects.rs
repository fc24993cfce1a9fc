//! Catalog - Value Objects

use serde::Serialize;
use uuid::Uuid;

use super::ValidationError;

/// 杂志名长度范围（闭区间）
pub const MAGAZINE_NAME_MIN_LEN: usize = 2;
pub const MAGAZINE_NAME_MAX_LEN: usize = 16;

/// 文章标题长度范围（闭区间）
pub const ARTICLE_TITLE_MIN_LEN: usize = 5;
pub const ARTICLE_TITLE_MAX_LEN: usize = 50;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// 作者唯一标识（身份比较即标识比较）
    AuthorId
);

entity_id!(
    /// 杂志唯一标识
    MagazineId
);

entity_id!(
    /// 文章唯一标识
    ArticleId
);

/// 校验非空字符串
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// 校验字符长度在 `[min, max]` 内
///
/// 长度按 Unicode 标量值计算，而不是字节数。
pub(crate) fn require_len_between(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::LengthOutOfRange {
            field,
            len,
            min,
            max,
        });
    }
    Ok(())
}
