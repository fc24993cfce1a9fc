//! Catalog - Author Entity

use super::value_objects::require_non_empty;
use super::{AuthorId, ValidationError};

/// 作者
///
/// 不变量:
/// - name 一旦设置成功便不再改变
/// - 构造永不失败，无效的 name 只会让其保持未设置
#[derive(Debug, Clone)]
pub struct Author {
    id: AuthorId,
    name: Option<String>,
}

impl Author {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        let mut author = Self {
            id: AuthorId::new(),
            name: None,
        };
        let _ = author.set_name(name);
        author
    }

    /// 设置作者名（只允许成功设置一次）
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        if self.name.is_some() {
            tracing::debug!(author_id = %self.id, "Author name already set, ignoring");
            return Err(ValidationError::AlreadySet { field: "name" });
        }

        let name = name.into();
        if let Err(e) = require_non_empty("name", &name) {
            tracing::debug!(author_id = %self.id, error = %e, "Author name rejected");
            return Err(e);
        }

        self.name = Some(name);
        Ok(())
    }

    // Getters
    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
