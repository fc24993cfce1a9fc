//! Catalog - Magazine Entity

use super::value_objects::{
    require_len_between, require_non_empty, MAGAZINE_NAME_MAX_LEN, MAGAZINE_NAME_MIN_LEN,
};
use super::{MagazineId, ValidationError};

/// 杂志
///
/// name 与 category 可以反复修改，但无效值永远不会覆盖当前值。
#[derive(Debug, Clone)]
pub struct Magazine {
    id: MagazineId,
    name: Option<String>,
    category: Option<String>,
}

impl Magazine {
    pub(crate) fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        let mut magazine = Self {
            id: MagazineId::new(),
            name: None,
            category: None,
        };
        let _ = magazine.set_name(name);
        let _ = magazine.set_category(category);
        magazine
    }

    /// 修改杂志名，长度须在 2..=16 之间
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if let Err(e) =
            require_len_between("name", &name, MAGAZINE_NAME_MIN_LEN, MAGAZINE_NAME_MAX_LEN)
        {
            tracing::debug!(magazine_id = %self.id, error = %e, "Magazine name rejected");
            return Err(e);
        }
        self.name = Some(name);
        Ok(())
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        if let Err(e) = require_non_empty("category", &category) {
            tracing::debug!(magazine_id = %self.id, error = %e, "Magazine category rejected");
            return Err(e);
        }
        self.category = Some(category);
        Ok(())
    }

    // Getters
    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}
