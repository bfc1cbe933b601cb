use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;

/// Input of the create use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
}

impl CreateCategoryCommand {
    pub fn with(name: Option<String>, description: Option<String>, active: bool) -> Self {
        Self {
            name,
            description,
            active,
        }
    }
}

/// Input of the update use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryCommand {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
}

impl UpdateCategoryCommand {
    pub fn with(
        id: impl Into<CategoryId>,
        name: Option<String>,
        description: Option<String>,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            description,
            active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

impl From<Category> for CreateCategoryOutput {
    fn from(value: Category) -> Self {
        Self {
            id: value.id().clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

impl From<Category> for UpdateCategoryOutput {
    fn from(value: Category) -> Self {
        Self {
            id: value.id().clone(),
        }
    }
}

/// Full view of a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "is_active")]
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<Category> for CategoryOutput {
    fn from(value: Category) -> Self {
        Self {
            id: value.id().clone(),
            name: value.name().map(str::to_string),
            description: value.description().map(str::to_string),
            active: value.is_active(),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
            deleted_at: value.deleted_at(),
        }
    }
}

/// Listing row; omits `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListOutput {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "is_active")]
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<Category> for CategoryListOutput {
    fn from(value: Category) -> Self {
        Self {
            id: value.id().clone(),
            name: value.name().map(str::to_string),
            description: value.description().map(str::to_string),
            active: value.is_active(),
            created_at: value.created_at(),
            deleted_at: value.deleted_at(),
        }
    }
}
