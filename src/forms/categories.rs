use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::CategorySearchQuery;
use crate::domain::types::{CategoryId, CategorySortField, SortDirection, TypeConstraintError};
use crate::dto::categories::{CreateCategoryCommand, UpdateCategoryCommand};

pub const DEFAULT_PAGE: usize = 0;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

fn default_active() -> bool {
    true
}

fn default_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

/// JSON body of `POST /categories`.
///
/// Name rules are not checked here; they belong to the category aggregate.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "is_active", alias = "active", default = "default_active")]
    pub active: bool,
}

impl From<CreateCategoryRequest> for CreateCategoryCommand {
    fn from(value: CreateCategoryRequest) -> Self {
        CreateCategoryCommand::with(value.name, value.description, value.active)
    }
}

/// JSON body of `PUT /categories/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "is_active", alias = "active", default = "default_active")]
    pub active: bool,
}

impl UpdateCategoryRequest {
    pub fn into_command(self, id: impl Into<CategoryId>) -> UpdateCategoryCommand {
        UpdateCategoryCommand::with(id, self.name, self.description, self.active)
    }
}

/// Query string of `GET /categories`.
///
/// Empty `sort`/`dir` values fall back to `name`/`asc`.
#[derive(Debug, Deserialize, Validate)]
pub struct ListCategoriesParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    #[validate(range(max = 10000))]
    pub page: usize,
    #[serde(rename = "perPage", alias = "per_page", default = "default_per_page")]
    #[validate(range(min = 1, max = 1000))]
    pub per_page: usize,
    #[serde(default)]
    pub sort: String,
    #[serde(default)]
    pub dir: String,
}

#[derive(Debug, Error)]
pub enum ListCategoriesParamsError {
    #[error("List categories parameters validation failed: {0}")]
    Validation(String),
    #[error("List categories parameters contain invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ListCategoriesParamsError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ListCategoriesParamsError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ListCategoriesParams> for CategorySearchQuery {
    type Error = ListCategoriesParamsError;

    fn try_from(value: ListCategoriesParams) -> Result<Self, Self::Error> {
        value.validate()?;

        let sort = match value.sort.trim() {
            "" => CategorySortField::default(),
            sort => sort.parse()?,
        };
        let direction = match value.dir.trim() {
            "" => SortDirection::default(),
            dir => dir.parse()?,
        };

        Ok(CategorySearchQuery::new(
            value.page,
            value.per_page,
            value.search,
            sort,
            direction,
        ))
    }
}
