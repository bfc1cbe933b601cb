//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers and listing options are checked once at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A required value was missing or whitespace-only.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// The value is not one of the accepted options.
    #[error("{field} does not accept '{value}'")]
    UnknownOption { field: &'static str, value: String },
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Opaque identifier of a [`Category`](crate::domain::category::Category).
///
/// Freshly generated identifiers are random UUIDs, but any string handed in by
/// a caller is accepted as-is: it may simply not exist in storage.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Generates a new, globally unique identifier.
    pub fn unique() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the raw identifier value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for CategoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<CategoryId> for String {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl PartialEq<&str> for CategoryId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Ordering applied to a listing.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            "" => Err(TypeConstraintError::EmptyString("direction")),
            other => Err(TypeConstraintError::UnknownOption {
                field: "direction",
                value: other.to_string(),
            }),
        }
    }
}

/// Category attribute a listing can be sorted by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CategorySortField {
    #[default]
    Name,
    Description,
    Active,
    CreatedAt,
    UpdatedAt,
}

impl CategorySortField {
    pub const fn as_str(self) -> &'static str {
        match self {
            CategorySortField::Name => "name",
            CategorySortField::Description => "description",
            CategorySortField::Active => "active",
            CategorySortField::CreatedAt => "createdAt",
            CategorySortField::UpdatedAt => "updatedAt",
        }
    }
}

impl Display for CategorySortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategorySortField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(CategorySortField::Name),
            "description" => Ok(CategorySortField::Description),
            "active" | "is_active" | "isActive" => Ok(CategorySortField::Active),
            "createdAt" | "created_at" => Ok(CategorySortField::CreatedAt),
            "updatedAt" | "updated_at" => Ok(CategorySortField::UpdatedAt),
            "" => Err(TypeConstraintError::EmptyString("sort")),
            other => Err(TypeConstraintError::UnknownOption {
                field: "sort",
                value: other.to_string(),
            }),
        }
    }
}
