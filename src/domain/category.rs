use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategorySortField, SortDirection};
use crate::domain::validation::{DomainError, ValidationError, ValidationHandler};

/// Inclusive bounds on the trimmed category name length.
pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Catalogue category aggregate.
///
/// Construction never rejects values: `name` may be missing or invalid until
/// [`Category::validate`] is run against a handler. State changes go through
/// [`activate`](Category::activate), [`deactivate`](Category::deactivate) and
/// [`update`](Category::update), each of which bumps `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    active: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    deleted_at: Option<NaiveDateTime>,
}

impl Category {
    /// Create a brand new category with a fresh id.
    ///
    /// An inactive category starts with `deleted_at` set to its creation time.
    pub fn new_category(name: Option<String>, description: Option<String>, active: bool) -> Self {
        let now = now();
        Self {
            id: CategoryId::unique(),
            name,
            description,
            active,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        }
    }

    /// Rebuild a category from a complete set of fields, e.g. a stored row.
    ///
    /// `active` and `deleted_at` are taken as given; no consistency between
    /// them is enforced here.
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        active: bool,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
        deleted_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    /// Report every rule this category breaks to `handler`.
    pub fn validate<H>(&self, handler: &mut H) -> Result<(), DomainError>
    where
        H: ValidationHandler + ?Sized,
    {
        CategoryValidator::validate(self, handler)
    }

    pub fn activate(&mut self) -> &mut Self {
        self.active = true;
        self.deleted_at = None;
        self.updated_at = now();
        self
    }

    /// Deactivate the category. `deleted_at` keeps the first deactivation time.
    pub fn deactivate(&mut self) -> &mut Self {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now());
        }
        self.active = false;
        self.updated_at = now();
        self
    }

    /// Apply new state, then overwrite name and description. Does not validate.
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        active: bool,
    ) -> &mut Self {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name;
        self.description = description;
        self.updated_at = now();
        self
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }
}

/// Stateless rule set for [`Category`].
pub struct CategoryValidator;

impl CategoryValidator {
    pub fn validate<H>(category: &Category, handler: &mut H) -> Result<(), DomainError>
    where
        H: ValidationHandler + ?Sized,
    {
        Self::check_name_constraints(category, handler)
    }

    fn check_name_constraints<H>(category: &Category, handler: &mut H) -> Result<(), DomainError>
    where
        H: ValidationHandler + ?Sized,
    {
        let Some(name) = category.name() else {
            return handler.append(ValidationError::new("'name' should not be null"));
        };

        let name = name.trim();
        if name.is_empty() {
            return handler.append(ValidationError::new("'name' should not be empty"));
        }

        let length = name.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            handler.append(ValidationError::new(format!(
                "'name' must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters"
            )))?;
        }

        Ok(())
    }
}

/// Parameters for a filtered, sorted and paginated category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySearchQuery {
    /// Zero-based page index.
    pub page: usize,
    /// Page size, greater than zero.
    pub per_page: usize,
    /// Case-insensitive substring matched against name or description.
    /// Blank terms disable filtering.
    pub terms: String,
    pub sort: CategorySortField,
    pub direction: SortDirection,
}

impl CategorySearchQuery {
    pub fn new(
        page: usize,
        per_page: usize,
        terms: impl Into<String>,
        sort: CategorySortField,
        direction: SortDirection,
    ) -> Self {
        Self {
            page,
            per_page,
            terms: terms.into(),
            sort,
            direction,
        }
    }

    /// Trimmed search terms, or `None` when no filtering applies.
    pub fn search_terms(&self) -> Option<&str> {
        let terms = self.terms.trim();
        (!terms.is_empty()).then_some(terms)
    }

    /// Number of rows to skip before the requested page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.per_page)
    }
}
