use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategorySearchQuery};
use crate::domain::pagination::Pagination;
use crate::domain::types::CategoryId;

pub mod category;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
    /// List categories matching the search terms, sorted and paginated.
    fn list_categories(&self, query: &CategorySearchQuery)
    -> RepositoryResult<Pagination<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return the stored state.
    fn create_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Overwrite an existing category and return the stored state.
    fn update_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Delete a category by id. Deleting an unknown id affects nothing.
    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<usize>;
}

/// Full storage gateway for categories.
pub trait CategoryGateway: CategoryReader + CategoryWriter {}

impl<T> CategoryGateway for T where T: CategoryReader + CategoryWriter {}
