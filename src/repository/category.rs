use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::unicode_lower;
use crate::domain::category::{Category, CategorySearchQuery};
use crate::domain::pagination::Pagination;
use crate::domain::types::{CategoryId, CategorySortField, SortDirection};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, RepositoryError, RepositoryResult,
};
use crate::schema::categories;

type BoxedCategoryQuery = categories::BoxedQuery<'static, Sqlite>;

/// `LIKE` pattern matching `terms` as a literal, lowercased substring.
fn contains_pattern(terms: &str) -> String {
    let mut pattern = String::with_capacity(terms.len() + 2);
    pattern.push('%');
    for c in terms.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Categories whose name or description contains `terms`, ignoring case.
fn filtered(terms: Option<&str>) -> BoxedCategoryQuery {
    let mut query = categories::table.into_boxed::<Sqlite>();
    if let Some(terms) = terms {
        let pattern = contains_pattern(terms);
        query = query.filter(
            unicode_lower(categories::name.nullable())
                .like(pattern.clone())
                .escape('\\')
                .or(unicode_lower(categories::description)
                    .like(pattern)
                    .escape('\\')),
        );
    }
    query
}

fn ordered(
    query: BoxedCategoryQuery,
    sort: CategorySortField,
    direction: SortDirection,
) -> BoxedCategoryQuery {
    use CategorySortField::*;
    use SortDirection::{Asc, Desc};

    let query = match (sort, direction) {
        (Name, Asc) => query.order(categories::name.asc()),
        (Name, Desc) => query.order(categories::name.desc()),
        (Description, Asc) => query.order(categories::description.asc()),
        (Description, Desc) => query.order(categories::description.desc()),
        (Active, Asc) => query.order(categories::active.asc()),
        (Active, Desc) => query.order(categories::active.desc()),
        (CreatedAt, Asc) => query.order(categories::created_at.asc()),
        (CreatedAt, Desc) => query.order(categories::created_at.desc()),
        (UpdatedAt, Asc) => query.order(categories::updated_at.asc()),
        (UpdatedAt, Desc) => query.order(categories::updated_at.desc()),
    };
    query.then_order_by(categories::id.asc())
}

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.as_str())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(Into::into))
    }

    fn list_categories(
        &self,
        query: &CategorySearchQuery,
    ) -> RepositoryResult<Pagination<Category>> {
        let per_page = i64::try_from(query.per_page)
            .map_err(|_| RepositoryError::ValidationError("page size out of range".into()))?;
        let offset = i64::try_from(query.offset())
            .map_err(|_| RepositoryError::ValidationError("page offset out of range".into()))?;

        let mut conn = self.conn()?;

        let total = filtered(query.search_terms())
            .count()
            .get_result::<i64>(&mut conn)?;

        let items = ordered(filtered(query.search_terms()), query.sort, query.direction)
            .offset(offset)
            .limit(per_page)
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(Category::from)
            .collect();

        Ok(Pagination::new(
            query.page,
            query.per_page,
            total.max(0) as u64,
            items,
        ))
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &Category) -> RepositoryResult<Category> {
        let mut conn = self.conn()?;
        let db_category = DbNewCategory::try_from(category)?;

        let stored = diesel::insert_into(categories::table)
            .values(&db_category)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(stored.into())
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<Category> {
        let mut conn = self.conn()?;
        let db_category = DbNewCategory::try_from(category)?;

        let stored = diesel::update(categories::table.find(db_category.id.as_str()))
            .set(&db_category)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(stored.into())
    }

    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let affected = diesel::delete(categories::table.find(id.as_str())).execute(&mut conn)?;

        Ok(affected)
    }
}
