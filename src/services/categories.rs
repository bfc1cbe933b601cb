use crate::domain::category::{Category, CategorySearchQuery};
use crate::domain::pagination::Pagination;
use crate::domain::types::CategoryId;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::dto::categories::{
    CategoryListOutput, CategoryOutput, CreateCategoryCommand, CreateCategoryOutput,
    UpdateCategoryCommand, UpdateCategoryOutput,
};
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult, UseCaseOutcome};

/// Create a category.
///
/// Rule violations come back as a failed outcome without touching storage.
/// A storage failure is folded into the same failure channel, its message
/// kept verbatim.
pub fn create_category<R>(
    command: CreateCategoryCommand,
    repo: &R,
) -> UseCaseOutcome<CreateCategoryOutput>
where
    R: CategoryWriter,
{
    let category = Category::new_category(command.name, command.description, command.active);

    let notification = Notification::validating(|handler| category.validate(handler));
    if notification.has_error() {
        log::debug!(
            "Rejected new category with {} validation error(s)",
            notification.len()
        );
        return Err(notification);
    }

    match repo.create_category(&category) {
        Ok(stored) => {
            log::info!("Created category {}", stored.id());
            Ok(CreateCategoryOutput::from(stored))
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(Notification::from_failure(&e))
        }
    }
}

/// Update an existing category.
///
/// An unknown id is raised as [`ServiceError::NotFound`]; rule violations and
/// storage failures while saving are reported through the outcome exactly as
/// in [`create_category`].
pub fn update_category<R>(
    command: UpdateCategoryCommand,
    repo: &R,
) -> ServiceResult<UseCaseOutcome<UpdateCategoryOutput>>
where
    R: CategoryReader + CategoryWriter,
{
    let mut category = match repo.get_category_by_id(&command.id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::category_not_found(&command.id)),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(e.into());
        }
    };

    category.update(command.name, command.description, command.active);

    let notification = Notification::validating(|handler| category.validate(handler));
    if notification.has_error() {
        log::debug!(
            "Rejected update of category {} with {} validation error(s)",
            command.id,
            notification.len()
        );
        return Ok(Err(notification));
    }

    Ok(repo
        .update_category(&category)
        .map(|stored| {
            log::info!("Updated category {}", stored.id());
            UpdateCategoryOutput::from(stored)
        })
        .map_err(|e| {
            log::error!("Failed to update category: {e}");
            Notification::from_failure(&e)
        }))
}

/// Fetch a single category.
pub fn get_category_by_id<R>(id: &CategoryId, repo: &R) -> ServiceResult<CategoryOutput>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(id) {
        Ok(Some(category)) => Ok(CategoryOutput::from(category)),
        Ok(None) => Err(ServiceError::category_not_found(id)),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(e.into())
        }
    }
}

/// Delete a category. Deleting an unknown id succeeds without effect.
pub fn delete_category<R>(id: &CategoryId, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    match repo.delete_category(id) {
        Ok(0) => {
            log::debug!("Category {id} did not exist, nothing deleted");
            Ok(())
        }
        Ok(_) => {
            log::info!("Deleted category {id}");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(e.into())
        }
    }
}

/// List categories for `query`, converting each row into its listing view.
pub fn list_categories<R>(
    query: &CategorySearchQuery,
    repo: &R,
) -> ServiceResult<Pagination<CategoryListOutput>>
where
    R: CategoryReader,
{
    match repo.list_categories(query) {
        Ok(page) => Ok(page.map(CategoryListOutput::from)),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(e.into())
        }
    }
}
