use std::thread;
use std::time::Duration;

use catalogue_admin::domain::category::CategorySearchQuery;
use catalogue_admin::domain::types::{CategoryId, CategorySortField, SortDirection};
use catalogue_admin::domain::validation::ValidationHandler;
use catalogue_admin::dto::categories::{CreateCategoryCommand, UpdateCategoryCommand};
use catalogue_admin::repository::{CategoryReader, DieselRepository};
use catalogue_admin::services::ServiceError;
use catalogue_admin::services::categories::{
    create_category, delete_category, get_category_by_id, list_categories, update_category,
};

mod common;

fn default_query() -> CategorySearchQuery {
    CategorySearchQuery::new(0, 10, "", CategorySortField::CreatedAt, SortDirection::Asc)
}

#[test]
fn create_then_get_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let command = CreateCategoryCommand::with(
        Some("Filmes".into()),
        Some("A categoria mais assistida".into()),
        true,
    );
    let created = create_category(command, &repo).expect("category should be created");

    let category = get_category_by_id(&created.id, &repo).expect("category should exist");
    assert_eq!(category.id, created.id);
    assert_eq!(category.name.as_deref(), Some("Filmes"));
    assert_eq!(
        category.description.as_deref(),
        Some("A categoria mais assistida")
    );
    assert!(category.active);
    assert!(category.deleted_at.is_none());
    assert_eq!(category.created_at, category.updated_at);
}

#[test]
fn create_inactive_category_is_soft_deleted() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let command = CreateCategoryCommand::with(Some("Filmes".into()), None, false);
    let created = create_category(command, &repo).expect("category should be created");

    let category = get_category_by_id(&created.id, &repo).unwrap();
    assert!(!category.active);
    assert!(category.deleted_at.is_some());
}

#[test]
fn create_with_null_name_reports_single_error() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let command = CreateCategoryCommand::with(None, Some("Sem nome".into()), true);
    let notification = create_category(command, &repo).unwrap_err();

    assert_eq!(notification.len(), 1);
    assert_eq!(
        notification.first_error().unwrap().message,
        "'name' should not be null"
    );

    let page = list_categories(&default_query(), &repo).unwrap();
    assert_eq!(page.total, 0);
}

#[test]
fn get_unknown_category_is_not_found() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let err = get_category_by_id(&CategoryId::from("123"), &repo).unwrap_err();

    assert_eq!(err.to_string(), "Category with ID 123 was not found");
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

#[test]
fn update_deactivates_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = create_category(
        CreateCategoryCommand::with(Some("Film".into()), None, true),
        &repo,
    )
    .unwrap();
    let before = get_category_by_id(&created.id, &repo).unwrap();

    thread::sleep(Duration::from_millis(5));

    let command = UpdateCategoryCommand::with(
        created.id.clone(),
        Some("Filmes".into()),
        Some("A categoria mais assistida".into()),
        false,
    );
    let updated = update_category(command, &repo)
        .expect("category should be found")
        .expect("update should be valid");
    assert_eq!(updated.id, created.id);

    let after = get_category_by_id(&created.id, &repo).unwrap();
    assert_eq!(after.name.as_deref(), Some("Filmes"));
    assert!(!after.active);
    assert!(after.deleted_at.is_some());
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[test]
fn update_with_invalid_name_keeps_stored_row() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = create_category(
        CreateCategoryCommand::with(Some("Filmes".into()), None, true),
        &repo,
    )
    .unwrap();

    let command = UpdateCategoryCommand::with(created.id.clone(), Some("  ".into()), None, true);
    let notification = update_category(command, &repo)
        .expect("category should be found")
        .unwrap_err();
    assert_eq!(
        notification.first_error().unwrap().message,
        "'name' should not be empty"
    );

    let stored = repo.get_category_by_id(&created.id).unwrap().unwrap();
    assert_eq!(stored.name(), Some("Filmes"));
}

#[test]
fn update_unknown_category_is_not_found() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let command = UpdateCategoryCommand::with("123", Some("Filmes".into()), None, true);
    let err = update_category(command, &repo).unwrap_err();

    assert_eq!(err.to_string(), "Category with ID 123 was not found");
}

#[test]
fn delete_removes_category_and_tolerates_repeats() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = create_category(
        CreateCategoryCommand::with(Some("Filmes".into()), None, true),
        &repo,
    )
    .unwrap();

    delete_category(&created.id, &repo).expect("delete should succeed");
    delete_category(&created.id, &repo).expect("second delete should succeed");

    assert!(get_category_by_id(&created.id, &repo).is_err());
}

#[test]
fn list_empty_catalogue() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let page = list_categories(&default_query(), &repo).unwrap();

    assert_eq!(page.current_page, 0);
    assert_eq!(page.per_page, 10);
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());
}

#[test]
fn list_searches_and_pages() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    for (name, description) in [
        ("Filmes", Some("Longas")),
        ("Series", Some("Episodios de filmes")),
        ("Documentarios", None),
    ] {
        create_category(
            CreateCategoryCommand::with(Some(name.into()), description.map(str::to_string), true),
            &repo,
        )
        .unwrap();
    }

    let query = CategorySearchQuery::new(0, 1, "FILMES", CategorySortField::Name, SortDirection::Asc);
    let page = list_categories(&query, &repo).unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name.as_deref(), Some("Filmes"));

    let query = CategorySearchQuery { page: 1, ..query };
    let page = list_categories(&query, &repo).unwrap();
    assert_eq!(page.items[0].name.as_deref(), Some("Series"));
}
