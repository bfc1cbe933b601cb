use catalogue_admin::db::run_pending_migrations;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn migrations_are_applied_once() {
    let test_db = common::TestDb::new();
    let applied = run_pending_migrations(&test_db.pool()).expect("migrations should run");
    assert_eq!(applied, 0);
}
