//! SQLite connection pooling and embedded schema migrations.

use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::{Nullable, Text};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

diesel::define_sql_function! {
    /// Lowercase text with full Unicode case mapping.
    ///
    /// Built-in `lower` and `LIKE` only fold ASCII letters. Registered on every
    /// pooled connection by [`establish_connection_pool`].
    fn unicode_lower(value: Nullable<Text>) -> Nullable<Text>;
}

/// Installs the crate's SQL functions on each new connection.
#[derive(Debug)]
struct SqlFunctions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlFunctions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        unicode_lower_utils::register_impl(conn, |value: Option<String>| {
            value.map(|value| value.to_lowercase())
        })
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build an r2d2 pool for the SQLite database at `database_url`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqlFunctions))
        .build(manager)
}

/// Apply every migration that has not run yet. Returns how many were applied.
pub fn run_pending_migrations(
    pool: &DbPool,
) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    for version in &applied {
        log::info!("Applied migration {version}");
    }
    Ok(applied.len())
}
