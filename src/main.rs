use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};

use catalogue_admin::db::{establish_connection_pool, run_pending_migrations};
use catalogue_admin::models::config::ServerConfig;
use catalogue_admin::repository::DieselRepository;
use catalogue_admin::routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = ServerConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        log::error!("Failed to establish database connection pool: {e}");
        io::Error::other(e)
    })?;

    run_pending_migrations(&pool).map_err(|e| {
        log::error!("Failed to run database migrations: {e}");
        io::Error::other(e)
    })?;

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting catalogue service on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
