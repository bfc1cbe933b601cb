use serde::Deserialize;

/// Configuration options for the catalogue service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
    /// Path or URL of the SQLite database.
    pub database_url: String,
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Load configuration from built-in defaults, an optional
    /// `config/default.yaml` and `APP_*` environment variables, in that order.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("database_url", "catalogue.db")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
