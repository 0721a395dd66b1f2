use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;
use domain_knowledge::GeminiConfig;
use std::path::PathBuf;

pub use core_config::Environment;

/// Location of the JSON vector store document
#[derive(Clone, Debug)]
pub struct VectorStoreConfig {
    pub path: PathBuf,
}

impl FromEnv for VectorStoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            path: PathBuf::from(env_or_default("VECTOR_STORE_PATH", "data/embeddings.json")),
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub vector_store: VectorStoreConfig,
    pub environment: Environment,
    /// Apply pending migrations before serving
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let gemini = GeminiConfig::from_env()?; // Required - GEMINI_API_KEY
        let vector_store = VectorStoreConfig::from_env()?;
        let run_migrations = env_parse("RUN_MIGRATIONS", "true")?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            gemini,
            vector_store,
            environment,
            run_migrations,
        })
    }
}
