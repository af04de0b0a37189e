//! Storage backend selection and remote schema creation.
//!
//! The backend is a single explicit choice made at construction: the
//! embedding application either builds a [`StorageConfig`] by hand or calls
//! [`StorageConfig::from_env`], the one place the environment is inspected.
//! Presence of the database URL is the sole switch between the two
//! persistence variants; everything downstream is agnostic to the choice.

use std::env;
use std::path::PathBuf;

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};
use tracing::info;

use crate::entities::{
    ChecklistItemEntity, ExpenseCategoryEntity, ExpenseEntity, IncomeEntity, ItemEntity,
    ScenarioEntity, SystemStateEntity, TimelineEventEntity,
};
use crate::errors::Result;
use crate::persist::{LocalStore, PersistenceAdapter, RemoteStore};
use crate::seed;

/// Environment variable holding the remote backend connection URL. Its
/// presence selects the remote persistence variant.
pub const DATABASE_URL_VAR: &str = "HOMEBOUND_DATABASE_URL";
/// Environment variable overriding the local document path.
pub const DATA_PATH_VAR: &str = "HOMEBOUND_DATA_PATH";
/// Environment variable pointing at an optional TOML seed-override file.
pub const SEED_FILE_VAR: &str = "HOMEBOUND_SEED_FILE";

const DEFAULT_DATA_PATH: &str = "data/homebound.json";

/// Which persistence backend to construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// Versioned JSON document at `path`
    Local {
        /// Document path
        path: PathBuf,
    },
    /// Remote database reachable at `url`
    Remote {
        /// Backend connection URL
        url: String,
    },
}

/// Full storage configuration passed to [`StorageConfig::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// The selected backend
    pub backend: BackendConfig,
    /// Optional TOML seed-override file
    pub seed_file: Option<PathBuf>,
}

impl StorageConfig {
    /// A local-backend configuration with the built-in seed.
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: BackendConfig::Local { path: path.into() },
            seed_file: None,
        }
    }

    /// A remote-backend configuration with the built-in seed.
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            backend: BackendConfig::Remote { url: url.into() },
            seed_file: None,
        }
    }

    /// Reads the configuration from the environment (after attempting to
    /// load a `.env` file). A non-empty database URL selects the remote
    /// backend; otherwise the local document is used, at the configured or
    /// default path.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let backend = match env::var(DATABASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => BackendConfig::Remote { url },
            _ => BackendConfig::Local {
                path: env::var(DATA_PATH_VAR)
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH)),
            },
        };
        let seed_file = env::var(SEED_FILE_VAR).ok().map(PathBuf::from);

        Self { backend, seed_file }
    }

    /// Builds the configured persistence adapter, loading the seed-override
    /// file when one is configured.
    pub async fn build(self) -> Result<PersistenceAdapter> {
        let seed_state = match &self.seed_file {
            Some(path) => super::seed::load_config(path)?.build_state()?,
            None => seed::initial_state(),
        };

        match self.backend {
            BackendConfig::Local { path } => {
                info!(path = %path.display(), "using local durable storage");
                Ok(PersistenceAdapter::Local(LocalStore::with_seed(
                    path, seed_state,
                )))
            }
            BackendConfig::Remote { url } => {
                info!("using remote synchronized storage");
                let store = RemoteStore::connect(&url).await?.with_seed(seed_state);
                Ok(PersistenceAdapter::Remote(store))
            }
        }
    }
}

/// Creates all backend tables using `SeaORM`'s schema generation from the
/// entity definitions, keeping the database schema aligned with the Rust
/// structs without hand-written SQL. Used for tests and first-run setups
/// that own their database.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let tables = [
        schema.create_table_from_entity(ItemEntity),
        schema.create_table_from_entity(ExpenseCategoryEntity),
        schema.create_table_from_entity(ExpenseEntity),
        schema.create_table_from_entity(IncomeEntity),
        schema.create_table_from_entity(ChecklistItemEntity),
        schema.create_table_from_entity(ScenarioEntity),
        schema.create_table_from_entity(TimelineEventEntity),
        schema.create_table_from_entity(SystemStateEntity),
    ];
    for table in tables {
        db.execute(builder.build(&table)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use sea_orm::{Database, EntityTrait, QuerySelect};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // every table answers a query
        let _ = ItemEntity::find().limit(1).all(&db).await?;
        let _ = ExpenseEntity::find().limit(1).all(&db).await?;
        let _ = ExpenseCategoryEntity::find().limit(1).all(&db).await?;
        let _ = IncomeEntity::find().limit(1).all(&db).await?;
        let _ = ChecklistItemEntity::find().limit(1).all(&db).await?;
        let _ = ScenarioEntity::find().limit(1).all(&db).await?;
        let _ = TimelineEventEntity::find().limit(1).all(&db).await?;
        let _ = SystemStateEntity::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_build_local_adapter() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig::local(dir.path().join("state.json"));

        let adapter = config.build().await?;
        assert!(matches!(adapter, PersistenceAdapter::Local(_)));
        Ok(())
    }

    #[test]
    fn test_explicit_constructors() {
        let local = StorageConfig::local("data/test.json");
        assert!(matches!(local.backend, BackendConfig::Local { .. }));
        assert!(local.seed_file.is_none());

        let remote = StorageConfig::remote("sqlite::memory:");
        assert!(matches!(remote.backend, BackendConfig::Remote { .. }));
    }
}
