mod postgres;
mod reference;

pub use self::postgres::*;
pub use self::reference::*;

use tracing::{info, warn};

use crate::api::configs::DatabaseConfig;

/// Database information to use to create a client
pub enum DatabaseInfo {
    /// Use the in-memory reference database
    Reference,
    /// Connect to PostgreSQL
    Postgres {
        url: String,
        max_connections: usize,
        run_migrations: bool,
    },
}

/// Database
#[derive(Clone)]
pub enum Database {
    /// In-memory database
    Reference(ReferenceDb),
    /// PostgreSQL database
    Postgres(PostgresDb),
}

impl From<DatabaseConfig> for DatabaseInfo {
    fn from(config: DatabaseConfig) -> Self {
        match config.url {
            Some(url) => DatabaseInfo::Postgres {
                url,
                max_connections: config.max_connections,
                run_migrations: config.run_migrations,
            },
            None => DatabaseInfo::Reference,
        }
    }
}

impl DatabaseInfo {
    /// Create a database client from the given database information
    pub async fn connect(self) -> anyhow::Result<Database> {
        match self {
            DatabaseInfo::Reference => {
                warn!("no database url configured, bookmarks are kept in memory");
                Ok(Database::Reference(Default::default()))
            }
            DatabaseInfo::Postgres {
                url,
                max_connections,
                run_migrations,
            } => {
                if run_migrations {
                    PostgresDb::run_migrations(&url).await?;
                }
                let db = PostgresDb::new(&url, max_connections)?;
                info!(max_connections, "connected to postgres");
                Ok(Database::Postgres(db))
            }
        }
    }
}
