use diesel::connection::InstrumentationEvent;
use diesel_async::{
    pooled_connection::{
        deadpool::{Object, Pool},
        AsyncDieselConnectionManager,
    },
    AsyncConnection, AsyncPgConnection,
};
use tracing::info;

use crate::utils::Result;

pub type Connection = AsyncPgConnection;

/// PostgreSQL implementation backed by a deadpool connection pool.
#[derive(Clone)]
pub struct PostgresDb(Pool<Connection>);

impl PostgresDb {
    pub fn new(url: &str, max_connections: usize) -> anyhow::Result<Self> {
        let config = AsyncDieselConnectionManager::<Connection>::new(url);
        let pool = Pool::builder(config).max_size(max_connections).build()?;
        Ok(Self(pool))
    }

    /// Check out one connection, logging every statement run on it.
    pub async fn conn(&self) -> Result<Object<Connection>> {
        let mut conn = self.0.get().await?;

        conn.set_instrumentation(|event: InstrumentationEvent<'_>| match event {
            InstrumentationEvent::StartQuery { query, .. } => {
                tracing::info!("Executing query: {}", query);
            }
            InstrumentationEvent::FinishQuery { query, error, .. } => match error {
                Some(e) => tracing::error!("Query failed: {}\nError: {:?}", query, e),
                None => tracing::debug!("Executing query succeeded: {}", query),
            },
            _ => {}
        });

        Ok(conn)
    }

    pub async fn run_migrations(url: &str) -> anyhow::Result<()> {
        use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
        use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

        const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");
        let conn = Connection::establish(url).await?;

        let mut async_wrapper: AsyncConnectionWrapper<Connection> =
            AsyncConnectionWrapper::from(conn);

        let applied = tokio::task::spawn_blocking(move || {
            async_wrapper
                .run_pending_migrations(MIGRATIONS)
                .map(|versions| versions.len())
                .map_err(|e| anyhow::anyhow!("failed to run migrations: {}", e))
        })
        .await??;
        info!(applied, "database migrations finished");

        Ok(())
    }
}
