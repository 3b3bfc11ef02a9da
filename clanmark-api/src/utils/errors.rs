use diesel_async::pooled_connection::deadpool::PoolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("failed to check out a database connection: {0}")]
    Pool(#[from] PoolError),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

pub type Result<T, E = DatabaseError> = std::result::Result<T, E>;
