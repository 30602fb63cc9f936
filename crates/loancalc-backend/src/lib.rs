//! Server-side pieces of loancalc: configuration, the shared Postgres pool,
//! and the HTTP handlers served next to it.

pub mod config;
pub mod db;
pub mod handlers;

use sqlx::PgPool;

/// State shared by every handler.
pub struct AppState {
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            started_at: chrono::Utc::now(),
            pool,
        }
    }

    /// State over the pool installed by [`db::init`].
    pub fn from_shared_pool() -> Result<Self, db::DbError> {
        Ok(Self::new(db::pool()?.clone()))
    }
}
