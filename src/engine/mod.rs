mod helpers;
mod order_api;
mod sequencer;
mod session_api;

use sqlx::{Executor, Pool, Postgres};

use crate::{api::API, error::Error, external::DynDistanceProvider};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
    provider: DynDistanceProvider,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>, provider: DynDistanceProvider) -> Result<Self, Error> {
        // TODO: move this to migrations
        // session store (KV store keyed by session id; the extra columns
        // are the ones find_active_session filters and sorts on)
        pool.execute(
            "CREATE TABLE IF NOT EXISTS sessions (id UUID PRIMARY KEY, username VARCHAR NOT NULL, session_complete BOOLEAN NOT NULL, created_at TIMESTAMPTZ NOT NULL, data JSONB NOT NULL)",
        )
        .await?;

        Ok(Self { pool, provider })
    }
}

impl API for Engine {}
