use super::helpers::{fetch_session_for_update, update_session};
use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Acquire, Executor, Row};
use uuid::Uuid;

use crate::{
    api::SessionAPI,
    entities::{Coordinates, Destination, Session},
    error::{no_active_session_error, Error},
};

#[async_trait]
impl SessionAPI for Engine {
    #[tracing::instrument(skip(self, list_of_places))]
    async fn create_session(
        &self,
        user_id: String,
        username: String,
        list_of_places: Vec<Destination>,
        detected: bool,
        confirmed_starter_location: Coordinates,
    ) -> Result<Uuid, Error> {
        let session = Session::new(
            user_id,
            username,
            list_of_places,
            detected,
            confirmed_starter_location,
        );

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO sessions (id, username, session_complete, created_at, data) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&session.id)
            .bind(&session.username)
            .bind(session.session_complete)
            .bind(&session.created_at)
            .bind(Json(&session)),
        )
        .await?;

        Ok(session.id)
    }

    #[tracing::instrument(skip(self))]
    async fn find_active_session(&self, username: String) -> Result<Session, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(
                sqlx::query(
                    "SELECT data FROM sessions WHERE username = $1 AND session_complete = FALSE ORDER BY created_at DESC LIMIT 1",
                )
                .bind(&username),
            )
            .await?;

        let result = maybe_result.ok_or_else(|| no_active_session_error())?;
        let Json(session) = result.try_get("data")?;

        Ok(session)
    }

    #[tracing::instrument(skip(self))]
    async fn mark_completed(&self, session_id: Uuid, place_id: String) -> Result<Session, Error> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let mut session = fetch_session_for_update(&mut tx, &session_id).await?;

        session.mark_completed(&place_id)?;

        update_session(&mut tx, &session).await?;

        tx.commit().await?;

        Ok(session)
    }

    #[tracing::instrument(skip(self))]
    async fn complete_session(&self, session_id: Uuid) -> Result<Session, Error> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let mut session = fetch_session_for_update(&mut tx, &session_id).await?;

        session.complete();

        update_session(&mut tx, &session).await?;

        tx.commit().await?;

        Ok(session)
    }
}
