use super::Database;

use sqlx::{types::Json, Executor, Row, Transaction};
use uuid::Uuid;

use crate::{
    entities::Session,
    error::{session_not_found_error, Error},
};

#[tracing::instrument(skip(tx))]
pub async fn fetch_session_for_update(
    tx: &mut Transaction<'_, Database>,
    id: &Uuid,
) -> Result<Session, Error> {
    let Json(session): Json<Session> = tx
        .fetch_optional(sqlx::query("SELECT data FROM sessions WHERE id = $1 FOR UPDATE").bind(id))
        .await?
        .ok_or_else(|| session_not_found_error())?
        .try_get("data")?;

    Ok(session)
}

// the stored document is replaced in a single statement, so the list of
// places is never observable half-written
#[tracing::instrument(skip(tx))]
pub async fn update_session(
    tx: &mut Transaction<'_, Database>,
    session: &Session,
) -> Result<(), Error> {
    tx.execute(
        sqlx::query("UPDATE sessions SET session_complete = $2, data = $3 WHERE id = $1")
            .bind(&session.id)
            .bind(session.session_complete)
            .bind(Json(session)),
    )
    .await?;

    Ok(())
}
