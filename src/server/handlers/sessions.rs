use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, Destination, Session};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    user_id: String,
    username: String,
    list_of_places: Vec<Destination>,
    detected: bool,
    confirmed_starter_location: Coordinates,
}

#[derive(Serialize, Deserialize)]
pub struct MarkCompletedParams {
    place_id: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Uuid>, Error> {
    let session_id = api
        .create_session(
            params.user_id,
            params.username,
            params.list_of_places,
            params.detected,
            params.confirmed_starter_location,
        )
        .await?;

    Ok(session_id.into())
}

pub async fn find_active(
    Extension(api): Extension<DynAPI>,
    Path(username): Path<String>,
) -> Result<Json<Session>, Error> {
    let session = api.find_active_session(username).await?;

    Ok(session.into())
}

pub async fn mark_completed(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<MarkCompletedParams>,
) -> Result<Json<Session>, Error> {
    let session = api.mark_completed(id, params.place_id).await?;

    Ok(session.into())
}

pub async fn complete(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, Error> {
    let session = api.complete_session(id).await?;

    Ok(session.into())
}
