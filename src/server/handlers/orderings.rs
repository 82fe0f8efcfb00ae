use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Destination};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct FromPointParams {
    origin_lat: f64,
    origin_lng: f64,
    destination_list: Vec<Destination>,
}

#[derive(Serialize, Deserialize)]
pub struct FromAnchorParams {
    destination_list: Vec<Destination>,
}

pub async fn from_point(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<FromPointParams>,
) -> Result<Json<Vec<Destination>>, Error> {
    let origin = Coordinates {
        latitude: params.origin_lat,
        longitude: params.origin_lng,
    };

    let ordered = api.order_from_point(origin, params.destination_list).await?;

    Ok(ordered.into())
}

pub async fn from_anchor(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<FromAnchorParams>,
) -> Result<Json<Vec<Destination>>, Error> {
    let ordered = api.order_from_anchor(params.destination_list).await?;

    Ok(ordered.into())
}
