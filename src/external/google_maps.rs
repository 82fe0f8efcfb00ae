use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    error::{no_route_found_error, provider_unavailable_error, Error},
    external::{DistanceProvider, DistanceRef},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Distance {
    value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Element {
    status: String,
    distance: Option<Distance>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Row {
    elements: Vec<Element>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    status: String,
    rows: Vec<Row>,
}

#[derive(Debug)]
pub struct GoogleMaps;

#[async_trait]
impl DistanceProvider for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn distance(
        &self,
        origin: &DistanceRef,
        destination: &DistanceRef,
    ) -> Result<f64, Error> {
        let origins: String = origin.into();
        let destinations: String = destination.into();

        let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
        let url = format!("https://{}/maps/api/distancematrix/json", api_base);
        let key = env::var("GOOGLE_MAPS_API_KEY")?;

        let res = reqwest::Client::new()
            .get(url)
            .query(&[("key", key)])
            .query(&[("units", "metric")])
            .query(&[("origins", origins)])
            .query(&[("destinations", destinations)])
            .send()
            .await?;

        if res.status().as_u16() != 200 {
            return Err(provider_unavailable_error());
        }

        let data: Response = res.json().await?;

        if data.status != "OK" {
            return Err(provider_unavailable_error());
        }

        let element = data
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| provider_unavailable_error())?;

        match element.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" | "NOT_FOUND" => return Err(no_route_found_error()),
            _ => return Err(provider_unavailable_error()),
        }

        let distance = element.distance.ok_or_else(|| provider_unavailable_error())?;

        Ok(distance.value)
    }
}
