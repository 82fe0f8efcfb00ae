pub mod google_maps;

use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Coordinates, Destination};
use crate::error::Error;

// a single pairwise travel-distance lookup, in meters; orderings issue
// these one at a time, so an implementation may batch same-origin lookups
// later without the sequencer changing
#[async_trait]
pub trait DistanceProvider {
    async fn distance(&self, origin: &DistanceRef, destination: &DistanceRef)
        -> Result<f64, Error>;
}

pub type DynDistanceProvider = Arc<dyn DistanceProvider + Send + Sync>;

#[derive(Clone, Debug)]
pub enum DistanceRef {
    Point(Coordinates),
    Place(String),
}

impl From<&Destination> for DistanceRef {
    fn from(destination: &Destination) -> Self {
        Self::Place(destination.place_id.clone())
    }
}

impl From<&DistanceRef> for String {
    fn from(reference: &DistanceRef) -> Self {
        match reference {
            DistanceRef::Point(coordinates) => {
                format!("{},{}", coordinates.latitude, coordinates.longitude)
            }
            DistanceRef::Place(place_id) => format!("place_id:{}", place_id),
        }
    }
}
