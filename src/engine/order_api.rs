use super::{sequencer, Engine};

use async_trait::async_trait;

use crate::{
    api::OrderAPI,
    entities::{Coordinates, Destination},
    error::Error,
};

#[async_trait]
impl OrderAPI for Engine {
    #[tracing::instrument(skip(self, destinations))]
    async fn order_from_point(
        &self,
        origin: Coordinates,
        destinations: Vec<Destination>,
    ) -> Result<Vec<Destination>, Error> {
        sequencer::order_from_point(self.provider.as_ref(), origin, destinations).await
    }

    #[tracing::instrument(skip(self, destinations))]
    async fn order_from_anchor(
        &self,
        destinations: Vec<Destination>,
    ) -> Result<Vec<Destination>, Error> {
        sequencer::order_from_anchor(self.provider.as_ref(), destinations).await
    }
}
