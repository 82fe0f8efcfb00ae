use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Coordinates, Destination, Session};
use crate::error::Error;

#[async_trait]
pub trait OrderAPI {
    async fn order_from_point(
        &self,
        origin: Coordinates,
        destinations: Vec<Destination>,
    ) -> Result<Vec<Destination>, Error>;

    async fn order_from_anchor(
        &self,
        destinations: Vec<Destination>,
    ) -> Result<Vec<Destination>, Error>;
}

#[async_trait]
pub trait SessionAPI {
    async fn create_session(
        &self,
        user_id: String,
        username: String,
        list_of_places: Vec<Destination>,
        detected: bool,
        confirmed_starter_location: Coordinates,
    ) -> Result<Uuid, Error>;

    async fn find_active_session(&self, username: String) -> Result<Session, Error>;

    async fn mark_completed(&self, session_id: Uuid, place_id: String) -> Result<Session, Error>;

    async fn complete_session(&self, session_id: Uuid) -> Result<Session, Error>;
}

pub trait API: OrderAPI + SessionAPI {}
