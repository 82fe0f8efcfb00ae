use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, Destination};
use crate::error::{place_not_found_error, Error};

// bonus credited when a trek finishes with every waypoint captured
const TREK_COMPLETION_POINTS: i64 = 30;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user_id: String,
    pub username: String,
    pub list_of_places: Vec<Destination>,
    pub detected: bool,
    pub confirmed_starter_location: Coordinates,
    pub points: i64,
    pub session_complete: bool,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        user_id: String,
        username: String,
        list_of_places: Vec<Destination>,
        detected: bool,
        confirmed_starter_location: Coordinates,
    ) -> Self {
        // completion flags only ever flip through mark_completed
        let list_of_places = list_of_places
            .into_iter()
            .map(|mut place| {
                place.completed = false;
                place
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            user_id,
            username,
            list_of_places,
            detected,
            confirmed_starter_location,
            points: 0,
            session_complete: false,
            created_at: Utc::now(),
        }
    }

    #[tracing::instrument]
    pub fn mark_completed(&mut self, place_id: &str) -> Result<(), Error> {
        let place = self
            .list_of_places
            .iter_mut()
            .find(|place| place.place_id == place_id)
            .ok_or_else(|| place_not_found_error())?;

        place.completed = true;

        Ok(())
    }

    #[tracing::instrument]
    pub fn complete(&mut self) {
        if self.session_complete {
            return;
        }

        if self.list_of_places.iter().all(|place| place.completed) {
            self.points += TREK_COMPLETION_POINTS;
        }

        self.session_complete = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(place_id: &str, completed: bool) -> Destination {
        Destination {
            place_id: place_id.into(),
            name: place_id.to_uppercase(),
            latitude: 6.9271,
            longitude: 79.8612,
            completed,
        }
    }

    fn session(places: Vec<Destination>) -> Session {
        Session::new(
            "user-1".into(),
            "wanderer".into(),
            places,
            true,
            Coordinates {
                latitude: 6.9271,
                longitude: 79.8612,
            },
        )
    }

    #[test]
    fn new_session_resets_completion_flags() {
        let session = session(vec![destination("a", true), destination("b", false)]);

        assert!(session.list_of_places.iter().all(|place| !place.completed));
        assert!(!session.session_complete);
        assert_eq!(session.points, 0);
    }

    #[test]
    fn mark_completed_flips_only_the_named_place() {
        let mut session = session(vec![
            destination("a", false),
            destination("b", false),
            destination("c", false),
        ]);

        session.mark_completed("b").unwrap();

        let flags: Vec<bool> = session
            .list_of_places
            .iter()
            .map(|place| place.completed)
            .collect();

        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(session.list_of_places.len(), 3);
    }

    #[test]
    fn mark_completed_rejects_unknown_place() {
        let mut session = session(vec![destination("a", false), destination("b", false)]);

        let err = session.mark_completed("z").unwrap_err();

        assert_eq!(err.code, 111);
        assert!(session.list_of_places.iter().all(|place| !place.completed));
    }

    #[test]
    fn complete_is_idempotent_and_credits_the_bonus_once() {
        let mut session = session(vec![destination("a", false), destination("b", false)]);

        session.mark_completed("a").unwrap();
        session.mark_completed("b").unwrap();

        session.complete();
        session.complete();

        assert!(session.session_complete);
        assert_eq!(session.points, 30);
    }

    #[test]
    fn abandoned_trek_completes_without_bonus() {
        let mut session = session(vec![destination("a", false), destination("b", false)]);

        session.mark_completed("a").unwrap();
        session.complete();

        assert!(session.session_complete);
        assert_eq!(session.points, 0);
    }
}
