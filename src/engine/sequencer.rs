use std::collections::HashSet;

use crate::{
    entities::{Coordinates, Destination},
    error::{duplicate_place_error, empty_destination_set_error, Error},
    external::{DistanceProvider, DistanceRef},
};

#[tracing::instrument(skip(provider, destinations))]
pub async fn order_from_point(
    provider: &(dyn DistanceProvider + Sync),
    origin: Coordinates,
    destinations: Vec<Destination>,
) -> Result<Vec<Destination>, Error> {
    validate(&destinations)?;

    let mut remaining = destinations;

    if remaining.len() == 1 {
        return Ok(remaining);
    }

    let origin = DistanceRef::Point(origin);

    // the destination nearest the starting point becomes the anchor;
    // strict less keeps the first minimum, so ties break to input order
    let mut anchor_index = 0;
    let mut anchor_distance = f64::INFINITY;

    for (index, destination) in remaining.iter().enumerate() {
        let meters = provider
            .distance(&origin, &DistanceRef::from(destination))
            .await?;

        if meters < anchor_distance {
            anchor_index = index;
            anchor_distance = meters;
        }
    }

    let anchor = remaining.remove(anchor_index);

    chain(provider, anchor, remaining).await
}

#[tracing::instrument(skip(provider, destinations))]
pub async fn order_from_anchor(
    provider: &(dyn DistanceProvider + Sync),
    destinations: Vec<Destination>,
) -> Result<Vec<Destination>, Error> {
    validate(&destinations)?;

    // the caller has already promoted its pick to the front; it stays
    // first regardless of its distances to the rest
    let mut remaining = destinations;
    let anchor = remaining.remove(0);

    chain(provider, anchor, remaining).await
}

fn validate(destinations: &[Destination]) -> Result<(), Error> {
    if destinations.is_empty() {
        return Err(empty_destination_set_error());
    }

    let mut seen = HashSet::new();

    for destination in destinations {
        if !seen.insert(destination.place_id.as_str()) {
            return Err(duplicate_place_error());
        }
    }

    Ok(())
}

// greedy nearest-neighbor chain: repeatedly append the remaining
// destination closest to the last selection; a failed lookup aborts the
// whole ordering, partial orders never escape
async fn chain(
    provider: &(dyn DistanceProvider + Sync),
    anchor: Destination,
    mut remaining: Vec<Destination>,
) -> Result<Vec<Destination>, Error> {
    let mut current = DistanceRef::from(&anchor);

    let mut ordered = Vec::with_capacity(remaining.len() + 1);
    ordered.push(anchor);

    while !remaining.is_empty() {
        let mut nearest_index = 0;
        let mut nearest_distance = f64::INFINITY;

        for (index, destination) in remaining.iter().enumerate() {
            let meters = provider
                .distance(&current, &DistanceRef::from(destination))
                .await?;

            if meters < nearest_distance {
                nearest_index = index;
                nearest_distance = meters;
            }
        }

        let next = remaining.remove(nearest_index);
        current = DistanceRef::from(&next);
        ordered.push(next);
    }

    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::error::no_route_found_error;

    struct FixedDistances {
        distances: HashMap<(String, String), f64>,
        calls: AtomicUsize,
    }

    impl FixedDistances {
        fn new(pairs: &[(&str, &str, f64)]) -> Self {
            let mut distances = HashMap::new();

            for (from, to, meters) in pairs {
                distances.insert((from.to_string(), to.to_string()), *meters);
                distances.insert((to.to_string(), from.to_string()), *meters);
            }

            Self {
                distances,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DistanceProvider for FixedDistances {
        async fn distance(
            &self,
            origin: &DistanceRef,
            destination: &DistanceRef,
        ) -> Result<f64, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            let key = (String::from(origin), String::from(destination));

            self.distances
                .get(&key)
                .copied()
                .ok_or_else(|| no_route_found_error())
        }
    }

    fn destination(place_id: &str) -> Destination {
        Destination {
            place_id: place_id.into(),
            name: place_id.to_uppercase(),
            latitude: 0.0,
            longitude: 0.0,
            completed: false,
        }
    }

    fn place_ids(destinations: &[Destination]) -> Vec<&str> {
        destinations
            .iter()
            .map(|destination| destination.place_id.as_str())
            .collect()
    }

    #[tokio::test]
    async fn orders_from_detected_point() {
        let provider = FixedDistances::new(&[
            ("0,0", "place_id:a", 10.0),
            ("0,0", "place_id:b", 3.0),
            ("0,0", "place_id:c", 7.0),
            ("place_id:a", "place_id:b", 4.0),
            ("place_id:a", "place_id:c", 2.0),
            ("place_id:b", "place_id:c", 6.0),
        ]);

        let origin = Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        };

        let ordered = order_from_point(
            &provider,
            origin,
            vec![destination("a"), destination("b"), destination("c")],
        )
        .await
        .unwrap();

        assert_eq!(place_ids(&ordered), vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn anchor_stays_first_regardless_of_distance() {
        let provider = FixedDistances::new(&[
            ("place_id:a", "place_id:b", 9.0),
            ("place_id:a", "place_id:c", 1.0),
            ("place_id:b", "place_id:c", 5.0),
        ]);

        let ordered = order_from_anchor(
            &provider,
            vec![destination("a"), destination("b"), destination("c")],
        )
        .await
        .unwrap();

        assert_eq!(place_ids(&ordered), vec!["a", "c", "b"]);
    }

    #[tokio::test]
    async fn result_is_a_permutation_of_the_input() {
        let provider = FixedDistances::new(&[
            ("0,0", "place_id:a", 4.0),
            ("0,0", "place_id:b", 8.0),
            ("0,0", "place_id:c", 2.0),
            ("0,0", "place_id:d", 6.0),
            ("place_id:a", "place_id:b", 3.0),
            ("place_id:a", "place_id:c", 9.0),
            ("place_id:a", "place_id:d", 7.0),
            ("place_id:b", "place_id:c", 5.0),
            ("place_id:b", "place_id:d", 1.0),
            ("place_id:c", "place_id:d", 8.0),
        ]);

        let origin = Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        };

        let input = vec![
            destination("a"),
            destination("b"),
            destination("c"),
            destination("d"),
        ];

        let ordered = order_from_point(&provider, origin, input).await.unwrap();

        assert_eq!(ordered.len(), 4);

        let unique: HashSet<&str> = place_ids(&ordered).into_iter().collect();
        assert_eq!(unique, HashSet::from(["a", "b", "c", "d"]));
    }

    #[tokio::test]
    async fn tie_breaks_to_input_order() {
        let provider = FixedDistances::new(&[
            ("0,0", "place_id:a", 5.0),
            ("0,0", "place_id:b", 5.0),
            ("place_id:a", "place_id:b", 1.0),
        ]);

        let origin = Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        };

        let ordered = order_from_point(&provider, origin, vec![destination("a"), destination("b")])
            .await
            .unwrap();

        assert_eq!(place_ids(&ordered), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn singleton_needs_no_provider_calls() {
        let provider = FixedDistances::new(&[]);

        let origin = Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        };

        let ordered = order_from_point(&provider, origin, vec![destination("a")])
            .await
            .unwrap();

        assert_eq!(place_ids(&ordered), vec!["a"]);
        assert_eq!(provider.calls(), 0);

        let ordered = order_from_anchor(&provider, vec![destination("a")])
            .await
            .unwrap();

        assert_eq!(place_ids(&ordered), vec!["a"]);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn empty_set_is_rejected_before_any_call() {
        let provider = FixedDistances::new(&[]);

        let origin = Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        };

        let err = order_from_point(&provider, origin, vec![]).await.unwrap_err();

        assert_eq!(err.code, 102);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn duplicate_place_ids_are_rejected_before_any_call() {
        let provider = FixedDistances::new(&[]);

        let err = order_from_anchor(&provider, vec![destination("a"), destination("a")])
            .await
            .unwrap_err();

        assert_eq!(err.code, 103);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn failed_lookup_aborts_the_whole_ordering() {
        // b-c missing: the second round of the chain cannot complete
        let provider = FixedDistances::new(&[
            ("place_id:a", "place_id:b", 2.0),
            ("place_id:a", "place_id:c", 4.0),
        ]);

        let err = order_from_anchor(
            &provider,
            vec![destination("a"), destination("b"), destination("c")],
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, 104);
    }
}
