use crate::models::{Coordinates, DistanceMiles, Route};
use serde::Serialize;

/// A route paired with its distance from the user, if one was computed
#[derive(Debug, Clone, Serialize)]
pub struct RankedRoute<'a> {
    #[serde(flatten)]
    pub route: &'a Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<DistanceMiles>,
}

/// Great-circle distance in miles between two points given in degrees
pub fn calculate_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    Coordinates {
        lat: lat1,
        lng: lng1,
    }
    .distance_to(&Coordinates {
        lat: lat2,
        lng: lng2,
    })
}

/// Sort routes nearest-first from `origin`.
///
/// Without an origin the input order is kept and no distance is attached.
/// Routes lacking coordinates, or with coordinates that yield no finite
/// distance, get no distance and sort after all others.
/// The sort is stable, so equal distances keep their input order.
pub fn rank_by_distance<'a, I>(routes: I, origin: Option<Coordinates>) -> Vec<RankedRoute<'a>>
where
    I: IntoIterator<Item = &'a Route>,
{
    let Some(origin) = origin else {
        return routes
            .into_iter()
            .map(|route| RankedRoute {
                route,
                distance: None,
            })
            .collect();
    };

    let mut ranked: Vec<RankedRoute<'a>> = routes
        .into_iter()
        .map(|route| RankedRoute {
            route,
            distance: route
                .coordinates()
                .and_then(|coords| DistanceMiles::new(origin.distance_to(&coords)).ok()),
        })
        .collect();

    ranked.sort_by(|a, b| DistanceMiles::cmp_optional(a.distance, b.distance));

    let unplaced = ranked.iter().filter(|r| r.distance.is_none()).count();
    if unplaced > 0 {
        tracing::debug!(
            "{} of {} routes have no coordinates and were ranked last",
            unplaced,
            ranked.len()
        );
    }

    ranked
}

/// Other routes closest to `target`, nearest first.
///
/// Empty when `target` itself has no coordinates. Routes without
/// coordinates and `target` itself (by id) are left out.
pub fn nearby_routes<'a>(target: &Route, routes: &'a [Route], limit: usize) -> Vec<RankedRoute<'a>> {
    let Some(origin) = target.coordinates() else {
        return Vec::new();
    };

    let candidates = routes
        .iter()
        .filter(|route| route.id != target.id && route.coordinates().is_some());

    let mut ranked = rank_by_distance(candidates, Some(origin));
    ranked.truncate(limit);
    ranked
}

/// User-facing distance: feet under a mile, one decimal under ten miles,
/// whole miles beyond
pub fn format_distance(miles: f64) -> String {
    DistanceMiles(miles).to_string()
}
