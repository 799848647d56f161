//! Projection of routes onto map markers.
//!
//! Markers carry no navigation logic of their own: whoever renders the map
//! passes a callback to [`MapMarkers::select`] and decides what "view
//! details" means.

use crate::models::{Coordinates, Route, RouteId, RouteType};
use serde::Serialize;

/// Pin colour per route type
pub fn marker_color(route_type: &RouteType) -> &'static str {
    match route_type.as_str().to_lowercase().as_str() {
        "boulder" => "#ff6b6b",
        "sport" => "#4dabf7",
        "trad" => "#51cf66",
        "alpine" => "#9775fa",
        "tr" => "#ffd43b",
        _ => "#868e96",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker<'a> {
    pub id: &'a RouteId,
    pub position: Coordinates,
    pub color: &'static str,
    pub title: &'a str,
    /// e.g. `5.10a • Sport • 4.4★`
    pub summary: String,
}

/// Markers for the routes that can be placed on a map
#[derive(Debug, Clone, Default)]
pub struct MapMarkers<'a> {
    routes: Vec<&'a Route>,
    markers: Vec<MapMarker<'a>>,
}

impl<'a> MapMarkers<'a> {
    pub fn from_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = &'a Route>,
    {
        let mut placed = Vec::new();
        let mut markers = Vec::new();
        let mut skipped = 0usize;

        for route in routes {
            let Some(position) = route.coordinates() else {
                skipped += 1;
                continue;
            };
            markers.push(MapMarker {
                id: &route.id,
                position,
                color: marker_color(&route.route_type),
                title: &route.name,
                summary: format!(
                    "{} • {} • {:.1}★",
                    route.grade, route.route_type, route.stars
                ),
            });
            placed.push(route);
        }

        if skipped > 0 {
            tracing::warn!("{} routes have no coordinates and are not on the map", skipped);
        }

        MapMarkers {
            routes: placed,
            markers,
        }
    }

    pub fn markers(&self) -> &[MapMarker<'a>] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Hand the route behind marker `id` to `on_select`.
    /// Returns false when no marker has that id.
    pub fn select<F>(&self, id: &RouteId, mut on_select: F) -> bool
    where
        F: FnMut(&'a Route),
    {
        match self.routes.iter().find(|route| route.id == *id) {
            Some(route) => {
                on_select(*route);
                true
            }
            None => {
                tracing::debug!("No map marker for route {}", id);
                false
            }
        }
    }
}
