//! Static datasets: the route collection and the location hierarchy.
//!
//! Both are read once at startup. The catalog hands out read-only slices;
//! nothing downstream mutates them.

use crate::error::{AppError, Result};
use crate::models::{LocationHierarchy, Route};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: Vec<Route>,
    hierarchy: LocationHierarchy,
}

impl RouteCatalog {
    /// Build a catalog from already-parsed data, rejecting duplicate route ids
    pub fn new(routes: Vec<Route>, hierarchy: LocationHierarchy) -> Result<Self> {
        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            if !seen.insert(&route.id) {
                return Err(AppError::Dataset(format!(
                    "duplicate route id {}",
                    route.id
                )));
            }
        }

        Ok(RouteCatalog { routes, hierarchy })
    }

    pub fn load(routes_path: &Path, locations_path: &Path) -> Result<Self> {
        let routes = load_routes(routes_path)?;
        let hierarchy = load_hierarchy(locations_path)?;

        tracing::info!(
            "Loaded {} routes across {} regions",
            routes.len(),
            hierarchy.regions.len()
        );

        Self::new(routes, hierarchy)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn hierarchy(&self) -> &LocationHierarchy {
        &self.hierarchy
    }

    pub fn find(&self, id: &crate::models::RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == *id)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

pub fn load_routes(path: &Path) -> Result<Vec<Route>> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::Dataset(format!("cannot read routes from {}: {}", path.display(), e))
    })?;
    parse_routes(&json)
}

pub fn load_hierarchy(path: &Path) -> Result<LocationHierarchy> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::Dataset(format!(
            "cannot read location hierarchy from {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(serde_json::from_str(&json)?)
}

/// Parse a JSON array of routes, checking the numeric ranges the filters rely on
pub fn parse_routes(json: &str) -> Result<Vec<Route>> {
    let routes: Vec<Route> = serde_json::from_str(json)?;

    for route in &routes {
        if !(0.0..=5.0).contains(&route.stars) {
            return Err(AppError::Dataset(format!(
                "route {} has stars {} outside 0..=5",
                route.id, route.stars
            )));
        }
        if !route.length_ft.is_finite() || route.length_ft < 0.0 {
            return Err(AppError::Dataset(format!(
                "route {} has invalid lengthFt {}",
                route.id, route.length_ft
            )));
        }
        if route.lat.is_some() != route.lng.is_some() {
            tracing::warn!(
                "Route {} ({}) has only one of lat/lng; it will not be placed on the map",
                route.id,
                route.name
            );
        }
    }

    Ok(routes)
}
