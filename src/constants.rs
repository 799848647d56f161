//! Stable application-wide constants.
//!
//! Values here are fixed thresholds of the filtering rules and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For values that differ per deployment, see [`Config`](crate::config::Config).

// --- Dataset defaults (used when ONSIGHT_*_PATH env vars are absent) ---

/// Default location of the route collection.
pub const DEFAULT_ROUTES_PATH: &str = "data/routes.json";
/// Default location of the region/area/crag hierarchy.
pub const DEFAULT_LOCATIONS_PATH: &str = "data/locationHierarchy.json";

// --- Distance ---

/// Mean Earth radius in miles used by the Haversine formula.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;
/// Feet per statute mile. Distances under one mile are shown in feet.
pub const FEET_PER_MILE: f64 = 5280.0;
/// Distances at or above this many miles are shown as whole miles.
pub const WHOLE_MILES_THRESHOLD: f64 = 10.0;

// --- Length facet buckets (feet) ---

/// Routes shorter than this are "short".
pub const SHORT_ROUTE_MAX_FT: f64 = 100.0;
/// Routes at least `SHORT_ROUTE_MAX_FT` and shorter than this are "medium";
/// anything at or above is "long".
pub const MEDIUM_ROUTE_MAX_FT: f64 = 300.0;

// --- Rating facet ---

/// Rating value that imposes no constraint.
pub const ANY_RATING: &str = "Any rating";

// --- Location keys ---

/// Separator between region, area and crag in a location key.
pub const LOCATION_KEY_SEPARATOR: char = '|';
/// Crag component selecting every crag under an area.
pub const ALL_CRAGS: &str = "all";

// --- Pagination ---

/// Routes per list page. Overridden by `ONSIGHT_PAGE_SIZE`.
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Page strips longer than this collapse into first/window/last with ellipses.
pub const MAX_PAGE_BUTTONS: usize = 5;

// --- Detail view ---

/// Nearby routes listed under a route's detail view.
pub const NEARBY_ROUTES_LIMIT: usize = 2;

// --- Geolocation defaults ---

/// Give up on the platform location query after this many seconds.
pub const DEFAULT_GEOLOCATION_TIMEOUT_SECONDS: u64 = 10;
/// Reuse a previous location fix for this long (5 minutes).
pub const DEFAULT_GEOLOCATION_MAX_AGE_SECONDS: u64 = 300;
