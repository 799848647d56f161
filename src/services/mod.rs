pub mod distance_ranker;
pub mod filter_chips;
pub mod geolocation;
pub mod grades;
pub mod markers;
pub mod pagination;
pub mod route_filter;

pub use distance_ranker::{format_distance, nearby_routes, rank_by_distance, RankedRoute};
pub use filter_chips::{active_chips, remove_chip, Facet, FilterChip};
pub use geolocation::{
    CachedLocationProvider, FixedLocationProvider, GeolocationOptions, LocationProvider,
    UnsupportedLocationProvider,
};
pub use markers::{MapMarker, MapMarkers};
pub use pagination::{page_numbers, Page, PageLink};
pub use route_filter::{filter_routes, match_count};
