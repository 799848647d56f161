pub mod coordinates;
pub mod difficulty;
pub mod distance;
pub mod filter;
pub mod location;
pub mod route;

pub use coordinates::Coordinates;
pub use difficulty::DifficultyTier;
pub use distance::DistanceMiles;
pub use filter::{FilterState, LengthBucket, RatingFilter, Selected};
pub use location::{AreaNode, CragSelector, LocationHierarchy, LocationKey, RegionNode};
pub use route::{Route, RouteId, RouteType};
