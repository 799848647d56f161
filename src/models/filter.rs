use crate::constants::{ANY_RATING, MEDIUM_ROUTE_MAX_FT, SHORT_ROUTE_MAX_FT};
use crate::models::{DifficultyTier, LocationKey, Route, RouteType};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A facet entry as chosen in the UI.
///
/// Labels that do not parse are kept as `Unrecognized` so that they still
/// count as a selection but match no route. Dropping them instead would
/// turn a facet holding only an unknown label into an empty facet, which
/// imposes no constraint at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selected<T> {
    Known(T),
    Unrecognized(String),
}

impl<T> Selected<T> {
    pub fn known(&self) -> Option<&T> {
        match self {
            Selected::Known(value) => Some(value),
            Selected::Unrecognized(_) => None,
        }
    }
}

impl<T: FromStr> Selected<T> {
    pub fn parse(label: &str) -> Self {
        match label.parse() {
            Ok(value) => Selected::Known(value),
            Err(_) => Selected::Unrecognized(label.to_string()),
        }
    }
}

impl<T> From<T> for Selected<T> {
    fn from(value: T) -> Self {
        Selected::Known(value)
    }
}

impl<T: fmt::Display> fmt::Display for Selected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selected::Known(value) => write!(f, "{}", value),
            Selected::Unrecognized(label) => write!(f, "{}", label),
        }
    }
}

impl<T: fmt::Display> Serialize for Selected<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Selected<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Selected::parse(&label))
    }
}

/// Size range for the length facet, keyed off `lengthFt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthBucket {
    /// Under 100 ft
    Short,
    /// 100 ft up to (not including) 300 ft
    Medium,
    /// 300 ft and more
    Long,
}

impl LengthBucket {
    pub const ALL: [LengthBucket; 3] = [LengthBucket::Short, LengthBucket::Medium, LengthBucket::Long];

    pub fn contains(&self, length_ft: f64) -> bool {
        match self {
            LengthBucket::Short => length_ft < SHORT_ROUTE_MAX_FT,
            LengthBucket::Medium => {
                length_ft >= SHORT_ROUTE_MAX_FT && length_ft < MEDIUM_ROUTE_MAX_FT
            }
            LengthBucket::Long => length_ft >= MEDIUM_ROUTE_MAX_FT,
        }
    }

    /// Human-readable label used for filter chips
    pub fn label(&self) -> &'static str {
        match self {
            LengthBucket::Short => "Short (<100ft)",
            LengthBucket::Medium => "Medium (100-300ft)",
            LengthBucket::Long => "Long (300ft+)",
        }
    }
}

impl fmt::Display for LengthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LengthBucket::Short => "short",
            LengthBucket::Medium => "medium",
            LengthBucket::Long => "long",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for LengthBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(LengthBucket::Short),
            "medium" => Ok(LengthBucket::Medium),
            "long" => Ok(LengthBucket::Long),
            _ => Err(format!("Invalid length bucket: {}", s)),
        }
    }
}

/// Minimum-stars facet: `"Any rating"` or `"N+ stars"`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RatingFilter {
    #[default]
    Any,
    AtLeast(f64),
    /// A label that could not be read; matches nothing
    Unrecognized(String),
}

impl RatingFilter {
    pub fn is_any(&self) -> bool {
        matches!(self, RatingFilter::Any)
    }

    pub fn matches(&self, stars: f64) -> bool {
        match self {
            RatingFilter::Any => true,
            RatingFilter::AtLeast(min) => stars >= *min,
            RatingFilter::Unrecognized(_) => false,
        }
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::Any => write!(f, "{}", ANY_RATING),
            RatingFilter::AtLeast(min) => write!(f, "{}+ stars", min),
            RatingFilter::Unrecognized(label) => write!(f, "{}", label),
        }
    }
}

impl From<&str> for RatingFilter {
    /// Reads the leading number of `"4+ stars"`, `"4+"` or `"4 stars"`; the
    /// empty string counts as no constraint.
    fn from(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed == ANY_RATING {
            return RatingFilter::Any;
        }

        let parsed = trimmed
            .split(|c: char| c == '+' || c.is_whitespace())
            .next()
            .and_then(|number| number.parse::<f64>().ok())
            .filter(|min| min.is_finite());

        match parsed {
            Some(min) => RatingFilter::AtLeast(min),
            None => RatingFilter::Unrecognized(label.to_string()),
        }
    }
}

impl Serialize for RatingFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RatingFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(RatingFilter::from(label.as_str()))
    }
}

/// The five independent facets. An empty facet imposes no constraint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub locations: Vec<Selected<LocationKey>>,
    pub types: Vec<RouteType>,
    pub difficulties: Vec<Selected<DifficultyTier>>,
    pub lengths: Vec<Selected<LengthBucket>>,
    pub rating: RatingFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, key: LocationKey) -> Self {
        self.toggle_location(Selected::Known(key));
        self
    }

    pub fn with_type(mut self, route_type: RouteType) -> Self {
        self.toggle_type(route_type);
        self
    }

    pub fn with_difficulty(mut self, tier: DifficultyTier) -> Self {
        self.toggle_difficulty(Selected::Known(tier));
        self
    }

    pub fn with_length(mut self, bucket: LengthBucket) -> Self {
        self.toggle_length(Selected::Known(bucket));
        self
    }

    pub fn with_rating(mut self, rating: RatingFilter) -> Self {
        self.rating = rating;
        self
    }

    /// Add the key if absent, remove it if present
    pub fn toggle_location(&mut self, key: Selected<LocationKey>) {
        toggle(&mut self.locations, key);
    }

    pub fn toggle_type(&mut self, route_type: RouteType) {
        toggle(&mut self.types, route_type);
    }

    pub fn toggle_difficulty(&mut self, tier: Selected<DifficultyTier>) {
        toggle(&mut self.difficulties, tier);
    }

    pub fn toggle_length(&mut self, bucket: Selected<LengthBucket>) {
        toggle(&mut self.lengths, bucket);
    }

    pub fn set_rating(&mut self, rating: RatingFilter) {
        self.rating = rating;
    }

    /// Reset every facet
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of selected values across all facets
    pub fn active_count(&self) -> usize {
        self.locations.len()
            + self.types.len()
            + self.difficulties.len()
            + self.lengths.len()
            + usize::from(!self.rating.is_any())
    }

    pub(crate) fn matches_location(&self, route: &Route) -> bool {
        self.locations.is_empty()
            || self
                .locations
                .iter()
                .filter_map(Selected::known)
                .any(|key| key.matches(route))
    }

    pub(crate) fn matches_type(&self, route: &Route) -> bool {
        self.types.is_empty() || self.types.contains(&route.route_type)
    }

    pub(crate) fn matches_length(&self, route: &Route) -> bool {
        self.lengths.is_empty()
            || self
                .lengths
                .iter()
                .filter_map(Selected::known)
                .any(|bucket| bucket.contains(route.length_ft))
    }

    pub(crate) fn matches_rating(&self, route: &Route) -> bool {
        self.rating.matches(route.stars)
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}
