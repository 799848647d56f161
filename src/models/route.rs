use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Route identifier. The dataset uses integers, but string ids are accepted too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RouteId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteId::Int(id) => write!(f, "{}", id),
            RouteId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for RouteId {
    fn from(id: i64) -> Self {
        RouteId::Int(id)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        RouteId::Text(id.to_string())
    }
}

/// Climbing discipline. Names outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteType {
    Boulder,
    Sport,
    Trad,
    Alpine,
    Other(String),
}

impl RouteType {
    /// Whether grades for this type are written in YDS (`5.10a`) rather than V-scale
    pub fn uses_yds(&self) -> bool {
        matches!(self, RouteType::Sport | RouteType::Trad | RouteType::Alpine)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RouteType::Boulder => "Boulder",
            RouteType::Sport => "Sport",
            RouteType::Trad => "Trad",
            RouteType::Alpine => "Alpine",
            RouteType::Other(name) => name,
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<&str> for RouteType {
    /// Case-sensitive: `"sport"` is not `Sport`.
    fn from(s: &str) -> Self {
        match s {
            "Boulder" => RouteType::Boulder,
            "Sport" => RouteType::Sport,
            "Trad" => RouteType::Trad,
            "Alpine" => RouteType::Alpine,
            other => RouteType::Other(other.to_string()),
        }
    }
}

impl FromStr for RouteType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RouteType::from(s))
    }
}

impl Serialize for RouteType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RouteType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(RouteType::from(s.as_str()))
    }
}

/// One climbing route as stored in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: RouteId,
    pub name: String,
    #[serde(rename = "type")]
    pub route_type: RouteType,
    /// YDS (`5.10a`) or V-scale (`V4`), depending on `route_type`
    pub grade: String,
    pub region: String,
    pub area: String,
    pub crag: String,
    #[serde(default = "default_pitches")]
    pub pitches: u32,
    pub length_ft: f64,
    /// Average rating in [0, 5]
    pub stars: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_pitches() -> u32 {
    1
}

impl Route {
    /// Coordinates of the route, if both latitude and longitude are present
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }

    /// Whether `needle` (already lower-cased) occurs in any searchable field
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        [
            self.name.as_str(),
            self.area.as_str(),
            self.crag.as_str(),
            self.region.as_str(),
            self.route_type.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}
