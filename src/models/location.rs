use crate::constants::{ALL_CRAGS, LOCATION_KEY_SEPARATOR};
use crate::models::Route;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Which crags under an area a location key selects
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CragSelector {
    All,
    Named(String),
}

/// A location facet entry: `region|area|crag` or `region|area|all`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationKey {
    pub region: String,
    pub area: String,
    pub crag: CragSelector,
}

impl LocationKey {
    /// Key selecting every crag under `region`/`area`
    pub fn area(region: &str, area: &str) -> Self {
        LocationKey {
            region: region.to_string(),
            area: area.to_string(),
            crag: CragSelector::All,
        }
    }

    /// Key selecting a single crag
    pub fn crag(region: &str, area: &str, crag: &str) -> Self {
        LocationKey {
            region: region.to_string(),
            area: area.to_string(),
            crag: CragSelector::Named(crag.to_string()),
        }
    }

    pub fn matches(&self, route: &Route) -> bool {
        if route.region != self.region || route.area != self.area {
            return false;
        }
        match &self.crag {
            CragSelector::All => true,
            CragSelector::Named(crag) => route.crag == *crag,
        }
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crag = match &self.crag {
            CragSelector::All => ALL_CRAGS,
            CragSelector::Named(crag) => crag.as_str(),
        };
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.region,
            self.area,
            crag,
            sep = LOCATION_KEY_SEPARATOR
        )
    }
}

impl FromStr for LocationKey {
    type Err = String;

    /// Only the first three parts are read; anything after is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(LOCATION_KEY_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(region), Some(area), Some(crag)) if crag == ALL_CRAGS => {
                Ok(LocationKey::area(region, area))
            }
            (Some(region), Some(area), Some(crag)) => Ok(LocationKey::crag(region, area, crag)),
            _ => Err(format!("Invalid location key: '{}'", s)),
        }
    }
}

/// Static region → area → crag tree that drives the location picker.
///
/// Entries keep the order of the source document. Nothing checks that
/// the routes actually reference these names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationHierarchy {
    #[serde(
        serialize_with = "serialize_ordered",
        deserialize_with = "deserialize_ordered"
    )]
    pub regions: Vec<(String, RegionNode)>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionNode {
    #[serde(
        serialize_with = "serialize_ordered",
        deserialize_with = "deserialize_ordered"
    )]
    pub areas: Vec<(String, AreaNode)>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaNode {
    pub crags: Vec<String>,
}

impl LocationHierarchy {
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|(name, _)| name.as_str())
    }

    pub fn region(&self, region: &str) -> Option<&RegionNode> {
        self.regions
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, node)| node)
    }

    pub fn area(&self, region: &str, area: &str) -> Option<&AreaNode> {
        self.region(region)?
            .areas
            .iter()
            .find(|(name, _)| name == area)
            .map(|(_, node)| node)
    }

    /// Every selectable key: one `region|area|all` per area followed by its crags
    pub fn location_keys(&self) -> Vec<LocationKey> {
        let mut keys = Vec::new();
        for (region, region_node) in &self.regions {
            for (area, area_node) in &region_node.areas {
                keys.push(LocationKey::area(region, area));
                for crag in &area_node.crags {
                    keys.push(LocationKey::crag(region, area, crag));
                }
            }
        }
        keys
    }
}

/// Routes in a region, counted from the route collection
pub fn region_count(routes: &[Route], region: &str) -> usize {
    routes.iter().filter(|r| r.region == region).count()
}

pub fn area_count(routes: &[Route], region: &str, area: &str) -> usize {
    routes
        .iter()
        .filter(|r| r.region == region && r.area == area)
        .count()
}

pub fn crag_count(routes: &[Route], region: &str, area: &str, crag: &str) -> usize {
    routes
        .iter()
        .filter(|r| r.region == region && r.area == area && r.crag == crag)
        .count()
}

fn serialize_ordered<S, T>(entries: &[(String, T)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

fn deserialize_ordered<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OrderedVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of names to location nodes")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, T>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedVisitor(PhantomData))
}
