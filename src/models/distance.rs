use crate::constants::{FEET_PER_MILE, WHOLE_MILES_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Distance in miles
/// Prevents mixing up units; `Display` renders the user-facing form
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceMiles(pub f64);

impl DistanceMiles {
    pub fn new(miles: f64) -> Result<Self, String> {
        if miles < 0.0 {
            return Err("Distance cannot be negative".to_string());
        }
        if !miles.is_finite() {
            return Err("Distance must be a finite number".to_string());
        }
        Ok(DistanceMiles(miles))
    }

    /// Get the raw miles value
    pub fn as_miles(self) -> f64 {
        self.0
    }

    pub fn as_feet(self) -> f64 {
        self.0 * FEET_PER_MILE
    }

    /// Total order used for ranking. `None` (no coordinates) sorts after
    /// every known distance.
    pub fn cmp_optional(a: Option<Self>, b: Option<Self>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => a.0.total_cmp(&b.0),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for DistanceMiles {
    /// Under a mile: whole feet. Under ten miles: one decimal. Otherwise whole miles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let miles = self.0;
        if miles < 1.0 {
            write!(f, "{} ft", self.as_feet().round() as i64)
        } else if miles < WHOLE_MILES_THRESHOLD {
            // Round half away from zero on the tenths so 5.25 shows as 5.3
            write!(f, "{:.1} mi", (miles * 10.0).round() / 10.0)
        } else {
            write!(f, "{} mi", miles.round() as i64)
        }
    }
}
