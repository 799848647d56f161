//! Grade tables for the difficulty facet and the grade-badge heuristic.
//!
//! The two are deliberately separate. The facet uses closed, enumerated
//! grade lists per route type: a grade that is not listed (`5.15a`, `V13`)
//! never matches any tier. The badge uses numeric thresholds and classifies
//! any grade string. They can disagree.

use crate::models::{DifficultyTier, RouteType};

const YDS_BEGINNER: &[&str] = &["5.6", "5.7", "5.8", "5.9"];
const YDS_INTERMEDIATE: &[&str] = &["5.10a", "5.10b", "5.10c", "5.10d"];
const YDS_ADVANCED: &[&str] = &["5.11a", "5.11b", "5.11c", "5.11d"];
const YDS_EXPERT: &[&str] = &[
    "5.12a", "5.12b", "5.12c", "5.12d", "5.13a", "5.13b", "5.13c", "5.13d", "5.14a", "5.14b",
    "5.14c", "5.14d",
];

const V_BEGINNER: &[&str] = &["V0", "V1", "V2"];
const V_INTERMEDIATE: &[&str] = &["V3", "V4", "V5"];
const V_ADVANCED: &[&str] = &["V6", "V7", "V8"];
const V_EXPERT: &[&str] = &["V9", "V10", "V11", "V12"];

/// Grades that count as `tier` for routes of `route_type`.
///
/// Sport, Trad and Alpine share the YDS table, Boulder uses the V-scale
/// table, and any other type has no grades at all.
pub fn grades_for_tier(tier: DifficultyTier, route_type: &RouteType) -> &'static [&'static str] {
    if route_type.uses_yds() {
        match tier {
            DifficultyTier::Beginner => YDS_BEGINNER,
            DifficultyTier::Intermediate => YDS_INTERMEDIATE,
            DifficultyTier::Advanced => YDS_ADVANCED,
            DifficultyTier::Expert => YDS_EXPERT,
        }
    } else if *route_type == RouteType::Boulder {
        match tier {
            DifficultyTier::Beginner => V_BEGINNER,
            DifficultyTier::Intermediate => V_INTERMEDIATE,
            DifficultyTier::Advanced => V_ADVANCED,
            DifficultyTier::Expert => V_EXPERT,
        }
    } else {
        &[]
    }
}

/// Exact membership test against [`grades_for_tier`]
pub fn grade_in_tier(grade: &str, tier: DifficultyTier, route_type: &RouteType) -> bool {
    grades_for_tier(tier, route_type).contains(&grade)
}

/// Tier shown on a route's grade badge.
///
/// YDS: the number after `5.` below 10 is beginner, below 11 intermediate,
/// below 12 advanced, otherwise expert. V-scale: up to 2 beginner, up to 5
/// intermediate, up to 8 advanced, otherwise expert. A number that cannot
/// be read falls through every threshold to expert; other notations are
/// intermediate.
pub fn badge_difficulty(grade: &str) -> DifficultyTier {
    if let Some(rest) = grade.strip_prefix("5.") {
        return match leading_decimal(rest) {
            Some(n) if n < 10.0 => DifficultyTier::Beginner,
            Some(n) if n < 11.0 => DifficultyTier::Intermediate,
            Some(n) if n < 12.0 => DifficultyTier::Advanced,
            _ => DifficultyTier::Expert,
        };
    }

    if let Some(rest) = grade.strip_prefix('V') {
        return match leading_integer(rest) {
            Some(n) if n <= 2 => DifficultyTier::Beginner,
            Some(n) if n <= 5 => DifficultyTier::Intermediate,
            Some(n) if n <= 8 => DifficultyTier::Advanced,
            _ => DifficultyTier::Expert,
        };
    }

    DifficultyTier::Intermediate
}

/// Longest numeric prefix, e.g. `"10a"` -> 10, `"9+"` -> 9
fn leading_decimal(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() {
            end = i + 1;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
    }
    s[..end].parse().ok()
}

fn leading_integer(s: &str) -> Option<i64> {
    let end = s
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && *c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}
