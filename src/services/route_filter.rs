//! Filter engine: narrows a route collection by free-text search and the
//! five facets of a [`FilterState`].
//!
//! Every step is a pure intersection, so the order the facets run in does not
//! change the result. Relative order of the input is always preserved.

use crate::models::{FilterState, Route, Selected};
use crate::services::grades::grade_in_tier;

/// Routes that pass the search query and every active facet, in input order.
///
/// Never fails: unknown labels in a facet simply match nothing.
pub fn filter_routes<'a>(
    routes: &'a [Route],
    filters: &FilterState,
    search_query: &str,
) -> Vec<&'a Route> {
    let search = SearchQuery::new(search_query);

    let filtered: Vec<&Route> = routes
        .iter()
        .filter(|route| search.matches(route))
        .filter(|route| filters.matches_location(route))
        .filter(|route| filters.matches_type(route))
        .filter(|route| matches_difficulty(filters, route))
        .filter(|route| filters.matches_length(route))
        .filter(|route| filters.matches_rating(route))
        .collect();

    tracing::debug!(
        "Filtered {} routes down to {} ({} active facet values, search: {:?})",
        routes.len(),
        filtered.len(),
        filters.active_count(),
        search_query
    );

    filtered
}

/// Number of routes a (possibly draft) filter state would show
pub fn match_count(routes: &[Route], filters: &FilterState, search_query: &str) -> usize {
    let search = SearchQuery::new(search_query);
    routes
        .iter()
        .filter(|route| search.matches(route) && route_matches(filters, route))
        .count()
}

/// Whether a single route passes every facet of `filters` (search not included)
pub fn route_matches(filters: &FilterState, route: &Route) -> bool {
    filters.matches_location(route)
        && filters.matches_type(route)
        && matches_difficulty(filters, route)
        && filters.matches_length(route)
        && filters.matches_rating(route)
}

fn matches_difficulty(filters: &FilterState, route: &Route) -> bool {
    filters.difficulties.is_empty()
        || filters
            .difficulties
            .iter()
            .filter_map(Selected::known)
            .any(|tier| grade_in_tier(&route.grade, *tier, &route.route_type))
}

/// Case-insensitive substring search over name, area, crag, region and type.
/// Blank queries match everything.
struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    fn new(query: &str) -> Self {
        let needle = if query.trim().is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };
        SearchQuery { needle }
    }

    fn matches(&self, route: &Route) -> bool {
        match &self.needle {
            Some(needle) => route.matches_search(needle),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DifficultyTier, LengthBucket, LocationKey, RatingFilter, RouteId, RouteType,
    };

    fn route(id: i64, name: &str, route_type: &str, grade: &str, crag: &str) -> Route {
        Route {
            id: RouteId::Int(id),
            name: name.to_string(),
            route_type: RouteType::from(route_type),
            grade: grade.to_string(),
            region: "Yosemite".to_string(),
            area: "Valley".to_string(),
            crag: crag.to_string(),
            pitches: 1,
            length_ft: 80.0,
            stars: 3.0,
            review_count: 10,
            lat: None,
            lng: None,
            features: vec![],
            description: None,
        }
    }

    fn ids(routes: &[&Route]) -> Vec<RouteId> {
        routes.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_empty_filters_are_identity() {
        let routes = vec![
            route(1, "A", "Sport", "5.9", "X"),
            route(2, "B", "Boulder", "V4", "Y"),
        ];
        let result = filter_routes(&routes, &FilterState::default(), "");
        assert_eq!(ids(&result), vec![RouteId::Int(1), RouteId::Int(2)]);

        let result = filter_routes(&routes, &FilterState::default(), "   ");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let routes = vec![
            route(1, "Separate Reality", "Trad", "5.11d", "Cookie"),
            route(2, "Midnight Lightning", "Boulder", "V8", "Camp 4"),
        ];

        let result = filter_routes(&routes, &FilterState::default(), "REALITY");
        assert_eq!(ids(&result), vec![RouteId::Int(1)]);

        let result = filter_routes(&routes, &FilterState::default(), "camp");
        assert_eq!(ids(&result), vec![RouteId::Int(2)]);

        let result = filter_routes(&routes, &FilterState::default(), "boulder");
        assert_eq!(ids(&result), vec![RouteId::Int(2)]);

        let result = filter_routes(&routes, &FilterState::default(), "valley");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_search_keeps_inner_whitespace() {
        let routes = vec![route(1, "Separate Reality", "Trad", "5.11d", "Cookie")];
        assert_eq!(
            filter_routes(&routes, &FilterState::default(), "separate reality").len(),
            1
        );
        assert!(filter_routes(&routes, &FilterState::default(), "reality ").is_empty());
    }

    #[test]
    fn test_difficulty_uses_route_type_table() {
        let routes = vec![
            route(1, "A", "Sport", "5.10b", "X"),
            route(2, "B", "Boulder", "V4", "X"),
            route(3, "C", "Boulder", "5.10b", "X"),
            route(4, "D", "Ice", "5.10b", "X"),
        ];
        let filters = FilterState::new().with_difficulty(DifficultyTier::Intermediate);

        let result = filter_routes(&routes, &filters, "");
        assert_eq!(ids(&result), vec![RouteId::Int(1), RouteId::Int(2)]);
    }

    #[test]
    fn test_difficulty_is_exact_membership() {
        let routes = vec![
            route(1, "A", "Sport", "5.15a", "X"),
            route(2, "B", "Sport", "5.12a", "X"),
        ];
        let filters = FilterState::new().with_difficulty(DifficultyTier::Expert);

        let result = filter_routes(&routes, &filters, "");
        assert_eq!(ids(&result), vec![RouteId::Int(2)]);
    }

    #[test]
    fn test_unknown_labels_never_widen() {
        let routes = vec![route(1, "A", "Sport", "5.9", "X")];

        let mut filters = FilterState::new();
        filters.toggle_difficulty(Selected::parse("Elite"));
        assert!(filter_routes(&routes, &filters, "").is_empty());

        let mut filters = FilterState::new();
        filters.toggle_length(Selected::parse("1 pitch"));
        assert!(filter_routes(&routes, &filters, "").is_empty());

        let mut filters = FilterState::new();
        filters.toggle_location(Selected::parse("Yosemite"));
        assert!(filter_routes(&routes, &filters, "").is_empty());

        let filters = FilterState::new().with_rating(RatingFilter::from("great"));
        assert!(filter_routes(&routes, &filters, "").is_empty());
    }

    #[test]
    fn test_unknown_label_alongside_known_one() {
        let routes = vec![
            route(1, "A", "Sport", "5.9", "X"),
            route(2, "B", "Sport", "5.11a", "X"),
        ];
        let mut filters = FilterState::new().with_difficulty(DifficultyTier::Beginner);
        filters.toggle_difficulty(Selected::parse("Elite"));

        let result = filter_routes(&routes, &filters, "");
        assert_eq!(ids(&result), vec![RouteId::Int(1)]);
    }

    #[test]
    fn test_location_or_semantics() {
        let routes = vec![
            route(1, "A", "Sport", "5.9", "El Cap"),
            route(2, "B", "Sport", "5.9", "Half Dome"),
            route(3, "C", "Sport", "5.9", "Cookie"),
        ];
        let filters = FilterState::new()
            .with_location(LocationKey::crag("Yosemite", "Valley", "El Cap"))
            .with_location(LocationKey::crag("Yosemite", "Valley", "Cookie"));

        let result = filter_routes(&routes, &filters, "");
        assert_eq!(ids(&result), vec![RouteId::Int(1), RouteId::Int(3)]);
    }

    #[test]
    fn test_length_and_rating() {
        let mut short = route(1, "A", "Sport", "5.9", "X");
        short.length_ft = 60.0;
        short.stars = 2.5;
        let mut long = route(2, "B", "Trad", "5.9", "X");
        long.length_ft = 1200.0;
        long.stars = 4.0;

        let routes = vec![short, long];

        let filters = FilterState::new().with_length(LengthBucket::Long);
        assert_eq!(ids(&filter_routes(&routes, &filters, "")), vec![RouteId::Int(2)]);

        let filters = FilterState::new().with_rating(RatingFilter::AtLeast(2.5));
        assert_eq!(filter_routes(&routes, &filters, "").len(), 2);

        let filters = FilterState::new().with_rating(RatingFilter::AtLeast(3.0));
        assert_eq!(ids(&filter_routes(&routes, &filters, "")), vec![RouteId::Int(2)]);
    }

    #[test]
    fn test_match_count_agrees_with_filter() {
        let routes = vec![
            route(1, "A", "Sport", "5.9", "X"),
            route(2, "B", "Boulder", "V1", "X"),
            route(3, "C", "Trad", "5.12a", "X"),
        ];
        let filters = FilterState::new()
            .with_difficulty(DifficultyTier::Beginner)
            .with_type(RouteType::Boulder);

        assert_eq!(match_count(&routes, &filters, ""), 1);
        assert_eq!(
            match_count(&routes, &filters, "b"),
            filter_routes(&routes, &filters, "b").len()
        );
    }
}
