//! Plain-text rendering of a result page for the terminal.

use crate::models::Route;
use crate::services::grades::badge_difficulty;
use crate::services::{FilterChip, Page, PageLink, RankedRoute};

pub fn format_report(
    page: &Page<RankedRoute<'_>>,
    chips: &[FilterChip],
    links: &[PageLink],
) -> String {
    let mut report = format!("=== {} routes found ===\n", page.total_items);

    if !chips.is_empty() {
        let labels: Vec<&str> = chips.iter().map(|c| c.label.as_str()).collect();
        report.push_str(&format!("Filters: {}\n", labels.join(", ")));
    }
    report.push('\n');

    if page.items.is_empty() {
        report.push_str("No routes match the current filters.\n");
        return report;
    }

    for ranked in &page.items {
        report.push_str(&format_route_line(ranked));
    }

    if page.total_pages > 1 {
        report.push_str(&format!("\nPage: {}\n", format_page_strip(links, page.page)));
    }

    report
}

fn format_route_line(ranked: &RankedRoute<'_>) -> String {
    let route = ranked.route;
    let distance = ranked
        .distance
        .map(|d| format!("  {}", d))
        .unwrap_or_default();

    format!(
        "{:<28} {:<7} {:<8} {:<12} {:.1}★ ({})  {} > {} > {}{}\n",
        route.name,
        route.grade,
        route.route_type,
        badge_difficulty(&route.grade),
        route.stars,
        route.review_count,
        route.region,
        route.area,
        route.crag,
        distance
    )
}

/// Detail view of one route, followed by the routes closest to it
pub fn format_route_detail(route: &Route, nearby: &[RankedRoute<'_>]) -> String {
    let mut detail = format!(
        "=== {} ===\n{} {} ({})\n{} > {} > {}\n",
        route.name,
        route.grade,
        route.route_type,
        badge_difficulty(&route.grade),
        route.region,
        route.area,
        route.crag
    );

    let pitches = if route.pitches == 1 { "pitch" } else { "pitches" };
    detail.push_str(&format!(
        "{} {}, {} ft, {:.1}★ from {} reviews\n",
        route.pitches, pitches, route.length_ft, route.stars, route.review_count
    ));

    if !route.features.is_empty() {
        detail.push_str(&format!("Features: {}\n", route.features.join(", ")));
    }
    if let Some(description) = &route.description {
        detail.push_str(&format!("\n{}\n", description));
    }

    if !nearby.is_empty() {
        detail.push_str("\nNearby:\n");
        for ranked in nearby {
            detail.push_str(&format_route_line(ranked));
        }
    }

    detail
}

/// `1 … 4 [5] 6 … 12`
pub fn format_page_strip(links: &[PageLink], current: usize) -> String {
    links
        .iter()
        .map(|link| match link {
            PageLink::Number(n) if *n == current => format!("[{}]", n),
            PageLink::Number(n) => n.to_string(),
            PageLink::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
