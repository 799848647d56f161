use onsight::config::Config;
use onsight::constants::NEARBY_ROUTES_LIMIT;
use onsight::models::{
    Coordinates, DifficultyTier, FilterState, RatingFilter, RouteId, RouteType, Selected,
};
use onsight::report::{format_report, format_route_detail};
use onsight::services::{
    active_chips, filter_routes, nearby_routes, page_numbers, rank_by_distance,
    CachedLocationProvider, FixedLocationProvider, GeolocationOptions, LocationProvider, Page,
};
use onsight::{AppError, RouteCatalog};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: onsight [OPTIONS]

Options:
  --search=TEXT         Match TEXT in name, area, crag, region or type
  --location=KEY        REGION|AREA|CRAG or REGION|AREA|all (repeatable)
  --type=TYPE           Boulder, Sport, Trad, Alpine, ... (repeatable)
  --difficulty=TIER     beginner, intermediate, advanced, expert (repeatable)
  --length=BUCKET       short, medium, long (repeatable)
  --rating=LABEL        e.g. \"4+ stars\" (default: Any rating)
  --near=LAT,LNG        Sort by distance from this point
  --page=N              Page to show (default: 1)
  --route=ID            Show one route and the routes nearest to it
  --json                Output the page as JSON
  --help                Show this help message

Difficulty tiers:"
    );
    for tier in DifficultyTier::ALL {
        eprintln!("  {:<20}{}", tier.to_string().to_lowercase(), tier.description());
    }
}

/// Build a filter state from repeated `--facet=value` flags
fn parse_filters(args: &[String]) -> FilterState {
    let mut filters = FilterState::new();

    for arg in args {
        if let Some(key) = arg.strip_prefix("--location=") {
            filters.locations.push(Selected::parse(key));
        } else if let Some(route_type) = arg.strip_prefix("--type=") {
            filters.types.push(RouteType::from(route_type));
        } else if let Some(tier) = arg.strip_prefix("--difficulty=") {
            filters.difficulties.push(Selected::parse(tier));
        } else if let Some(bucket) = arg.strip_prefix("--length=") {
            filters.lengths.push(Selected::parse(bucket));
        } else if let Some(rating) = arg.strip_prefix("--rating=") {
            filters.set_rating(RatingFilter::from(rating));
        }
    }

    filters
}

async fn resolve_location<P: LocationProvider>(
    provider: P,
    options: GeolocationOptions,
) -> Option<Coordinates> {
    CachedLocationProvider::new(provider, options)
        .locate_optional()
        .await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onsight=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let config = Config::from_env().map_err(AppError::Config)?;

    let search = args
        .iter()
        .find_map(|a| a.strip_prefix("--search="))
        .unwrap_or("");
    let page: usize = match args.iter().find_map(|a| a.strip_prefix("--page=")) {
        Some(n) => n
            .parse()
            .map_err(|_| AppError::InvalidRequest(format!("Invalid page: {}", n)))?,
        None => 1,
    };
    let near = match args.iter().find_map(|a| a.strip_prefix("--near=")) {
        Some(pair) => Some(Coordinates::parse_pair(pair).map_err(AppError::InvalidRequest)?),
        None => config.user_location,
    };
    let json_output = args.iter().any(|a| a == "--json");
    let filters = parse_filters(&args);

    let catalog = RouteCatalog::load(&config.routes_path, &config.locations_path)?;

    if let Some(id) = args.iter().find_map(|a| a.strip_prefix("--route=")) {
        let id = id
            .parse::<i64>()
            .map(RouteId::Int)
            .unwrap_or_else(|_| RouteId::from(id));
        let route = catalog
            .find(&id)
            .ok_or_else(|| AppError::InvalidRequest(format!("No route with id {}", id)))?;
        let nearby = nearby_routes(route, catalog.routes(), NEARBY_ROUTES_LIMIT);

        if json_output {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "route": route,
                    "nearby": nearby,
                }))?
            );
        } else {
            print!("{}", format_route_detail(route, &nearby));
        }
        return Ok(());
    }

    let origin = match near {
        Some(point) => resolve_location(FixedLocationProvider::new(point), config.geolocation).await,
        None => {
            tracing::debug!("No user location configured; keeping dataset order");
            None
        }
    };

    let matched = filter_routes(catalog.routes(), &filters, search);
    let ranked = rank_by_distance(matched, origin);
    let page = Page::of(&ranked, page, config.page_size);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        let chips = active_chips(&filters);
        let links = page_numbers(page.page, page.total_pages);
        print!("{}", format_report(&page, &chips, &links));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use onsight::models::{LengthBucket, LocationKey};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_filters() {
        let filters = parse_filters(&args(&[
            "--location=Yosemite|Valley|all",
            "--type=Sport",
            "--type=Trad",
            "--difficulty=Expert",
            "--length=long",
            "--rating=4+ stars",
            "--json",
        ]));

        assert_eq!(
            filters.locations,
            vec![Selected::Known(LocationKey::area("Yosemite", "Valley"))]
        );
        assert_eq!(filters.types, vec![RouteType::Sport, RouteType::Trad]);
        assert_eq!(
            filters.difficulties,
            vec![Selected::Known(DifficultyTier::Expert)]
        );
        assert_eq!(filters.lengths, vec![Selected::Known(LengthBucket::Long)]);
        assert_eq!(filters.rating, RatingFilter::AtLeast(4.0));
    }

    #[test]
    fn test_parse_filters_keeps_unknown_labels() {
        let filters = parse_filters(&args(&["--length=2-3 pitches", "--difficulty=hard"]));

        assert_eq!(
            filters.lengths,
            vec![Selected::Unrecognized("2-3 pitches".to_string())]
        );
        assert_eq!(
            filters.difficulties,
            vec![Selected::Unrecognized("hard".to_string())]
        );
    }

    #[test]
    fn test_no_flags_means_no_filters() {
        assert!(parse_filters(&args(&["--page=2"])).is_empty());
    }
}
