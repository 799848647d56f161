use crate::constants::*;
use crate::models::Coordinates;
use crate::services::geolocation::GeolocationOptions;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub routes_path: PathBuf,
    pub locations_path: PathBuf,
    pub page_size: usize,
    pub geolocation: GeolocationOptions,
    /// Fixed user position, if configured
    pub user_location: Option<Coordinates>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            routes_path: PathBuf::from(DEFAULT_ROUTES_PATH),
            locations_path: PathBuf::from(DEFAULT_LOCATIONS_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            geolocation: GeolocationOptions::default(),
            user_location: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let page_size: usize = env::var("ONSIGHT_PAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
            .parse()
            .map_err(|_| "Invalid ONSIGHT_PAGE_SIZE")?;

        if page_size == 0 {
            return Err("ONSIGHT_PAGE_SIZE must be at least 1".to_string());
        }

        let timeout_secs: u64 = env::var("ONSIGHT_GEOLOCATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_GEOLOCATION_TIMEOUT_SECONDS.to_string())
            .parse()
            .map_err(|_| "Invalid ONSIGHT_GEOLOCATION_TIMEOUT_SECS")?;

        let max_age_secs: u64 = env::var("ONSIGHT_GEOLOCATION_MAX_AGE_SECS")
            .unwrap_or_else(|_| DEFAULT_GEOLOCATION_MAX_AGE_SECONDS.to_string())
            .parse()
            .map_err(|_| "Invalid ONSIGHT_GEOLOCATION_MAX_AGE_SECS")?;

        let enable_high_accuracy: bool = env::var("ONSIGHT_GEOLOCATION_HIGH_ACCURACY")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .map_err(|_| "Invalid ONSIGHT_GEOLOCATION_HIGH_ACCURACY")?;

        Ok(Config {
            routes_path: env::var("ONSIGHT_ROUTES_PATH")
                .unwrap_or_else(|_| DEFAULT_ROUTES_PATH.to_string())
                .into(),
            locations_path: env::var("ONSIGHT_LOCATIONS_PATH")
                .unwrap_or_else(|_| DEFAULT_LOCATIONS_PATH.to_string())
                .into(),
            page_size,
            geolocation: GeolocationOptions {
                enable_high_accuracy,
                timeout: Duration::from_secs(timeout_secs),
                maximum_age: Duration::from_secs(max_age_secs),
            },
            user_location: user_location_from_env()?,
        })
    }
}

fn user_location_from_env() -> Result<Option<Coordinates>, String> {
    match (env::var("ONSIGHT_USER_LAT"), env::var("ONSIGHT_USER_LNG")) {
        (Ok(lat), Ok(lng)) => {
            let lat: f64 = lat.parse().map_err(|_| "Invalid ONSIGHT_USER_LAT")?;
            let lng: f64 = lng.parse().map_err(|_| "Invalid ONSIGHT_USER_LNG")?;
            Coordinates::new(lat, lng).map(Some)
        }
        (Err(_), Err(_)) => Ok(None),
        _ => Err("ONSIGHT_USER_LAT and ONSIGHT_USER_LNG must be set together".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "ONSIGHT_ROUTES_PATH",
        "ONSIGHT_LOCATIONS_PATH",
        "ONSIGHT_PAGE_SIZE",
        "ONSIGHT_GEOLOCATION_TIMEOUT_SECS",
        "ONSIGHT_GEOLOCATION_MAX_AGE_SECS",
        "ONSIGHT_GEOLOCATION_HIGH_ACCURACY",
        "ONSIGHT_USER_LAT",
        "ONSIGHT_USER_LNG",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.routes_path, PathBuf::from("data/routes.json"));
        assert_eq!(
            config.locations_path,
            PathBuf::from("data/locationHierarchy.json")
        );
        assert_eq!(config.page_size, 20);
        assert_eq!(config.geolocation, GeolocationOptions::default());
        assert!(config.user_location.is_none());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var("ONSIGHT_ROUTES_PATH", "/srv/routes.json");
        env::set_var("ONSIGHT_PAGE_SIZE", "50");
        env::set_var("ONSIGHT_GEOLOCATION_TIMEOUT_SECS", "3");
        env::set_var("ONSIGHT_GEOLOCATION_HIGH_ACCURACY", "true");
        env::set_var("ONSIGHT_USER_LAT", "37.0");
        env::set_var("ONSIGHT_USER_LNG", "-119.0");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.routes_path, PathBuf::from("/srv/routes.json"));
        assert_eq!(config.page_size, 50);
        assert_eq!(config.geolocation.timeout, Duration::from_secs(3));
        assert!(config.geolocation.enable_high_accuracy);
        assert_eq!(
            config.user_location,
            Some(Coordinates {
                lat: 37.0,
                lng: -119.0
            })
        );
    }

    #[test]
    #[serial]
    fn test_invalid_values() {
        clear_env();
        env::set_var("ONSIGHT_PAGE_SIZE", "0");
        assert!(Config::from_env().is_err());

        env::set_var("ONSIGHT_PAGE_SIZE", "many");
        assert!(Config::from_env().is_err());
        clear_env();

        env::set_var("ONSIGHT_USER_LAT", "37.0");
        let err = Config::from_env().unwrap_err();
        assert!(err.contains("must be set together"));

        env::set_var("ONSIGHT_USER_LNG", "500");
        assert!(Config::from_env().is_err());
        clear_env();
    }
}
