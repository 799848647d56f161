use crate::constants::{DEFAULT_GEOLOCATION_MAX_AGE_SECONDS, DEFAULT_GEOLOCATION_TIMEOUT_SECONDS};
use crate::error::{AppError, GeolocationError, Result};
use crate::models::Coordinates;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// How to query the platform for the user's position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeolocationOptions {
    pub enable_high_accuracy: bool,
    /// Give up after this long
    pub timeout: Duration,
    /// Reuse a previous fix younger than this
    pub maximum_age: Duration,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        GeolocationOptions {
            enable_high_accuracy: false,
            timeout: Duration::from_secs(DEFAULT_GEOLOCATION_TIMEOUT_SECONDS),
            maximum_age: Duration::from_secs(DEFAULT_GEOLOCATION_MAX_AGE_SECONDS),
        }
    }
}

/// Source of the user's current position
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self, options: &GeolocationOptions) -> Result<Coordinates>;

    fn backend_name(&self) -> &'static str;
}

/// Always reports the same position, e.g. one given on the command line
pub struct FixedLocationProvider {
    location: Coordinates,
}

impl FixedLocationProvider {
    pub fn new(location: Coordinates) -> Self {
        Self { location }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_location(&self, _options: &GeolocationOptions) -> Result<Coordinates> {
        Ok(self.location)
    }

    fn backend_name(&self) -> &'static str {
        "fixed"
    }
}

/// Platform without any location source
pub struct UnsupportedLocationProvider;

#[async_trait]
impl LocationProvider for UnsupportedLocationProvider {
    async fn current_location(&self, _options: &GeolocationOptions) -> Result<Coordinates> {
        Err(GeolocationError::Unsupported.into())
    }

    fn backend_name(&self) -> &'static str {
        "unsupported"
    }
}

/// Wraps a provider with the request timeout and a single cached fix that
/// lives for `maximum_age`. Failed lookups are not cached. Concurrent misses
/// share one provider call.
pub struct CachedLocationProvider<P> {
    inner: P,
    options: GeolocationOptions,
    last_fix: Cache<(), Coordinates>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<P: LocationProvider> CachedLocationProvider<P> {
    pub fn new(inner: P, options: GeolocationOptions) -> Self {
        let last_fix = Cache::builder()
            .time_to_live(options.maximum_age)
            .max_capacity(1)
            .build();

        CachedLocationProvider {
            inner,
            options,
            last_fix,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Current position, from cache when fresh enough
    pub async fn locate(&self) -> Result<Coordinates> {
        if let Some(fix) = self.last_fix.get(&()).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("Using cached location fix");
            return Ok(fix);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        self.last_fix
            .try_get_with((), self.query_provider())
            .await
            .map_err(|e| {
                tracing::warn!("{} location provider failed: {}", self.inner.backend_name(), e);
                AppError::Geolocation((*e).clone())
            })
    }

    async fn query_provider(&self) -> std::result::Result<Coordinates, GeolocationError> {
        let lookup = self.inner.current_location(&self.options);
        match tokio::time::timeout(self.options.timeout, lookup).await {
            Ok(Ok(fix)) => {
                tracing::debug!("Location fix from {}: {:?}", self.inner.backend_name(), fix);
                Ok(fix)
            }
            Ok(Err(AppError::Geolocation(e))) => Err(e),
            Ok(Err(other)) => Err(GeolocationError::Unavailable(other.to_string())),
            Err(_) => Err(GeolocationError::Timeout(self.options.timeout.as_secs())),
        }
    }

    /// Like [`locate`](Self::locate), but a failure just means "no location"
    pub async fn locate_optional(&self) -> Option<Coordinates> {
        self.locate().await.ok()
    }

    /// (hits, misses) of the fix cache
    pub fn stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
