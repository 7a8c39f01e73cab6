//! Reverse-geocoded address resolution for new entries.
//!
//! # Responsibility
//! - Turn the current device position into `"{city}, {region}, {country}"`.
//! - Track the address field and its ready flag for the capture draft.
//!
//! # Invariants
//! - Any failure writes a fixed sentinel and clears `is_ready`.
//! - Resolution is never retried; the user repeats the capture instead.
//! - The address reflects the position at resolution time, not photo metadata.

use crate::error::ResolutionFailure;
use crate::platform::{Coordinates, GeocodedAddress, LocationError, LocationProvider};
use log::{debug, warn};
use std::sync::Arc;

/// Address shown before any resolution has finished.
pub const ADDRESS_PENDING: &str = "Getting location...";

/// Address field plus the flag that gates submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationState {
    address: String,
    is_ready: bool,
}

impl Default for LocationState {
    fn default() -> Self {
        Self::pending()
    }
}

impl LocationState {
    pub fn pending() -> Self {
        Self {
            address: ADDRESS_PENDING.to_string(),
            is_ready: false,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub fn set_resolved(&mut self, address: String) {
        self.address = address;
        self.is_ready = true;
    }

    pub fn set_failed(&mut self, failure: ResolutionFailure) {
        self.address = failure.sentinel().to_string();
        self.is_ready = false;
    }

    pub fn apply(&mut self, result: Result<String, ResolutionFailure>) {
        match result {
            Ok(address) => self.set_resolved(address),
            Err(failure) => self.set_failed(failure),
        }
    }
}

#[derive(Clone)]
pub struct LocationService {
    provider: Arc<dyn LocationProvider>,
}

impl LocationService {
    pub fn new(provider: Arc<dyn LocationProvider>) -> Self {
        Self { provider }
    }

    /// Acquires the current position, then reverse-geocodes it.
    pub async fn resolve_current_address(&self) -> Result<String, ResolutionFailure> {
        let coordinates = match self.provider.current_position().await {
            Ok(coordinates) => coordinates,
            Err(LocationError::PermissionDenied) => {
                warn!("event=location_fix module=location status=error error_code=permission_denied");
                return Err(ResolutionFailure::PermissionDenied);
            }
            Err(LocationError::Unavailable(reason)) => {
                warn!(
                    "event=location_fix module=location status=error error_code=unavailable error={}",
                    reason
                );
                return Err(ResolutionFailure::NoPosition);
            }
        };
        self.resolve_address(coordinates).await
    }

    /// Formats the first geocoding match for `coordinates`.
    pub async fn resolve_address(
        &self,
        coordinates: Coordinates,
    ) -> Result<String, ResolutionFailure> {
        let matches = self
            .provider
            .reverse_geocode(coordinates)
            .await
            .map_err(|err| {
                warn!(
                    "event=reverse_geocode module=location status=error error_code=provider_failed error={}",
                    err
                );
                ResolutionFailure::NoAddress
            })?;

        let formatted = matches.first().and_then(format_address).ok_or_else(|| {
            warn!(
                "event=reverse_geocode module=location status=error error_code=no_match matches={}",
                matches.len()
            );
            ResolutionFailure::NoAddress
        })?;

        debug!("event=reverse_geocode module=location status=ok");
        Ok(formatted)
    }
}

/// Joins city, region and country, skipping blank parts.
///
/// Returns `None` when every part is missing.
pub fn format_address(address: &GeocodedAddress) -> Option<String> {
    let parts: Vec<&str> = [&address.city, &address.region, &address.country]
        .into_iter()
        .filter_map(|part| part.as_deref().map(str::trim))
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
