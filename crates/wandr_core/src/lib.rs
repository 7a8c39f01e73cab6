//! Core domain logic for the Wandr photo journal.
//! This crate is the single source of truth for entry and profile invariants;
//! the host shell supplies device services through `platform` traits.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod platform;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use error::{CoreError, CoreResult, ResolutionFailure};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{Entry, EntryValidationError};
pub use model::profile::Profile;
pub use platform::{Capability, CapabilityStatus, ImageSource, Platform};
pub use repo::entry_repo::EntryRepository;
pub use repo::kv_repo::{share_store, KeyValueStore, SharedStore, SqliteKeyValueStore};
pub use repo::profile_repo::ProfileRepository;
pub use repo::{RepoError, RepoResult};
pub use service::capability_gate::CapabilityGate;
pub use service::capture_service::{CaptureOutcome, CaptureSession, Draft};
pub use service::debounce::DebouncedWriter;
pub use service::feed_service::{CardLayout, EntryCard, EntryFeed, EntryOptionOutcome, FeedView};
pub use service::location_service::{LocationService, LocationState};
pub use service::notification_service::NotificationService;
pub use service::profile_service::{PictureOutcome, ProfileController, ProfileView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
