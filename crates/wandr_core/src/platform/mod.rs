//! Contracts for device services provided by the host shell.
//!
//! # Responsibility
//! - Describe every external collaborator the core suspends on: permission
//!   prompts, pickers, geolocation, reverse geocoding, notifications and
//!   user-facing alerts.
//! - Keep host/plugin specifics out of core business logic.
//!
//! # Invariants
//! - Every call is request -> suspend -> structured result; the core never
//!   retries, backs off or batches platform calls.
//! - A dismissed dialog or picker is reported as a value, not an error.

pub mod alert;
pub mod capability;
pub mod device;

pub use alert::{AlertPresenter, Prompt, PromptOption, PromptStyle};
pub use capability::{Capability, CapabilityStatus, PermissionProvider};
pub use device::{
    ChannelImportance, Coordinates, DeviceInfo, DeviceOs, GeocodedAddress, ImagePicker,
    ImageSource, LocationError, LocationProvider, NotificationChannel, NotificationContent,
    NotificationScheduler, PickedAsset, PickerOptions, PickerResult, PlatformError,
};

use std::sync::Arc;

/// Bundle of host-provided service handles.
#[derive(Clone)]
pub struct Platform {
    pub permissions: Arc<dyn PermissionProvider>,
    pub picker: Arc<dyn ImagePicker>,
    pub location: Arc<dyn LocationProvider>,
    pub notifications: Arc<dyn NotificationScheduler>,
    pub alerts: Arc<dyn AlertPresenter>,
}
