//! Picker, location and notification contracts.

use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque failure reported by a host service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    pub message: String,
}

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for PlatformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for PlatformError {}

/// Where a photo comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Camera,
    Library,
}

/// Picker presentation options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerOptions {
    /// Crop aspect ratio as `(width, height)`.
    pub aspect: (u8, u8),
    /// Compression quality in `0.0..=1.0`.
    pub quality: f32,
    pub allows_editing: bool,
}

impl PickerOptions {
    /// Journal photos: 4:3, full quality.
    pub fn entry_photo() -> Self {
        Self {
            aspect: (4, 3),
            quality: 1.0,
            allows_editing: false,
        }
    }

    /// Avatars: square crop with editing.
    pub fn profile_picture() -> Self {
        Self {
            aspect: (1, 1),
            quality: 1.0,
            allows_editing: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedAsset {
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerResult {
    Cancelled,
    Picked(Vec<PickedAsset>),
}

impl PickerResult {
    /// First picked URI; `None` for a cancel or an empty selection.
    pub fn first_uri(self) -> Option<String> {
        match self {
            Self::Cancelled => None,
            Self::Picked(assets) => assets
                .into_iter()
                .map(|asset| asset.uri)
                .find(|uri| !uri.is_empty()),
        }
    }
}

/// Camera capture and media-library selection.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn launch(&self, source: ImageSource, options: PickerOptions) -> PickerResult;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One reverse-geocoding match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodedAddress {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    PermissionDenied,
    Unavailable(String),
}

impl Display for LocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "location permission denied"),
            Self::Unavailable(reason) => write!(f, "location unavailable: {reason}"),
        }
    }
}

impl Error for LocationError {}

/// Foreground location and reverse geocoding.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Vec<GeocodedAddress>, PlatformError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceOs {
    Android,
    Ios,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceInfo {
    pub os: DeviceOs,
    /// `false` on simulators/emulators, which cannot receive push.
    pub is_physical_device: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelImportance {
    Default,
    High,
    Max,
}

/// Android notification channel settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationChannel {
    pub id: String,
    pub name: String,
    pub importance: ChannelImportance,
    pub vibration_pattern: Vec<u64>,
    pub light_color: String,
}

impl NotificationChannel {
    pub fn default_channel() -> Self {
        Self {
            id: "default".to_string(),
            name: "default".to_string(),
            importance: ChannelImportance::Max,
            vibration_pattern: vec![0, 250, 250, 250],
            light_color: "#FF231F7C".to_string(),
        }
    }
}

/// Immediate local notification payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
}

/// Local notification scheduling and push registration.
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    fn device_info(&self) -> DeviceInfo;
    async fn configure_channel(&self, channel: NotificationChannel) -> Result<(), PlatformError>;
    /// Schedules `content` with no trigger, i.e. shown right away.
    async fn schedule(&self, content: NotificationContent) -> Result<(), PlatformError>;
    async fn push_token(&self, project_id: &str) -> Result<String, PlatformError>;
}
