//! Device capability declarations and the permission provider contract.

use async_trait::async_trait;
use std::fmt::{Display, Formatter};

/// Device permission category gating one kind of device access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Camera,
    MediaLibrary,
    Location,
    Notifications,
}

impl Capability {
    /// Stable string id used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::MediaLibrary => "media_library",
            Self::Location => "location",
            Self::Notifications => "notifications",
        }
    }

    /// Message shown to the user when the capability is denied.
    pub fn denial_message(self) -> &'static str {
        match self {
            Self::Camera => "You need to grant camera permission",
            Self::MediaLibrary => "You need to grant image picker permission",
            Self::Location => "You need location access to save your location",
            Self::Notifications => "You need to allow notifications to get upload confirmations",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title shared by every denial alert.
pub const PERMISSION_DENIED_TITLE: &str = "Permission denied";

/// Outcome of a permission check or prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    Granted,
    Denied,
}

impl CapabilityStatus {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Host permission service.
///
/// `request` may show a native dialog and suspends until the user answers.
/// The platform, not the core, remembers earlier decisions.
#[async_trait]
pub trait PermissionProvider: Send + Sync {
    /// Reads the current decision without prompting.
    async fn current_status(&self, capability: Capability) -> CapabilityStatus;
    /// Asks for the capability, prompting when the platform allows it.
    async fn request(&self, capability: Capability) -> CapabilityStatus;
}
