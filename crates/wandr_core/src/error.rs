//! Use-case level error taxonomy.
//!
//! # Invariants
//! - Permission, cancellation and resolution failures are handled where they
//!   occur (alert or sentinel); they are returned to the host for display,
//!   never escalated as fatal.
//! - Storage failures propagate unchanged through `CoreError::Repo`.

use crate::platform::Capability;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CoreResult<T> = Result<T, CoreError>;

/// Why an address could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionFailure {
    PermissionDenied,
    NoPosition,
    NoAddress,
}

impl ResolutionFailure {
    /// Placeholder shown in the address field for this failure.
    pub fn sentinel(self) -> &'static str {
        match self {
            Self::PermissionDenied => "Location permission denied",
            Self::NoPosition => "Could not get location",
            Self::NoAddress => "Could not get address",
        }
    }
}

#[derive(Debug)]
pub enum CoreError {
    PermissionDenied(Capability),
    UserCancelled,
    /// Push registration needs a physical device.
    DeviceUnsupported,
    ResolutionFailure(ResolutionFailure),
    /// A required config value (e.g. push project id) is absent.
    ConfigurationMissing(&'static str),
    /// Submit was attempted without an image and a ready address.
    SubmitDisabled,
    EntryIndexOutOfRange { index: usize, len: usize },
    Platform(String),
    Repo(RepoError),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied(capability) => {
                write!(f, "permission denied: {capability}")
            }
            Self::UserCancelled => write!(f, "cancelled by user"),
            Self::DeviceUnsupported => write!(f, "must use a physical device for push notifications"),
            Self::ResolutionFailure(failure) => write!(f, "{}", failure.sentinel()),
            Self::ConfigurationMissing(key) => write!(f, "missing configuration value: {key}"),
            Self::SubmitDisabled => write!(f, "submit requires a photo and a resolved address"),
            Self::EntryIndexOutOfRange { index, len } => {
                write!(f, "entry index {index} is out of range for {len} entries")
            }
            Self::Platform(message) => write!(f, "platform error: {message}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::EntryIndexOutOfRange { index, len } => {
                Self::EntryIndexOutOfRange { index, len }
            }
            other => Self::Repo(other),
        }
    }
}

impl From<ResolutionFailure> for CoreError {
    fn from(value: ResolutionFailure) -> Self {
        Self::ResolutionFailure(value)
    }
}
