//! Permission sequencing in front of device access.
//!
//! # Invariants
//! - No decision is cached; every call asks the platform again.
//! - `require` shows exactly one alert per denial and never retries.

use crate::error::{CoreError, CoreResult};
use crate::platform::capability::PERMISSION_DENIED_TITLE;
use crate::platform::{AlertPresenter, Capability, CapabilityStatus, PermissionProvider, Platform};
use log::{info, warn};
use std::sync::Arc;

#[derive(Clone)]
pub struct CapabilityGate {
    permissions: Arc<dyn PermissionProvider>,
    alerts: Arc<dyn AlertPresenter>,
}

impl CapabilityGate {
    pub fn new(permissions: Arc<dyn PermissionProvider>, alerts: Arc<dyn AlertPresenter>) -> Self {
        Self {
            permissions,
            alerts,
        }
    }

    pub fn from_platform(platform: &Platform) -> Self {
        Self::new(platform.permissions.clone(), platform.alerts.clone())
    }

    /// Asks the platform for `capability` without alerting on denial.
    ///
    /// Notifications are checked first and only prompted when not yet granted.
    pub async fn request(&self, capability: Capability) -> CapabilityStatus {
        if capability == Capability::Notifications
            && self.permissions.current_status(capability).await.is_granted()
        {
            info!(
                "event=capability_request module=gate status=granted capability={} prompted=false",
                capability
            );
            return CapabilityStatus::Granted;
        }

        let status = self.permissions.request(capability).await;
        match status {
            CapabilityStatus::Granted => info!(
                "event=capability_request module=gate status=granted capability={} prompted=true",
                capability
            ),
            CapabilityStatus::Denied => warn!(
                "event=capability_request module=gate status=denied capability={} prompted=true",
                capability
            ),
        }
        status
    }

    /// Requests `capability`; on denial shows the user-facing alert and
    /// returns `CoreError::PermissionDenied` so the caller aborts.
    pub async fn require(&self, capability: Capability) -> CoreResult<()> {
        match self.request(capability).await {
            CapabilityStatus::Granted => Ok(()),
            CapabilityStatus::Denied => {
                self.alerts
                    .alert(PERMISSION_DENIED_TITLE, capability.denial_message())
                    .await;
                Err(CoreError::PermissionDenied(capability))
            }
        }
    }
}
