//! Upload confirmations and push registration.
//!
//! # Invariants
//! - `announce_upload` never fails its caller; scheduling errors are logged.
//! - Push registration checks run in order: channel, device, permission,
//!   project id, token.

use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult};
use crate::model::entry::Entry;
use crate::platform::{
    Capability, DeviceOs, NotificationChannel, NotificationContent, NotificationScheduler,
};
use crate::service::capability_gate::CapabilityGate;
use log::{info, warn};
use std::sync::Arc;

const UPLOAD_NOTIFICATION_TITLE: &str = "New Post!";

#[derive(Clone)]
pub struct NotificationService {
    scheduler: Arc<dyn NotificationScheduler>,
    gate: CapabilityGate,
}

impl NotificationService {
    pub fn new(scheduler: Arc<dyn NotificationScheduler>, gate: CapabilityGate) -> Self {
        Self { scheduler, gate }
    }

    /// Fires the "New Post!" confirmation for a stored entry.
    pub async fn announce_upload(&self, entry: &Entry) {
        match self.scheduler.schedule(upload_notification(entry)).await {
            Ok(()) => info!("event=upload_notification module=notification status=ok"),
            Err(err) => warn!(
                "event=upload_notification module=notification status=error error={}",
                err
            ),
        }
    }

    /// Registers for push and returns the device token.
    ///
    /// # Errors
    /// - `DeviceUnsupported` on simulators.
    /// - `PermissionDenied(Notifications)` when the user declines.
    /// - `ConfigurationMissing("push_project_id")` without a project id.
    /// - `Platform` when channel setup or token retrieval fails.
    pub async fn register_for_push(&self, config: &AppConfig) -> CoreResult<String> {
        let device = self.scheduler.device_info();
        if device.os == DeviceOs::Android {
            self.scheduler
                .configure_channel(NotificationChannel::default_channel())
                .await
                .map_err(|err| CoreError::Platform(err.message))?;
        }

        if !device.is_physical_device {
            return Err(CoreError::DeviceUnsupported);
        }

        if !self.gate.request(Capability::Notifications).await.is_granted() {
            return Err(CoreError::PermissionDenied(Capability::Notifications));
        }

        let project_id = config
            .push_project_id
            .as_deref()
            .ok_or(CoreError::ConfigurationMissing("push_project_id"))?;

        let token = self
            .scheduler
            .push_token(project_id)
            .await
            .map_err(|err| CoreError::Platform(err.message))?;
        info!("event=push_register module=notification status=ok");
        Ok(token)
    }
}

/// Builds the confirmation shown after an entry is stored.
pub fn upload_notification(entry: &Entry) -> NotificationContent {
    let body = match entry.title.as_deref() {
        Some(title) => format!("Your post \"{title}\" has successfully been uploaded!"),
        None => format!(
            "Your post from {} has successfully been uploaded!",
            entry.address
        ),
    };
    NotificationContent {
        title: UPLOAD_NOTIFICATION_TITLE.to_string(),
        body,
    }
}
