//! Add-entry capture workflow.
//!
//! # Responsibility
//! - Hold the draft behind the add-entry screen.
//! - Sequence capability -> picker -> location for each photo.
//! - Persist the finished entry and fire the upload notification.
//!
//! # Invariants
//! - A denied or cancelled capture leaves the draft untouched.
//! - `submit` only persists when an image is set and the address is ready.
//! - One session persists at most one entry.

use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult, ResolutionFailure};
use crate::model::entry::Entry;
use crate::platform::{Capability, ImagePicker, ImageSource, PickerOptions, Platform};
use crate::repo::entry_repo::EntryRepository;
use crate::repo::kv_repo::KeyValueStore;
use crate::service::capability_gate::CapabilityGate;
use crate::service::location_service::{LocationService, LocationState};
use crate::service::notification_service::NotificationService;
use log::{info, warn};
use std::sync::Arc;

/// Result of one capture attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// An image was stored; `address_ready` reports the follow-up resolution.
    Captured { address_ready: bool },
    Cancelled,
    Denied,
}

/// Read-only snapshot of the in-progress entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub image_uri: Option<String>,
    pub address: String,
    pub is_location_ready: bool,
    pub can_submit: bool,
}

pub struct CaptureSession<S> {
    gate: CapabilityGate,
    picker: Arc<dyn ImagePicker>,
    location: LocationService,
    notifications: NotificationService,
    entries: EntryRepository<S>,
    config: AppConfig,
    title: String,
    image_uri: Option<String>,
    location_state: LocationState,
    submitted: bool,
}

impl<S: KeyValueStore> CaptureSession<S> {
    pub fn new(platform: &Platform, entries: EntryRepository<S>, config: AppConfig) -> Self {
        let gate = CapabilityGate::from_platform(platform);
        Self {
            notifications: NotificationService::new(platform.notifications.clone(), gate.clone()),
            location: LocationService::new(platform.location.clone()),
            picker: platform.picker.clone(),
            gate,
            entries,
            config,
            title: String::new(),
            image_uri: None,
            location_state: LocationState::pending(),
            submitted: false,
        }
    }

    /// Screen-open work: push registration and the location permission prompt.
    ///
    /// Push failures are logged only. A location denial alerts the user and
    /// leaves the address at the permission sentinel.
    pub async fn open(&mut self) {
        if let Err(err) = self.notifications.register_for_push(&self.config).await {
            warn!(
                "event=push_register module=capture status=skipped reason={}",
                err
            );
        }

        if self.gate.require(Capability::Location).await.is_err() {
            self.location_state
                .set_failed(ResolutionFailure::PermissionDenied);
        }
    }

    /// Takes or picks a photo, then resolves the current address.
    pub async fn capture(&mut self, source: ImageSource) -> CaptureOutcome {
        let capability = match source {
            ImageSource::Camera => Capability::Camera,
            ImageSource::Library => Capability::MediaLibrary,
        };
        if self.gate.require(capability).await.is_err() {
            return CaptureOutcome::Denied;
        }

        let Some(uri) = self
            .picker
            .launch(source, PickerOptions::entry_photo())
            .await
            .first_uri()
        else {
            info!("event=capture module=capture status=cancelled source={:?}", source);
            return CaptureOutcome::Cancelled;
        };
        self.image_uri = Some(uri);

        let resolved = self.location.resolve_current_address().await;
        self.location_state.apply(resolved);

        info!(
            "event=capture module=capture status=ok source={:?} address_ready={}",
            source,
            self.location_state.is_ready()
        );
        CaptureOutcome::Captured {
            address_ready: self.location_state.is_ready(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.submitted
            && self.location_state.is_ready()
            && self.image_uri.as_deref().is_some_and(|uri| !uri.is_empty())
    }

    pub fn draft(&self) -> Draft {
        Draft {
            title: self.title.clone(),
            image_uri: self.image_uri.clone(),
            address: self.location_state.address().to_string(),
            is_location_ready: self.location_state.is_ready(),
            can_submit: self.can_submit(),
        }
    }

    /// Persists the draft at the head of the entry list.
    ///
    /// # Errors
    /// - `SubmitDisabled` when `can_submit()` is false.
    /// - `Repo` when the store write fails; the session stays submittable.
    pub async fn submit(&mut self) -> CoreResult<Entry> {
        if !self.can_submit() {
            return Err(CoreError::SubmitDisabled);
        }
        let Some(image_uri) = self.image_uri.clone() else {
            return Err(CoreError::SubmitDisabled);
        };

        let entry = Entry::new(
            Some(self.title.as_str()),
            image_uri,
            self.location_state.address(),
        );
        let count = self.entries.prepend(entry.clone()).await?;
        self.submitted = true;
        info!(
            "event=entry_submit module=capture status=ok has_title={} count={}",
            entry.has_title(),
            count
        );

        self.notifications.announce_upload(&entry).await;
        Ok(entry)
    }
}
