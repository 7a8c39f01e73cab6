//! Profile header: username editing and profile picture.
//!
//! # Responsibility
//! - Keep the visible username in sync with keystrokes while persisting it
//!   through a debounced write.
//! - Gate, pick, persist and remove the profile picture.
//!
//! # Invariants
//! - The debounce timer is owned by this controller, never shared.
//! - An explicit submit cancels the pending deferred write before writing.
//! - Persisted usernames are trimmed.

use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult};
use crate::platform::{
    AlertPresenter, Capability, ImagePicker, ImageSource, PickerOptions, Platform, Prompt,
    PromptOption, PromptStyle,
};
use crate::repo::kv_repo::KeyValueStore;
use crate::repo::profile_repo::ProfileRepository;
use crate::service::capability_gate::CapabilityGate;
use crate::service::debounce::DebouncedWriter;
use log::{info, warn};
use std::sync::Arc;

/// What the profile header should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub username: String,
    pub profile_pic_uri: Option<String>,
    /// Text field instead of the tappable name label.
    pub show_username_input: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PictureOutcome {
    Updated(String),
    Removed,
    Cancelled,
    Denied,
}

pub struct ProfileController<S> {
    repo: ProfileRepository<S>,
    gate: CapabilityGate,
    picker: Arc<dyn ImagePicker>,
    alerts: Arc<dyn AlertPresenter>,
    username_writer: DebouncedWriter,
    username: String,
    profile_pic_uri: Option<String>,
    editing_username: bool,
}

impl<S: KeyValueStore + 'static> ProfileController<S> {
    pub fn new(platform: &Platform, repo: ProfileRepository<S>, config: &AppConfig) -> Self {
        Self {
            repo,
            gate: CapabilityGate::from_platform(platform),
            picker: platform.picker.clone(),
            alerts: platform.alerts.clone(),
            username_writer: DebouncedWriter::new(config.username_debounce),
            username: String::new(),
            profile_pic_uri: None,
            editing_username: false,
        }
    }

    /// Loads the stored profile; asks for a name when none is stored.
    pub async fn load(&mut self) -> CoreResult<ProfileView> {
        let profile = self.repo.load().await?;
        self.editing_username = !profile.has_username();
        self.username = profile.username;
        self.profile_pic_uri = profile.profile_pic_uri;
        Ok(self.view())
    }

    pub fn view(&self) -> ProfileView {
        ProfileView {
            username: self.username.clone(),
            profile_pic_uri: self.profile_pic_uri.clone(),
            show_username_input: self.editing_username || self.username.is_empty(),
        }
    }

    /// Updates the visible name and re-arms the deferred write.
    pub fn change_username(&mut self, text: impl Into<String>) {
        self.username = text.into();
        let repo = self.repo.clone();
        let value = self.username.trim().to_string();
        self.username_writer.schedule(async move {
            if let Err(err) = repo.save_username(&value).await {
                warn!(
                    "event=username_write module=profile status=error mode=deferred error={}",
                    err
                );
            }
        });
    }

    /// Writes a non-empty name immediately and closes the editor.
    ///
    /// Returns `false` without I/O when the trimmed name is empty.
    pub async fn submit_username(&mut self) -> CoreResult<bool> {
        let trimmed = self.username.trim().to_string();
        if trimmed.is_empty() {
            return Ok(false);
        }

        self.username_writer.cancel();
        self.repo.save_username(&trimmed).await?;
        self.editing_username = false;
        info!("event=username_write module=profile status=ok mode=immediate");
        Ok(true)
    }

    /// Reopens the username editor.
    pub fn edit_username(&mut self) {
        self.editing_username = true;
    }

    /// Runs the picture sheet: replace/remove when set, source choice otherwise.
    pub async fn open_picture_options(&mut self) -> CoreResult<PictureOutcome> {
        if self.profile_pic_uri.is_some() {
            let prompt = Prompt {
                title: "Profile Picture".to_string(),
                message: "Do you want to replace or remove your profile picture?".to_string(),
                options: vec![
                    PromptOption::new("Replace", PromptStyle::Default),
                    PromptOption::new("Remove", PromptStyle::Default),
                    PromptOption::new("Cancel", PromptStyle::Cancel),
                ],
            };
            match self.alerts.choose(&prompt).await {
                Some(0) => {}
                Some(1) => {
                    self.remove_picture().await?;
                    return Ok(PictureOutcome::Removed);
                }
                _ => return Ok(PictureOutcome::Cancelled),
            }
        }

        let prompt = Prompt {
            title: "Choose Option".to_string(),
            message: "How would you like to set your profile picture?".to_string(),
            options: vec![
                PromptOption::new("Take Photo", PromptStyle::Default),
                PromptOption::new("Choose from Library", PromptStyle::Default),
                PromptOption::new("Cancel", PromptStyle::Cancel),
            ],
        };
        match self.alerts.choose(&prompt).await {
            Some(0) => self.set_picture(ImageSource::Camera).await,
            Some(1) => self.set_picture(ImageSource::Library).await,
            _ => Ok(PictureOutcome::Cancelled),
        }
    }

    /// Gate, square picker, persist. No location step.
    pub async fn set_picture(&mut self, source: ImageSource) -> CoreResult<PictureOutcome> {
        let capability = match source {
            ImageSource::Camera => Capability::Camera,
            ImageSource::Library => Capability::MediaLibrary,
        };
        match self.gate.require(capability).await {
            Ok(()) => {}
            Err(CoreError::PermissionDenied(_)) => return Ok(PictureOutcome::Denied),
            Err(err) => return Err(err),
        }

        let Some(uri) = self
            .picker
            .launch(source, PickerOptions::profile_picture())
            .await
            .first_uri()
        else {
            return Ok(PictureOutcome::Cancelled);
        };

        self.repo.save_profile_pic(&uri).await?;
        self.profile_pic_uri = Some(uri.clone());
        info!("event=profile_pic_set module=profile status=ok source={:?}", source);
        Ok(PictureOutcome::Updated(uri))
    }

    /// Deletes the stored picture reference.
    pub async fn remove_picture(&mut self) -> CoreResult<()> {
        self.repo.remove_profile_pic().await?;
        self.profile_pic_uri = None;
        info!("event=profile_pic_remove module=profile status=ok");
        Ok(())
    }
}
