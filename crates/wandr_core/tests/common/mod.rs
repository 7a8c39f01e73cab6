//! Scripted platform fakes shared by integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use wandr_core::platform::{
    AlertPresenter, Capability, CapabilityStatus, Coordinates, DeviceInfo, DeviceOs,
    GeocodedAddress, ImagePicker, ImageSource, LocationError, LocationProvider,
    NotificationChannel, NotificationContent, NotificationScheduler, PermissionProvider,
    PickedAsset, PickerOptions, PickerResult, Platform, PlatformError, Prompt,
};
use wandr_core::{share_store, KeyValueStore, RepoResult, SharedStore, SqliteKeyValueStore};

/// Ordered log of platform calls across all fakes.
pub type EventLog = Arc<Mutex<Vec<String>>>;

fn push_event(log: &EventLog, event: impl Into<String>) {
    log.lock().unwrap().push(event.into());
}

pub struct FakePermissions {
    events: EventLog,
    statuses: Mutex<HashMap<Capability, CapabilityStatus>>,
}

impl FakePermissions {
    pub fn set(&self, capability: Capability, status: CapabilityStatus) {
        self.statuses.lock().unwrap().insert(capability, status);
    }

    fn status(&self, capability: Capability) -> CapabilityStatus {
        self.statuses
            .lock()
            .unwrap()
            .get(&capability)
            .copied()
            .unwrap_or(CapabilityStatus::Granted)
    }
}

#[async_trait]
impl PermissionProvider for FakePermissions {
    async fn current_status(&self, capability: Capability) -> CapabilityStatus {
        push_event(&self.events, format!("status:{capability}"));
        self.status(capability)
    }

    async fn request(&self, capability: Capability) -> CapabilityStatus {
        push_event(&self.events, format!("request:{capability}"));
        self.status(capability)
    }
}

pub struct FakePicker {
    events: EventLog,
    results: Mutex<VecDeque<PickerResult>>,
    pub launches: Mutex<Vec<(ImageSource, PickerOptions)>>,
}

impl FakePicker {
    pub fn will_pick(&self, uri: &str) {
        self.results
            .lock()
            .unwrap()
            .push_back(PickerResult::Picked(vec![PickedAsset {
                uri: uri.to_string(),
            }]));
    }

    pub fn will_cancel(&self) {
        self.results.lock().unwrap().push_back(PickerResult::Cancelled);
    }
}

#[async_trait]
impl ImagePicker for FakePicker {
    async fn launch(&self, source: ImageSource, options: PickerOptions) -> PickerResult {
        push_event(&self.events, format!("picker:{source:?}"));
        self.launches.lock().unwrap().push((source, options));
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(PickerResult::Cancelled)
    }
}

pub struct FakeLocation {
    events: EventLog,
    position: Mutex<Result<Coordinates, LocationError>>,
    geocode: Mutex<Result<Vec<GeocodedAddress>, PlatformError>>,
}

impl FakeLocation {
    pub fn set_position(&self, position: Result<Coordinates, LocationError>) {
        *self.position.lock().unwrap() = position;
    }

    pub fn set_geocode(&self, geocode: Result<Vec<GeocodedAddress>, PlatformError>) {
        *self.geocode.lock().unwrap() = geocode;
    }
}

#[async_trait]
impl LocationProvider for FakeLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        push_event(&self.events, "position");
        self.position.lock().unwrap().clone()
    }

    async fn reverse_geocode(
        &self,
        _coordinates: Coordinates,
    ) -> Result<Vec<GeocodedAddress>, PlatformError> {
        push_event(&self.events, "geocode");
        self.geocode.lock().unwrap().clone()
    }
}

pub struct FakeNotifications {
    events: EventLog,
    device: Mutex<DeviceInfo>,
    fail_schedule: Mutex<bool>,
    pub scheduled: Mutex<Vec<NotificationContent>>,
    pub channels: Mutex<Vec<NotificationChannel>>,
}

impl FakeNotifications {
    pub fn set_device(&self, device: DeviceInfo) {
        *self.device.lock().unwrap() = device;
    }

    pub fn fail_schedule(&self) {
        *self.fail_schedule.lock().unwrap() = true;
    }
}

#[async_trait]
impl NotificationScheduler for FakeNotifications {
    fn device_info(&self) -> DeviceInfo {
        *self.device.lock().unwrap()
    }

    async fn configure_channel(&self, channel: NotificationChannel) -> Result<(), PlatformError> {
        push_event(&self.events, "channel");
        self.channels.lock().unwrap().push(channel);
        Ok(())
    }

    async fn schedule(&self, content: NotificationContent) -> Result<(), PlatformError> {
        push_event(&self.events, "notify");
        if *self.fail_schedule.lock().unwrap() {
            return Err(PlatformError::new("scheduler offline"));
        }
        self.scheduled.lock().unwrap().push(content);
        Ok(())
    }

    async fn push_token(&self, project_id: &str) -> Result<String, PlatformError> {
        push_event(&self.events, "push_token");
        Ok(format!("ExponentPushToken[{project_id}]"))
    }
}

pub struct FakeAlerts {
    events: EventLog,
    choices: Mutex<VecDeque<Option<usize>>>,
    texts: Mutex<VecDeque<Option<String>>>,
    pub alerts: Mutex<Vec<(String, String)>>,
    pub prompts: Mutex<Vec<Prompt>>,
    pub text_defaults: Mutex<Vec<String>>,
}

impl FakeAlerts {
    pub fn will_choose(&self, choice: Option<usize>) {
        self.choices.lock().unwrap().push_back(choice);
    }

    pub fn will_enter(&self, text: Option<&str>) {
        self.texts
            .lock()
            .unwrap()
            .push_back(text.map(str::to_string));
    }

    pub fn alert_messages(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }
}

#[async_trait]
impl AlertPresenter for FakeAlerts {
    async fn alert(&self, title: &str, message: &str) {
        push_event(&self.events, "alert");
        self.alerts
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }

    async fn choose(&self, prompt: &Prompt) -> Option<usize> {
        push_event(&self.events, format!("choose:{}", prompt.title));
        self.prompts.lock().unwrap().push(prompt.clone());
        self.choices.lock().unwrap().pop_front().flatten()
    }

    async fn prompt_text(&self, title: &str, _message: &str, default_value: &str) -> Option<String> {
        push_event(&self.events, format!("prompt_text:{title}"));
        self.text_defaults
            .lock()
            .unwrap()
            .push(default_value.to_string());
        self.texts.lock().unwrap().pop_front().flatten()
    }
}

/// All fakes plus the `Platform` bundle built from them.
pub struct Harness {
    pub events: EventLog,
    pub permissions: Arc<FakePermissions>,
    pub picker: Arc<FakePicker>,
    pub location: Arc<FakeLocation>,
    pub notifications: Arc<FakeNotifications>,
    pub alerts: Arc<FakeAlerts>,
    pub platform: Platform,
}

pub const LISBON: Coordinates = Coordinates {
    latitude: 38.7223,
    longitude: -9.1393,
};

pub fn lisbon_match() -> GeocodedAddress {
    GeocodedAddress {
        city: Some("Lisbon".to_string()),
        region: Some("Lisbon".to_string()),
        country: Some("Portugal".to_string()),
    }
}

impl Harness {
    /// Everything granted, Lisbon position, physical iOS device.
    pub fn new() -> Self {
        let events: EventLog = Arc::new(Mutex::new(Vec::new()));
        let permissions = Arc::new(FakePermissions {
            events: events.clone(),
            statuses: Mutex::new(HashMap::new()),
        });
        let picker = Arc::new(FakePicker {
            events: events.clone(),
            results: Mutex::new(VecDeque::new()),
            launches: Mutex::new(Vec::new()),
        });
        let location = Arc::new(FakeLocation {
            events: events.clone(),
            position: Mutex::new(Ok(LISBON)),
            geocode: Mutex::new(Ok(vec![lisbon_match()])),
        });
        let notifications = Arc::new(FakeNotifications {
            events: events.clone(),
            device: Mutex::new(DeviceInfo {
                os: DeviceOs::Ios,
                is_physical_device: true,
            }),
            fail_schedule: Mutex::new(false),
            scheduled: Mutex::new(Vec::new()),
            channels: Mutex::new(Vec::new()),
        });
        let alerts = Arc::new(FakeAlerts {
            events: events.clone(),
            choices: Mutex::new(VecDeque::new()),
            texts: Mutex::new(VecDeque::new()),
            alerts: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
            text_defaults: Mutex::new(Vec::new()),
        });
        let platform = Platform {
            permissions: permissions.clone(),
            picker: picker.clone(),
            location: location.clone(),
            notifications: notifications.clone(),
            alerts: alerts.clone(),
        };

        Self {
            events,
            permissions,
            picker,
            location,
            notifications,
            alerts,
            platform,
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear_events(&self) {
        self.events.lock().unwrap().clear();
    }
}

/// Every `set_item` / `remove_item` as `(key, value)`; `None` marks a removal.
pub type WriteLog = Arc<Mutex<Vec<(String, Option<String>)>>>;

/// SQLite store that counts writes per key.
pub struct RecordingStore {
    inner: SqliteKeyValueStore,
    pub writes: WriteLog,
}

impl RecordingStore {
    pub fn new() -> (SharedStore<Self>, WriteLog) {
        let writes: WriteLog = Arc::new(Mutex::new(Vec::new()));
        let store = Self {
            inner: SqliteKeyValueStore::open_in_memory().unwrap(),
            writes: writes.clone(),
        };
        (share_store(store), writes)
    }
}

impl KeyValueStore for RecordingStore {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), Some(value.to_string())));
        self.inner.set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> RepoResult<()> {
        self.writes.lock().unwrap().push((key.to_string(), None));
        self.inner.remove_item(key)
    }
}

/// Writes recorded for one key, in order.
pub fn writes_for(writes: &WriteLog, key: &str) -> Vec<Option<String>> {
    writes
        .lock()
        .unwrap()
        .iter()
        .filter(|(written_key, _)| written_key == key)
        .map(|(_, value)| value.clone())
        .collect()
}
