//! Local profile record.

use serde::{Deserialize, Serialize};

/// Display name and optional avatar shown above the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Trimmed display name; empty until the user sets one.
    pub username: String,
    /// Opaque local image reference, `None` when no picture is set.
    pub profile_pic_uri: Option<String>,
}

impl Profile {
    pub fn has_username(&self) -> bool {
        !self.username.trim().is_empty()
    }
}
