//! Profile repository over the `username` and `profilePic` keys.

use crate::model::profile::Profile;
use crate::repo::kv_repo::{KeyValueStore, SharedStore, PROFILE_PIC_KEY, USERNAME_KEY};
use crate::repo::RepoResult;
use log::debug;

pub struct ProfileRepository<S> {
    store: SharedStore<S>,
}

impl<S> Clone for ProfileRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: KeyValueStore> ProfileRepository<S> {
    pub fn new(store: SharedStore<S>) -> Self {
        Self { store }
    }

    /// Loads the profile; missing keys map to empty name and no picture.
    pub async fn load(&self) -> RepoResult<Profile> {
        let store = self.store.lock().await;
        let username = store.get_item(USERNAME_KEY)?.unwrap_or_default();
        let profile_pic_uri = store
            .get_item(PROFILE_PIC_KEY)?
            .filter(|value| !value.is_empty());
        Ok(Profile {
            username,
            profile_pic_uri,
        })
    }

    /// Persists `username` as given; callers trim beforehand.
    pub async fn save_username(&self, username: &str) -> RepoResult<()> {
        self.store.lock().await.set_item(USERNAME_KEY, username)?;
        debug!(
            "event=username_write module=repo status=ok empty={}",
            username.is_empty()
        );
        Ok(())
    }

    pub async fn save_profile_pic(&self, uri: &str) -> RepoResult<()> {
        self.store.lock().await.set_item(PROFILE_PIC_KEY, uri)?;
        debug!("event=profile_pic_write module=repo status=ok");
        Ok(())
    }

    /// Deletes the stored picture reference outright.
    pub async fn remove_profile_pic(&self) -> RepoResult<()> {
        self.store.lock().await.remove_item(PROFILE_PIC_KEY)?;
        debug!("event=profile_pic_remove module=repo status=ok");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ProfileRepository;
    use crate::repo::kv_repo::{share_store, SqliteKeyValueStore};

    #[tokio::test]
    async fn empty_store_loads_default_profile() {
        let repo = ProfileRepository::new(share_store(SqliteKeyValueStore::open_in_memory().unwrap()));
        let profile = repo.load().await.unwrap();
        assert!(!profile.has_username());
        assert_eq!(profile.profile_pic_uri, None);
    }

    #[tokio::test]
    async fn picture_can_be_saved_and_removed() {
        let repo = ProfileRepository::new(share_store(SqliteKeyValueStore::open_in_memory().unwrap()));
        repo.save_username("Alex").await.unwrap();
        repo.save_profile_pic("file:///me.png").await.unwrap();

        let profile = repo.load().await.unwrap();
        assert_eq!(profile.username, "Alex");
        assert_eq!(profile.profile_pic_uri.as_deref(), Some("file:///me.png"));

        repo.remove_profile_pic().await.unwrap();
        assert_eq!(repo.load().await.unwrap().profile_pic_uri, None);
    }
}
