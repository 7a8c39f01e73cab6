//! Home feed: entry snapshot, card layout and per-entry actions.
//!
//! # Responsibility
//! - Reload the full entry list whenever the feed regains focus.
//! - Project entries into cards whose layout depends on title presence.
//! - Route the {Delete, Rename, Cancel} sheet to repository mutations.
//!
//! # Invariants
//! - Cancelling any prompt performs no storage I/O.
//! - An index outside the snapshot is rejected before any prompt is shown.
//! - A committed mutation is reported as done even when the follow-up
//!   refresh fails; the snapshot then stays stale until the next `reload`.

use crate::error::{CoreError, CoreResult};
use crate::model::entry::Entry;
use crate::platform::{AlertPresenter, Prompt, PromptOption, PromptStyle};
use crate::repo::entry_repo::EntryRepository;
use crate::repo::kv_repo::KeyValueStore;
use log::{info, warn};
use std::sync::Arc;

const OPTION_DELETE: usize = 0;
const OPTION_RENAME: usize = 1;

/// Header layout for one feed card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardLayout {
    Titled { title: String },
    /// No header text; the options button floats over a taller image.
    Untitled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCard {
    pub index: usize,
    pub layout: CardLayout,
    pub address: String,
    pub date: String,
    pub image_uri: String,
}

impl EntryCard {
    pub fn from_entry(index: usize, entry: &Entry) -> Self {
        let layout = match &entry.title {
            Some(title) => CardLayout::Titled {
                title: title.clone(),
            },
            None => CardLayout::Untitled,
        };
        Self {
            index,
            layout,
            address: entry.address.clone(),
            date: entry.date.clone(),
            image_uri: entry.image_uri.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    /// "No Posts yet!" with a centered add button.
    Empty,
    Posts(Vec<EntryCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOptionOutcome {
    Deleted(Entry),
    Renamed(Entry),
    Cancelled,
}

pub struct EntryFeed<S> {
    entries: EntryRepository<S>,
    alerts: Arc<dyn AlertPresenter>,
    snapshot: Vec<Entry>,
}

impl<S: KeyValueStore> EntryFeed<S> {
    pub fn new(entries: EntryRepository<S>, alerts: Arc<dyn AlertPresenter>) -> Self {
        Self {
            entries,
            alerts,
            snapshot: Vec::new(),
        }
    }

    /// Replaces the snapshot with the stored list.
    pub async fn reload(&mut self) -> CoreResult<&[Entry]> {
        self.snapshot = self.entries.list().await?;
        Ok(&self.snapshot)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.snapshot
    }

    pub fn view(&self) -> FeedView {
        if self.snapshot.is_empty() {
            return FeedView::Empty;
        }
        FeedView::Posts(
            self.snapshot
                .iter()
                .enumerate()
                .map(|(index, entry)| EntryCard::from_entry(index, entry))
                .collect(),
        )
    }

    /// Shows the post options sheet for the entry at `index`.
    pub async fn open_entry_options(&mut self, index: usize) -> CoreResult<EntryOptionOutcome> {
        let len = self.snapshot.len();
        if index >= len {
            return Err(CoreError::EntryIndexOutOfRange { index, len });
        }

        let prompt = Prompt {
            title: "Post Options".to_string(),
            message: "What would you like to do with this post?".to_string(),
            options: vec![
                PromptOption::new("Delete", PromptStyle::Destructive),
                PromptOption::new("Rename", PromptStyle::Default),
                PromptOption::new("Cancel", PromptStyle::Cancel),
            ],
        };

        match self.alerts.choose(&prompt).await {
            Some(OPTION_DELETE) => Ok(EntryOptionOutcome::Deleted(self.delete(index).await?)),
            Some(OPTION_RENAME) => self.prompt_rename(index).await,
            _ => Ok(EntryOptionOutcome::Cancelled),
        }
    }

    async fn prompt_rename(&mut self, index: usize) -> CoreResult<EntryOptionOutcome> {
        let current = self
            .snapshot
            .get(index)
            .and_then(|entry| entry.title.clone())
            .unwrap_or_default();

        match self
            .alerts
            .prompt_text("Rename Post", "Enter new title:", &current)
            .await
        {
            Some(new_title) => Ok(EntryOptionOutcome::Renamed(
                self.rename(index, &new_title).await?,
            )),
            None => Ok(EntryOptionOutcome::Cancelled),
        }
    }

    /// Removes the entry at `index` and refreshes the snapshot.
    pub async fn delete(&mut self, index: usize) -> CoreResult<Entry> {
        let removed = self.entries.delete(index).await?;
        self.refresh_after("entry_delete").await;
        info!(
            "event=entry_delete module=feed status=ok count={}",
            self.snapshot.len()
        );
        Ok(removed)
    }

    /// Retitles the entry at `index`; the title is trimmed and may be empty.
    pub async fn rename(&mut self, index: usize, new_title: &str) -> CoreResult<Entry> {
        let renamed = self.entries.rename(index, new_title).await?;
        self.refresh_after("entry_rename").await;
        info!(
            "event=entry_rename module=feed status=ok has_title={}",
            renamed.has_title()
        );
        Ok(renamed)
    }

    async fn refresh_after(&mut self, event: &str) {
        if let Err(err) = self.reload().await {
            warn!(
                "event={} module=feed status=stale error_code=reload_failed error={}",
                event, err
            );
        }
    }
}
