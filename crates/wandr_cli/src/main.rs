//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `wandr_core` linkage and storage bootstrap without a device shell.
//! - Print a deterministic summary of a journal database.
//!
//! Usage: `wandr_cli [path/to/wandr.sqlite3]`. Without a path an in-memory
//! store is used.

use std::process::ExitCode;
use wandr_core::{
    share_store, EntryRepository, ProfileRepository, RepoResult, SqliteKeyValueStore,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    println!("wandr_core version={}", wandr_core::core_version());

    let db_path = std::env::args().nth(1);
    match summarize(db_path.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wandr_core status=error error={err}");
            ExitCode::FAILURE
        }
    }
}

async fn summarize(db_path: Option<&str>) -> RepoResult<()> {
    let store = match db_path {
        Some(path) => SqliteKeyValueStore::open(path)?,
        None => SqliteKeyValueStore::open_in_memory()?,
    };
    let store = share_store(store);

    let entries = EntryRepository::new(store.clone()).list().await?;
    let profile = ProfileRepository::new(store).load().await?;

    println!("wandr_core db={}", db_path.unwrap_or(":memory:"));
    println!("wandr_core entries={}", entries.len());
    println!(
        "wandr_core username_set={} profile_pic_set={}",
        profile.has_username(),
        profile.profile_pic_uri.is_some()
    );
    Ok(())
}
