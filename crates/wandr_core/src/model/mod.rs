//! Domain model for journal entries and the local profile.
//!
//! # Invariants
//! - Entries and the profile have independent lifecycles; neither references
//!   the other.
//! - An entry title is an explicit `Option`, never an empty-string marker.

pub mod entry;
pub mod profile;
