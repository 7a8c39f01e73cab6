//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate platform calls and repository writes into screen-level
//!   workflows (capture, feed, profile).
//! - Keep host/UI layers decoupled from storage and permission details.
//!
//! # Invariants
//! - Every device access goes through `CapabilityGate` first.
//! - Services never bypass repository validation or the store lock.

pub mod capability_gate;
pub mod capture_service;
pub mod debounce;
pub mod feed_service;
pub mod location_service;
pub mod notification_service;
pub mod profile_service;
