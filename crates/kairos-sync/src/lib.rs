//! KAIROS Sync - One-shot clock synchronization against a time authority
//!
//! This crate implements the synchronization half of the dual clock:
//! - `SyncAuthority`: the pluggable round-trip capability
//! - `Synchronizer`: owns a server-view and a client-view Timer and derives
//!   both configurations from a single authority response

pub mod authority;
pub mod synchronizer;

pub use authority::*;
pub use synchronizer::*;
