//! KAIROS Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout KAIROS:
//! - Time units (milliseconds, whole seconds)
//! - The bend configuration (offset + acceleration from a pivot)
//! - Synchronization results
//! - Error types

pub mod error;
pub mod time;

pub use error::*;
pub use time::*;
