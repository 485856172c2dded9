//! KAIROS Clock - Raw time sources and the bendable Timer
//!
//! This crate implements the leaf of the dual clock:
//! - `TimeSource`: the raw device clock port (epoch milliseconds)
//! - `SystemTimeSource` / `ManualTimeSource`: production and test sources
//! - `Timer`: a reconfigurable transform from raw device time onto a bent
//!   logical timeline

pub mod source;
pub mod timer;

pub use source::*;
pub use timer::*;
