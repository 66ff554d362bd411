//! GPIES Time - Elapsed-time measurement
//!
//! This crate implements:
//! - `Timer`: start/stop interval measurement on the monotonic clock
//! - `measure`: one-shot timing of a closure
//! - `Profile`: labelled samples from repeated runs
//!
//! Durations are reported in seconds as `GpFloat`, the simulation precision.

pub mod profile;
pub mod timer;

pub use profile::*;
pub use timer::*;
