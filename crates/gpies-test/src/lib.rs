//! GPIES Test Harness - Fixtures and tolerance checks
//!
//! This crate provides:
//! - Seeded random fixture generation for model records
//! - Magnitude-relative near-equality checks and assertions
//! - Test logging setup
//!
//! Seeds come from the clock by default. Set `GPIES_TEST_SEED` to replay a
//! run; every randomizer logs its seed at debug level.

pub mod logging;
pub mod randomizer;
pub mod seed;
pub mod tolerance;

pub use logging::*;
pub use randomizer::*;
pub use seed::*;
pub use tolerance::*;
