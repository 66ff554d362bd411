//! GPIES Core - Numeric types and model records
//!
//! This crate defines the types shared by the GPIES support crates:
//! - Simulation precision (`GpFloat`)
//! - Model records (NuclearReactor, Material, SimulationModel)
//! - Uniform scalar-field access (`ScalarFields`)
//! - Unit conversions and reference presets

pub mod conversions;
pub mod error;
pub mod fields;
pub mod float;
pub mod material;
pub mod reactor;
pub mod simulation;

pub use error::*;
pub use fields::*;
pub use float::*;
pub use material::*;
pub use reactor::*;
pub use simulation::*;
