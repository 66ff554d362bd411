//! Material properties for a cluster-dynamics simulation

use crate::{impl_scalar_fields, GpFloat};

/// Physical properties of the irradiated material.
///
/// Energies are in eV, lengths in cm, diffusion prefactors in cm^2/s.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub sqlite_id: i64,
    pub creation_datetime: String,
    pub species: String,

    pub i_migration: GpFloat,
    pub v_migration: GpFloat,
    pub i_diffusion_0: GpFloat,
    pub v_diffusion_0: GpFloat,
    pub i_formation: GpFloat,
    pub v_formation: GpFloat,
    pub i_binding: GpFloat,
    pub v_binding: GpFloat,
    pub recombination_radius: GpFloat,
    pub i_loop_bias: GpFloat,
    pub i_dislocation_bias: GpFloat,
    pub i_dislocation_bias_param: GpFloat,
    pub v_loop_bias: GpFloat,
    pub v_dislocation_bias: GpFloat,
    pub v_dislocation_bias_param: GpFloat,
    /// Initial dislocation network density
    pub dislocation_density_0: GpFloat,
    pub grain_size: GpFloat,
    pub lattice_param: GpFloat,
    pub burgers_vector: GpFloat,
    pub atomic_volume: GpFloat,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            sqlite_id: -1,
            creation_datetime: String::new(),
            species: String::new(),
            i_migration: 0.0,
            v_migration: 0.0,
            i_diffusion_0: 0.0,
            v_diffusion_0: 0.0,
            i_formation: 0.0,
            v_formation: 0.0,
            i_binding: 0.0,
            v_binding: 0.0,
            recombination_radius: 0.0,
            i_loop_bias: 0.0,
            i_dislocation_bias: 0.0,
            i_dislocation_bias_param: 0.0,
            v_loop_bias: 0.0,
            v_dislocation_bias: 0.0,
            v_dislocation_bias_param: 0.0,
            dislocation_density_0: 0.0,
            grain_size: 0.0,
            lattice_param: 0.0,
            burgers_vector: 0.0,
            atomic_volume: 0.0,
        }
    }
}

impl_scalar_fields!(Material {
    i_migration,
    v_migration,
    i_diffusion_0,
    v_diffusion_0,
    i_formation,
    v_formation,
    i_binding,
    v_binding,
    recombination_radius,
    i_loop_bias,
    i_dislocation_bias,
    i_dislocation_bias_param,
    v_loop_bias,
    v_dislocation_bias,
    v_dislocation_bias_param,
    dislocation_density_0,
    grain_size,
    lattice_param,
    burgers_vector,
    atomic_volume,
});
