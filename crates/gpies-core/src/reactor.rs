//! Radiation environment parameters for a cluster-dynamics simulation
//!
//! Based loosely on C. Pokor, Journal of Nuclear Materials 326 (2004), Table 5.

use crate::{impl_scalar_fields, GpFloat};

/// Radiation environment of a simulation run.
///
/// Field order: `flux`, `temperature`, `recombination`, `i_bi`, `i_tri`,
/// `i_quad`, `v_bi`, `v_tri`, `v_quad`, `dislocation_density_evolution`.
#[derive(Clone, Debug, PartialEq)]
pub struct NuclearReactor {
    /// Row id once persisted, `-1` before
    pub sqlite_id: i64,
    /// Timestamp of first persistence
    pub creation_datetime: String,
    /// Name of the reactor this data represents
    pub species: String,

    /// Neutron flux through the material (dpa/s)
    pub flux: GpFloat,
    /// Temperature (K)
    pub temperature: GpFloat,
    /// Recombination factor for collision cascades
    pub recombination: GpFloat,
    /// Fraction of generated interstitial clusters of size 2
    pub i_bi: GpFloat,
    /// Fraction of generated interstitial clusters of size 3
    pub i_tri: GpFloat,
    /// Fraction of generated interstitial clusters of size 4
    pub i_quad: GpFloat,
    /// Fraction of generated vacancy clusters of size 2
    pub v_bi: GpFloat,
    /// Fraction of generated vacancy clusters of size 3
    pub v_tri: GpFloat,
    /// Fraction of generated vacancy clusters of size 4
    pub v_quad: GpFloat,
    /// Parameter of dislocation network evolution
    pub dislocation_density_evolution: GpFloat,
}

impl Default for NuclearReactor {
    fn default() -> Self {
        NuclearReactor {
            sqlite_id: -1,
            creation_datetime: String::new(),
            species: String::new(),
            flux: 0.0,
            temperature: 0.0,
            recombination: 0.0,
            i_bi: 0.0,
            i_tri: 0.0,
            i_quad: 0.0,
            v_bi: 0.0,
            v_tri: 0.0,
            v_quad: 0.0,
            dislocation_density_evolution: 0.0,
        }
    }
}

impl_scalar_fields!(NuclearReactor {
    flux,
    temperature,
    recombination,
    i_bi,
    i_tri,
    i_quad,
    v_bi,
    v_tri,
    v_quad,
    dislocation_density_evolution,
});

/// Reference reactor definitions
pub mod nuclear_reactors {
    use super::NuclearReactor;
    use crate::conversions::celsius_to_kelvin;

    /// Parameters roughly corresponding to the French OSIRIS reactor
    pub fn osiris() -> NuclearReactor {
        NuclearReactor {
            species: "OSIRIS".to_string(),
            flux: 2.9e-7,
            temperature: celsius_to_kelvin(330.0),
            recombination: 0.3,
            i_bi: 0.5,
            i_tri: 0.2,
            i_quad: 0.06,
            v_bi: 0.06,
            v_tri: 0.03,
            v_quad: 0.02,
            dislocation_density_evolution: 300.0,
            ..NuclearReactor::default()
        }
    }
}
