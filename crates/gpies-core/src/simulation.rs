//! Simulation snapshots

use crate::GpFloat;

/// Concentrations of a cluster-dynamics run at one point in time.
///
/// `interstitials[n]` and `vacancies[n]` hold the concentration of clusters
/// of size `n`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterDynamicsState {
    pub valid: bool,
    pub time: GpFloat,
    pub interstitials: Vec<GpFloat>,
    pub vacancies: Vec<GpFloat>,
    pub dislocation_density: GpFloat,
}

impl Default for ClusterDynamicsState {
    fn default() -> Self {
        ClusterDynamicsState {
            valid: true,
            time: 0.0,
            interstitials: Vec::new(),
            vacancies: Vec::new(),
            dislocation_density: 0.0,
        }
    }
}

/// A stored simulation: references to its reactor and material plus the
/// resulting state.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationModel {
    pub sqlite_id: i64,
    pub creation_datetime: String,
    pub id_reactor: i64,
    pub id_material: i64,
    pub cd_state: ClusterDynamicsState,
}

impl Default for SimulationModel {
    fn default() -> Self {
        SimulationModel {
            sqlite_id: -1,
            creation_datetime: String::new(),
            id_reactor: -1,
            id_material: -1,
            cd_state: ClusterDynamicsState::default(),
        }
    }
}
