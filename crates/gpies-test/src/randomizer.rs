//! Random fixture generation for model records
//!
//! Every record is populated field by field in its fixed field order, so all
//! tests that need a fixture exercise the same fields in the same order.
//! Values are independent draws; they do not form a physically valid state.

use std::sync::Arc;

use gpies_core::{GpFloat, Material, NuclearReactor, ScalarFields, SimulationModel};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::{ConfigError, SeedSource};

/// Largest raw draw. `RAW_MAX / 100` is a power of two, so scaling is exact
/// and the top of the range is exactly 100.
pub const RAW_MAX: u32 = 100 << 24;

/// Exclusive lower and inclusive upper bound of [`Randomizer::randd`]
pub const SCALAR_RANGE: (GpFloat, GpFloat) = (0.0, 100.0);

const RAW_PER_UNIT: f64 = (RAW_MAX / 100) as f64;

/// Randomizer configuration
#[derive(Clone, Debug)]
pub struct RandomizerConfig {
    /// Seed source
    pub seed: SeedSource,
    /// Minimum number of cluster sizes in a random simulation state
    pub min_clusters: usize,
    /// Spread of extra cluster sizes above the minimum
    pub max_extra_clusters: usize,
}

impl Default for RandomizerConfig {
    fn default() -> Self {
        RandomizerConfig {
            seed: SeedSource::Clock,
            min_clusters: 4,
            max_extra_clusters: 100_000,
        }
    }
}

impl RandomizerConfig {
    /// Fixed seed and small simulation states for quick tests
    pub fn light() -> Self {
        RandomizerConfig {
            seed: SeedSource::Fixed(42),
            min_clusters: 4,
            max_extra_clusters: 64,
        }
    }

    /// Default configuration with the seed taken from `GPIES_TEST_SEED`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(RandomizerConfig {
            seed: SeedSource::from_env()?,
            ..Self::default()
        })
    }
}

/// Fixture generator owning its own seeded generator
pub struct Randomizer {
    config: RandomizerConfig,
    seed: u64,
    rng: StdRng,
}

impl Randomizer {
    /// Clock-seeded randomizer with default configuration
    pub fn new() -> Self {
        Self::with_config(RandomizerConfig::default())
    }

    /// Randomizer with a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self::with_config(RandomizerConfig {
            seed: SeedSource::Fixed(seed),
            ..RandomizerConfig::default()
        })
    }

    /// Randomizer seeded from `GPIES_TEST_SEED`, or the clock if unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::with_config(RandomizerConfig::from_env()?))
    }

    pub fn with_config(config: RandomizerConfig) -> Self {
        let seed = config.seed.resolve();
        debug!(seed, source = ?config.seed, "randomizer seeded");

        Randomizer {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed this randomizer was built with; pass to `from_seed` to replay
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &RandomizerConfig {
        &self.config
    }

    /// Next scalar in `(0, 100]`
    pub fn randd(&mut self) -> GpFloat {
        let raw = self.rng.gen_range(1..=RAW_MAX);
        (raw as f64 / RAW_PER_UNIT) as GpFloat
    }

    /// Overwrite every scalar field of `fixture`, one draw per field in field
    /// order.
    pub fn randomize<F: ScalarFields>(&mut self, fixture: &mut F) {
        for (name, slot) in F::FIELD_NAMES.iter().zip(fixture.field_values_mut()) {
            *slot = self.randd();
            trace!(record = F::RECORD_NAME, field = *name, value = *slot as f64);
        }
    }

    /// Randomize the ten reactor fields
    pub fn reactor_randomize(&mut self, reactor: &mut NuclearReactor) {
        self.randomize(reactor);
    }

    /// Randomize the twenty material fields
    pub fn material_randomize(&mut self, material: &mut Material) {
        self.randomize(material);
    }

    /// Randomize a simulation's references and state.
    ///
    /// Appends between `min_clusters` and
    /// `min_clusters + max_extra_clusters - 1` values to both concentration
    /// vectors.
    pub fn simulation_randomize(&mut self, simulation: &mut SimulationModel) {
        simulation.id_reactor = self.rng.gen_range(0..10);
        simulation.id_material = self.rng.gen_range(0..10);
        simulation.cd_state.time = self.randd();

        let extra = self.rng.gen_range(0..self.config.max_extra_clusters.max(1));
        let clusters = self.config.min_clusters + extra;
        simulation.cd_state.interstitials.reserve(clusters);
        simulation.cd_state.vacancies.reserve(clusters);
        for _ in 0..clusters {
            let interstitial = self.randd();
            let vacancy = self.randd();
            simulation.cd_state.interstitials.push(interstitial);
            simulation.cd_state.vacancies.push(vacancy);
        }

        simulation.cd_state.dislocation_density = self.randd();
        debug!(
            id_reactor = simulation.id_reactor,
            id_material = simulation.id_material,
            clusters,
            "simulation randomized"
        );
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

/// A randomizer shared across threads.
///
/// Draws are serialized by a lock; the sequence seen by any one thread
/// depends on scheduling.
#[derive(Clone)]
pub struct SharedRandomizer {
    inner: Arc<Mutex<Randomizer>>,
}

impl SharedRandomizer {
    pub fn new(randomizer: Randomizer) -> Self {
        SharedRandomizer {
            inner: Arc::new(Mutex::new(randomizer)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.inner.lock().seed()
    }

    pub fn randd(&self) -> GpFloat {
        self.inner.lock().randd()
    }

    /// Randomize a whole record under a single lock
    pub fn randomize<F: ScalarFields>(&self, fixture: &mut F) {
        self.inner.lock().randomize(fixture);
    }

    /// Run `f` with exclusive access to the underlying randomizer
    pub fn with<T>(&self, f: impl FnOnce(&mut Randomizer) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
