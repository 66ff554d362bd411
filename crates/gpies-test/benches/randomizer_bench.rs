//! Benchmarks for fixture generation and tolerance checks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gpies_core::{Material, NuclearReactor, SimulationModel};
use gpies_test::{check_fields_near, check_near, Randomizer, RandomizerConfig};

fn bench_randd(c: &mut Criterion) {
    let mut randomizer = Randomizer::from_seed(42);

    c.bench_function("randd", |b| b.iter(|| black_box(randomizer.randd())));
}

fn bench_reactor_randomize(c: &mut Criterion) {
    let mut randomizer = Randomizer::from_seed(42);
    let mut reactor = NuclearReactor::default();

    c.bench_function("reactor_randomize", |b| {
        b.iter(|| {
            randomizer.reactor_randomize(&mut reactor);
            black_box(reactor.flux)
        })
    });
}

fn bench_material_randomize(c: &mut Criterion) {
    let mut randomizer = Randomizer::from_seed(42);
    let mut material = Material::default();

    c.bench_function("material_randomize", |b| {
        b.iter(|| {
            randomizer.material_randomize(&mut material);
            black_box(material.atomic_volume)
        })
    });
}

fn bench_simulation_randomize(c: &mut Criterion) {
    let mut randomizer = Randomizer::with_config(RandomizerConfig::light());

    c.bench_function("simulation_randomize_light", |b| {
        b.iter(|| {
            let mut simulation = SimulationModel::default();
            randomizer.simulation_randomize(&mut simulation);
            black_box(simulation.cd_state.interstitials.len())
        })
    });
}

fn bench_check_near(c: &mut Criterion) {
    c.bench_function("check_near", |b| {
        b.iter(|| check_near(black_box(100.0), black_box(100.0 + 1e-13)))
    });
}

fn bench_check_fields_near(c: &mut Criterion) {
    let mut randomizer = Randomizer::from_seed(42);
    let mut reactor = NuclearReactor::default();
    randomizer.reactor_randomize(&mut reactor);
    let copy = reactor.clone();

    c.bench_function("check_fields_near_reactor", |b| {
        b.iter(|| check_fields_near(black_box(&reactor), black_box(&copy)))
    });
}

criterion_group!(
    benches,
    bench_randd,
    bench_reactor_randomize,
    bench_material_randomize,
    bench_simulation_randomize,
    bench_check_near,
    bench_check_fields_near,
);
criterion_main!(benches);
