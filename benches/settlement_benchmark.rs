use cash_flow_minimizer::settlement::engine::settle;
use cash_flow_minimizer::simulation::random_group::{generate_random_group, GroupConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_settle(c: &mut Criterion, name: &str, participant_count: usize) {
    let config = GroupConfig {
        participant_count,
        debt_count: participant_count * 5,
        seed: Some(2024),
        ..Default::default()
    };
    let ledger = generate_random_group(&config)
        .build_ledger()
        .expect("generated group is valid");

    c.bench_function(name, |b| b.iter(|| settle(black_box(&ledger))));
}

fn bench_settle_10_participants(c: &mut Criterion) {
    bench_settle(c, "settle_10_participants", 10);
}

fn bench_settle_100_participants(c: &mut Criterion) {
    bench_settle(c, "settle_100_participants", 100);
}

fn bench_settle_500_participants(c: &mut Criterion) {
    bench_settle(c, "settle_500_participants", 500);
}

criterion_group!(
    benches,
    bench_settle_10_participants,
    bench_settle_100_participants,
    bench_settle_500_participants
);
criterion_main!(benches);
