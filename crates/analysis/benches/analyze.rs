//! Analyzer throughput on synthetic clusters.

use analysis::analyze;
use corelib::{HashRangeGroup, HealthState, NodeDescriptor, Role, SlotRange, SLOT_COUNT};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// `primaries` groups with `replicas` replicas each, spread round-robin over
/// `hosts` machines.
fn cluster(primaries: u16, replicas: u16, hosts: u16) -> Vec<HashRangeGroup> {
    let width = SLOT_COUNT / primaries;
    (0..primaries)
        .map(|p| {
            let node = |i: u16, role| {
                let host = format!("10.0.0.{}", (p + i) % hosts);
                NodeDescriptor::new(format!("{:040x}", u32::from(p) << 8 | u32::from(i)), host, 7000 + i, role)
            };
            let start = p * width;
            let range = SlotRange::new(start, start + width - 1).expect("slot range within key space");
            HashRangeGroup::new(node(0, Role::Primary), vec![range])
                .with_replicas((1..=replicas).map(|i| node(i, Role::Replica)))
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for primaries in [3u16, 32, 256] {
        let groups = cluster(primaries, 2, 5);
        group.bench_with_input(BenchmarkId::from_parameter(primaries), &groups, |b, groups| {
            b.iter(|| analyze(black_box(groups), &HealthState::Ok))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
