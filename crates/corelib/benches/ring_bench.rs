use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shardring::{HashRing, PartitionerKind};

fn build_ring(servers: usize, vnodes: usize, kind: PartitionerKind) -> HashRing {
    HashRing::with_partitioner(
        (0..servers).map(|i| format!("server-{i}")),
        vnodes,
        kind.build(),
    )
    .unwrap()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for kind in [PartitionerKind::Blake3, PartitionerKind::Xxh3, PartitionerKind::Sip] {
        let ring = build_ring(100, 160, kind);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &ring, |b, ring| {
            let mut i = 0u64;
            b.iter(|| {
                i = i.wrapping_add(1);
                black_box(ring.resolve(i.to_le_bytes()).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    for vnodes in [3, 160] {
        let ring = build_ring(100, vnodes, PartitionerKind::Blake3);
        group.bench_with_input(BenchmarkId::new("add_remove", vnodes), &ring, |b, ring| {
            b.iter(|| {
                ring.add_server("joining");
                ring.remove_server("joining");
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_membership);
criterion_main!(benches);
