use route_core::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

criterion_group!(benches, relaxation_strategies);
criterion_main!(benches);

pub fn relaxation_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_on_grid");

    for size in [10, 50, 100].iter() {
        let g = generate_grid_graph(*size, *size);
        let source = "0_0".to_string();
        let target = format!("{}_{}", size - 1, size - 1);

        for strategy in [RelaxationStrategy::OnImprovement, RelaxationStrategy::EveryEdge] {
            let params = SearchParams::new().relaxation(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), size),
                &g,
                |b, g| {
                    b.iter(|| {
                        let mut dijkstra = Dijkstra::with_params(g, params);
                        black_box(dijkstra.search(&source, &target));
                    })
                },
            );
        }
    }
    group.finish();
}
