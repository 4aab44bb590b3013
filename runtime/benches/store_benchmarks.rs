//! Store performance benchmarks
//!
//! Pure reducer execution and store dispatch are in-memory operations;
//! these benchmarks keep an eye on the per-action overhead of the
//! runtime (lock, tracking, effect bookkeeping).
//!
//! Run with: `cargo bench`

#![allow(missing_docs)] // Benchmarks don't need extensive docs
#![allow(clippy::expect_used)] // Benchmarks can use expect for setup

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use taskpad_core::{SmallVec, effect::Effect, reducer::Reducer};
use taskpad_runtime::Store;

#[derive(Clone, Debug, Default)]
struct BenchState {
    entries: Vec<(i64, bool)>,
}

#[derive(Clone, Debug)]
enum BenchAction {
    Push(i64),
    Flip(i64),
    NoOp,
}

#[derive(Clone)]
struct BenchReducer;

impl Reducer for BenchReducer {
    type State = BenchState;
    type Action = BenchAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            BenchAction::Push(id) => {
                state.entries.push((id, false));
                SmallVec::new()
            },
            BenchAction::Flip(id) => {
                if let Some(entry) = state.entries.iter_mut().find(|(e, _)| *e == id) {
                    entry.1 = !entry.1;
                }
                SmallVec::new()
            },
            BenchAction::NoOp => SmallVec::new(),
        }
    }
}

/// Benchmark reducer execution in isolation (no Store overhead)
fn benchmark_reducer_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("reducer");
    group.throughput(Throughput::Elements(1));

    group.bench_function("push", |b| {
        let reducer = BenchReducer;
        let mut state = BenchState::default();
        let mut next = 0i64;
        b.iter(|| {
            next += 1;
            let effects = reducer.reduce(&mut state, black_box(BenchAction::Push(next)), &());
            black_box(effects);
        });
    });

    group.bench_function("flip_in_100", |b| {
        let reducer = BenchReducer;
        let mut state = BenchState {
            entries: (0..100).map(|i| (i, false)).collect(),
        };
        b.iter(|| {
            let effects = reducer.reduce(&mut state, black_box(BenchAction::Flip(50)), &());
            black_box(effects);
        });
    });

    group.finish();
}

/// Benchmark store dispatch overhead
fn benchmark_store_send(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");

    let mut group = c.benchmark_group("store");
    group.throughput(Throughput::Elements(1));

    group.bench_function("send_noop", |b| {
        let store = Store::new(BenchState::default(), BenchReducer, ());
        b.to_async(&rt).iter(|| {
            let store = store.clone();
            async move {
                let handle = store.send(BenchAction::NoOp).await.expect("send");
                black_box(handle);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_reducer_execution, benchmark_store_send);
criterion_main!(benches);
