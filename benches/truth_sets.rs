//! Truth-set and entailment benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench truth_sets
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use entail_rs::argument::Argument;
use entail_rs::logic::Logic;
use entail_rs::reference::Ref;
use entail_rs::truth_set::truth_set_intersection;

// ============================================================================
// Helpers
// ============================================================================

fn mk_vars(logic: &Logic, n: usize) -> Vec<Ref> {
    (0..n).map(|i| logic.mk_var(format!("x{}", i))).collect()
}

/// Chain of implications x0 → x1 → ... → x(n-1), one premise per link.
fn implication_chain(logic: &Logic, vars: &[Ref]) -> Argument {
    let premises: Vec<Ref> = vars.windows(2).map(|w| logic.mk_imply(w[0], w[1])).collect();
    let conclusion = logic.mk_imply(vars[0], vars[vars.len() - 1]);
    Argument::new(conclusion, premises).unwrap()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumeration");

    for num_vars in [8, 12, 16] {
        let logic = Logic::default();
        let vars = mk_vars(&logic, num_vars);

        group.throughput(Throughput::Elements(1 << num_vars));
        group.bench_with_input(BenchmarkId::new("combinations", num_vars), &vars, |b, vars| {
            b.iter(|| logic.all_ordered_combinations(vars).len());
        });
    }

    group.finish();
}

fn bench_truth_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("truth_set");

    for num_vars in [8, 12, 16] {
        let logic = Logic::default();
        let vars = mk_vars(&logic, num_vars);
        // Parity of all variables: every row is evaluated and half are kept.
        let f = vars.iter().skip(1).fold(vars[0], |acc, &v| logic.mk_iff(acc, v));

        group.throughput(Throughput::Elements(1 << num_vars));
        group.bench_with_input(BenchmarkId::new("parity", num_vars), &vars, |b, vars| {
            b.iter(|| logic.truth_set(f, vars).len());
        });
    }

    group.finish();
}

fn bench_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersection");

    for num_vars in [8, 12, 16] {
        let logic = Logic::default();
        let vars = mk_vars(&logic, num_vars);
        let s = logic.truth_set(logic.mk_or(vars[0], vars[1]), &vars);
        let t = logic.truth_set(logic.mk_iff(vars[1], vars[num_vars - 1]), &vars);

        group.bench_with_input(BenchmarkId::new("merge_join", num_vars), &(s, t), |b, (s, t)| {
            b.iter(|| truth_set_intersection(s, t).len());
        });
    }

    group.finish();
}

fn bench_valid(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid");
    group.sample_size(20);

    for num_vars in [6, 10, 14] {
        let logic = Logic::default();
        let vars = mk_vars(&logic, num_vars);
        let argument = implication_chain(&logic, &vars);

        group.bench_with_input(BenchmarkId::new("implication_chain", num_vars), &vars, |b, vars| {
            b.iter(|| logic.valid(vars, &argument));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enumeration, bench_truth_set, bench_intersection, bench_valid);
criterion_main!(benches);
