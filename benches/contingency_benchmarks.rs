use contingency::bayes::{BayesFactorEvaluator, GunelDickey, SamplingScheme};
use contingency::{goodness_of_fit, independence_test, odds_ratio, Table};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn contingency_benchmarks(c: &mut Criterion) {
    let police = Table::from_rows(&[vec![1219, 36244], vec![3108, 239241]]).unwrap();
    let daily = vec![41_u64, 48, 105, 58, 45, 54, 51];
    let evaluator = GunelDickey::default();

    c.bench_function("goodness_of_fit", |b| {
        b.iter(|| goodness_of_fit(black_box(&daily)))
    });
    c.bench_function("independence_test 2x2", |b| {
        b.iter(|| independence_test(black_box(&police)))
    });
    c.bench_function("odds_ratio", |b| b.iter(|| odds_ratio(black_box(&police))));
    c.bench_function("ln_bayes_factor", |b| {
        b.iter(|| evaluator.ln_bayes_factor(black_box(&police), SamplingScheme::JointMultinomial))
    });
}

criterion_group!(benches, contingency_benchmarks);
criterion_main!(benches);
