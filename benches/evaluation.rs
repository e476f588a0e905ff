use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;
use rpn_calc::{evaluate, evaluate_batch, Calculator};
use std::collections::HashMap;

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let expr = "2 + 3";
    let parsed = Calculator::from_expression(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("parse_and_compute_arithmetic", |b| {
        b.iter(|| evaluate(black_box(expr), &black_box(HashMap::new())))
    });

    group.bench_function("preparsed_arithmetic", |b| {
        b.iter(|| black_box(&parsed).compute())
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0 + 3.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let expr = "(10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0 ^ 2.0";
    let parsed = Calculator::from_expression(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("parse_and_compute_complex_arithmetic", |b| {
        b.iter(|| evaluate(black_box(expr), &black_box(HashMap::new())))
    });

    group.bench_function("preparsed_complex_arithmetic", |b| {
        b.iter(|| black_box(&parsed).compute())
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0f64.powf(2.0)))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_complex_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_complex_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark function calls and variables
fn benchmark_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function Call Evaluation");

    let expr = "sqrt(x) * sin(pi / 4) - abs(y)";
    let variables = HashMap::from([("x".to_string(), 16.0), ("y".to_string(), -2.0)]);
    let mut parsed = Calculator::from_expression(expr).unwrap();
    parsed.set("x", 16.0).set("y", -2.0);

    group.bench_function("parse_and_compute_function_call", |b| {
        b.iter(|| evaluate(black_box(expr), black_box(&variables)))
    });

    group.bench_function("preparsed_function_call", |b| {
        b.iter(|| black_box(&parsed).compute())
    });

    group.bench_function("native_rust_function_call", |b| {
        b.iter(|| black_box(16.0f64.sqrt() * (std::f64::consts::PI / 4.0).sin() - (-2.0f64).abs()))
    });

    group.bench_function("meval_function_call", |b| {
        let compiled = expr.parse::<meval::Expr>().unwrap();
        let mut ctx = meval::Context::new();
        ctx.var("x", 16.0).var("y", -2.0);
        b.iter(|| compiled.eval_with_context(black_box(&ctx)).unwrap())
    });
}

/// Benchmark one expression over many variable sets
fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");

    let expr = "price * volume - fee ^ 2";
    let contexts: Vec<HashMap<String, f64>> = (0..1000)
        .map(|i| {
            HashMap::from([
                ("price".to_string(), 100.0 + i as f64),
                ("volume".to_string(), 3000.0),
                ("fee".to_string(), 1.5),
            ])
        })
        .collect();

    group.bench_function("parallel_batch", |b| {
        b.iter(|| evaluate_batch(black_box(expr), black_box(&contexts)).unwrap())
    });

    group.bench_function("sequential_batch", |b| {
        b.iter(|| {
            contexts
                .iter()
                .map(|context| evaluate(black_box(expr), context))
                .collect::<Vec<_>>()
        })
    });
}

/// Grouping benchmarks
criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_function_calls,
    benchmark_batch,
);
criterion_main!(benches);
