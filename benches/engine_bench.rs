// ABOUTME: Criterion benchmarks for the formulation engine
// ABOUTME: Measures forward and reverse passes, pre-ferment edits and batch recalculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the formulation engine.
//!
//! Covers single-recipe forward and reverse passes over recipes of growing
//! ingredient count, and the rayon-backed library recalculation.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use doughcalc::formulation::{
    calculate_weights, normalize_pre_ferment_weight, recalculate_all,
    recalculate_from_percentages, recalculate_from_weights,
};
use doughcalc::models::{Ingredient, PreFermentMetadata, PreFermentType, Recipe};

const LIBRARY_SIZES: [usize; 3] = [10, 100, 1000];

/// Default dough plus `extras` additives and one pre-ferment of each type
fn recipe_with_extras(extras: usize) -> Recipe {
    let mut recipe = Recipe::default();
    for kind in [PreFermentType::Poolish, PreFermentType::Biga, PreFermentType::Custom] {
        recipe = recipe.with_ingredient(Ingredient::pre_ferment(
            kind.display_name(),
            PreFermentMetadata::new(kind),
            10.0,
        ));
    }
    for n in 0..extras {
        recipe = recipe.with_ingredient(Ingredient::additive(
            format!("Additive {n}"),
            0.5 + (n % 7) as f64,
        ));
    }
    recipe
}

fn bench_forward_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_pass");

    for extras in [0, 10, 50] {
        let recipe = recipe_with_extras(extras);
        group.throughput(Throughput::Elements(recipe.ingredients.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("calculate_weights", recipe.ingredients.len()),
            &recipe,
            |b, recipe| b.iter(|| calculate_weights(black_box(recipe), black_box(2.0))),
        );
    }

    group.finish();
}

fn bench_reverse_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_pass");

    for extras in [0, 10, 50] {
        let recipe = recalculate_from_percentages(&recipe_with_extras(extras), 2.0);
        group.throughput(Throughput::Elements(recipe.ingredients.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("recalculate_from_weights", recipe.ingredients.len()),
            &recipe,
            |b, recipe| b.iter(|| recalculate_from_weights(black_box(recipe))),
        );
    }

    group.finish();
}

fn bench_pre_ferment_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("pre_ferment_edit");

    let recipe = recalculate_from_percentages(&recipe_with_extras(10), 0.0);
    let id = recipe.pre_ferments().next().map(|i| i.id).unwrap();

    group.bench_function("normalize_then_forward", |b| {
        b.iter(|| {
            let ingredients =
                normalize_pre_ferment_weight(black_box(&recipe.ingredients), id, black_box(200.0));
            let edited = Recipe {
                ingredients,
                ..recipe.clone()
            };
            recalculate_from_percentages(&edited, 0.0)
        });
    });

    group.finish();
}

fn bench_library_recalculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("library");

    for size in LIBRARY_SIZES {
        let library: Vec<Recipe> = (0..size).map(|n| recipe_with_extras(n % 20)).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("recalculate_all", size),
            &library,
            |b, library| b.iter(|| recalculate_all(black_box(library), black_box(2.0))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_forward_pass,
    bench_reverse_pass,
    bench_pre_ferment_edit,
    bench_library_recalculation,
);
criterion_main!(benches);
