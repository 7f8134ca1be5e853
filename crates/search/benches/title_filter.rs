//! Benchmarks for title filtering
//!
//! Run with: cargo bench --package search

use catalog::Movie;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_catalog(size: usize) -> Vec<Movie> {
    (0..size)
        .map(|i| Movie {
            id: format!("movie-{}", i),
            title: format!("Movie Title Number {}", i),
            category: format!("Category {}", i % 7),
            photo_url: String::new(),
        })
        .collect()
}

fn bench_title_filter(c: &mut Criterion) {
    let catalog = build_catalog(5_000);

    c.bench_function("filter_5000_titles_hit", |b| {
        b.iter(|| search::filter(black_box(&catalog), black_box("number 42")))
    });

    c.bench_function("filter_5000_titles_miss", |b| {
        b.iter(|| search::filter(black_box(&catalog), black_box("tenet")))
    });
}

criterion_group!(benches, bench_title_filter);
criterion_main!(benches);
