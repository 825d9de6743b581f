//! Benchmarks for candidate selection
//!
//! Run with: cargo bench --package sources
//!
//! Uses the demo catalog in `data/` inflated with synthetic mentors.

use catalog::{Catalog, Mentor};
use chrono::Duration;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{MentorCriteria, SearchFilters};
use sources::{CatalogSource, MentorOrder};
use std::path::Path;
use std::sync::Arc;

const COPIES: usize = 500;

fn load_test_source() -> CatalogSource {
    let demo = Catalog::load_from_dir(Path::new("../../data")).expect("Failed to load demo data");

    let mut mentors: Vec<Mentor> = Vec::with_capacity(demo.counts().0 * COPIES);
    for copy in 0..COPIES {
        for mentor in demo.mentors() {
            let mut clone = mentor.clone();
            clone.id = format!("{}-{copy}", mentor.id);
            clone.updated_at += Duration::minutes(copy as i64);
            mentors.push(clone);
        }
    }
    let companies = demo.companies().cloned().collect();

    let catalog = Catalog::from_records(mentors, companies).expect("Failed to build catalog");
    CatalogSource::new(Arc::new(catalog))
}

fn bench_stack_candidates(c: &mut Criterion) {
    let source = load_test_source();
    let stacks = ["react".to_string(), "node".to_string()];
    let criteria = MentorCriteria::approved().with_any_stack(&stacks);

    c.bench_function("select_stack_candidates", |b| {
        b.iter(|| {
            let mentors = source.select_mentors(black_box(&criteria), MentorOrder::Unordered, 100);
            black_box(mentors)
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let source = load_test_source();
    let criteria = MentorCriteria::for_search(&SearchFilters {
        min_availability_hours: Some(10),
        ..Default::default()
    });

    c.bench_function("select_search_recent", |b| {
        b.iter(|| {
            let mentors =
                source.select_mentors(black_box(&criteria), MentorOrder::RecentlyUpdated, 50);
            black_box(mentors)
        })
    });
}

fn bench_reputation_order(c: &mut Criterion) {
    let source = load_test_source();
    let criteria = MentorCriteria::approved();

    c.bench_function("select_top_by_reputation", |b| {
        b.iter(|| {
            let mentors = source.select_mentors(&criteria, MentorOrder::Reputation, black_box(20));
            black_box(mentors)
        })
    });
}

criterion_group!(
    benches,
    bench_stack_candidates,
    bench_search,
    bench_reputation_order
);
criterion_main!(benches);
