use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use subword_nav::movement::{navigate, split_segments, Direction};

fn identifier_line() -> String {
    // Mixed identifier styles, the shape of a realistic code line
    "getHTTPResponse my_var_name fooBarBaz XMLHttpRequest UPPER_SNAKE_CASE kebab-case-name "
        .repeat(20)
}

fn navigate_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigate_line");
    let line = identifier_line();
    let len = line.chars().count();

    group.bench_function("walk_right", |b| {
        b.iter(|| {
            let mut pos = 0;
            while let Some(next) = navigate(black_box(&line), pos, Direction::Right) {
                pos = black_box(next);
            }
            pos
        })
    });

    group.bench_function("walk_left", |b| {
        b.iter(|| {
            let mut pos = len;
            while let Some(next) = navigate(black_box(&line), pos, Direction::Left) {
                pos = black_box(next);
            }
            pos
        })
    });

    group.finish();
}

fn segment_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_words");

    let words = [
        "getHTTPResponse",
        "my_var_name",
        "fooBarBaz",
        "XMLHttpRequest",
        "UPPER_SNAKE_CASE",
        "alllowercase",
    ];

    group.bench_function("split_segments", |b| {
        b.iter(|| {
            for word in &words {
                black_box(split_segments(black_box(word)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, navigate_line, segment_words);
criterion_main!(benches);
