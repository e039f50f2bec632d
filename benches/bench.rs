//! Criterion benchmarks for wordsmith.
//!
//! Covers the word extractor, document binding and the heavier facade
//! operations (search, whole-word replacement, grapheme reversal).

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wordsmith::analysis::extract_words;
use wordsmith::document::TextDocument;

/// Generate a mixed-script test text of roughly `count` words.
fn generate_test_text(count: usize) -> String {
    let words = [
        "Anna", "swims", "quickly", "Otto", "laughs", "loudly", "röd", "ros", "blå", "Åsa",
        "älskar", "åska", "well-known", "kajak", "Madam", "déjà", "vu", "мир", "rad1", "42",
    ];

    let mut text = String::new();
    for i in 0..count {
        text.push_str(words[i % words.len()]);
        text.push(if i % 11 == 10 { '.' } else { ' ' });
        if i % 11 == 10 {
            text.push(' ');
        }
    }
    text
}

fn bench_word_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_extraction");

    for size in [100, 1_000, 10_000] {
        let text = generate_test_text(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("extract_words_{size}"), |b| {
            b.iter(|| black_box(extract_words(black_box(&text))))
        });
    }

    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");
    let text = generate_test_text(5_000);

    group.bench_function("bind_text", |b| {
        b.iter(|| black_box(TextDocument::new(black_box(&text))))
    });

    let doc = TextDocument::new(&text).unwrap();

    group.bench_function("analyze", |b| {
        b.iter(|| {
            black_box(doc.count_sentences());
            black_box(doc.letter_frequency());
            black_box(doc.find_palindromes())
        })
    });

    group.bench_function("find_all_case_insensitive", |b| {
        b.iter(|| black_box(doc.find_all(black_box("åsa"), false)))
    });

    group.bench_function("replace_word", |b| {
        b.iter(|| black_box(doc.replace_word(black_box("ros"), "tulpan", true)))
    });

    group.bench_function("reverse", |b| b.iter(|| black_box(doc.reverse())));

    group.bench_function("to_snake_case", |b| b.iter(|| black_box(doc.to_snake_case())));

    group.finish();
}

criterion_group!(benches, bench_word_extraction, bench_document);
criterion_main!(benches);
