//! Benchmarks for question translation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seshat::tokenize::Tokenizer;
use seshat::translate::{Translator, TranslatorConfig};

fn bench_normalize(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();

    c.bench_function("normalize_question", |bench| {
        bench.iter(|| black_box(tokenizer.normalize("What are the names of all the people?")))
    });
}

fn bench_translate(c: &mut Criterion) {
    let translator = Translator::new(TranslatorConfig::default()).unwrap();

    c.bench_function("translate_single_label", |bench| {
        bench.iter(|| black_box(translator.translate_question("What are the names of all the people?")))
    });

    c.bench_function("translate_count", |bench| {
        bench.iter(|| black_box(translator.translate_question("How many names start with J?")))
    });

    c.bench_function("translate_relationship", |bench| {
        bench.iter(|| black_box(translator.translate_question("Who has parents?")))
    });
}

criterion_group!(benches, bench_normalize, bench_translate);
criterion_main!(benches);
