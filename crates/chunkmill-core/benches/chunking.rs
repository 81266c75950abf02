//! Chunking performance benchmarks
//!
//! Measures performance of:
//! - Structural extraction over parsed source trees
//! - Paragraph chunking of plain text
//! - The combined detect-parse-fallback pipeline

use chunkmill_core::chunk::{chunk_text, Chunker};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn generate_typescript(classes: usize) -> String {
    let mut source = String::from("import { Widget } from \"./widget\";\n\n");
    for i in 0..classes {
        source.push_str(&format!(
            "export class Service{i} {{\n    private count = 0;\n\n    handle(input: string): string {{\n        this.count += 1;\n        return input.trim();\n    }}\n\n    reset(): void {{\n        this.count = 0;\n    }}\n}}\n\n"
        ));
    }
    source
}

fn generate_java(classes: usize) -> String {
    let mut source = String::from("package com.example.widgets;\n\n");
    for i in 0..classes {
        source.push_str(&format!(
            "public class Service{i} {{\n    private int count;\n\n    public Service{i}() {{\n        this.count = 0;\n    }}\n\n    public String handle(String input) {{\n        count += 1;\n        return input.trim();\n    }}\n}}\n\n"
        ));
    }
    source
}

fn generate_prose(paragraphs: usize) -> String {
    let mut text = String::new();
    for i in 0..paragraphs {
        text.push_str(&format!(
            "Paragraph {i} describes one part of the system in enough words to look like\nreal documentation, spilling over a second line for good measure.\n\n"
        ));
    }
    text
}

fn bench_structural_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("structural_extraction");
    let chunker = Chunker::new();

    for (name, path, source) in &[
        ("typescript_small", "src/app.ts", generate_typescript(2)),
        ("typescript_large", "src/app.ts", generate_typescript(50)),
        ("java_small", "src/App.java", generate_java(2)),
        ("java_large", "src/App.java", generate_java(50)),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, source| {
            b.iter(|| chunker.chunk_file(black_box(source), path, None));
        });
    }

    group.finish();
}

fn bench_paragraph_chunking(c: &mut Criterion) {
    let mut group = c.benchmark_group("paragraph_chunking");

    for (name, text) in &[
        ("prose_small", generate_prose(5)),
        ("prose_medium", generate_prose(50)),
        ("prose_large", generate_prose(500)),
    ] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| chunk_text(black_box(text), "notes.md", None, 1000));
        });
    }

    group.finish();
}

fn bench_fallback_pipeline(c: &mut Criterion) {
    let chunker = Chunker::new();
    let prose = generate_prose(20);

    // prose under a code extension exercises the parse-then-fallback path
    c.bench_function("pipeline/java_fallback_to_text", |b| {
        b.iter(|| chunker.chunk_file(black_box(&prose), "github/acme/widgets/Notes.java", None));
    });
}

criterion_group!(
    benches,
    bench_structural_extraction,
    bench_paragraph_chunking,
    bench_fallback_pipeline,
);
criterion_main!(benches);
