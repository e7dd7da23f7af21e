//! Benchmarks for md2docx transcoding performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use md2docx::{classify_line, parse_str, render, LayoutMode, ParseOptions, RenderOptions};

/// Creates a synthetic flat-pages document with the given number of pages.
fn create_flat_source(page_count: usize) -> String {
    let mut content = String::new();
    for i in 0..page_count {
        if i > 0 {
            content.push_str("<div style=\"page-break-after: always;\"></div>\n");
        }
        content.push_str(&format!("# Page {}\n", i + 1));
        content.push_str("**Summary**\n");
        content.push_str("Benchmark text with **bold** spans and plain words.\n");
        content.push_str("- First bullet\n  * Nested bullet\n---\n\n");
    }
    content
}

/// Creates a synthetic hierarchical document with the given number of sections.
fn create_hierarchical_source(section_count: usize) -> String {
    let mut content = String::from("# Requirements\n\n");
    for i in 0..section_count {
        content.push_str(&format!("## {}. Section {}\n", i + 1, i + 1));
        content.push_str("Intro paragraph for the section.\n");
        for j in 0..3 {
            content.push_str(&format!("### {}.{} Topic\n", i + 1, j + 1));
            content.push_str("**Implementation Requirements:**\n");
            content.push_str("- Requirement one\n- Requirement two\n\n");
        }
    }
    content
}

fn bench_classify_line(c: &mut Criterion) {
    c.bench_function("classify_bold_paragraph", |b| {
        b.iter(|| {
            classify_line(
                black_box("Mix **bold** and plain **text** in one line"),
                LayoutMode::FlatPages,
            )
        });
    });
}

fn bench_transcode(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcode");

    for count in [1, 10, 50].iter() {
        let flat = create_flat_source(*count);
        let hierarchical = create_hierarchical_source(*count);

        group.bench_function(format!("flat_{}_pages", count), |b| {
            let options = ParseOptions::new().flat_pages();
            b.iter(|| parse_str(black_box(&flat), &options).unwrap());
        });

        group.bench_function(format!("hierarchical_{}_sections", count), |b| {
            let options = ParseOptions::new().hierarchical();
            b.iter(|| parse_str(black_box(&hierarchical), &options).unwrap());
        });
    }

    group.finish();
}

fn bench_render_docx(c: &mut Criterion) {
    let doc = parse_str(
        &create_hierarchical_source(10),
        &ParseOptions::new().hierarchical(),
    )
    .unwrap();
    let options = RenderOptions::new().with_table_of_contents(true);

    c.bench_function("render_docx_10_sections", |b| {
        b.iter(|| render::to_docx_bytes(black_box(&doc), &options).unwrap());
    });
}

criterion_group!(benches, bench_classify_line, bench_transcode, bench_render_docx);
criterion_main!(benches);
