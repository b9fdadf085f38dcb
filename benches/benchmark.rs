//! Performance benchmarks for html-blocks.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small word-processor style export for microbenchmarks
//! - Synthetic documents of growing size for scaling behavior

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use html_blocks::{clean, extract_blocks, sanitize_inline, serialize};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Export</title>
    <style>p.MsoNormal { margin: 0 }</style>
</head>
<body>
    <h1 class="MsoTitle"><b>Sample Document</b></h1>
    <p class="MsoNormal" style="margin:0"><font face="Arial">Opening paragraph with
    <b>bold</b><b> runs</b> and a <a href="https://example.com" onclick="track()">link</a>.</font></p>
    <p class="MsoListParagraph">· First bullet</p>
    <p class="MsoListParagraph">· Second bullet</p>
    <table>
        <tr><th>Name</th><th>Value</th></tr>
        <tr><td>alpha</td><td>1</td></tr>
        <tr><td>beta</td><td>2</td></tr>
    </table>
    <pre><code>fn main() {}</code></pre>
    <blockquote>Quoted <em>text</em></blockquote>
    <img src="/figure.png" alt="Figure 1">
    <h2>FAQ</h2>
    <p>What is this?</p>
    <p>A benchmark fixture.</p>
    <p>Is it fast?</p>
    <p>Let's find out.</p>
</body>
</html>
"#;

fn synthetic_document(sections: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..sections {
        html.push_str(&format!(
            "<h2>Section {i}</h2><p style=\"x\">Paragraph <b>{i}</b><b>!</b> with \
             <a href=\"/s/{i}\">a link</a>.</p><ul><li>one</li><li>two</li></ul>"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_clean(c: &mut Criterion) {
    c.bench_function("clean_sample", |b| {
        b.iter(|| clean(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_blocks(c: &mut Criterion) {
    c.bench_function("extract_blocks_sample", |b| {
        b.iter(|| extract_blocks(black_box(SAMPLE_HTML)));
    });
}

fn bench_serialize(c: &mut Criterion) {
    let Ok(doc) = extract_blocks(SAMPLE_HTML) else {
        return;
    };
    c.bench_function("serialize_sample", |b| {
        b.iter(|| serialize(black_box(&doc)));
    });
}

fn bench_sanitize_inline(c: &mut Criterion) {
    let fragment = r#"<div>Text <span class="a">span</span> <a href="javascript:x()">bad</a> <u>under</u></div>"#;
    c.bench_function("sanitize_inline", |b| {
        b.iter(|| sanitize_inline(black_box(fragment)));
    });
}

/// Scaling with document size
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for sections in [10, 100, 500] {
        let html = synthetic_document(sections);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("extract_blocks", format!("{sections} sections")),
            &html,
            |b, html| {
                b.iter(|| extract_blocks(black_box(html)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_clean,
    bench_extract_blocks,
    bench_serialize,
    bench_sanitize_inline,
    bench_scaling
);
criterion_main!(benches);
