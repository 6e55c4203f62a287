//! Performance benchmarks for leftover-chef.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Small synthetic recipe page (~1KB) for microbenchmarks
//! - Generated pages of growing size to watch the selection cost

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use leftover_chef::suggest::fallback_suggest;
use leftover_chef::{extract_html, extract_html_with_options, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Leftover Rice Fritters</title>
    <script>window.analytics = {};</script>
</head>
<body>
    <header><a href="/">Home</a></header>
    <nav>
        <a href="/recipes">Recipes</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Leftover Rice Fritters</h1>
        <p>Day-old rice is perfect for fritters because it is drier and holds
        together better than freshly cooked rice.</p>
        <ul>
            <li>Two cups of cooked rice, cold from the fridge.</li>
            <li>One egg, a handful of grated cheese and some herbs.</li>
        </ul>
        <p>Mix everything, shape small patties and fry them in a little oil
        until both sides are golden and crisp.</p>
    </article>
    <aside class="promo">
        <h3>Subscribe to our newsletter</h3>
    </aside>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract_html(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_with_options(c: &mut Criterion) {
    let options = Options {
        min_block_chars: 10,
        early_exit_score: 200,
        ..Options::default()
    };

    c.bench_function("extract_with_options", |b| {
        b.iter(|| extract_html_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

/// Pages with many candidate containers and paragraphs.
fn bench_generated_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("generated");

    for sections in [10usize, 100, 1000] {
        let body: String = (0..sections)
            .map(|i| {
                format!(
                    r#"<div class="post"><h2>Section {i}</h2><p>Paragraph {i} about using up leftovers before they spoil.</p></div>"#
                )
            })
            .collect();
        let html = format!("<html><head><title>Generated</title></head><body>{body}</body></html>");

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", sections), &html, |b, html| {
            b.iter(|| extract_html(black_box(html)));
        });
    }

    group.finish();
}

fn bench_fallback_suggest(c: &mut Criterion) {
    let ingredients: Vec<String> = ["eggs", "tomato", "rice", "bread", "garlic", "pasta"]
        .iter()
        .map(ToString::to_string)
        .collect();

    c.bench_function("fallback_suggest", |b| {
        b.iter(|| fallback_suggest(black_box(&ingredients)));
    });
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_with_options,
    bench_generated_pages,
    bench_fallback_suggest
);
criterion_main!(benches);
