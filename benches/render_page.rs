use criterion::{criterion_group, criterion_main, Criterion};
use mobility_gallery::{render_page, visuals, StaticImageProvider};

// Benchmarks exercise the public assembly paths over the shipped catalog.
fn bench_render_page(c: &mut Criterion) {
    c.bench_function("render_page", |b| {
        b.iter(|| render_page(visuals(), &StaticImageProvider).unwrap())
    });
}

fn bench_page_to_html(c: &mut Criterion) {
    let page = render_page(visuals(), &StaticImageProvider).expect("page renders");
    c.bench_function("page_to_html", |b| b.iter(|| page.to_html()));
}

criterion_group!(benches, bench_render_page, bench_page_to_html);
criterion_main!(benches);
