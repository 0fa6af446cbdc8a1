use autowidth::{AutoWidthOptions, ControllerId, Page};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use css::ComputedStyle;
use dom::Document;
use layout::TextMeasurer;

const WORDS: [&str; 8] = [
    "a",
    "search",
    "autowidth",
    "hello world",
    "Lorem ipsum dolor",
    "the quick brown fox",
    "   padded   ",
    "jumps over the lazy dog",
];

struct FixedAdvance;

impl TextMeasurer for FixedAdvance {
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32 {
        text.chars().count() as f32 * style.font_size / 2.0
    }
}

fn page_with_controller(options: AutoWidthOptions) -> (Page, ControllerId) {
    let mut doc = Document::new();
    doc.add_style_sheet("input { font-size: 14px; letter-spacing: 1px; font-family: monospace }");
    let input = doc.create_element("input");
    let body = doc.body();
    doc.append_child(body, input);
    let mut page = Page::new(doc, Box::new(FixedAdvance));
    let id = page.attach(input, options);
    (page, id)
}

fn measure_all(page: &mut Page, id: ControllerId) {
    page.with_controller(id, |c, ctx| {
        for word in WORDS {
            black_box(c.measure_string(ctx, black_box(word)));
        }
    });
}

fn bench_measure_uncached(c: &mut Criterion) {
    let (mut page, id) = page_with_controller(AutoWidthOptions::default());
    c.bench_function("bench_measure_uncached", |b| {
        b.iter(|| measure_all(&mut page, id));
    });
}

fn bench_measure_cached(c: &mut Criterion) {
    let (mut page, id) = page_with_controller(AutoWidthOptions::default().with_cache());
    // warm the cache through the controller's own write path
    for word in WORDS {
        let input = page.controller(id).and_then(|c| c.input());
        if let Some(input) = input {
            page.document_mut().set_value(input, word);
            page.with_controller(id, |c, ctx| c.trigger(ctx, None));
        }
    }
    c.bench_function("bench_measure_cached", |b| {
        b.iter(|| measure_all(&mut page, id));
    });
}

fn bench_typing_session(c: &mut Criterion) {
    c.bench_function("bench_typing_session", |b| {
        b.iter(|| {
            let (mut page, id) = page_with_controller(AutoWidthOptions::default().with_cache());
            let input = page.controller(id).and_then(|c| c.input());
            if let Some(input) = input {
                black_box(page.type_text(input, "the quick brown fox"));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_measure_uncached,
    bench_measure_cached,
    bench_typing_session
);
criterion_main!(benches);
