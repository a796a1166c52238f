use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pentomino_draw::core::{Canvas, HeadlessDisplay, Palette, TilingRecord};
use pentomino_draw::engine::TileRenderer;
use pentomino_draw::term::{PreviewView, Viewport};

const BOARD: &str = concat!(
    "FFFLLLLN", "IFFPPLNN", "IFPPPWNN", "IYY  TXZ",
    "IYT  TTZ", "IYTTZZZZ", "UUUUVWWW", "WWWWVVVV",
);

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_record", |b| {
        b.iter(|| TilingRecord::parse(black_box(BOARD)).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let mut r = TileRenderer::new(Palette::default(), HeadlessDisplay::new()).unwrap();
    c.bench_function("render_800x800", |b| {
        b.iter(|| r.render(black_box(BOARD)).unwrap())
    });
}

fn bench_preview(c: &mut Criterion) {
    let canvas = Canvas::new();
    let view = PreviewView::default();
    let mut fb = view.render(&canvas, 0, Viewport::new(80, 24));
    c.bench_function("preview_80x24", |b| {
        b.iter(|| view.render_into(black_box(&canvas), 0, Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(benches, bench_parse, bench_render, bench_preview);
criterion_main!(benches);
