use pentomino_draw::core::{HeadlessDisplay, Palette};
use pentomino_draw::engine::TileRenderer;
use pentomino_draw::term::{changed_runs, encode_diff_into, PreviewView, Viewport};
use pentomino_draw::types::Rgb;

fn rendered(line: &str) -> TileRenderer<HeadlessDisplay> {
    let mut r = TileRenderer::new(Palette::default(), HeadlessDisplay::new()).unwrap();
    r.render(line).unwrap();
    r
}

fn row_text(fb: &pentomino_draw::term::FrameBuffer, y: u16) -> String {
    fb.row(y).iter().map(|c| c.ch).collect()
}

#[test]
fn preview_renders_border_corners() {
    let r = rendered(&"X".repeat(64));
    // 8 tiles * 2 columns + border = 18 wide, 8 rows + border = 10 tall, plus caption.
    let fb = PreviewView::default().render(r.canvas(), 0, Viewport::new(18, 11));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(17, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
    assert_eq!(fb.get(17, 9).unwrap().ch, '┘');
}

#[test]
fn preview_tiles_are_two_columns_wide() {
    let r = rendered(&("F".repeat(32) + &"I".repeat(32)));
    let fb = PreviewView::default().render(r.canvas(), 0, Viewport::new(18, 11));

    let f = Rgb::new(131, 148, 150);
    let i = Rgb::new(42, 161, 152);
    // Inside border: (1, 1) origin.
    assert_eq!(fb.get(1, 1).unwrap().style.bg, f);
    assert_eq!(fb.get(16, 4).unwrap().style.bg, f);
    assert_eq!(fb.get(1, 5).unwrap().style.bg, i);
    assert_eq!(fb.get(16, 8).unwrap().style.bg, i);
}

#[test]
fn preview_caption_shows_frame_number() {
    let r = rendered(&"N".repeat(64));
    let fb = PreviewView::default().render(r.canvas(), 41, Viewport::new(18, 11));
    assert_eq!(row_text(&fb, 10).trim(), "tiling #41");
}

#[test]
fn preview_is_centered_in_large_viewports() {
    let r = rendered(&"W".repeat(64));
    let fb = PreviewView::default().render(r.canvas(), 0, Viewport::new(40, 21));
    // start_x = (40 - 18) / 2 = 11, start_y = (21 - 11) / 2 = 5.
    assert_eq!(fb.get(11, 5).unwrap().ch, '┌');
}

#[test]
fn tiny_viewport_does_not_panic() {
    let r = rendered(&"V".repeat(64));
    let fb = PreviewView::default().render(r.canvas(), 3, Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}

#[test]
fn changing_one_row_of_tiles_only_diffs_that_row() {
    let view = PreviewView::default();
    let vp = Viewport::new(18, 11);

    let a = view.render(rendered(&"L".repeat(64)).canvas(), 0, vp);
    let b = view.render(
        rendered(&("Z".repeat(8) + &"L".repeat(56))).canvas(),
        0,
        vp,
    );

    let runs = changed_runs(&a, &b);
    assert_eq!(runs.len(), 1);
    assert_eq!((runs[0].x, runs[0].y, runs[0].len), (1, 1, 16));

    let mut out = Vec::new();
    encode_diff_into(&a, &b, &mut out).unwrap();
    assert!(!out.is_empty());
}
