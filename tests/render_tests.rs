//! End-to-end tests: instruction sequences through the interpreter onto
//! a recording surface.

use pdf_ink::{
    render_page, Dict, FillRule, Page, PathElement, Rgba, RecordingSurface, Stream, SurfaceEvent,
    Value,
};

fn op(operator: &str, operands: Vec<Value>) -> (Vec<Value>, String) {
    (operands, operator.to_string())
}

fn n(v: f64) -> Value {
    if v.fract() == 0.0 {
        Value::Integer(v as i64)
    } else {
        Value::Real(v as f32)
    }
}

fn name(s: &str) -> Value {
    Value::Name(s.to_string())
}

fn run(page: &Page, ops: Vec<(Vec<Value>, String)>) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    render_page(page, &mut ops.into_iter(), &mut surface).expect("render");
    surface
}

fn empty_page() -> Page {
    Page::new(Value::Null)
}

fn fill_events(surface: &RecordingSurface) -> Vec<(Vec<PathElement>, FillRule, Rgba)> {
    surface
        .events()
        .iter()
        .filter_map(|e| match e {
            SurfaceEvent::FillOutline {
                outline,
                rule,
                color,
            } => Some((outline.clone(), *rule, *color)),
            _ => None,
        })
        .collect()
}

fn subpath_count(outline: &[PathElement]) -> usize {
    outline
        .iter()
        .filter(|e| matches!(e, PathElement::Move(_)))
        .count()
}

fn outline_bounds(outline: &[PathElement]) -> (f32, f32, f32, f32) {
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    let mut visit = |x: f32, y: f32| {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    };
    for e in outline {
        match e {
            PathElement::Move(p) | PathElement::Line(p) => visit(p.x, p.y),
            PathElement::Cubic(cp1, cp2, p) => {
                visit(cp1.x, cp1.y);
                visit(cp2.x, cp2.y);
                visit(p.x, p.y);
            }
            PathElement::Close => {}
        }
    }
    (min_x, min_y, max_x, max_y)
}

#[test]
fn stroked_closed_path_is_one_black_fill() {
    let surface = run(
        &empty_page(),
        vec![
            op("w", vec![n(1.0)]),
            op("G", vec![n(0.0)]),
            op("m", vec![n(100.0), n(100.0)]),
            op("l", vec![n(200.0), n(100.0)]),
            op("l", vec![n(200.0), n(200.0)]),
            op("h", vec![]),
            op("S", vec![]),
        ],
    );

    let fills = fill_events(&surface);
    assert_eq!(fills.len(), 1);
    let (outline, rule, color) = &fills[0];
    assert_eq!(*color, Rgba::BLACK);
    assert_eq!(*rule, FillRule::NonZero);
    // A closed contour strokes to an outer and an inner outline.
    assert_eq!(subpath_count(outline), 2);
}

#[test]
fn filled_square_is_half_gray() {
    let surface = run(
        &empty_page(),
        vec![
            op("g", vec![Value::Real(0.5)]),
            op("m", vec![n(0.0), n(0.0)]),
            op("l", vec![n(10.0), n(0.0)]),
            op("l", vec![n(10.0), n(10.0)]),
            op("l", vec![n(0.0), n(10.0)]),
            op("h", vec![]),
            op("f", vec![]),
        ],
    );

    let fills = fill_events(&surface);
    assert_eq!(fills.len(), 1);
    let (outline, _, color) = &fills[0];
    assert_eq!(*color, Rgba::new(127, 127, 127, 255));
    assert_eq!(subpath_count(outline), 1);
}

#[test]
fn dashed_stroke_yields_two_rectangles() {
    let surface = run(
        &empty_page(),
        vec![
            op(
                "d",
                vec![Value::Array(vec![n(5.0), n(3.0)]), n(0.0)],
            ),
            op("w", vec![n(2.0)]),
            op("m", vec![n(0.0), n(0.0)]),
            op("l", vec![n(16.0), n(0.0)]),
            op("S", vec![]),
        ],
    );

    let fills = fill_events(&surface);
    assert_eq!(fills.len(), 1);
    let (outline, _, _) = &fills[0];
    assert_eq!(subpath_count(outline), 2);
    let (min_x, min_y, max_x, max_y) = outline_bounds(outline);
    // Dashes cover [0, 5] and [8, 13] along x, one unit either side of y=0.
    assert!((min_x - 0.0).abs() < 0.01, "min_x {}", min_x);
    assert!((max_x - 13.0).abs() < 0.01, "max_x {}", max_x);
    assert!((min_y + 1.0).abs() < 0.01, "min_y {}", min_y);
    assert!((max_y - 1.0).abs() < 0.01, "max_y {}", max_y);
}

#[test]
fn save_restore_balances_surface_layers() {
    let surface = run(
        &empty_page(),
        vec![
            op("q", vec![]),
            op("cm", vec![n(1.0), n(0.0), n(0.0), n(1.0), n(10.0), n(20.0)]),
            op("q", vec![]),
            op("cm", vec![n(2.0), n(0.0), n(0.0), n(2.0), n(0.0), n(0.0)]),
            op("Q", vec![]),
            op("Q", vec![]),
        ],
    );

    assert_eq!(surface.open_layers(), 0);
    let events = surface.events();
    assert_eq!(events.len(), 4);
    let SurfaceEvent::PushTransform { handle: h1, .. } = events[0] else {
        panic!("expected push");
    };
    let SurfaceEvent::PushTransform { handle: h2, .. } = events[1] else {
        panic!("expected push");
    };
    assert_eq!(events[2], SurfaceEvent::Pop { handle: h2 });
    assert_eq!(events[3], SurfaceEvent::Pop { handle: h1 });
}

#[test]
fn imbalanced_save_is_drained_at_page_end() {
    let surface = run(
        &empty_page(),
        vec![
            op("q", vec![]),
            op("cm", vec![n(2.0), n(0.0), n(0.0), n(2.0), n(0.0), n(0.0)]),
            // Missing Q.
        ],
    );
    assert_eq!(surface.open_layers(), 0);
}

#[test]
fn extra_restore_is_ignored() {
    let surface = run(
        &empty_page(),
        vec![
            op("Q", vec![]),
            op("m", vec![n(0.0), n(0.0)]),
            op("l", vec![n(5.0), n(0.0)]),
            op("S", vec![]),
        ],
    );
    assert_eq!(fill_events(&surface).len(), 1);
}

#[test]
fn clip_without_paint_scopes_to_save() {
    let surface = run(
        &empty_page(),
        vec![
            op("q", vec![]),
            op("re", vec![n(0.0), n(0.0), n(50.0), n(50.0)]),
            op("W", vec![]),
            op("n", vec![]),
            op("Q", vec![]),
        ],
    );

    let events = surface.events();
    assert_eq!(events.len(), 2);
    let SurfaceEvent::PushClip { handle, rule } = events[0] else {
        panic!("expected clip push");
    };
    assert_eq!(rule, FillRule::NonZero);
    assert_eq!(events[1], SurfaceEvent::Pop { handle });
}

#[test]
fn even_odd_clip_uses_even_odd_rule() {
    let surface = run(
        &empty_page(),
        vec![
            op("re", vec![n(0.0), n(0.0), n(50.0), n(50.0)]),
            op("W*", vec![]),
            op("f*", vec![]),
        ],
    );
    assert!(surface
        .events()
        .iter()
        .any(|e| matches!(e, SurfaceEvent::PushClip { rule: FillRule::EvenOdd, .. })));
}

#[test]
fn ext_g_state_applies_line_width_and_alpha() {
    let mut gs = Dict::new();
    gs.insert("Type".to_string(), name("ExtGState"));
    gs.insert("LW".to_string(), n(4.0));
    gs.insert("ca".to_string(), Value::Real(0.5));

    let mut ext = Dict::new();
    ext.insert("GS1".to_string(), Value::Dict(gs));
    let mut resources = Dict::new();
    resources.insert("ExtGState".to_string(), Value::Dict(ext));
    let mut page = Dict::new();
    page.insert("Resources".to_string(), Value::Dict(resources));
    let page = Page::new(Value::Dict(page));

    let surface = run(
        &page,
        vec![
            op("gs", vec![name("GS1")]),
            op("m", vec![n(0.0), n(5.0)]),
            op("l", vec![n(10.0), n(5.0)]),
            op("S", vec![]),
            op("re", vec![n(0.0), n(0.0), n(1.0), n(1.0)]),
            op("f", vec![]),
        ],
    );

    let fills = fill_events(&surface);
    assert_eq!(fills.len(), 2);
    // LW 4 widens the stroked line to two units either side.
    let (outline, _, _) = &fills[0];
    let (_, min_y, _, max_y) = outline_bounds(outline);
    assert!((min_y - 3.0).abs() < 0.01 && (max_y - 7.0).abs() < 0.01);
    // ca 0.5 lands in the fill color's alpha byte.
    assert_eq!(fills[1].2, Rgba::new(0, 0, 0, 127));
}

#[test]
fn missing_resources_are_skipped() {
    let surface = run(
        &empty_page(),
        vec![
            op("gs", vec![name("NoSuchState")]),
            op("Tf", vec![name("NoSuchFont"), n(12.0)]),
            op("BT", vec![]),
            op("Tj", vec![Value::String(b"hello".to_vec())]),
            op("ET", vec![]),
            op("Do", vec![name("NoSuchImage")]),
            op("re", vec![n(0.0), n(0.0), n(5.0), n(5.0)]),
            op("f", vec![]),
        ],
    );
    // Everything missing is skipped; the final fill still lands.
    assert_eq!(fill_events(&surface).len(), 1);
}

#[test]
fn unknown_operators_are_skipped() {
    let surface = run(
        &empty_page(),
        vec![
            op("BDC", vec![name("Span"), Value::Null]),
            op("sh", vec![name("Sh0")]),
            op("ri", vec![name("Perceptual")]),
            op("re", vec![n(0.0), n(0.0), n(5.0), n(5.0)]),
            op("f", vec![]),
            op("EMC", vec![]),
        ],
    );
    assert_eq!(fill_events(&surface).len(), 1);
}

#[test]
fn malformed_operands_are_skipped() {
    let surface = run(
        &empty_page(),
        vec![
            op("w", vec![name("NotANumber")]),
            op("m", vec![n(0.0)]),
            op("re", vec![n(0.0), n(0.0), n(5.0), n(5.0)]),
            op("f", vec![]),
        ],
    );
    assert_eq!(fill_events(&surface).len(), 1);
}

#[test]
fn bitmap_xobject_paints_into_unit_square() {
    let mut img_dict = Dict::new();
    img_dict.insert("Subtype".to_string(), name("Image"));
    img_dict.insert("Width".to_string(), n(8.0));
    img_dict.insert("Height".to_string(), n(2.0));
    img_dict.insert("ColorSpace".to_string(), name("DeviceGray"));
    img_dict.insert("BitsPerComponent".to_string(), n(1.0));
    let image = Value::Stream(Stream {
        dict: img_dict,
        data: vec![0xFF, 0x00],
    });

    let mut xobjects = Dict::new();
    xobjects.insert("Im0".to_string(), image);
    let mut resources = Dict::new();
    resources.insert("XObject".to_string(), Value::Dict(xobjects));
    let mut page = Dict::new();
    page.insert("Resources".to_string(), Value::Dict(resources));
    let page = Page::new(Value::Dict(page));

    let surface = run(&page, vec![op("Do", vec![name("Im0")])]);

    let images: Vec<_> = surface
        .events()
        .iter()
        .filter_map(|e| match e {
            SurfaceEvent::PaintImage {
                width,
                height,
                unit_transform,
            } => Some((*width, *height, *unit_transform)),
            _ => None,
        })
        .collect();
    assert_eq!(images.len(), 1);
    let (w, h, m) = images[0];
    assert_eq!((w, h), (8, 2));
    assert_eq!(m.a, 1.0 / 8.0);
    assert_eq!(m.d, -1.0 / 2.0);
    assert_eq!(m.f, 1.0);
}

#[test]
fn form_xobjects_are_skipped() {
    let mut form = Dict::new();
    form.insert("Subtype".to_string(), name("Form"));
    let mut xobjects = Dict::new();
    xobjects.insert("Fm0".to_string(), Value::Dict(form));
    let mut resources = Dict::new();
    resources.insert("XObject".to_string(), Value::Dict(xobjects));
    let mut page = Dict::new();
    page.insert("Resources".to_string(), Value::Dict(resources));
    let page = Page::new(Value::Dict(page));

    let surface = run(&page, vec![op("Do", vec![name("Fm0")])]);
    assert!(surface.events().is_empty());
}

#[test]
fn tj_array_with_no_font_does_not_panic() {
    let surface = run(
        &empty_page(),
        vec![
            op("BT", vec![]),
            op(
                "TJ",
                vec![Value::Array(vec![
                    Value::String(b"A".to_vec()),
                    n(-250.0),
                    Value::String(b"B".to_vec()),
                ])],
            ),
            op("ET", vec![]),
        ],
    );
    assert!(fill_events(&surface).is_empty());
}
