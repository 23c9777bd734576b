mod common;

use common::CallbackLog;

use chartgrid::{ColumnDef, Edges, EdgesInput, Rect, RowDef, layout, normalize};

fn dashboard() -> ColumnDef {
    ColumnDef::new().with_id("chart").with_padding(10.0).with_rows(vec![
        RowDef::new().with_id("title").with_height(40.0),
        RowDef::new().with_id("body").fill_available_height().with_columns(vec![
            ColumnDef::new().with_id("axis").with_width(50.0),
            ColumnDef::new().with_id("plot").fill_available_width(),
        ]),
        RowDef::new().with_id("buttons").with_height(30.0),
    ])
}

#[test]
fn callbacks_follow_paint_order() {
    let _ = env_logger::builder().is_test(true).try_init();

    let log = CallbackLog::new();
    let def = ColumnDef::new()
        .with_render(log.recorder("chart"))
        .with_rows(vec![
            RowDef::new()
                .with_height(40.0)
                .with_render(log.recorder("title")),
            RowDef::new()
                .fill_available_height()
                .with_render(log.recorder("body"))
                .with_columns(vec![
                    ColumnDef::new().with_width(50.0).with_render(log.recorder("axis")),
                    ColumnDef::new()
                        .fill_available_width()
                        .with_render(log.recorder("plot")),
                ]),
        ]);
    let tree = normalize(&def);
    layout(Rect::new(0.0, 0.0, 400.0, 300.0), &tree);

    // Depth-first, sibling order: later entries paint over earlier ones.
    assert_eq!(log.names(), vec!["chart", "title", "body", "axis", "plot"]);
    assert_eq!(log.indices(), vec![0, 0, 1, 0, 1]);
}

#[test]
fn repeated_layouts_are_identical() {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = normalize(&dashboard());
    let rect = Rect::new(0.0, 0.0, 640.0, 480.0);

    let first = layout(rect, &tree);
    let second = layout(rect, &tree);

    assert_eq!(first.len(), second.len());
    for (id, r) in &first {
        assert_eq!(second[id], *r, "rect for {} drifted between passes", id);
    }
}

#[test]
fn layout_at_different_rects_scales_relative_parts() {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = normalize(&dashboard());

    let small = layout(Rect::new(0.0, 0.0, 320.0, 240.0), &tree);
    let large = layout(Rect::new(0.0, 0.0, 640.0, 480.0), &tree);

    // Fixed parts stay fixed, fill parts absorb the difference.
    assert_eq!(small["title"].height, 40.0);
    assert_eq!(large["title"].height, 40.0);
    assert!((small["plot"].width - 250.0).abs() < 0.01); // 320 - 20 - 50
    assert!((large["plot"].width - 570.0).abs() < 0.01); // 640 - 20 - 50
}

#[test]
fn normalized_tree_is_shareable_across_threads() {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = std::sync::Arc::new(normalize(&dashboard()));
    let rect = Rect::new(0.0, 0.0, 640.0, 480.0);
    let reference = layout(rect, &tree);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree = tree.clone();
            std::thread::spawn(move || layout(rect, &tree))
        })
        .collect();

    for handle in handles {
        let rects = handle.join().unwrap();
        assert_eq!(rects.len(), reference.len());
        for (id, r) in &reference {
            assert_eq!(rects[id], *r);
        }
    }
}

#[test]
fn edge_helpers_work_standalone() {
    let _ = env_logger::builder().is_test(true).try_init();

    // The normalization helpers double as generic rect insetting, e.g. for
    // a label background box outside any tree.
    let padding = EdgesInput::Uniform(3.0).normalize_or_default();
    let label_box = Rect::new(100.0, 50.0, 60.0, 20.0);
    let text_rect = padding.deflate(label_box);

    assert_rect_eq!(text_rect, Rect::new(103.0, 53.0, 54.0, 14.0));

    let fallback = EdgesInput::Shorthand("not edges".into()).normalize_or_default();
    assert_eq!(fallback, Edges::default());
}
