use super::*;

fn approx_rect(a: Rect, b: Rect) -> bool {
    let eps = 1e-9;
    (a.x0 - b.x0).abs() < eps
        && (a.y0 - b.y0).abs() < eps
        && (a.x1 - b.x1).abs() < eps
        && (a.y1 - b.y1).abs() < eps
}

fn same_shape(a: IconShape, b: IconShape) -> bool {
    if a.color != b.color {
        return false;
    }
    match (a.shape, b.shape) {
        (ShapeKind::Rect(x), ShapeKind::Rect(y)) => approx_rect(x, y),
        (ShapeKind::Ellipse(x), ShapeKind::Ellipse(y)) => approx_rect(x, y),
        (
            ShapeKind::RoundedRect {
                rect: x,
                radius: rx,
            },
            ShapeKind::RoundedRect {
                rect: y,
                radius: ry,
            },
        ) => approx_rect(x, y) && (rx - ry).abs() < 1e-9,
        _ => false,
    }
}

#[test]
fn unit_geometry_matches_authored_boxes() {
    let shapes = icon_shapes(100);
    assert_eq!(shapes.len(), 4);
    assert_eq!(
        shapes[0].shape,
        ShapeKind::RoundedRect {
            rect: Rect::new(25.0, 35.0, 75.0, 65.0),
            radius: 5.0,
        }
    );
    assert_eq!(shapes[1].shape, ShapeKind::Rect(Rect::new(30.0, 43.0, 60.0, 47.0)));
    assert_eq!(shapes[2].shape, ShapeKind::Rect(Rect::new(30.0, 50.0, 50.0, 53.0)));
    assert_eq!(shapes[3].shape, ShapeKind::Ellipse(Rect::new(64.0, 24.0, 76.0, 36.0)));
    assert_eq!(shapes[3].color, palette::RED);
}

#[test]
fn geometry_is_self_similar_across_sizes() {
    for s in [75u32, 100, 250, 500] {
        let small: Vec<_> = icon_shapes(s)
            .into_iter()
            .map(|x| x.scaled(1.0 / f64::from(s)))
            .collect();
        let large: Vec<_> = icon_shapes(2 * s)
            .into_iter()
            .map(|x| x.scaled(1.0 / f64::from(2 * s)))
            .collect();
        assert_eq!(small.len(), large.len());
        for (a, b) in small.into_iter().zip(large) {
            assert!(same_shape(a, b), "size {s}: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn icon_is_square_and_opaque() {
    let icon = build_icon(75).unwrap();
    assert_eq!(icon.size(), Size::square(75));
    assert!(icon.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn zero_size_icon_is_rejected() {
    assert!(build_icon(0).is_err());
}

#[test]
fn shapes_land_at_the_same_relative_positions() {
    // Unit-space sample points well inside each region.
    let samples: [((u32, u32), Rgba8); 5] = [
        ((5, 5), palette::BLUE),
        ((70, 60), palette::WHITE),
        ((45, 45), palette::GREY),
        ((35, 51), palette::GREY_LIGHT),
        ((70, 30), palette::RED),
    ];

    for size in [100u32, 200] {
        let icon = build_icon(size).unwrap();
        let k = size / 100;
        for ((ux, uy), want) in samples {
            let got = icon.pixel(ux * k, uy * k).unwrap();
            assert_eq!(
                got,
                want.to_premul(),
                "size {size} at unit ({ux}, {uy})"
            );
        }
    }
}

#[test]
fn bars_end_at_their_exclusive_far_edge() {
    let icon = build_icon(100).unwrap();
    let grey = palette::GREY.to_premul();
    let white = palette::WHITE.to_premul();

    // Primary bar covers [30, 60) x [43, 47).
    assert_eq!(icon.pixel(30, 43).unwrap(), grey);
    assert_eq!(icon.pixel(59, 46).unwrap(), grey);
    assert_eq!(icon.pixel(60, 44).unwrap(), white);
    assert_eq!(icon.pixel(45, 47).unwrap(), white);
}
