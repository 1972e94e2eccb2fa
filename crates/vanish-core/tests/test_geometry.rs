use approx::{assert_abs_diff_eq, assert_relative_eq};
use vanish_core::error::VanishError;
use vanish_core::geometry::{
    map_to_canvas, CanvasRect, ContainerSize, DisplayGeometry, PointerPos,
};

// ---------------------------------------------------------------------------
// Pointer -> canvas mapping
// ---------------------------------------------------------------------------

#[test]
fn test_map_identity_when_rendered_matches_intrinsic() {
    let rect = CanvasRect {
        left: 0.0,
        top: 0.0,
        width: 800.0,
        height: 600.0,
    };
    let p = map_to_canvas(PointerPos { x: 100.0, y: 50.0 }, Some(rect), 800, 600)
        .expect("mounted canvas maps");
    assert_relative_eq!(p.x, 100.0);
    assert_relative_eq!(p.y, 50.0);
}

#[test]
fn test_map_scales_by_intrinsic_over_rendered() {
    // Canvas rendered at half its intrinsic resolution, offset in the page.
    let rect = CanvasRect {
        left: 10.0,
        top: 20.0,
        width: 400.0,
        height: 300.0,
    };
    let p = map_to_canvas(PointerPos { x: 210.0, y: 170.0 }, Some(rect), 800, 600)
        .expect("mounted canvas maps");
    assert_relative_eq!(p.x, 400.0);
    assert_relative_eq!(p.y, 300.0);
}

#[test]
fn test_map_is_scale_invariant() {
    // Doubling both the rendered rect and the intrinsic size keeps the
    // mapped position identical for the same viewport-relative pointer.
    let pointer = PointerPos { x: 55.0, y: 30.0 };
    let small = CanvasRect {
        left: 5.0,
        top: 5.0,
        width: 200.0,
        height: 100.0,
    };
    let doubled = CanvasRect {
        left: 5.0,
        top: 5.0,
        width: 400.0,
        height: 200.0,
    };

    let a = map_to_canvas(pointer, Some(small), 400, 200).expect("maps");
    let b = map_to_canvas(pointer, Some(doubled), 800, 400).expect("maps");
    assert_relative_eq!(a.x, b.x);
    assert_relative_eq!(a.y, b.y);
    assert_relative_eq!(a.x, 100.0);
    assert_relative_eq!(a.y, 50.0);
}

#[test]
fn test_map_returns_none_when_unmounted() {
    assert!(map_to_canvas(PointerPos { x: 10.0, y: 10.0 }, None, 800, 600).is_none());
}

#[test]
fn test_map_returns_none_for_degenerate_rect() {
    let rect = CanvasRect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 300.0,
    };
    assert!(map_to_canvas(PointerPos { x: 10.0, y: 10.0 }, Some(rect), 800, 600).is_none());
}

#[test]
fn test_map_returns_none_for_zero_intrinsic_size() {
    let rect = CanvasRect {
        left: 0.0,
        top: 0.0,
        width: 400.0,
        height: 300.0,
    };
    assert!(map_to_canvas(PointerPos { x: 10.0, y: 10.0 }, Some(rect), 0, 600).is_none());
}

// ---------------------------------------------------------------------------
// Display geometry
// ---------------------------------------------------------------------------

#[test]
fn test_display_geometry_fits_container_width() {
    let g = DisplayGeometry::compute(
        ContainerSize {
            width: 800.0,
            viewport_height: 2000.0,
        },
        1600,
        1200,
    )
    .expect("valid source");
    assert_eq!((g.width, g.height), (800, 600));
}

#[test]
fn test_display_geometry_caps_height_at_viewport_fraction() {
    // Viewport 500 px, cap fraction 0.7 -> at most 350 px tall.
    let g = DisplayGeometry::compute(
        ContainerSize {
            width: 800.0,
            viewport_height: 500.0,
        },
        1000,
        1000,
    )
    .expect("valid source");
    assert_eq!((g.width, g.height), (350, 350));
}

#[test]
fn test_display_geometry_wide_source_keeps_container_width() {
    let g = DisplayGeometry::compute(
        ContainerSize {
            width: 1000.0,
            viewport_height: 1000.0,
        },
        4000,
        2000,
    )
    .expect("valid source");
    assert_eq!((g.width, g.height), (1000, 500));
}

#[test]
fn test_display_geometry_preserves_aspect_within_rounding() {
    let g = DisplayGeometry::compute(
        ContainerSize {
            width: 333.0,
            viewport_height: 2000.0,
        },
        1000,
        750,
    )
    .expect("valid source");
    let ratio = g.width as f32 / g.height as f32;
    assert_abs_diff_eq!(ratio, 4.0 / 3.0, epsilon = 0.01);
}

#[test]
fn test_display_geometry_rejects_zero_source() {
    let err = DisplayGeometry::compute(
        ContainerSize {
            width: 800.0,
            viewport_height: 600.0,
        },
        0,
        100,
    )
    .unwrap_err();
    assert!(
        matches!(err, VanishError::InvalidDimensions { width: 0, height: 100 }),
        "got: {err}"
    );
}
