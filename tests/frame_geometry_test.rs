use qrsmith::core::frame::apply_frame;
use qrsmith::core::render::{render_base, CANVAS_SIZE};
use qrsmith::{Color, FrameSpec};

fn base_pair() -> qrsmith::core::ImagePair {
    render_base("https://example.com", Color::BLACK, Color::WHITE).unwrap()
}

fn spec(distance: u32, thickness: u32, radius: u32) -> FrameSpec {
    FrameSpec {
        distance_px: distance,
        thickness_px: thickness,
        color: Color::BLACK,
        corner_radius_px: radius,
    }
}

#[test]
fn canvas_grows_by_margin_on_both_sides() {
    let framed = apply_frame(base_pair(), &spec(10, 5, 0), Color::WHITE);
    let expected = CANVAS_SIZE + 2 * (10 + 5);
    assert_eq!(framed.size(), expected);
    assert_eq!(framed.raster.dimensions(), (expected, expected));
    assert_eq!(framed.vector.size(), expected);
}

#[test]
fn canvas_invariant_holds_across_parameters() {
    for (distance, thickness) in [(0, 1), (1, 0), (25, 40), (0, 100)] {
        let framed = apply_frame(base_pair(), &spec(distance, thickness, 0), Color::WHITE);
        let expected = if thickness == 0 {
            CANVAS_SIZE
        } else {
            CANVAS_SIZE + 2 * (distance + thickness)
        };
        assert_eq!(framed.size(), expected, "distance={} thickness={}", distance, thickness);
    }
}

#[test]
fn huge_frame_numerics_are_clamped_instead_of_overflowing() {
    // Values far beyond the boundary cap must not wrap the geometry
    // arithmetic or blow up the canvas allocation.
    let framed = apply_frame(
        base_pair(),
        &spec(3_000_000_000, 3_000_000_000, 0),
        Color::WHITE,
    );
    assert_eq!(framed.size(), CANVAS_SIZE + 4 * FrameSpec::MAX_PX);
    assert_eq!(framed.vector.size(), framed.size());
}

#[test]
fn zero_thickness_frame_is_identity() {
    let plain = base_pair();
    let framed = apply_frame(base_pair(), &spec(10, 0, 8), Color::WHITE);
    assert_eq!(framed.size(), plain.size());
    assert_eq!(framed.vector.render(), plain.vector.render());
    assert_eq!(framed.raster.as_raw(), plain.raster.as_raw());
}

#[test]
fn border_ring_and_clear_margin_colors() {
    let red = Color::new(255, 0, 0);
    let framed = apply_frame(
        base_pair(),
        &FrameSpec {
            distance_px: 10,
            thickness_px: 5,
            color: red,
            corner_radius_px: 0,
        },
        Color::WHITE,
    );

    // Inside the 5px border ring.
    assert_eq!(*framed.raster.get_pixel(2, 2), red.to_rgba());
    assert_eq!(*framed.raster.get_pixel(527, 264), red.to_rgba());
    // Inside the inner inset but before the QR content: clear margin.
    assert_eq!(*framed.raster.get_pixel(7, 7), Color::WHITE.to_rgba());
    assert_eq!(*framed.raster.get_pixel(12, 264), Color::WHITE.to_rgba());
}

#[test]
fn corner_radius_rounds_the_outer_corners() {
    let framed = apply_frame(base_pair(), &spec(10, 5, 20), Color::WHITE);
    // Outside the rounded corner the canvas keeps the background color.
    assert_eq!(*framed.raster.get_pixel(0, 0), Color::WHITE.to_rgba());
    assert_eq!(*framed.raster.get_pixel(529, 0), Color::WHITE.to_rgba());
    // Edge midpoints stay framed.
    assert_eq!(*framed.raster.get_pixel(265, 0), Color::BLACK.to_rgba());
    assert_eq!(*framed.raster.get_pixel(0, 265), Color::BLACK.to_rgba());
}

#[test]
fn qr_content_is_reanchored_at_margin_offset() {
    let plain = base_pair();
    let framed = apply_frame(plain.clone(), &spec(10, 5, 0), Color::WHITE);
    // The re-anchored raster region matches the original pixel for pixel.
    for (x, y) in [(0u32, 0u32), (250, 250), (499, 499), (30, 400)] {
        assert_eq!(
            framed.raster.get_pixel(x + 15, y + 15),
            plain.raster.get_pixel(x, y),
            "mismatch at ({}, {})",
            x,
            y
        );
    }
}

#[test]
fn vector_frame_nests_the_base_document() {
    let red = Color::new(255, 0, 0);
    let framed = apply_frame(
        base_pair(),
        &FrameSpec {
            distance_px: 10,
            thickness_px: 5,
            color: red,
            corner_radius_px: 12,
        },
        Color::WHITE,
    );
    let svg = framed.vector.render();
    assert!(svg.contains("viewBox=\"0 0 530 530\""));
    assert!(svg.contains("fill=\"#ff0000\" rx=\"12\" ry=\"12\""));
    assert!(svg.contains("x=\"15\" y=\"15\""));
    // Inner inset rect is background-colored.
    assert!(svg.contains("x=\"5\" y=\"5\" width=\"520\" height=\"520\" fill=\"#ffffff\""));
}
