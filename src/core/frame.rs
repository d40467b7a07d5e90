use crate::core::raster;
use crate::core::render::ImagePair;
use crate::core::svg::SvgDocument;
use crate::domain::model::{Color, FrameSpec};
use image::RgbaImage;

/// Wraps the pair in a rounded border ring and re-anchors the QR inside it.
///
/// Geometry, identical in both representations:
/// - outer canvas grows to `base + 2 * (distance + thickness)`
/// - outer rounded rect filled with the frame color
/// - inner rounded rect inset by `thickness`, filled with the background
/// - QR content re-anchored at `(thickness + distance, thickness + distance)`
///
/// A zero-thickness frame is meaningless and must not alter the canvas, so it
/// is an identity transform.
pub fn apply_frame(pair: ImagePair, spec: &FrameSpec, background: Color) -> ImagePair {
    if spec.thickness_px == 0 {
        return pair;
    }

    // Boundary validation already enforces the cap; clamp again so a spec
    // built elsewhere cannot overflow the canvas arithmetic or allocate an
    // absurd bitmap.
    let distance = spec.distance_px.min(FrameSpec::MAX_PX);
    let thickness = spec.thickness_px.min(FrameSpec::MAX_PX);

    let base = pair.size();
    let margin = distance + thickness;
    let outer = base + 2 * margin;
    let inset = outer - 2 * thickness;

    let mut canvas = RgbaImage::from_pixel(outer, outer, background.to_rgba());
    raster::fill_rounded_rect(
        &mut canvas,
        0,
        0,
        outer,
        outer,
        spec.corner_radius_px,
        spec.color.to_rgba(),
    );
    raster::fill_rounded_rect(
        &mut canvas,
        thickness,
        thickness,
        inset,
        inset,
        spec.corner_radius_px,
        background.to_rgba(),
    );
    image::imageops::replace(&mut canvas, &pair.raster, margin as i64, margin as i64);

    let mut doc = SvgDocument::new(outer);
    doc.push_rect(0, 0, outer, outer, spec.color, spec.corner_radius_px);
    doc.push_rect(
        thickness,
        thickness,
        inset,
        inset,
        background,
        spec.corner_radius_px,
    );
    doc.push_node(pair.vector.render_nested(margin, margin));

    ImagePair {
        vector: doc,
        raster: canvas,
    }
}
