use crate::core::svg::SvgDocument;
use crate::domain::model::Color;
use crate::utils::error::Result;
use image::RgbaImage;
use qrcode::QrCode;

/// Canonical edge length of the base QR canvas, in pixels/SVG units.
pub const CANVAS_SIZE: u32 = 500;

/// Quiet-zone width in modules on each side of the symbol.
pub const QUIET_ZONE_MODULES: u32 = 1;

/// The same QR content in both output representations. Produced once per
/// request and only ever replaced wholesale by the compositing stages.
#[derive(Debug, Clone)]
pub struct ImagePair {
    pub vector: SvgDocument,
    pub raster: RgbaImage,
}

impl ImagePair {
    /// Current canvas edge length. The two representations always agree.
    pub fn size(&self) -> u32 {
        self.raster.width()
    }
}

/// Encodes `text` and renders the base image pair at the canonical size.
///
/// Error correction and version selection are delegated to the `qrcode`
/// crate; text beyond the symbol capacity surfaces as `QrError::Encoding`.
pub fn render_base(text: &str, foreground: Color, background: Color) -> Result<ImagePair> {
    let code = QrCode::new(text.as_bytes())?;
    let width = code.width() as u32;
    let modules = code.to_colors();
    let total = width + 2 * QUIET_ZONE_MODULES;

    let vector = render_vector(&modules, width, total, foreground, background);
    let raster = render_raster(&modules, width, total, foreground, background);
    Ok(ImagePair { vector, raster })
}

fn module_at(modules: &[qrcode::Color], width: u32, x: i64, y: i64) -> bool {
    if x < 0 || y < 0 || x >= width as i64 || y >= width as i64 {
        return false;
    }
    modules[y as usize * width as usize + x as usize] == qrcode::Color::Dark
}

/// One unit cell per dark module, drawn in module coordinates and scaled to
/// the canvas by a single group transform so overlays can use canvas units.
fn render_vector(
    modules: &[qrcode::Color],
    width: u32,
    total: u32,
    foreground: Color,
    background: Color,
) -> SvgDocument {
    let mut doc = SvgDocument::new(CANVAS_SIZE);
    doc.push_rect(0, 0, CANVAS_SIZE, CANVAS_SIZE, background, 0);

    let mut path = String::new();
    for y in 0..width {
        for x in 0..width {
            if module_at(modules, width, x as i64, y as i64) {
                if !path.is_empty() {
                    path.push(' ');
                }
                path += &format!(
                    "M{},{}h1v1h-1z",
                    x + QUIET_ZONE_MODULES,
                    y + QUIET_ZONE_MODULES
                );
            }
        }
    }

    let scale = CANVAS_SIZE as f64 / total as f64;
    doc.push_node(format!(
        "\t<g transform=\"scale({})\"><path d=\"{}\" fill=\"{}\"/></g>",
        scale,
        path,
        foreground.to_hex()
    ));
    doc
}

/// Nearest-neighbor map of canvas pixels onto the module grid (symbol plus
/// quiet zone), so the bitmap is exactly canvas-sized for any QR version.
fn render_raster(
    modules: &[qrcode::Color],
    width: u32,
    total: u32,
    foreground: Color,
    background: Color,
) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, background.to_rgba());
    let fg = foreground.to_rgba();
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let mx = (x as u64 * total as u64 / CANVAS_SIZE as u64) as i64 - QUIET_ZONE_MODULES as i64;
        let my = (y as u64 * total as u64 / CANVAS_SIZE as u64) as i64 - QUIET_ZONE_MODULES as i64;
        if module_at(modules, width, mx, my) {
            *pixel = fg;
        }
    }
    img
}
