use crate::core::raster;
use crate::core::render::ImagePair;
use crate::domain::model::Color;
use crate::utils::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::GenericImageView;
use std::io::Cursor;

/// Bounding box the logo is resized into, never exceeded.
pub const LOGO_BOX_SIZE: u32 = 100;

/// Extra clearance around the logo box. Modules under the patch are not
/// reliably decodable once covered, so the whole patch is neutralized.
pub const PATCH_MARGIN: u32 = 20;

/// Composites a logo onto the center of both representations.
///
/// The logo is fit-inside resized to [`LOGO_BOX_SIZE`] (aspect preserved, no
/// upscaling), a `LOGO_BOX_SIZE + PATCH_MARGIN` square patch is painted in the
/// background color, and the logo is layered centered on top. The canvas size
/// is never changed by this stage.
pub fn apply_logo(pair: ImagePair, logo_bytes: &[u8], background: Color) -> Result<ImagePair> {
    let logo = image::load_from_memory(logo_bytes)?;
    let resized = fit_inside(logo, LOGO_BOX_SIZE);

    let size = pair.size();
    let patch = LOGO_BOX_SIZE + PATCH_MARGIN;
    let patch_origin = (size - patch) / 2;

    let ImagePair { mut vector, mut raster } = pair;

    raster::fill_rect(
        &mut raster,
        patch_origin,
        patch_origin,
        patch,
        patch,
        background.to_rgba(),
    );
    let (logo_w, logo_h) = resized.dimensions();
    let lx = (size - logo_w) / 2;
    let ly = (size - logo_h) / 2;
    image::imageops::overlay(&mut raster, &resized, lx as i64, ly as i64);

    vector.push_rect(patch_origin, patch_origin, patch, patch, background, 0);
    let mut png = Vec::new();
    resized.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
    let href = format!("data:image/png;base64,{}", STANDARD.encode(&png));
    // The <image> carries the resized bitmap's actual dimensions and offset,
    // keeping the vector placement identical to the raster one.
    vector.push_image(lx, ly, logo_w, logo_h, &href);

    Ok(ImagePair { vector, raster })
}

/// Fit-inside resize: scale down to the bounding square, aspect preserved,
/// never upscale a logo that already fits.
fn fit_inside(logo: image::DynamicImage, bound: u32) -> image::RgbaImage {
    if logo.width() <= bound && logo.height() <= bound {
        return logo.to_rgba8();
    }
    logo.thumbnail(bound, bound).to_rgba8()
}
