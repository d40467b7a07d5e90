use image::{Rgba, RgbaImage};

/// Fills an axis-aligned rectangle, clipped to the canvas.
pub fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let x1 = (x + width).min(img.width());
    let y1 = (y + height).min(img.height());
    for py in y..y1 {
        for px in x..x1 {
            img.put_pixel(px, py, color);
        }
    }
}

/// Fills a rounded rectangle, clipped to the canvas. The radius is clamped to
/// half the shorter side; pixels are tested against the corner circles at
/// their centers so opposite corners come out symmetric.
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    radius: u32,
    color: Rgba<u8>,
) {
    let r = radius.min(width / 2).min(height / 2);
    if r == 0 {
        fill_rect(img, x, y, width, height, color);
        return;
    }

    let x1 = x + width;
    let y1 = y + height;
    let rf = r as f64;
    for py in y..y1.min(img.height()) {
        for px in x..x1.min(img.width()) {
            let cx = if px < x + r {
                Some(x + r)
            } else if px >= x1 - r {
                Some(x1 - r)
            } else {
                None
            };
            let cy = if py < y + r {
                Some(y + r)
            } else if py >= y1 - r {
                Some(y1 - r)
            } else {
                None
            };
            if let (Some(cx), Some(cy)) = (cx, cy) {
                let dx = px as f64 + 0.5 - cx as f64;
                let dy = py as f64 + 0.5 - cy as f64;
                if dx * dx + dy * dy > rf * rf {
                    continue;
                }
            }
            img.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn canvas(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, WHITE)
    }

    #[test]
    fn fill_rect_is_clipped_to_canvas() {
        let mut img = canvas(10);
        fill_rect(&mut img, 8, 8, 10, 10, RED);
        assert_eq!(*img.get_pixel(9, 9), RED);
        assert_eq!(*img.get_pixel(7, 7), WHITE);
    }

    #[test]
    fn zero_radius_fills_full_rect() {
        let mut img = canvas(20);
        fill_rounded_rect(&mut img, 0, 0, 20, 20, 0, RED);
        assert_eq!(*img.get_pixel(0, 0), RED);
        assert_eq!(*img.get_pixel(19, 19), RED);
    }

    #[test]
    fn rounded_corners_are_left_unpainted() {
        let mut img = canvas(40);
        fill_rounded_rect(&mut img, 0, 0, 40, 40, 10, RED);
        // Corner pixels fall outside the corner circles.
        assert_eq!(*img.get_pixel(0, 0), WHITE);
        assert_eq!(*img.get_pixel(39, 0), WHITE);
        assert_eq!(*img.get_pixel(0, 39), WHITE);
        assert_eq!(*img.get_pixel(39, 39), WHITE);
        // Edge midpoints and the interior are painted.
        assert_eq!(*img.get_pixel(20, 0), RED);
        assert_eq!(*img.get_pixel(0, 20), RED);
        assert_eq!(*img.get_pixel(20, 20), RED);
    }

    #[test]
    fn radius_is_clamped_to_half_side() {
        let mut img = canvas(20);
        fill_rounded_rect(&mut img, 0, 0, 20, 20, 100, RED);
        // Fully round: center painted, extreme corners not.
        assert_eq!(*img.get_pixel(10, 10), RED);
        assert_eq!(*img.get_pixel(0, 0), WHITE);
    }
}
