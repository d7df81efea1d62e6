use image::{Rgb as Pixel, RgbImage};
use types::Rgb;

use crate::font::ResolvedGlyph;

pub fn pixel(c: Rgb) -> Pixel<u8> {
    Pixel(c.0)
}

/// Square canvas of side `side` filled with `background`.
pub fn blank(side: u32, background: Rgb) -> RgbImage {
    RgbImage::from_pixel(side, side, pixel(background))
}

/// Top-left of a `w`x`h` box centered on a square of side `side`.
/// Boxes larger than the canvas are pinned to the origin.
pub fn centered_origin(side: u32, (w, h): (u32, u32)) -> (u32, u32) {
    (side.saturating_sub(w) / 2, side.saturating_sub(h) / 2)
}

/// Draw `glyph` with the top-left of its ink box at `origin`.
pub fn draw_glyph(img: &mut RgbImage, glyph: &ResolvedGlyph, origin: (u32, u32), color: Rgb) {
    let (ox, oy) = origin;
    match glyph {
        ResolvedGlyph::Scalable(g) => g.draw(|x, y, coverage| {
            blend(img, ox + x, oy + y, color, coverage);
        }),
        ResolvedGlyph::Bitmap(g) => {
            for (x, y) in g.cells() {
                blend(img, ox + x, oy + y, color, 1.0);
            }
        }
    }
}

fn blend(img: &mut RgbImage, x: u32, y: u32, color: Rgb, coverage: f32) {
    if x >= img.width() || y >= img.height() {
        return;
    }
    let a = coverage.clamp(0.0, 1.0);
    let dst = img.get_pixel_mut(x, y);
    for (d, s) in dst.0.iter_mut().zip(color.0) {
        *d = (*d as f32 * (1.0 - a) + s as f32 * a).round() as u8;
    }
}

/// Nested one-pixel square outlines, inset 0..width from each edge.
pub fn draw_border(img: &mut RgbImage, width: u32, color: Rgb) {
    let side = img.width().min(img.height());
    let p = pixel(color);
    for i in 0..width {
        if i * 2 >= side {
            break;
        }
        let far = side - 1 - i;
        for t in i..=far {
            img.put_pixel(t, i, p);
            img.put_pixel(t, far, p);
            img.put_pixel(i, t, p);
            img.put_pixel(far, t, p);
        }
    }
}
