//! Rasterizes a single centered glyph with a border onto a solid square.

pub mod bitmap;
pub mod canvas;
pub mod font;

pub use font::{resolve_glyph, FontUnavailable, ResolvedGlyph};

use image::RgbImage;
use types::{FontSource, IconSpec, Palette};

/// What to draw on one canvas.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub side: u32,
    pub font_px: u32,
    pub border_width: u32,
    pub glyph: char,
    pub colors: Palette,
    pub font_sources: &'a [FontSource],
}

impl<'a> RenderRequest<'a> {
    pub fn for_icon(spec: IconSpec, glyph: char, colors: Palette, font_sources: &'a [FontSource]) -> Self {
        Self {
            side: spec.side(),
            font_px: spec.font_px(),
            border_width: spec.border_width(),
            glyph,
            colors,
            font_sources,
        }
    }
}

/// How the glyph ended up on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphPlacement {
    Scalable { origin: (u32, u32), size: (u32, u32) },
    Bitmap { origin: (u32, u32), size: (u32, u32) },
    /// No font source produced the glyph; only the approximate box was computed.
    Approximated { origin: (u32, u32), size: (u32, u32) },
}

#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub image: RgbImage,
    pub placement: GlyphPlacement,
}

impl RenderedIcon {
    pub fn side(&self) -> u32 {
        self.image.width()
    }
}

pub fn render(req: &RenderRequest<'_>) -> RenderedIcon {
    let mut image = canvas::blank(req.side, req.colors.background);

    let placement = match resolve_glyph(req.font_sources, req.glyph, req.font_px) {
        Some(glyph) => {
            let size = glyph.ink_size();
            let origin = canvas::centered_origin(req.side, size);
            canvas::draw_glyph(&mut image, &glyph, origin, req.colors.foreground);
            match glyph {
                ResolvedGlyph::Scalable(_) => GlyphPlacement::Scalable { origin, size },
                ResolvedGlyph::Bitmap(_) => GlyphPlacement::Bitmap { origin, size },
            }
        }
        None => {
            let size = (req.side / 4, req.side / 4);
            let origin = canvas::centered_origin(req.side, size);
            log::debug!(
                "no font for {:?} at {}px; leaving glyph box {:?} at {:?} empty",
                req.glyph,
                req.side,
                size,
                origin
            );
            GlyphPlacement::Approximated { origin, size }
        }
    };

    canvas::draw_border(&mut image, req.border_width, req.colors.border);
    RenderedIcon { image, placement }
}
