use ab_glyph::{point, Font, FontVec, OutlinedGlyph, PxScale};
use std::path::{Path, PathBuf};
use types::FontSource;

use crate::bitmap::{self, BitmapGlyph};

#[derive(Debug, thiserror::Error)]
pub enum FontUnavailable {
    #[error("cannot read font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a usable TrueType/OpenType font")]
    Invalid { path: PathBuf },
    #[error("font has no outline for {glyph:?}")]
    MissingGlyph { glyph: char },
}

/// A glyph ready to be placed, from whichever strategy succeeded.
pub enum ResolvedGlyph {
    Scalable(OutlinedGlyph),
    Bitmap(BitmapGlyph),
}

impl std::fmt::Debug for ResolvedGlyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedGlyph::Scalable(g) => f
                .debug_tuple("Scalable")
                .field(&g.px_bounds())
                .finish(),
            ResolvedGlyph::Bitmap(_) => f.write_str("Bitmap"),
        }
    }
}

impl ResolvedGlyph {
    /// Width and height of the inked area in pixels.
    pub fn ink_size(&self) -> (u32, u32) {
        match self {
            ResolvedGlyph::Scalable(g) => {
                let b = g.px_bounds();
                (b.width().max(0.0) as u32, b.height().max(0.0) as u32)
            }
            ResolvedGlyph::Bitmap(_) => (bitmap::GLYPH_WIDTH, bitmap::GLYPH_HEIGHT),
        }
    }
}

/// Try each source in order and return the first glyph that can be produced.
/// `px` is the em size requested from scalable fonts; the bitmap font ignores it.
pub fn resolve_glyph(sources: &[FontSource], glyph: char, px: u32) -> Option<ResolvedGlyph> {
    for source in sources {
        match acquire(source, glyph, px) {
            Ok(g) => return Some(g),
            Err(e) => log::debug!("font source {:?} unavailable: {}", source, e),
        }
    }
    None
}

pub fn acquire(source: &FontSource, glyph: char, px: u32) -> Result<ResolvedGlyph, FontUnavailable> {
    match source {
        FontSource::TrueType { path } => {
            let font = load_true_type(path)?;
            outline(&font, glyph, px).map(ResolvedGlyph::Scalable)
        }
        FontSource::Builtin => BitmapGlyph::lookup(glyph)
            .map(ResolvedGlyph::Bitmap)
            .ok_or(FontUnavailable::MissingGlyph { glyph }),
    }
}

fn load_true_type(path: &Path) -> Result<FontVec, FontUnavailable> {
    let data = std::fs::read(path).map_err(|source| FontUnavailable::Read {
        path: path.to_path_buf(),
        source,
    })?;
    FontVec::try_from_vec(data).map_err(|_| FontUnavailable::Invalid { path: path.to_path_buf() })
}

/// Outline `glyph` with an em box of `px` pixels, origin on the baseline at (0, 0).
fn outline<F: Font>(font: &F, glyph: char, px: u32) -> Result<OutlinedGlyph, FontUnavailable> {
    let id = font.glyph_id(glyph);
    if id.0 == 0 {
        return Err(FontUnavailable::MissingGlyph { glyph });
    }
    let scale = em_scale(font, px as f32);
    font.outline_glyph(id.with_scale_and_position(scale, point(0.0, 0.0)))
        .ok_or(FontUnavailable::MissingGlyph { glyph })
}

// ab_glyph scales by ascent-descent height; convert so `px` is the em size.
fn em_scale<F: Font>(font: &F, px: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(px * font.height_unscaled() / upem),
        _ => PxScale::from(px),
    }
}
