use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// PWA icon edge lengths, in the order they are written.
pub const DEFAULT_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

#[derive(Debug, thiserror::Error)]
#[error("invalid color {input:?}: expected #rrggbb")]
pub struct ColorParseError {
    pub input: String,
}

/// An opaque 8-bit RGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError { input: s.to_string() };
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub border: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x25, 0x63, 0xeb), // blue-600
            foreground: Rgb::new(0xff, 0xff, 0xff),
            border: Rgb::new(0x1d, 0x4e, 0xd8), // blue-700
        }
    }
}

/// Edge length of one square icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconSpec(pub u32);

impl IconSpec {
    pub fn side(self) -> u32 {
        self.0
    }

    /// `icon-{s}x{s}.png`
    pub fn file_name(self) -> String {
        format!("icon-{0}x{0}.png", self.0)
    }

    /// Number of nested one-pixel outlines drawn at the edge.
    pub fn border_width(self) -> u32 {
        (self.0 / 64).max(1)
    }

    /// Em size, in pixels, requested from scalable fonts.
    pub fn font_px(self) -> u32 {
        self.0 / 3
    }
}

/// One font-acquisition strategy. Strategies are tried in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FontSource {
    /// A scalable TrueType/OpenType file on disk.
    TrueType { path: PathBuf },
    /// The embedded fixed-size bitmap font.
    Builtin,
}

impl FontSource {
    pub fn true_type(path: impl AsRef<Path>) -> Self {
        FontSource::TrueType { path: path.as_ref().to_path_buf() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaviconSpec {
    pub size: u32,
    pub font_px: u32,
}

impl Default for FaviconSpec {
    fn default() -> Self {
        Self { size: 32, font_px: 20 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub output_dir: PathBuf,
    pub favicon_path: PathBuf,
    pub sizes: Vec<u32>,
    pub glyph: char,
    pub colors: Palette,
    pub font_sources: Vec<FontSource>,
    pub favicon: FaviconSpec,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("public/icons"),
            favicon_path: PathBuf::from("public/favicon.ico"),
            sizes: DEFAULT_SIZES.to_vec(),
            glyph: 'B',
            colors: Palette::default(),
            font_sources: vec![
                FontSource::true_type("/System/Library/Fonts/Arial.ttf"),
                FontSource::true_type("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
                FontSource::Builtin,
            ],
            favicon: FaviconSpec::default(),
        }
    }
}

impl IconConfig {
    /// Parse a JSON document; omitted fields keep their defaults.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn icon_specs(&self) -> impl Iterator<Item = IconSpec> + '_ {
        self.sizes.iter().copied().map(IconSpec)
    }

    /// Web app manifest `icons` entries for every PNG, e.g. with
    /// `public_prefix = "/icons"` the 72px entry is `/icons/icon-72x72.png`.
    pub fn manifest_icons(&self, public_prefix: &str) -> Vec<ManifestIcon> {
        let prefix = public_prefix.trim_end_matches('/');
        self.icon_specs()
            .map(|spec| ManifestIcon {
                src: format!("{}/{}", prefix, spec.file_name()),
                sizes: format!("{0}x{0}", spec.side()),
                mime: "image/png".to_string(),
                purpose: "maskable any".to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime: String,
    pub purpose: String,
}
