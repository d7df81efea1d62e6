use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{DynamicImage, ImageFormat, RgbImage};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write PNG {path}: {source}")]
    Png {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot write ICO {path}: {source}")]
    Ico {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("ICO entries must be 1..=256px, got {width}x{height}")]
    IcoSize { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `img` as `dir/file_name`, replacing any existing file.
pub fn write_png(dir: &Path, file_name: &str, img: &RgbImage) -> Result<PathBuf> {
    let path = dir.join(file_name);
    img.save_with_format(&path, ImageFormat::Png)
        .map_err(|source| OutputError::Png { path: path.clone(), source })?;
    Ok(path)
}

/// Write `img` as a single-entry ICO at `path`. The parent directory must exist.
pub fn write_ico(path: &Path, img: &RgbImage) -> Result<()> {
    let (width, height) = img.dimensions();
    if !(1..=256).contains(&width) || !(1..=256).contains(&height) {
        return Err(OutputError::IcoSize { width, height });
    }
    let ico_err = |source: std::io::Error| OutputError::Ico { path: path.to_path_buf(), source };

    let rgba = DynamicImage::ImageRgb8(img.clone()).into_rgba8();
    let entry = IconDirEntry::encode(&IconImage::from_rgba_data(width, height, rgba.into_raw()))
        .map_err(ico_err)?;
    let mut dir = IconDir::new(ResourceType::Icon);
    dir.add_entry(entry);

    let mut out = BufWriter::new(File::create(path).map_err(ico_err)?);
    dir.write(&mut out).map_err(ico_err)?;
    out.flush().map_err(ico_err)?;
    Ok(())
}

/// Sizes of every entry in an ICO file, in directory order.
pub fn ico_dimensions(path: &Path) -> std::io::Result<Vec<(u32, u32)>> {
    let dir = IconDir::read(BufReader::new(File::open(path)?))?;
    Ok(dir.entries().iter().map(|e| (e.width(), e.height())).collect())
}
