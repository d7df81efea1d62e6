use icon_gen::{generate, render_favicon, FaviconError};
use std::path::Path;
use types::{FaviconSpec, FontSource, IconConfig, DEFAULT_SIZES};

fn config_in(root: &Path) -> IconConfig {
    IconConfig {
        output_dir: root.join("public").join("icons"),
        favicon_path: root.join("public").join("favicon.ico"),
        font_sources: vec![FontSource::Builtin],
        ..IconConfig::default()
    }
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_generates_full_icon_set() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config_in(tmp.path());
    let report = generate(&cfg).unwrap();

    assert_eq!(report.icons.len(), DEFAULT_SIZES.len());
    for (file, side) in report.icons.iter().zip(DEFAULT_SIZES) {
        assert_eq!(file.spec.side(), side);
        assert_eq!(file.path, cfg.output_dir.join(format!("icon-{side}x{side}.png")));

        let img = image::open(&file.path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (side, side));
        assert_eq!(img.get_pixel(0, 0).0, cfg.colors.border.0);
        let inset = file.spec.border_width();
        assert_eq!(img.get_pixel(inset, inset).0, cfg.colors.background.0);
    }

    let mut expected: Vec<String> = DEFAULT_SIZES
        .iter()
        .map(|s| format!("icon-{s}x{s}.png"))
        .collect();
    expected.sort();
    assert_eq!(listing(&cfg.output_dir), expected);

    assert_eq!(report.favicon.as_ref().unwrap(), &cfg.favicon_path);
    assert_eq!(io::ico_dimensions(&cfg.favicon_path).unwrap(), vec![(32, 32)]);
    assert_eq!(listing(&tmp.path().join("public")), vec!["favicon.ico", "icons"]);
}

#[test]
fn test_rerun_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config_in(tmp.path());

    generate(&cfg).unwrap();
    let first = std::fs::read(cfg.output_dir.join("icon-192x192.png")).unwrap();
    let first_listing = listing(&cfg.output_dir);

    let report = generate(&cfg).unwrap();
    assert!(report.favicon.is_ok());
    assert_eq!(listing(&cfg.output_dir), first_listing);
    assert_eq!(std::fs::read(cfg.output_dir.join("icon-192x192.png")).unwrap(), first);
}

#[test]
fn test_favicon_failure_is_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = IconConfig {
        favicon_path: tmp.path().join("no-such-dir").join("favicon.ico"),
        ..config_in(tmp.path())
    };

    let report = generate(&cfg).unwrap();
    assert_eq!(report.icons.len(), 8);
    let err: FaviconError = report.favicon.unwrap_err();
    assert_eq!(err.path, cfg.favicon_path);
    assert!(matches!(err.source, io::OutputError::Ico { .. }));
    assert!(!cfg.favicon_path.exists());
}

#[test]
fn test_zero_sized_favicon_is_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = IconConfig {
        favicon: FaviconSpec { size: 0, font_px: 20 },
        ..config_in(tmp.path())
    };

    let report = generate(&cfg).unwrap();
    let err = report.favicon.unwrap_err();
    assert!(matches!(err.source, io::OutputError::IcoSize { width: 0, height: 0 }));
    assert!(!cfg.favicon_path.exists());
    assert_eq!(report.icons.len(), DEFAULT_SIZES.len());
    for file in &report.icons {
        assert!(file.path.is_file(), "{} missing", file.path.display());
    }
}

#[test]
fn test_unwritable_output_dir_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("public");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let cfg = config_in(tmp.path());
    assert!(generate(&cfg).is_err());
}

#[test]
fn test_favicon_render() {
    let cfg = IconConfig {
        font_sources: vec![FontSource::Builtin],
        ..IconConfig::default()
    };
    let icon = render_favicon(&cfg);
    assert_eq!(icon.side(), 32);
    assert_eq!(icon.image.get_pixel(0, 0).0, cfg.colors.border.0);
    assert_eq!(icon.image.get_pixel(1, 1).0, cfg.colors.background.0);
    // 5x7 bitmap B centered at (13, 12)
    assert_eq!(icon.image.get_pixel(13, 12).0, cfg.colors.foreground.0);
}

#[test]
fn test_custom_sizes_and_glyph() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = IconConfig {
        sizes: vec![48, 16],
        glyph: 'Z',
        ..config_in(tmp.path())
    };
    let report = generate(&cfg).unwrap();
    let names: Vec<_> = report.icons.iter().map(|f| f.spec.file_name()).collect();
    assert_eq!(names, vec!["icon-48x48.png", "icon-16x16.png"]);
}
