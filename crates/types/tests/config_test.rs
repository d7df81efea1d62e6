use std::path::PathBuf;
use types::{FontSource, IconConfig, IconSpec, Rgb, DEFAULT_SIZES};

#[test]
fn test_rgb_parse_and_display() {
    let c: Rgb = "#2563eb".parse().unwrap();
    assert_eq!(c, Rgb::new(0x25, 0x63, 0xeb));
    assert_eq!(c.to_string(), "#2563eb");

    let bare: Rgb = "1D4ED8".parse().unwrap();
    assert_eq!(bare, Rgb::new(0x1d, 0x4e, 0xd8));
}

#[test]
fn test_rgb_parse_rejects_malformed() {
    for bad in ["", "#fff", "#12345g", "#1234567", "blue"] {
        assert!(bad.parse::<Rgb>().is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn test_icon_spec_derived_values() {
    let s = IconSpec(72);
    assert_eq!(s.file_name(), "icon-72x72.png");
    assert_eq!(s.border_width(), 1);
    assert_eq!(s.font_px(), 24);

    assert_eq!(IconSpec(128).border_width(), 2);
    assert_eq!(IconSpec(512).border_width(), 8);
    assert_eq!(IconSpec(32).border_width(), 1);
}

#[test]
fn test_default_config() {
    let cfg = IconConfig::default();
    assert_eq!(cfg.sizes, DEFAULT_SIZES.to_vec());
    assert_eq!(cfg.glyph, 'B');
    assert_eq!(cfg.colors.background.to_string(), "#2563eb");
    assert_eq!(cfg.colors.foreground.to_string(), "#ffffff");
    assert_eq!(cfg.colors.border.to_string(), "#1d4ed8");
    assert_eq!(cfg.favicon.size, 32);
    assert_eq!(cfg.favicon.font_px, 20);
    assert_eq!(cfg.font_sources.last(), Some(&FontSource::Builtin));
}

#[test]
fn test_partial_json_keeps_defaults() {
    let cfg = IconConfig::from_json(
        r##"{
            "output_dir": "out/icons",
            "sizes": [16, 48],
            "colors": { "background": "#000000", "foreground": "#ff0000", "border": "#00ff00" },
            "font_sources": [{ "kind": "builtin" }]
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.output_dir, PathBuf::from("out/icons"));
    assert_eq!(cfg.sizes, vec![16, 48]);
    assert_eq!(cfg.colors.foreground, Rgb::new(255, 0, 0));
    assert_eq!(cfg.font_sources, vec![FontSource::Builtin]);
    // untouched fields
    assert_eq!(cfg.glyph, 'B');
    assert_eq!(cfg.favicon_path, PathBuf::from("public/favicon.ico"));
}

#[test]
fn test_json_rejects_bad_color() {
    let res = IconConfig::from_json(
        r##"{ "colors": { "background": "navy", "foreground": "#ffffff", "border": "#000000" } }"##,
    );
    assert!(res.is_err());
}

#[test]
fn test_font_source_json_shape() {
    let json = serde_json::to_value(FontSource::true_type("/fonts/a.ttf")).unwrap();
    assert_eq!(json["kind"], "true_type");
    assert_eq!(json["path"], "/fonts/a.ttf");
}

#[test]
fn test_manifest_icons() {
    let cfg = IconConfig::default();
    let icons = cfg.manifest_icons("/icons/");
    assert_eq!(icons.len(), 8);
    assert_eq!(icons[0].src, "/icons/icon-72x72.png");
    assert_eq!(icons[0].sizes, "72x72");
    assert_eq!(icons[7].src, "/icons/icon-512x512.png");

    let json = serde_json::to_value(&icons[0]).unwrap();
    assert_eq!(json["type"], "image/png");
    assert_eq!(json["purpose"], "maskable any");
}
