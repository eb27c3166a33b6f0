//! Configuration files driving both stamping modes end to end.

use super::common::{decode, encode, fixture_font, solid};
use photostamp::config::Config;
use photostamp::layout::{LayoutConfig, MarginProfile};
use photostamp::{composite, layout_and_render, ImageSource, StampError};
use std::fs;

#[test]
fn test_config_drives_watermark_and_text() {
    let dir = tempfile::tempdir().unwrap();
    solid(50, 50, [255, 255, 255, 0]).save(dir.path().join("wm.png")).unwrap();
    solid(320, 240, [10, 10, 10, 255])
        .save(dir.path().join("template.png"))
        .unwrap();
    fs::copy(fixture_font(), dir.path().join("font.ttf")).unwrap();

    let config_path = dir.path().join("photostamp.yaml");
    fs::write(
        &config_path,
        r##"
watermark:
  path: wm.png
text:
  template_path: template.png
  font_path: font.ttf
  fill_color: "#00FF00"
  justify: true
  stretch_glyph: "-"
  margins:
    profile: symmetric
    margin: 0.1
"##,
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();

    let photo = solid(100, 80, [200, 100, 50, 255]);
    let mut photo_bytes = std::io::Cursor::new(Vec::new());
    photo
        .write_to(&mut photo_bytes, image::ImageFormat::Png)
        .unwrap();

    let watermark = config.watermark.as_ref().unwrap();
    let stamped = composite(photo_bytes.get_ref(), &watermark.path).unwrap();
    assert_eq!(stamped.name, "result.png");
    assert_eq!(decode(&stamped.data), photo);

    let text = config.text.as_ref().unwrap();
    assert_eq!(text.layout.margins, MarginProfile::Symmetric { margin: 0.1 });
    let render = layout_and_render(
        ImageSource::Path(&text.template_path),
        "configured caption text",
        &text.layout,
    )
    .unwrap();
    let out = decode(&render.image.data);
    assert_eq!(out.dimensions(), (320, 240));
    assert!(out.pixels().any(|p| p[1] > 200 && p[0] < 80));
}

#[test]
fn test_env_var_in_font_path() {
    let font_dir = fixture_font().parent().unwrap().to_path_buf();
    std::env::set_var("PHOTOSTAMP_IT_FONT_DIR", &font_dir);

    let config = Config::from_yaml_with_env(
        "text:\n  template_path: /tmp/t.png\n  font_path: ${PHOTOSTAMP_IT_FONT_DIR}/DejaVuSans.ttf\n",
    )
    .unwrap();

    assert_eq!(config.text.unwrap().layout.font_path, fixture_font());
}

#[test]
fn test_defaults_apply_when_omitted() {
    let config =
        Config::from_yaml_with_env("text:\n  template_path: t.png\n  font_path: f.ttf\n").unwrap();
    let layout = config.text.unwrap().layout;

    assert_eq!(layout.initial_size_fraction, 0.08);
    assert_eq!(layout.min_size, 10);
    assert_eq!(layout.line_spacing_fraction, 0.2);
    assert!(!layout.justify);
    assert_eq!(layout.fill_color, "#FFFFFF");
    assert_eq!(
        layout.margins,
        MarginProfile::Boxed {
            horizontal: 0.08,
            top: 0.2,
            bottom: 0.1
        }
    );
}

#[test]
fn test_bad_fill_color_is_config_error() {
    let result = Config::from_yaml_with_env(&format!(
        "text:\n  template_path: t.png\n  font_path: {}\n  fill_color: \"#GG0000\"\n",
        fixture_font().display()
    ));
    assert!(matches!(result, Err(StampError::Config(_))));

    let mut layout = LayoutConfig::new(fixture_font());
    layout.fill_color = "#GG0000".to_string();
    let template = encode(&solid(40, 40, [0, 0, 0, 255]), image::ImageFormat::Png);
    let result = layout_and_render(ImageSource::Bytes(&template), "hi", &layout);
    assert!(matches!(result, Err(StampError::Config(_))));
}

#[test]
fn test_typo_in_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("photostamp.yaml");
    fs::write(
        &config_path,
        "text:\n  template_path: t.png\n  font_path: f.ttf\n  justfy: true\n  min_sise: 3\n",
    )
    .unwrap();

    match Config::from_file(&config_path) {
        Err(StampError::Config(message)) => {
            assert!(message.contains("justfy") || message.contains("min_sise"))
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_malformed_yaml() {
    let result = Config::from_yaml_with_env("watermark: [unclosed");
    assert!(matches!(result, Err(StampError::Config(_))));
}
