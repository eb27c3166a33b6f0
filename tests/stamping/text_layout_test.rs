//! Fitted text layout and rendering with the real font backend.

use super::common::{decode, encode, fixture_font, lorem, solid};
use image::ImageFormat;
use photostamp::layout::{
    fit_text, wrap_words, FontFace, FontProvider, JoinPolicy, Justifier, LayoutConfig,
    MarginProfile, TextBox, TextMeasure, TATWEEL,
};
use photostamp::{layout_and_render, Advisory, ImageSource, StampError};
use rstest::rstest;

fn face() -> FontFace {
    FontFace::load(&fixture_font()).unwrap()
}

#[test]
fn test_hello_world_is_one_unjustified_line() {
    let text_box = TextBox::new(0.0, 0.0, 2000.0, 500.0).unwrap();
    let config = LayoutConfig::new(fixture_font()).with_justify(true);

    let layout = fit_text("hello world", &text_box, &config, &face());

    assert_eq!(layout.lines.len(), 1);
    assert_eq!(layout.lines[0].text, "hello world");
    assert_eq!(layout.iterations, 1);
}

#[test]
fn test_narrow_box_never_compresses() {
    let face = face();
    let handle = face.at_size(40);
    let words = vec!["hello".to_string(), "world".to_string()];
    let letters: f32 = words.iter().map(|w| handle.measure(w).width).sum();

    let justifier = Justifier::new(TATWEEL, JoinPolicy::Always);
    assert!(justifier.justify(&words, letters - 1.0, &handle).is_none());
    assert!(justifier.justify(&words, letters, &handle).is_none());
}

#[test]
fn test_long_text_shrinks_until_it_fits() {
    let text_box = TextBox::new(0.0, 0.0, 600.0, 120.0).unwrap();
    let mut config = LayoutConfig::new(fixture_font());
    config.initial_size_fraction = 0.4;
    config.min_size = 4;

    let layout = fit_text(&lorem(200), &text_box, &config, &face());

    assert!(layout.iterations > 1);
    assert!(!layout.overflow);
    assert!(layout.total_height <= text_box.height);
    assert!(layout.y_start + layout.total_height <= text_box.bottom());
    assert_eq!(layout.font_size, 48 - (layout.iterations - 1));
}

#[rstest]
#[case(80.0)]
#[case(250.0)]
#[case(900.0)]
fn test_wrap_round_trips_words(#[case] width: f32) {
    let text = "Sphinx of black quartz, judge my vow. Pack my box with five dozen liquor jugs.";
    let words: Vec<&str> = text.split_whitespace().collect();

    let lines = wrap_words(&words, width, &face().at_size(18));
    let rejoined: Vec<&str> = lines
        .iter()
        .flat_map(|l| l.words.iter().map(String::as_str))
        .collect();

    assert_eq!(rejoined, words);
    for line in lines.iter().filter(|l| l.words.len() > 1) {
        assert!(line.width <= width);
    }
}

#[test]
fn test_justified_lines_keep_single_letter_words() {
    let text_box = TextBox::new(0.0, 0.0, 500.0, 400.0).unwrap();
    let mut config = LayoutConfig::new(fixture_font()).with_justify(true);
    config.stretch_glyph = '~';
    config.initial_size_fraction = 0.1;

    let text = "I saw a big dog and I ran to a tall tree as I was scared of it";
    let layout = fit_text(text, &text_box, &config, &face());
    assert!(layout.lines.len() > 1);

    let (_, body) = layout.lines.split_last().unwrap();
    for line in body {
        for (word, drawn) in line.words.iter().zip(line.text.split(' ')) {
            if word.chars().count() == 1 {
                assert_eq!(drawn, word);
            } else {
                assert!(drawn.contains('~'), "{} was not stretched", word);
                assert_eq!(drawn.replace('~', ""), *word);
            }
        }
    }
}

#[test]
fn test_render_symmetric_profile() {
    let template = encode(&solid(300, 300, [0, 0, 0, 255]), ImageFormat::Png);
    let config = LayoutConfig::new(fixture_font())
        .with_margins(MarginProfile::Symmetric { margin: 0.1 });

    let render = layout_and_render(ImageSource::Bytes(&template), &lorem(12), &config).unwrap();
    let out = decode(&render.image.data);

    assert_eq!(out.dimensions(), (300, 300));
    let lit: Vec<u32> = out
        .enumerate_pixels()
        .filter(|(_, _, p)| p[0] > 0)
        .map(|(_, y, _)| y)
        .collect();
    assert!(!lit.is_empty());
    // ink stays inside the inset area
    assert!(*lit.iter().min().unwrap() >= 27);
    assert!(*lit.iter().max().unwrap() <= 273);
}

#[test]
fn test_render_from_template_path() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("template.png");
    solid(640, 360, [30, 60, 90, 255]).save(&template_path).unwrap();

    let mut config = LayoutConfig::new(fixture_font());
    config.fill_color = "#FF0000".to_string();

    let render =
        layout_and_render(ImageSource::Path(&template_path), "Fitted caption", &config).unwrap();

    assert_eq!(render.image.name, "text.png");
    let out = decode(&render.image.data);
    assert!(out.pixels().any(|p| p[0] > 200 && p[1] < 80));
}

#[test]
fn test_overflow_at_floor_renders_with_advisory() {
    let template = encode(&solid(200, 100, [0, 0, 0, 255]), ImageFormat::Png);
    let config = LayoutConfig::new(fixture_font());

    let render = layout_and_render(ImageSource::Bytes(&template), &lorem(500), &config).unwrap();

    // a 70px box starts at round(5.6) = 6, already under the floor
    assert!(render.report.overflow);
    assert_eq!(render.report.font_size, 6);
    assert_eq!(render.report.iterations, 1);
    match &render.report.advisories[..] {
        [Advisory::LayoutOverflow {
            total_height,
            box_height,
            ..
        }] => assert!(total_height > box_height),
        other => panic!("unexpected advisories {:?}", other),
    }
}

#[test]
fn test_missing_template_is_resource_error() {
    let missing = std::path::PathBuf::from("/nope/template.png");
    let config = LayoutConfig::new(fixture_font());
    let result = layout_and_render(ImageSource::Path(&missing), "hi", &config);
    assert!(matches!(result, Err(StampError::Resource { .. })));
}

#[test]
fn test_one_pixel_template_still_renders() {
    let template = encode(&solid(1, 1, [0, 0, 0, 255]), ImageFormat::Png);
    let config =
        LayoutConfig::new(fixture_font()).with_margins(MarginProfile::Symmetric { margin: 0.0 });

    let render = layout_and_render(ImageSource::Bytes(&template), "hi", &config).unwrap();

    assert_eq!(decode(&render.image.data).dimensions(), (1, 1));
    assert_eq!(render.report.font_size, 1);
}

#[test]
fn test_zero_sized_canvas_is_infeasible() {
    let result = TextBox::from_canvas(0, 10, &MarginProfile::Symmetric { margin: 0.0 });
    assert!(matches!(result, Err(StampError::InfeasibleBox { .. })));
}

const ARABIC_TEXT: &str = "كتب الطالب رسالة طويلة إلى صديقه في المدينة القديمة \
     وانتظر الجواب بفارغ الصبر حتى وصل البريد";

fn assert_stretch_only_at_joins(drawn: &str) {
    let policy = JoinPolicy::Arabic;
    let chars: Vec<char> = drawn.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c != TATWEEL {
            continue;
        }
        let prev = chars[..i]
            .iter()
            .rev()
            .find(|&&p| p != TATWEEL && !policy.is_transparent(p));
        let next = chars[i + 1..].iter().find(|&&n| n != TATWEEL);
        match (prev, next) {
            (Some(&p), Some(&n)) => {
                assert!(p != ' ' && n != ' ', "stretch glyph next to a space in {}", drawn);
                assert!(policy.joins(p, n), "{:?} does not join {:?} in {}", p, n, drawn);
            }
            _ => panic!("stretch glyph at the edge of {}", drawn),
        }
    }
}

#[test]
fn test_arabic_justification_end_to_end() {
    let text_box = TextBox::new(0.0, 0.0, 500.0, 400.0).unwrap();
    let mut config = LayoutConfig::new(fixture_font()).with_justify(true);
    config.join_policy = JoinPolicy::Arabic;
    config.initial_size_fraction = 0.1;

    let layout = fit_text(ARABIC_TEXT, &text_box, &config, &face());
    assert!(layout.lines.len() > 1);

    let (last, body) = layout.lines.split_last().unwrap();
    assert!(!last.text.contains(TATWEEL));
    assert!(body.iter().any(|l| l.text.contains(TATWEEL)));

    let face = face();
    let handle = face.at_size(layout.font_size);
    for line in body {
        for (word, drawn) in line.words.iter().zip(line.text.split(' ')) {
            assert_eq!(drawn.replace(TATWEEL, ""), *word);
        }
        assert_stretch_only_at_joins(&line.text);
        // never narrower than the plain line
        assert!(line.width >= handle.measure(&line.words.join(" ")).width);
    }

    let template = encode(&solid(500, 400, [0, 0, 0, 255]), ImageFormat::Png);
    let render = layout_and_render(ImageSource::Bytes(&template), ARABIC_TEXT, &config).unwrap();
    assert_eq!(render.report.line_count, layout.lines.len());
    assert_eq!(render.report.font_size, layout.font_size);
}

#[test]
fn test_arabic_line_is_drawn_centered() {
    let template = encode(&solid(600, 200, [0, 0, 0, 255]), ImageFormat::Png);
    let mut config = LayoutConfig::new(fixture_font()).with_justify(true);
    config.initial_size_fraction = 0.3;

    let render =
        layout_and_render(ImageSource::Bytes(&template), "سلام دنیا", &config).unwrap();
    assert_eq!(render.report.line_count, 1);

    let out = decode(&render.image.data);
    let cols: Vec<u32> = out
        .enumerate_pixels()
        .filter(|(_, _, p)| p[0] > 128)
        .map(|(x, _, _)| x)
        .collect();
    let (min, max) = (*cols.iter().min().unwrap(), *cols.iter().max().unwrap());

    // default boxed margins: 8% on each side
    let left_gap = min as f32 - 48.0;
    let right_gap = 552.0 - max as f32;
    assert!(left_gap > 0.0 && right_gap > 0.0);
    assert!((left_gap - right_gap).abs() <= 6.0, "{} vs {}", left_gap, right_gap);
}
