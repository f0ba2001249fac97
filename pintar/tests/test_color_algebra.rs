// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pintar::*;
use pretty_assertions::assert_eq;

fn assert_channels_within_one(lhs: RgbColor, rhs: RgbColor) {
    let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
    assert!(
        close(lhs.red, rhs.red) && close(lhs.green, rhs.green) && close(lhs.blue, rhs.blue),
        "{lhs:?} vs {rhs:?}"
    );
}

#[test]
fn test_red_in_every_form() {
    let hex = HexColor::try_new("#FF0000").unwrap();
    let hsl = hex.to_hsl();
    assert!(hsl.hue().abs() < 1e-9);
    assert!((hsl.saturation() - 1.0).abs() < 1e-9);
    assert!((hsl.lightness() - 0.5).abs() < 1e-9);

    assert_eq!(RgbColor::new(255, 0, 0).to_ansi_index(), 196);
    assert_eq!(HexColor::try_new("#F00").unwrap().to_long_hex(), "#FF0000");
    assert_eq!(HexColor::try_new("#FF0000").unwrap().to_short_hex(), "#F00");
}

#[test]
fn test_rgb_hsl_rgb_round_trip() {
    for red in (0..=255).step_by(15) {
        for green in (0..=255).step_by(17) {
            for blue in (0..=255).step_by(51) {
                let original = RgbColor::new(red, green, blue).with_alpha(0.25);
                let it = original.to_hsl().to_rgb();
                assert_channels_within_one(it, original);
                assert_eq!(it.alpha(), 0.25);
            }
        }
    }
}

#[test]
fn test_every_variant_agrees_on_hsl() {
    let colors: Vec<Color> = vec![
        RgbColor::new(12, 200, 99).into(),
        HslColor::new(200.0, 0.4, 0.3).into(),
        HexColor::try_new("#3A7").unwrap().into(),
        AnsiValue::new(130).into(),
    ];
    for color in colors {
        let direct = color.to_hsl();
        let via_rgb = color.to_rgb().to_hsl();
        assert_channels_within_one(direct.to_rgb(), via_rgb.to_rgb());
    }
}

#[test]
fn test_hex_css_reflects_alpha() {
    for spec in ["#FFF", "#abcdef", "#0a0B0c"] {
        let it = HexColor::try_new(spec).unwrap().to_rgb().to_css();
        assert!(it.starts_with("rgb("), "{it}");
    }
    for spec in ["#FFF8", "#abcdef00"] {
        let it = HexColor::try_new(spec).unwrap().to_rgb().to_css();
        assert!(it.starts_with("rgba("), "{it}");
    }
}

#[test]
fn test_palette_round_trip() {
    // Cube entries whose channels are all equal are grays, and snap to the ramp.
    for index in 16..=231_u8 {
        let rgb = RgbColor::from_ansi_index(index);
        if rgb.red == rgb.green && rgb.green == rgb.blue {
            continue;
        }
        assert_eq!(rgb.to_ansi_index(), index);
    }
    for index in 232..=255_u8 {
        let it = RgbColor::from_ansi_index(index).to_ansi_index();
        assert!(it.abs_diff(index) <= 1, "{index} -> {it}");
    }
}

#[test]
fn test_lighten_then_darken_returns() {
    let colors = [
        RgbColor::new(100, 150, 200),
        RgbColor::new(40, 80, 20),
        RgbColor::new(128, 128, 128),
        RgbColor::new(200, 30, 90),
    ];
    for color in colors {
        assert_channels_within_one(color.lighten(0.0), color);
        assert_channels_within_one(color.lighten(0.1).darken(0.1), color);
    }
}

#[test]
fn test_manipulations_keep_the_variant() {
    let it: Color = HexColor::try_new("#336699").unwrap().into();
    assert!(matches!(it.lighten(0.2), Color::Hex(_)));
    assert!(matches!(it.saturate(0.2), Color::Hex(_)));
    assert!(matches!(it.tint(0.5), Color::Hex(_)));

    let it: Color = HslColor::new(10.0, 0.5, 0.5).into();
    assert!(matches!(it.darken(0.2), Color::Hsl(_)));
    assert!(matches!(it.shade(0.5), Color::Hsl(_)));

    let it: Color = AnsiValue::new(33).into();
    assert!(matches!(it.desaturate(0.2), Color::Ansi(_)));
}

#[test]
fn test_css_output_parses_back() {
    let colors: Vec<Color> = vec![
        RgbColor::new(1, 2, 3).into(),
        RgbColor::new(1, 2, 3).with_alpha(0.5).into(),
        HslColor::new(120.0, 1.0, 0.25).into(),
        HslColor::new(300.0, 0.5, 0.5).with_alpha(0.2).into(),
        HexColor::try_new("#12345678").unwrap().into(),
    ];
    for color in colors {
        let css = color.to_css();
        let parsed = parse_color(&css).unwrap();
        assert_channels_within_one(parsed.to_rgb(), color.to_rgb());
    }
}

#[test]
fn test_bad_specs() {
    assert!(matches!(
        HexColor::try_new("#12"),
        Err(ColorFormatError::InvalidHexLength { digit_count: 2, .. })
    ));
    assert!(matches!(
        parse_color("256"),
        Err(ColorFormatError::PaletteIndexOutOfRange { .. })
    ));
    assert!(matches!(
        parse_color("hsl(10, 20, 30)"),
        Err(ColorFormatError::InvalidCssFunction { .. })
    ));
    assert!(RgbColor::try_from_ansi_index(-1).is_err());
    assert!(AnsiValue::try_from(256_i64).is_err());
}
