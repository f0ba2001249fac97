// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that turns a color spec string into a [`Color`]. The
//! accepted forms are:
//!
//! | Form                    | Example                     | Result         |
//! |-------------------------|-----------------------------|----------------|
//! | hex                     | `#F00`, `#ff000080`         | [`Color::Hex`] |
//! | palette index           | `196`                       | [`Color::Ansi`]|
//! | `rgb()` / `rgba()`      | `rgba(255, 0, 0, 0.5)`      | [`Color::Rgb`] |
//! | `hsl()` / `hsla()`      | `hsl(120, 100%, 25%)`       | [`Color::Hsl`] |
//!
//! Every [`crate::TransformColor::to_css`] output parses back with this parser.

use nom::{IResult,
          branch::alt,
          bytes::complete::{tag_no_case, take_while1},
          character::complete::{char, multispace0},
          combinator::all_consuming,
          multi::separated_list1,
          sequence::{delimited, tuple}};

use crate::{AnsiValue, Color, ColorFormatError, HexColor, HslColor, InlineVec, RgbColor};

/// Parse a color spec. Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// Returns a [`ColorFormatError`] describing what is wrong with `input`.
pub fn parse_color(input: &str) -> Result<Color, ColorFormatError> {
    let trimmed = input.trim();

    let result = match classify_spec(trimmed) {
        Some(SpecKind::Hex) => HexColor::try_new(trimmed).map(Color::Hex),
        Some(SpecKind::PaletteIndex) => parse_palette_index(trimmed),
        Some(SpecKind::CssFunction) => parse_css_color(trimmed),
        None => Err(ColorFormatError::UnrecognizedSpec {
            input: input.into(),
        }),
    };

    // % is Display, ? is Debug.
    tracing::debug!(message = "parse color spec", spec = %input, result = ?result);

    result
}

/// Whether `input` has the shape of one of the accepted forms. It may still fail to
/// parse, eg: `#12` is shaped like a hex color but has the wrong length.
#[must_use]
pub fn looks_like_color_spec(input: &str) -> bool { classify_spec(input.trim()).is_some() }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecKind {
    Hex,
    PaletteIndex,
    CssFunction,
}

fn classify_spec(input: &str) -> Option<SpecKind> {
    if input.starts_with('#') {
        return Some(SpecKind::Hex);
    }

    // A leading `-` is still an index, so that it reports out of range.
    let unsigned = input.strip_prefix('-').unwrap_or(input);
    if !unsigned.is_empty() && unsigned.bytes().all(|it| it.is_ascii_digit()) {
        return Some(SpecKind::PaletteIndex);
    }

    let prefix = input.get(..3).map(str::to_ascii_lowercase);
    match prefix.as_deref() {
        Some("rgb" | "hsl") => Some(SpecKind::CssFunction),
        _ => None,
    }
}

fn parse_palette_index(input: &str) -> Result<Color, ColorFormatError> {
    let out_of_range = || ColorFormatError::PaletteIndexOutOfRange {
        input: input.into(),
    };
    let index = input.parse::<i64>().map_err(|_| out_of_range())?;
    let ansi = AnsiValue::try_from(index).map_err(|_| out_of_range())?;
    Ok(Color::Ansi(ansi))
}

fn parse_css_color(input: &str) -> Result<Color, ColorFormatError> {
    let invalid = || ColorFormatError::InvalidCssFunction {
        input: input.into(),
    };

    let Ok((_, (name, args))) = parser::parse_css_function(input) else {
        return Err(invalid());
    };

    let has_alpha = name.len() == 4;
    let expected_len = if has_alpha { 4 } else { 3 };
    if args.len() != expected_len {
        return Err(invalid());
    }

    let alpha = match args.get(3) {
        Some(arg) => parse_alpha(arg).ok_or_else(invalid)?,
        None => 1.0,
    };

    if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") {
        let channel = |arg: &str| arg.parse::<u8>().map_err(|_| invalid());
        let rgb = RgbColor::new(channel(args[0])?, channel(args[1])?, channel(args[2])?);
        Ok(Color::Rgb(rgb.with_alpha(alpha)))
    } else {
        let hue = parse_number(args[0]).ok_or_else(invalid)?;
        let saturation = parse_percentage(args[1]).ok_or_else(invalid)?;
        let lightness = parse_percentage(args[2]).ok_or_else(invalid)?;
        Ok(Color::Hsl(
            HslColor::new(hue, saturation, lightness).with_alpha(alpha),
        ))
    }
}

fn parse_number(arg: &str) -> Option<f64> {
    arg.parse::<f64>().ok().filter(|it| it.is_finite())
}

/// `50%` is `0.5`. The `%` is required.
fn parse_percentage(arg: &str) -> Option<f64> {
    parse_number(arg.strip_suffix('%')?).map(|it| it / 100.0)
}

fn parse_alpha(arg: &str) -> Option<f64> {
    parse_number(arg).filter(|it| (0.0..=1.0).contains(it))
}

/// nom parsers used by [`parse_css_color`].
mod parser {
    use super::*;

    pub fn match_is_arg_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '%' | '-' | '+')
    }

    /// One function argument, surrounded by optional whitespace.
    fn parse_arg(input: &str) -> IResult<&str, &str> {
        delimited(multispace0, take_while1(match_is_arg_char), multispace0)(input)
    }

    /// `name(arg, arg, ...)`. The longer names come first in the [alt] so `rgba` is not
    /// matched as `rgb` followed by a stray `a`.
    pub fn parse_css_function(input: &str) -> IResult<&str, (&str, InlineVec<&str>)> {
        let (remainder, (name, args)) = all_consuming(tuple((
            alt((
                tag_no_case("rgba"),
                tag_no_case("rgb"),
                tag_no_case("hsla"),
                tag_no_case("hsl"),
            )),
            delimited(
                tuple((multispace0, char('('))),
                separated_list1(char(','), parse_arg),
                char(')'),
            ),
        )))(input)?;
        Ok((remainder, (name, args.into_iter().collect())))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::TransformColor;

    #[test_case("#F00", Color::Hex(HexColor::try_new("#FF0000").unwrap()))]
    #[test_case("  #f00  ", Color::Hex(HexColor::try_new("#FF0000").unwrap()))]
    #[test_case("196", Color::Ansi(AnsiValue::new(196)))]
    #[test_case("0", Color::Ansi(AnsiValue::new(0)))]
    #[test_case("rgb(255, 0, 0)", Color::Rgb(RgbColor::new(255, 0, 0)))]
    #[test_case("RGB( 1,2 ,3 )", Color::Rgb(RgbColor::new(1, 2, 3)))]
    #[test_case("rgba(1, 2, 3, 0.5)", Color::Rgb(RgbColor::new(1, 2, 3).with_alpha(0.5)))]
    #[test_case("hsl(120, 100%, 25%)", Color::Hsl(HslColor::new(120.0, 1.0, 0.25)))]
    #[test_case("hsla(120, 100.0%, 25.0%, 0.25)", Color::Hsl(HslColor::new(120.0, 1.0, 0.25).with_alpha(0.25)))]
    fn test_parse_valid(input: &str, expected: Color) {
        assert_eq!(parse_color(input), Ok(expected));
    }

    #[test_case("#12", ColorFormatError::InvalidHexLength { input: "#12".into(), digit_count: 2 })]
    #[test_case("256", ColorFormatError::PaletteIndexOutOfRange { input: "256".into() })]
    #[test_case("-1", ColorFormatError::PaletteIndexOutOfRange { input: "-1".into() })]
    #[test_case("99999999999999999999", ColorFormatError::PaletteIndexOutOfRange { input: "99999999999999999999".into() })]
    #[test_case("rgb(256, 0, 0)", ColorFormatError::InvalidCssFunction { input: "rgb(256, 0, 0)".into() })]
    #[test_case("rgb(1, 2)", ColorFormatError::InvalidCssFunction { input: "rgb(1, 2)".into() })]
    #[test_case("rgba(1, 2, 3)", ColorFormatError::InvalidCssFunction { input: "rgba(1, 2, 3)".into() })]
    #[test_case("rgba(1, 2, 3, 1.5)", ColorFormatError::InvalidCssFunction { input: "rgba(1, 2, 3, 1.5)".into() })]
    #[test_case("hsl(120, 100, 25)", ColorFormatError::InvalidCssFunction { input: "hsl(120, 100, 25)".into() })]
    #[test_case("rgb(1, 2, 3) extra", ColorFormatError::InvalidCssFunction { input: "rgb(1, 2, 3) extra".into() })]
    #[test_case("+5", ColorFormatError::UnrecognizedSpec { input: "+5".into() })]
    #[test_case("red", ColorFormatError::UnrecognizedSpec { input: "red".into() })]
    #[test_case("", ColorFormatError::UnrecognizedSpec { input: "".into() })]
    fn test_parse_invalid(input: &str, expected: ColorFormatError) {
        assert_eq!(parse_color(input), Err(expected));
    }

    #[test]
    fn test_css_output_parses_back() {
        let colors = [
            Color::Rgb(RgbColor::new(10, 20, 30)),
            Color::Rgb(RgbColor::new(10, 20, 30).with_alpha(0.25)),
            Color::Hsl(HslColor::new(200.0, 0.5, 0.5)),
            Color::Hsl(HslColor::new(200.0, 0.5, 0.5).with_alpha(0.75)),
        ];
        for color in colors {
            let css = color.to_css();
            assert_eq!(parse_color(&css), Ok(color), "{css}");
        }
    }

    #[test_case("#zz", true)]
    #[test_case("300", true)]
    #[test_case("rgb", true)]
    #[test_case("-3", true)]
    #[test_case("+5", false)]
    #[test_case("bold", false)]
    #[test_case("", false)]
    fn test_looks_like_color_spec(input: &str, expected: bool) {
        assert_eq!(looks_like_color_spec(input), expected);
    }
}
