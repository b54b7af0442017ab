/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Parsing and serialization for the supported shorthands.
//!
//! A shorthand parser returns one value per longhand, in the order of the
//! shorthand's expansion. Sub-properties the author left out get `initial`.

use super::{longhands, Expansion};
use crate::parser::ParserContext;
use crate::values::{Keyword, PropertyValue};
use cssparser::Parser;
use smallvec::smallvec;
use std::fmt::{self, Write};
use style_traits::{CssWriter, ParseError, SequenceWriter, StyleParseErrorKind, ToCss};

type LonghandParser =
    for<'i, 't> fn(&ParserContext, &mut Parser<'i, 't>) -> Result<PropertyValue, ParseError<'i>>;

#[inline]
fn initial() -> PropertyValue {
    PropertyValue::Keyword(Keyword::Initial)
}

/// Parses one to four values and expands them to top, right, bottom and
/// left.
///
/// <https://drafts.csswg.org/css-backgrounds/#border-color>
fn parse_four_sides<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
    parse: LonghandParser,
) -> Result<Expansion, ParseError<'i>> {
    let top = parse(context, input)?;
    let right = match input.try_parse(|i| parse(context, i)) {
        Ok(right) => right,
        Err(_) => return Ok(smallvec![top.clone(), top.clone(), top.clone(), top]),
    };
    let bottom = match input.try_parse(|i| parse(context, i)) {
        Ok(bottom) => bottom,
        Err(_) => return Ok(smallvec![top.clone(), right.clone(), top, right]),
    };
    let left = input
        .try_parse(|i| parse(context, i))
        .unwrap_or_else(|_| right.clone());
    Ok(smallvec![top, right, bottom, left])
}

/// `margin`
pub fn parse_margin<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<Expansion, ParseError<'i>> {
    parse_four_sides(context, input, longhands::margin)
}

/// `padding`
pub fn parse_padding<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<Expansion, ParseError<'i>> {
    parse_four_sides(context, input, longhands::padding)
}

/// `border-color`
pub fn parse_border_color<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<Expansion, ParseError<'i>> {
    parse_four_sides(context, input, longhands::color)
}

/// `border-style`
pub fn parse_border_style<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<Expansion, ParseError<'i>> {
    parse_four_sides(context, input, longhands::border_style)
}

/// `border-width`
pub fn parse_border_width<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<Expansion, ParseError<'i>> {
    parse_four_sides(context, input, longhands::border_width)
}

/// Parses a `<line-width> || <line-style> || <color>` triple, returning
/// width, style and color.
fn parse_width_style_color<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<[PropertyValue; 3], ParseError<'i>> {
    let mut width = None;
    let mut style = None;
    let mut color = None;
    loop {
        if width.is_none() {
            if let Ok(value) = input.try_parse(|i| longhands::border_width(context, i)) {
                width = Some(value);
                continue;
            }
        }
        if style.is_none() {
            if let Ok(value) = input.try_parse(|i| longhands::border_style(context, i)) {
                style = Some(value);
                continue;
            }
        }
        if color.is_none() {
            if let Ok(value) = input.try_parse(|i| longhands::color(context, i)) {
                color = Some(value);
                continue;
            }
        }
        break;
    }
    if width.is_none() && style.is_none() && color.is_none() {
        return Err(input.new_custom_error(StyleParseErrorKind::UnspecifiedError));
    }
    Ok([
        width.unwrap_or_else(initial),
        style.unwrap_or_else(initial),
        color.unwrap_or_else(initial),
    ])
}

/// `border-top`, `border-right`, `border-bottom` and `border-left`
pub fn parse_border_side<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<Expansion, ParseError<'i>> {
    let [width, style, color] = parse_width_style_color(context, input)?;
    Ok(smallvec![width, style, color])
}

/// `border`: the same width, style and color on every side.
pub fn parse_border<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<Expansion, ParseError<'i>> {
    let [width, style, color] = parse_width_style_color(context, input)?;
    let mut expansion = Expansion::new();
    for value in [width, style, color] {
        for _ in 0..4 {
            expansion.push(value.clone());
        }
    }
    Ok(expansion)
}

/// `background`: color, image, position and repeat in any order. The size
/// can't be given through the shorthand.
pub fn parse_background<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<Expansion, ParseError<'i>> {
    let mut color = None;
    let mut image = None;
    let mut position = None;
    let mut repeat = None;
    loop {
        if color.is_none() {
            if let Ok(value) = input.try_parse(|i| longhands::color(context, i)) {
                color = Some(value);
                continue;
            }
        }
        if image.is_none() {
            if let Ok(value) = input.try_parse(|i| longhands::image(context, i)) {
                image = Some(value);
                continue;
            }
        }
        if position.is_none() {
            if let Ok(value) = input.try_parse(|i| longhands::background_position(context, i)) {
                position = Some(value);
                continue;
            }
        }
        if repeat.is_none() {
            if let Ok(value) = input.try_parse(|i| longhands::background_repeat(context, i)) {
                repeat = Some(value);
                continue;
            }
        }
        break;
    }
    if color.is_none() && image.is_none() && position.is_none() && repeat.is_none() {
        return Err(input.new_custom_error(StyleParseErrorKind::UnspecifiedError));
    }
    Ok(smallvec![
        color.unwrap_or_else(initial),
        image.unwrap_or_else(initial),
        position.unwrap_or_else(initial),
        repeat.unwrap_or_else(initial),
        initial(),
    ])
}

/// Serializes top, right, bottom and left values in their shortest form.
pub fn serialize_four_sides<W, I>(
    dest: &mut CssWriter<W>,
    top: &I,
    right: &I,
    bottom: &I,
    left: &I,
) -> fmt::Result
where
    W: Write,
    I: ToCss + PartialEq,
{
    if left == right {
        let horizontal_value = left;

        if top == bottom {
            let vertical_value = top;

            if horizontal_value == vertical_value {
                let single_value = horizontal_value;
                single_value.to_css(dest)?;
            } else {
                vertical_value.to_css(dest)?;
                dest.write_char(' ')?;

                horizontal_value.to_css(dest)?;
            }
        } else {
            top.to_css(dest)?;
            dest.write_char(' ')?;

            horizontal_value.to_css(dest)?;
            dest.write_char(' ')?;

            bottom.to_css(dest)?;
        }
    } else {
        top.to_css(dest)?;
        dest.write_char(' ')?;

        right.to_css(dest)?;
        dest.write_char(' ')?;

        bottom.to_css(dest)?;
        dest.write_char(' ')?;

        left.to_css(dest)?;
    }

    Ok(())
}

/// Four-sided shorthands. Sides set to `initial` alongside other values
/// can't be expressed, so nothing is written for them.
pub fn four_sides_to_css<W>(values: &[&PropertyValue], dest: &mut CssWriter<W>) -> fmt::Result
where
    W: Write,
{
    match *values {
        [top, right, bottom, left] if !values.iter().any(|v| v.is_initial()) => {
            serialize_four_sides(dest, top, right, bottom, left)
        },
        _ => Ok(()),
    }
}

/// Space-separated shorthands whose omitted components are `initial`.
pub fn sequence_to_css<W>(values: &[&PropertyValue], dest: &mut CssWriter<W>) -> fmt::Result
where
    W: Write,
{
    let mut writer = SequenceWriter::new(dest, " ");
    for value in values.iter().filter(|v| !v.is_initial()) {
        writer.item(value)?;
    }
    Ok(())
}

/// `border` can only be written when all four sides agree.
pub fn border_to_css<W>(values: &[&PropertyValue], dest: &mut CssWriter<W>) -> fmt::Result
where
    W: Write,
{
    if values.len() != 12 {
        return Ok(());
    }
    let sides_agree = values
        .chunks(4)
        .all(|group| group.iter().all(|v| *v == group[0]));
    if !sides_agree {
        return Ok(());
    }
    sequence_to_css(&[values[0], values[4], values[8]], dest)
}

/// `background`, as long as `background-size` is left at its initial value.
pub fn background_to_css<W>(values: &[&PropertyValue], dest: &mut CssWriter<W>) -> fmt::Result
where
    W: Write,
{
    match values.split_last() {
        Some((size, rest)) if size.is_initial() => sequence_to_css(rest, dest),
        _ => Ok(()),
    }
}
