/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Value parsers for the supported longhands.
//!
//! CSS-wide keywords are handled by the caller, so none of these accept
//! `inherit`, `initial` or `unset`.

use crate::parser::{Parse, ParserContext};
use crate::values::color::parse_color;
use crate::values::font::parse_font_family_list;
use crate::values::length::{parse_length, parse_length_or_percentage};
use crate::values::{
    AllowedNumericType, FontWeight, Keyword, ListSeparator, PropertyValue, ValueList,
};
use cssparser::Parser;
use style_traits::ParseError;

type ParseResult<'i> = Result<PropertyValue, ParseError<'i>>;

/// `auto | <length-percentage>`, with the given numeric range.
fn auto_or_length_percentage<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
    num_context: AllowedNumericType,
) -> ParseResult<'i> {
    if let Ok(auto) = input.try_parse(|i| PropertyValue::parse_keyword(i, &[Keyword::Auto])) {
        return Ok(auto);
    }
    parse_length_or_percentage(context, input, num_context)
}

/// `<color>`
pub fn color<'i, 't>(context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    parse_color(context, input)
}

/// `none | <url>`
pub fn image<'i, 't>(_context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    if let Ok(none) = input.try_parse(|i| PropertyValue::parse_keyword(i, &[Keyword::None])) {
        return Ok(none);
    }
    PropertyValue::parse_url(input)
}

fn position_component<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    const KEYWORDS: &[Keyword] = &[
        Keyword::Left,
        Keyword::Center,
        Keyword::Right,
        Keyword::Top,
        Keyword::Bottom,
    ];
    if let Ok(keyword) = input.try_parse(|i| PropertyValue::parse_keyword(i, KEYWORDS)) {
        return Ok(keyword);
    }
    parse_length_or_percentage(context, input, AllowedNumericType::All)
}

/// `<position>`: one or two components.
pub fn background_position<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    let first = position_component(context, input)?;
    match input.try_parse(|i| position_component(context, i)) {
        Ok(second) => Ok(PropertyValue::List(ValueList {
            separator: ListSeparator::Space,
            items: vec![first, second],
        })),
        Err(_) => Ok(first),
    }
}

/// `repeat | repeat-x | repeat-y | no-repeat`
pub fn background_repeat<'i, 't>(
    _context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    PropertyValue::parse_keyword(
        input,
        &[
            Keyword::Repeat,
            Keyword::RepeatX,
            Keyword::RepeatY,
            Keyword::NoRepeat,
        ],
    )
}

/// `cover | contain | [ <length-percentage> | auto ]{1,2}`
pub fn background_size<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    if let Ok(keyword) =
        input.try_parse(|i| PropertyValue::parse_keyword(i, &[Keyword::Cover, Keyword::Contain]))
    {
        return Ok(keyword);
    }
    let width = auto_or_length_percentage(context, input, AllowedNumericType::NonNegative)?;
    match input
        .try_parse(|i| auto_or_length_percentage(context, i, AllowedNumericType::NonNegative))
    {
        Ok(height) => Ok(PropertyValue::List(ValueList {
            separator: ListSeparator::Space,
            items: vec![width, height],
        })),
        Err(_) => Ok(width),
    }
}

/// `none | hidden | dotted | dashed | solid | double`
pub fn border_style<'i, 't>(
    _context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    PropertyValue::parse_keyword(
        input,
        &[
            Keyword::None,
            Keyword::Hidden,
            Keyword::Dotted,
            Keyword::Dashed,
            Keyword::Solid,
            Keyword::Double,
        ],
    )
}

/// `thin | medium | thick | <length>`
pub fn border_width<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    if let Ok(keyword) = input.try_parse(|i| {
        PropertyValue::parse_keyword(i, &[Keyword::Thin, Keyword::Medium, Keyword::Thick])
    }) {
        return Ok(keyword);
    }
    parse_length(context, input, AllowedNumericType::NonNegative)
}

/// `<length-percentage>`
pub fn border_radius<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    parse_length_or_percentage(context, input, AllowedNumericType::NonNegative)
}

/// `auto | <length-percentage>` for `top`, `right`, `bottom` and `left`.
pub fn inset<'i, 't>(context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    auto_or_length_percentage(context, input, AllowedNumericType::All)
}

/// `normal | none | <string> | <url>`
pub fn content<'i, 't>(_context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    if let Ok(keyword) =
        input.try_parse(|i| PropertyValue::parse_keyword(i, &[Keyword::Normal, Keyword::None]))
    {
        return Ok(keyword);
    }
    if let Ok(string) = input.try_parse(PropertyValue::parse_string) {
        return Ok(string);
    }
    PropertyValue::parse_url(input)
}

/// `block | inline | inline-block | none`
pub fn display<'i, 't>(_context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    PropertyValue::parse_keyword(
        input,
        &[
            Keyword::Block,
            Keyword::Inline,
            Keyword::InlineBlock,
            Keyword::None,
        ],
    )
}

/// `<family-name>#`
pub fn font_family<'i, 't>(
    _context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    parse_font_family_list(input)
}

/// `<length-percentage>`, non-negative.
pub fn font_size<'i, 't>(context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    parse_length_or_percentage(context, input, AllowedNumericType::NonNegative)
}

/// `normal | italic | oblique`
pub fn font_style<'i, 't>(
    _context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    PropertyValue::parse_keyword(
        input,
        &[Keyword::Normal, Keyword::Italic, Keyword::Oblique],
    )
}

/// `normal | bold | 100 | ... | 900`
pub fn font_weight<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    FontWeight::parse(context, input).map(PropertyValue::FontWeight)
}

/// `auto | <length-percentage>`, non-negative, for `width` and `height`.
pub fn size<'i, 't>(context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    auto_or_length_percentage(context, input, AllowedNumericType::NonNegative)
}

/// `normal | <number> | <length-percentage>`
pub fn line_height<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    if let Ok(normal) = input.try_parse(|i| PropertyValue::parse_keyword(i, &[Keyword::Normal])) {
        return Ok(normal);
    }
    if let Ok(number) = input.try_parse(|i| {
        PropertyValue::parse_number(context, i, AllowedNumericType::NonNegative)
    }) {
        return Ok(number);
    }
    parse_length_or_percentage(context, input, AllowedNumericType::NonNegative)
}

/// `auto | <length-percentage>`
pub fn margin<'i, 't>(context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    auto_or_length_percentage(context, input, AllowedNumericType::All)
}

/// `none | <length-percentage>`, non-negative.
pub fn max_size<'i, 't>(context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    if let Ok(none) = input.try_parse(|i| PropertyValue::parse_keyword(i, &[Keyword::None])) {
        return Ok(none);
    }
    parse_length_or_percentage(context, input, AllowedNumericType::NonNegative)
}

/// `auto | <length-percentage>`, non-negative.
pub fn min_size<'i, 't>(context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    auto_or_length_percentage(context, input, AllowedNumericType::NonNegative)
}

/// `<number>`
pub fn opacity<'i, 't>(context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    PropertyValue::parse_number(context, input, AllowedNumericType::All)
}

/// `visible | hidden | auto`
pub fn overflow<'i, 't>(_context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    PropertyValue::parse_keyword(input, &[Keyword::Visible, Keyword::Hidden, Keyword::Auto])
}

/// `normal | break-word`
pub fn overflow_wrap<'i, 't>(
    _context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    PropertyValue::parse_keyword(input, &[Keyword::Normal, Keyword::BreakWord])
}

/// `<length-percentage>`, non-negative.
pub fn padding<'i, 't>(context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    parse_length_or_percentage(context, input, AllowedNumericType::NonNegative)
}

/// `static | relative | absolute | fixed`
pub fn position<'i, 't>(_context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    PropertyValue::parse_keyword(
        input,
        &[
            Keyword::Static,
            Keyword::Relative,
            Keyword::Absolute,
            Keyword::Fixed,
        ],
    )
}

/// `<integer> | <length>`, non-negative.
pub fn tab_size<'i, 't>(context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    if let Ok(integer) = input.try_parse(|i| {
        PropertyValue::parse_integer(context, i, AllowedNumericType::NonNegative)
    }) {
        return Ok(integer);
    }
    parse_length(context, input, AllowedNumericType::NonNegative)
}

/// `left | right | center | start | end`
pub fn text_align<'i, 't>(
    _context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    PropertyValue::parse_keyword(
        input,
        &[
            Keyword::Left,
            Keyword::Right,
            Keyword::Center,
            Keyword::Start,
            Keyword::End,
        ],
    )
}

/// `<length-percentage>`
pub fn text_indent<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    parse_length_or_percentage(context, input, AllowedNumericType::All)
}

/// `clip | ellipsis`
pub fn text_overflow<'i, 't>(
    _context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    PropertyValue::parse_keyword(input, &[Keyword::Clip, Keyword::Ellipsis])
}

/// `none | uppercase`
pub fn text_transform<'i, 't>(
    _context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    PropertyValue::parse_keyword(input, &[Keyword::None, Keyword::Uppercase])
}

/// `baseline | middle | top | bottom`
pub fn vertical_align<'i, 't>(
    _context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    PropertyValue::parse_keyword(
        input,
        &[
            Keyword::Baseline,
            Keyword::Middle,
            Keyword::Top,
            Keyword::Bottom,
        ],
    )
}

/// `visible | hidden`
pub fn visibility<'i, 't>(
    _context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    PropertyValue::parse_keyword(input, &[Keyword::Visible, Keyword::Hidden])
}

/// `normal | pre | nowrap`
pub fn white_space<'i, 't>(
    _context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> ParseResult<'i> {
    PropertyValue::parse_keyword(input, &[Keyword::Normal, Keyword::Pre, Keyword::Nowrap])
}

/// `auto | <integer>`
pub fn z_index<'i, 't>(context: &ParserContext, input: &mut Parser<'i, 't>) -> ParseResult<'i> {
    if let Ok(auto) = input.try_parse(|i| PropertyValue::parse_keyword(i, &[Keyword::Auto])) {
        return Ok(auto);
    }
    PropertyValue::parse_integer(context, input, AllowedNumericType::All)
}
