/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! [Length values][length] and percentages.
//!
//! [length]: https://drafts.csswg.org/css-values/#lengths

use super::PropertyValue;
use crate::parser::{Parse, ParserContext};
use cssparser::{Parser, Token};
use std::fmt::{self, Write};
use style_traits::{CssWriter, ParseError, ParsingMode, StyleParseErrorKind, ToCss};

/// Whether a numeric value may be negative.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AllowedNumericType {
    /// Any value.
    All,
    /// Only zero or positive values.
    NonNegative,
}

impl AllowedNumericType {
    /// Whether `value` is acceptable in this context. Negative values pass
    /// anyway when the parsing mode allows all numeric values.
    #[inline]
    pub fn is_ok(&self, parsing_mode: ParsingMode, value: f32) -> bool {
        if parsing_mode.allows_all_numeric_values() {
            return true;
        }
        match *self {
            AllowedNumericType::All => true,
            AllowedNumericType::NonNegative => value >= 0.,
        }
    }
}

/// The units a `Length` may carry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LengthUnit {
    /// `px`
    Px,
    /// `em`
    Em,
    /// `rem`
    Rem,
}

impl LengthUnit {
    fn as_str(&self) -> &'static str {
        match *self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
        }
    }
}

/// A `<length>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    /// The numeric part.
    pub value: f32,
    /// The unit.
    pub unit: LengthUnit,
}

impl Length {
    /// A length in pixels.
    #[inline]
    pub fn from_px(px: f32) -> Self {
        Length {
            value: px,
            unit: LengthUnit::Px,
        }
    }

    /// Whether the numeric part is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0.
    }

    /// Parse a given dimension.
    pub fn parse_dimension(value: f32, unit: &str) -> Result<Self, ()> {
        let unit = cssparser::match_ignore_ascii_case! { unit,
            "px" => LengthUnit::Px,
            "em" => LengthUnit::Em,
            "rem" => LengthUnit::Rem,
            _ => return Err(()),
        };
        Ok(Length { value, unit })
    }

    fn parse_internal<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
        num_context: AllowedNumericType,
    ) -> Result<Self, ParseError<'i>> {
        let location = input.current_source_location();
        let token = input.next()?;
        match *token {
            Token::Dimension {
                value, ref unit, ..
            } if num_context.is_ok(context.parsing_mode, value) => {
                Length::parse_dimension(value, unit).map_err(|()| {
                    location.new_custom_error(StyleParseErrorKind::UnexpectedDimension(
                        unit.clone(),
                    ))
                })
            },
            Token::Number { value, .. } if num_context.is_ok(context.parsing_mode, value) => {
                if value != 0. && !context.parsing_mode.allows_unitless_lengths() {
                    return Err(location.new_custom_error(StyleParseErrorKind::UnspecifiedError));
                }
                Ok(Length::from_px(value))
            },
            ref token => Err(location.new_unexpected_token_error(token.clone())),
        }
    }

    /// Parse a non-negative length.
    #[inline]
    pub fn parse_non_negative<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        Self::parse_internal(context, input, AllowedNumericType::NonNegative)
    }
}

impl Parse for Length {
    fn parse<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        Self::parse_internal(context, input, AllowedNumericType::All)
    }
}

impl ToCss for Length {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        self.value.to_css(dest)?;
        dest.write_str(self.unit.as_str())
    }
}

/// A `<percentage>`, stored as a fraction so that `50%` is `0.5`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32);

impl ToCss for Percentage {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        (self.0 * 100.).to_css(dest)?;
        dest.write_char('%')
    }
}

/// Parses a `<length-percentage>` into a property value.
pub fn parse_length_or_percentage<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
    num_context: AllowedNumericType,
) -> Result<PropertyValue, ParseError<'i>> {
    let location = input.current_source_location();
    if let Ok(percentage) = input.try_parse(|i| -> Result<_, ParseError<'i>> {
        let unit_value = i.expect_percentage()?;
        if !num_context.is_ok(context.parsing_mode, unit_value) {
            return Err(location.new_custom_error(StyleParseErrorKind::UnspecifiedError));
        }
        Ok(Percentage(unit_value))
    }) {
        return Ok(PropertyValue::Percentage(percentage));
    }
    Length::parse_internal(context, input, num_context).map(PropertyValue::Length)
}

/// Parses a `<length>` into a property value.
pub fn parse_length<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
    num_context: AllowedNumericType,
) -> Result<PropertyValue, ParseError<'i>> {
    Length::parse_internal(context, input, num_context).map(PropertyValue::Length)
}
