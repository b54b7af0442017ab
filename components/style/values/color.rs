/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Specified color values.

use super::{Keyword, PropertyValue};
use crate::parser::{Parse, ParserContext};
use cssparser::{Parser, Token};
use std::fmt::{self, Write};
use style_traits::{CssWriter, ParseError, StyleParseErrorKind, ToCss, ValueParseErrorKind};

/// An sRGB color with an alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGBA {
    /// The red component.
    pub red: u8,
    /// The green component.
    pub green: u8,
    /// The blue component.
    pub blue: u8,
    /// The alpha component, between zero and one.
    pub alpha: f32,
}

impl RGBA {
    /// Constructs a new color.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        RGBA {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Returns a transparent color.
    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0.)
    }
}

impl ToCss for RGBA {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        let has_alpha = self.alpha != 1.;
        dest.write_str(if has_alpha { "rgba(" } else { "rgb(" })?;
        write!(dest, "{}, {}, {}", self.red, self.green, self.blue)?;
        if has_alpha {
            dest.write_str(", ")?;
            self.alpha.to_css(dest)?;
        }
        dest.write_char(')')
    }
}

/// A specified `<color>` other than `currentcolor`.
///
/// Named colors remember the name they were written with, so that they
/// serialize back the way the author wrote them.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    /// The parsed color.
    pub rgba: RGBA,
    /// The authored keyword, if any.
    pub authored: Option<Box<str>>,
}

impl Color {
    /// A color with no authored name.
    #[inline]
    pub fn from_rgba(rgba: RGBA) -> Self {
        Color {
            rgba,
            authored: None,
        }
    }

    fn invalid<'i>(
        location: cssparser::SourceLocation,
        token: Token<'i>,
    ) -> ParseError<'i> {
        location.new_custom_error(StyleParseErrorKind::ValueError(
            ValueParseErrorKind::InvalidColor(token),
        ))
    }

    fn parse_channel<'i, 't>(input: &mut Parser<'i, 't>) -> Result<u8, ParseError<'i>> {
        let location = input.current_source_location();
        match *input.next()? {
            Token::Number {
                int_value: Some(v), ..
            } => Ok(v.clamp(0, 255) as u8),
            Token::Percentage { unit_value, .. } => {
                Ok((unit_value.clamp(0., 1.) * 255.).round() as u8)
            },
            ref t => Err(Self::invalid(location, t.clone())),
        }
    }

    fn parse_alpha<'i, 't>(input: &mut Parser<'i, 't>) -> Result<f32, ParseError<'i>> {
        let location = input.current_source_location();
        match *input.next()? {
            Token::Number { value, .. } => Ok(value.clamp(0., 1.)),
            Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0., 1.)),
            ref t => Err(Self::invalid(location, t.clone())),
        }
    }

    fn parse_rgb_function<'i, 't>(
        input: &mut Parser<'i, 't>,
        with_alpha: bool,
    ) -> Result<RGBA, ParseError<'i>> {
        let red = Self::parse_channel(input)?;
        input.expect_comma()?;
        let green = Self::parse_channel(input)?;
        input.expect_comma()?;
        let blue = Self::parse_channel(input)?;
        let alpha = if with_alpha {
            input.expect_comma()?;
            Self::parse_alpha(input)?
        } else {
            1.
        };
        Ok(RGBA::new(red, green, blue, alpha))
    }
}

impl Parse for Color {
    fn parse<'i, 't>(
        _context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let location = input.current_source_location();
        let token = input.next()?.clone();
        match token {
            Token::Hash(ref value) | Token::IDHash(ref value) => {
                cssparser::color::parse_hash_color(value.as_bytes())
                    .map(|(r, g, b, a)| Color::from_rgba(RGBA::new(r, g, b, a)))
                    .map_err(|()| Self::invalid(location, token.clone()))
            },
            Token::Ident(ref ident) => {
                if ident.eq_ignore_ascii_case("transparent") {
                    return Ok(Color {
                        rgba: RGBA::transparent(),
                        authored: Some("transparent".into()),
                    });
                }
                cssparser::color::parse_named_color(ident)
                    .map(|(r, g, b)| Color {
                        rgba: RGBA::new(r, g, b, 1.),
                        authored: Some(ident.to_ascii_lowercase().into_boxed_str()),
                    })
                    .map_err(|()| Self::invalid(location, token.clone()))
            },
            Token::Function(ref name) => {
                let with_alpha = cssparser::match_ignore_ascii_case! { name,
                    "rgb" => false,
                    "rgba" => true,
                    _ => return Err(location.new_custom_error(
                        StyleParseErrorKind::UnexpectedFunction(name.clone())
                    )),
                };
                input
                    .parse_nested_block(|i| Self::parse_rgb_function(i, with_alpha))
                    .map(Color::from_rgba)
            },
            t => Err(Self::invalid(location, t)),
        }
    }
}

impl ToCss for Color {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        match self.authored {
            Some(ref name) => dest.write_str(name),
            None => self.rgba.to_css(dest),
        }
    }
}

/// Parses a `<color>` into a property value, mapping `currentcolor` to its
/// keyword.
pub fn parse_color<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<PropertyValue, ParseError<'i>> {
    if input
        .try_parse(|i| i.expect_ident_matching("currentcolor"))
        .is_ok()
    {
        return Ok(PropertyValue::Keyword(Keyword::CurrentColor));
    }
    Color::parse(context, input).map(PropertyValue::Color)
}
