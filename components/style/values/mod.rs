/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Specified values.
//!
//! A `PropertyValue` is what the parser produces for one longhand: an
//! immutable value that the declared style store shares, compares and
//! serializes but never looks into.

use crate::parser::ParserContext;
use cssparser::{Parser, Token};
use servo_arc::Arc;
use std::fmt::{self, Write};
use style_traits::{
    Comma, CssWriter, ParseError, SequenceWriter, Separator, Space, StyleParseErrorKind, ToCss,
};

pub mod color;
pub mod font;
pub mod length;

pub use self::color::{Color, RGBA};
pub use self::font::FontWeight;
pub use self::length::{AllowedNumericType, Length, LengthUnit, Percentage};

/// A property value shared between declaration blocks and their readers.
pub type SharedValue = Arc<PropertyValue>;

define_css_keyword_enum! {
    /// Every identifier keyword accepted by the supported properties.
    pub enum Keyword {
        Absolute => "absolute",
        Auto => "auto",
        Baseline => "baseline",
        Block => "block",
        Bottom => "bottom",
        BreakWord => "break-word",
        Center => "center",
        Clip => "clip",
        Contain => "contain",
        Cover => "cover",
        CurrentColor => "currentcolor",
        Cursive => "cursive",
        Dashed => "dashed",
        Dotted => "dotted",
        Double => "double",
        Ellipsis => "ellipsis",
        End => "end",
        Fantasy => "fantasy",
        Fixed => "fixed",
        Hidden => "hidden",
        Inherit => "inherit",
        Initial => "initial",
        Inline => "inline",
        InlineBlock => "inline-block",
        Italic => "italic",
        Left => "left",
        Medium => "medium",
        Middle => "middle",
        Monospace => "monospace",
        NoRepeat => "no-repeat",
        None => "none",
        Normal => "normal",
        Nowrap => "nowrap",
        Oblique => "oblique",
        Pre => "pre",
        Relative => "relative",
        Repeat => "repeat",
        RepeatX => "repeat-x",
        RepeatY => "repeat-y",
        Right => "right",
        SansSerif => "sans-serif",
        Serif => "serif",
        Solid => "solid",
        Start => "start",
        Static => "static",
        Thick => "thick",
        Thin => "thin",
        Top => "top",
        Unset => "unset",
        Uppercase => "uppercase",
        Visible => "visible",
    }
}

impl Keyword {
    /// Whether this is one of the keywords every property accepts.
    ///
    /// <https://drafts.csswg.org/css-cascade/#defaulting-keywords>
    #[inline]
    pub fn is_css_wide(&self) -> bool {
        matches!(*self, Keyword::Inherit | Keyword::Initial | Keyword::Unset)
    }

    /// Parses a CSS-wide keyword that makes up the whole of the input.
    pub fn parse_css_wide<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Self, ParseError<'i>> {
        let keyword =
            Keyword::parse_one_of(input, &[Keyword::Inherit, Keyword::Initial, Keyword::Unset])?;
        input.expect_exhausted()?;
        Ok(keyword)
    }

    /// Parses one identifier out of `allowed`.
    pub fn parse_one_of<'i, 't>(
        input: &mut Parser<'i, 't>,
        allowed: &[Keyword],
    ) -> Result<Self, ParseError<'i>> {
        let location = input.current_source_location();
        let ident = input.expect_ident()?;
        match Keyword::from_ident(ident) {
            Ok(keyword) if allowed.contains(&keyword) => Ok(keyword),
            _ => Err(location.new_unexpected_token_error(Token::Ident(ident.clone()))),
        }
    }
}

/// How the items of a `ValueList` are separated when serialized.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListSeparator {
    /// `a b c`
    Space,
    /// `a, b, c`
    Comma,
}

/// An ordered list of values, such as a font family list or a
/// two-component background position.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueList {
    /// The separator used when serializing.
    pub separator: ListSeparator,
    /// The items, in source order.
    pub items: Vec<PropertyValue>,
}

/// A specified value for a single longhand.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// An identifier keyword, including the CSS-wide keywords.
    Keyword(Keyword),
    /// `<length>`
    Length(Length),
    /// `<percentage>`
    Percentage(Percentage),
    /// `<number>`
    Number(f32),
    /// `<integer>`
    Integer(i32),
    /// `<color>`
    Color(Color),
    /// A quoted string, or a font family name.
    String(String),
    /// `url(...)`
    Url(String),
    /// A numeric font weight.
    FontWeight(FontWeight),
    /// A list of values.
    List(ValueList),
}

impl PropertyValue {
    /// Returns the keyword if this is a keyword value.
    #[inline]
    pub fn as_keyword(&self) -> Option<Keyword> {
        match *self {
            PropertyValue::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// Whether this is the `initial` keyword.
    #[inline]
    pub fn is_initial(&self) -> bool {
        self.as_keyword() == Some(Keyword::Initial)
    }

    /// Whether this is `inherit`, `initial` or `unset`.
    #[inline]
    pub fn is_css_wide_keyword(&self) -> bool {
        self.as_keyword().is_some_and(|k| k.is_css_wide())
    }

    /// Parses an identifier out of `allowed` as a keyword value.
    pub fn parse_keyword<'i, 't>(
        input: &mut Parser<'i, 't>,
        allowed: &[Keyword],
    ) -> Result<Self, ParseError<'i>> {
        Keyword::parse_one_of(input, allowed).map(PropertyValue::Keyword)
    }

    /// Parses `url(...)`, in either its unquoted or function form.
    pub fn parse_url<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Self, ParseError<'i>> {
        let url = input.expect_url_or_string()?;
        Ok(PropertyValue::Url(String::from(&*url)))
    }

    /// Parses a quoted string.
    pub fn parse_string<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Self, ParseError<'i>> {
        let string = input.expect_string()?;
        Ok(PropertyValue::String(String::from(&**string)))
    }

    /// Parses a `<number>`, rejecting negative numbers unless the parsing
    /// mode allows them.
    pub fn parse_number<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
        num_type: AllowedNumericType,
    ) -> Result<Self, ParseError<'i>> {
        let location = input.current_source_location();
        let value = input.expect_number()?;
        if !num_type.is_ok(context.parsing_mode, value) {
            return Err(location.new_custom_error(StyleParseErrorKind::UnspecifiedError));
        }
        Ok(PropertyValue::Number(value))
    }

    /// Parses an `<integer>`, rejecting negative integers unless the
    /// parsing mode allows them.
    pub fn parse_integer<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
        num_type: AllowedNumericType,
    ) -> Result<Self, ParseError<'i>> {
        let location = input.current_source_location();
        let value = input.expect_integer()?;
        if !num_type.is_ok(context.parsing_mode, value as f32) {
            return Err(location.new_custom_error(StyleParseErrorKind::UnspecifiedError));
        }
        Ok(PropertyValue::Integer(value))
    }
}

impl ToCss for ValueList {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        let separator = match self.separator {
            ListSeparator::Space => Space::separator(),
            ListSeparator::Comma => Comma::separator(),
        };
        let mut writer = SequenceWriter::new(dest, separator);
        for item in &self.items {
            writer.item(item)?;
        }
        Ok(())
    }
}

impl ToCss for PropertyValue {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        match *self {
            PropertyValue::Keyword(ref keyword) => keyword.to_css(dest),
            PropertyValue::Length(ref length) => length.to_css(dest),
            PropertyValue::Percentage(ref percentage) => percentage.to_css(dest),
            PropertyValue::Number(ref number) => number.to_css(dest),
            PropertyValue::Integer(ref integer) => integer.to_css(dest),
            PropertyValue::Color(ref color) => color.to_css(dest),
            PropertyValue::String(ref string) => string.to_css(dest),
            PropertyValue::Url(ref url) => {
                dest.write_str("url(")?;
                url.to_css(dest)?;
                dest.write_char(')')
            },
            PropertyValue::FontWeight(ref weight) => weight.to_css(dest),
            PropertyValue::List(ref list) => list.to_css(dest),
        }
    }
}
