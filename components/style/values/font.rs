/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Specified values for font properties.

use super::{Keyword, ListSeparator, PropertyValue, ValueList};
use crate::parser::{Parse, ParserContext};
use cssparser::Parser;
use std::fmt::{self, Write};
use style_traits::{Comma, CssWriter, ParseError, Separator, StyleParseErrorKind, ToCss};

/// A numeric font weight between 100 and 900.
///
/// <https://drafts.csswg.org/css-fonts-3/#font-weight-prop>
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// `normal`
    pub const NORMAL: FontWeight = FontWeight(400);
    /// `bold`
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Parse for FontWeight {
    fn parse<'i, 't>(
        _context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        if let Ok(weight) = input.try_parse(|i| i.expect_integer()) {
            if (100..=900).contains(&weight) && weight % 100 == 0 {
                return Ok(FontWeight(weight as u16));
            }
            return Err(input.new_custom_error(StyleParseErrorKind::UnspecifiedError));
        }

        try_match_ident_ignore_ascii_case! { input,
            "normal" => Ok(FontWeight::NORMAL),
            "bold" => Ok(FontWeight::BOLD),
        }
    }
}

impl ToCss for FontWeight {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        match *self {
            FontWeight::NORMAL => dest.write_str("normal"),
            FontWeight::BOLD => dest.write_str("bold"),
            FontWeight(weight) => write!(dest, "{}", weight),
        }
    }
}

const GENERIC_FAMILIES: &[Keyword] = &[
    Keyword::Cursive,
    Keyword::Fantasy,
    Keyword::Monospace,
    Keyword::SansSerif,
    Keyword::Serif,
];

/// Parses one entry of a font family list: a quoted name, a generic family
/// keyword, or a sequence of identifiers joined by single spaces.
pub fn parse_single_font_family<'i, 't>(
    input: &mut Parser<'i, 't>,
) -> Result<PropertyValue, ParseError<'i>> {
    if let Ok(value) = input.try_parse(PropertyValue::parse_string) {
        return Ok(value);
    }
    let first_ident = input.expect_ident_cloned()?;

    let mut value = String::from(&*first_ident);
    while let Ok(ident) = input.try_parse(|i| i.expect_ident_cloned()) {
        value.push(' ');
        value.push_str(&ident);
    }
    if value.len() == first_ident.len() {
        if let Ok(generic) = Keyword::from_ident(&first_ident) {
            if GENERIC_FAMILIES.contains(&generic) {
                return Ok(PropertyValue::Keyword(generic));
            }
        }
    }
    Ok(PropertyValue::String(value))
}

/// Parses a comma-separated `font-family` list.
pub fn parse_font_family_list<'i, 't>(
    input: &mut Parser<'i, 't>,
) -> Result<PropertyValue, ParseError<'i>> {
    let items = Comma::parse(input, parse_single_font_family)?;
    Ok(PropertyValue::List(ValueList {
        separator: ListSeparator::Comma,
        items,
    }))
}
