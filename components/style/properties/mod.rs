/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Supported CSS properties and the declared style store.
//!
//! The property table is generated by `property_table!` from a single list:
//! every longhand gets a key in `[1, MAX_LONGHAND_PROPERTY_KEY]`, in
//! alphabetical order of its name, and the shorthands follow. Key order is
//! also the order in which a declaration block serializes.

use crate::parser::ParserContext;
use crate::values::{Keyword, PropertyValue, SharedValue};
use cssparser::Parser;
use smallvec::SmallVec;
use std::fmt::{self, Write};
use style_traits::{CssWriter, ParseError, StyleParseErrorKind, ToCss};

pub mod declaration_block;
mod longhands;
mod shorthands;

pub use self::declaration_block::{
    parse_one_declaration_into, parse_property_declaration_list, parse_style_attribute,
    DeclaredStyleData, Importance,
};

/// The most longhands a single shorthand expands to (`border`).
pub const MAX_SHORTHAND_EXPANDED: usize = 12;

/// The values a shorthand parser produces, one per longhand in expansion
/// order.
pub type Expansion = SmallVec<[PropertyValue; MAX_SHORTHAND_EXPANDED]>;

macro_rules! property_table {
    (@pref) => { None };
    (@pref $pref:tt) => { Some($pref) };
    (
        longhands {
            $(
                $l_variant:ident: $l_name:tt,
                inherited = $inherited:tt,
                parse = $l_parse:path
                $(, pref = $pref:tt)?;
            )+
        }
        shorthands {
            $(
                $s_variant:ident: $s_name:tt => [ $( $sub:ident ),+ ],
                parse = $s_parse:path,
                serialize = $s_serialize:path;
            )+
        }
        aliases {
            $( $alias:tt => $target:ident, )*
        }
    ) => {
        /// An identifier for a supported CSS property.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[repr(u16)]
        pub enum PropertyKey {
            /// The "no property" sentinel.
            None = 0,
            $(
                #[doc = concat!("`", $l_name, "`")]
                $l_variant,
            )+
            $(
                #[doc = concat!("`", $s_name, "` (shorthand)")]
                $s_variant,
            )+
        }

        const LONGHAND_KEYS: &[PropertyKey] = &[ $( PropertyKey::$l_variant, )+ ];
        const SHORTHAND_KEYS: &[PropertyKey] = &[ $( PropertyKey::$s_variant, )+ ];

        impl PropertyKey {
            /// The CSS name of this property.
            ///
            /// Panics for `PropertyKey::None`.
            #[track_caller]
            pub fn name(self) -> &'static str {
                match self {
                    PropertyKey::None => panic!("PropertyKey::None has no name"),
                    $( PropertyKey::$l_variant => $l_name, )+
                    $( PropertyKey::$s_variant => $s_name, )+
                }
            }

            /// The longhands this shorthand expands to, in canonical order.
            ///
            /// Panics if `self` is not a shorthand.
            #[track_caller]
            pub fn expand_shorthand(self) -> &'static [PropertyKey] {
                match self {
                    $( PropertyKey::$s_variant => &[ $( PropertyKey::$sub ),+ ], )+
                    _ => panic!("{:?} is not a shorthand", self),
                }
            }

            /// Whether this longhand is inherited by default.
            pub fn inherited(self) -> bool {
                match self {
                    $( PropertyKey::$l_variant => $inherited, )+
                    _ => false,
                }
            }

            /// The preference that needs to be set for this longhand to be
            /// parsed, if any.
            pub fn pref(self) -> Option<&'static str> {
                match self {
                    $( PropertyKey::$l_variant => property_table!(@pref $($pref)?), )+
                    _ => None,
                }
            }

            /// Looks up a property by name, ignoring ASCII case.
            pub fn from_name(name: &str) -> Option<Self> {
                cssparser::match_ignore_ascii_case! { name,
                    $( $l_name => Some(PropertyKey::$l_variant), )+
                    $( $s_name => Some(PropertyKey::$s_variant), )+
                    $( $alias => Some(PropertyKey::$target), )*
                    _ => None,
                }
            }

            /// Parses a value for this property and pushes the longhand
            /// declarations it expands to.
            ///
            /// The whole input must be consumed. Nothing is pushed on error.
            pub fn parse_into<'i, 't>(
                self,
                declarations: &mut SourcePropertyDeclaration,
                context: &ParserContext,
                input: &mut Parser<'i, 't>,
            ) -> Result<(), ParseError<'i>> {
                if self == PropertyKey::None {
                    return Err(input.new_custom_error(StyleParseErrorKind::UnspecifiedError));
                }
                if let Ok(keyword) = input.try_parse(Keyword::parse_css_wide) {
                    let value = SharedValue::new(PropertyValue::Keyword(keyword));
                    if self.is_shorthand() {
                        for &longhand in self.expand_shorthand() {
                            declarations.push(longhand, value.clone());
                        }
                    } else {
                        declarations.push(self, value);
                    }
                    return Ok(());
                }

                match self {
                    PropertyKey::None => unreachable!(),
                    $(
                        PropertyKey::$l_variant => {
                            let value = input.parse_entirely(|i| $l_parse(context, i))?;
                            declarations.push(self, SharedValue::new(value));
                            Ok(())
                        },
                    )+
                    $(
                        PropertyKey::$s_variant => {
                            let values = input.parse_entirely(|i| $s_parse(context, i))?;
                            let longhands = self.expand_shorthand();
                            debug_assert_eq!(values.len(), longhands.len());
                            for (&longhand, value) in longhands.iter().zip(values) {
                                declarations.push(longhand, SharedValue::new(value));
                            }
                            Ok(())
                        },
                    )+
                }
            }

            /// Serializes a complete set of longhand values as this shorthand.
            ///
            /// `values` are in expansion order. Writes nothing when the values
            /// can't be represented by the shorthand.
            pub(crate) fn shorthand_values_to_css<W>(
                self,
                values: &[&PropertyValue],
                dest: &mut CssWriter<W>,
            ) -> fmt::Result
            where
                W: Write,
            {
                match self {
                    $( PropertyKey::$s_variant => $s_serialize(values, dest), )+
                    _ => Ok(()),
                }
            }
        }

        /// Property counts.
        pub mod property_counts {
            /// The number of longhands.
            pub const LONGHANDS: usize = super::LONGHAND_KEYS.len();
            /// The number of shorthands.
            pub const SHORTHANDS: usize = super::SHORTHAND_KEYS.len();
        }
    };
}

property_table! {
    longhands {
        BackgroundColor: "background-color", inherited = false, parse = longhands::color;
        BackgroundImage: "background-image", inherited = false, parse = longhands::image;
        BackgroundPosition: "background-position", inherited = false,
            parse = longhands::background_position;
        BackgroundRepeat: "background-repeat", inherited = false,
            parse = longhands::background_repeat;
        BackgroundSize: "background-size", inherited = false, parse = longhands::background_size;
        BorderBottomColor: "border-bottom-color", inherited = false, parse = longhands::color;
        BorderBottomStyle: "border-bottom-style", inherited = false,
            parse = longhands::border_style;
        BorderBottomWidth: "border-bottom-width", inherited = false,
            parse = longhands::border_width;
        BorderLeftColor: "border-left-color", inherited = false, parse = longhands::color;
        BorderLeftStyle: "border-left-style", inherited = false, parse = longhands::border_style;
        BorderLeftWidth: "border-left-width", inherited = false, parse = longhands::border_width;
        BorderRadius: "border-radius", inherited = false, parse = longhands::border_radius;
        BorderRightColor: "border-right-color", inherited = false, parse = longhands::color;
        BorderRightStyle: "border-right-style", inherited = false,
            parse = longhands::border_style;
        BorderRightWidth: "border-right-width", inherited = false,
            parse = longhands::border_width;
        BorderTopColor: "border-top-color", inherited = false, parse = longhands::color;
        BorderTopStyle: "border-top-style", inherited = false, parse = longhands::border_style;
        BorderTopWidth: "border-top-width", inherited = false, parse = longhands::border_width;
        Bottom: "bottom", inherited = false, parse = longhands::inset;
        Color: "color", inherited = true, parse = longhands::color;
        Content: "content", inherited = false, parse = longhands::content;
        Display: "display", inherited = false, parse = longhands::display;
        FontFamily: "font-family", inherited = true, parse = longhands::font_family;
        FontSize: "font-size", inherited = true, parse = longhands::font_size;
        FontStyle: "font-style", inherited = true, parse = longhands::font_style;
        FontWeight: "font-weight", inherited = true, parse = longhands::font_weight;
        Height: "height", inherited = false, parse = longhands::size;
        Left: "left", inherited = false, parse = longhands::inset;
        LineHeight: "line-height", inherited = true, parse = longhands::line_height;
        MarginBottom: "margin-bottom", inherited = false, parse = longhands::margin;
        MarginLeft: "margin-left", inherited = false, parse = longhands::margin;
        MarginRight: "margin-right", inherited = false, parse = longhands::margin;
        MarginTop: "margin-top", inherited = false, parse = longhands::margin;
        MaxHeight: "max-height", inherited = false, parse = longhands::max_size;
        MaxWidth: "max-width", inherited = false, parse = longhands::max_size;
        MinHeight: "min-height", inherited = false, parse = longhands::min_size;
        MinWidth: "min-width", inherited = false, parse = longhands::min_size;
        Opacity: "opacity", inherited = false, parse = longhands::opacity;
        Overflow: "overflow", inherited = false, parse = longhands::overflow;
        OverflowWrap: "overflow-wrap", inherited = true, parse = longhands::overflow_wrap;
        PaddingBottom: "padding-bottom", inherited = false, parse = longhands::padding;
        PaddingLeft: "padding-left", inherited = false, parse = longhands::padding;
        PaddingRight: "padding-right", inherited = false, parse = longhands::padding;
        PaddingTop: "padding-top", inherited = false, parse = longhands::padding;
        Position: "position", inherited = false, parse = longhands::position;
        Right: "right", inherited = false, parse = longhands::inset;
        TabSize: "tab-size", inherited = true, parse = longhands::tab_size;
        TextAlign: "text-align", inherited = true, parse = longhands::text_align;
        TextIndent: "text-indent", inherited = true, parse = longhands::text_indent;
        TextOverflow: "text-overflow", inherited = false, parse = longhands::text_overflow,
            pref = "layout.css.text-overflow.enabled";
        TextTransform: "text-transform", inherited = true, parse = longhands::text_transform;
        Top: "top", inherited = false, parse = longhands::inset;
        VerticalAlign: "vertical-align", inherited = false, parse = longhands::vertical_align;
        Visibility: "visibility", inherited = true, parse = longhands::visibility;
        WhiteSpace: "white-space", inherited = true, parse = longhands::white_space;
        Width: "width", inherited = false, parse = longhands::size;
        ZIndex: "z-index", inherited = false, parse = longhands::z_index;
    }
    shorthands {
        Background: "background" => [
            BackgroundColor, BackgroundImage, BackgroundPosition, BackgroundRepeat, BackgroundSize
        ], parse = shorthands::parse_background, serialize = shorthands::background_to_css;
        BorderColor: "border-color" => [
            BorderTopColor, BorderRightColor, BorderBottomColor, BorderLeftColor
        ], parse = shorthands::parse_border_color, serialize = shorthands::four_sides_to_css;
        BorderStyle: "border-style" => [
            BorderTopStyle, BorderRightStyle, BorderBottomStyle, BorderLeftStyle
        ], parse = shorthands::parse_border_style, serialize = shorthands::four_sides_to_css;
        BorderWidth: "border-width" => [
            BorderTopWidth, BorderRightWidth, BorderBottomWidth, BorderLeftWidth
        ], parse = shorthands::parse_border_width, serialize = shorthands::four_sides_to_css;
        BorderTop: "border-top" => [BorderTopWidth, BorderTopStyle, BorderTopColor],
            parse = shorthands::parse_border_side, serialize = shorthands::sequence_to_css;
        BorderRight: "border-right" => [BorderRightWidth, BorderRightStyle, BorderRightColor],
            parse = shorthands::parse_border_side, serialize = shorthands::sequence_to_css;
        BorderBottom: "border-bottom" => [BorderBottomWidth, BorderBottomStyle, BorderBottomColor],
            parse = shorthands::parse_border_side, serialize = shorthands::sequence_to_css;
        BorderLeft: "border-left" => [BorderLeftWidth, BorderLeftStyle, BorderLeftColor],
            parse = shorthands::parse_border_side, serialize = shorthands::sequence_to_css;
        Border: "border" => [
            BorderTopWidth, BorderRightWidth, BorderBottomWidth, BorderLeftWidth,
            BorderTopStyle, BorderRightStyle, BorderBottomStyle, BorderLeftStyle,
            BorderTopColor, BorderRightColor, BorderBottomColor, BorderLeftColor
        ], parse = shorthands::parse_border, serialize = shorthands::border_to_css;
        Margin: "margin" => [MarginTop, MarginRight, MarginBottom, MarginLeft],
            parse = shorthands::parse_margin, serialize = shorthands::four_sides_to_css;
        Padding: "padding" => [PaddingTop, PaddingRight, PaddingBottom, PaddingLeft],
            parse = shorthands::parse_padding, serialize = shorthands::four_sides_to_css;
    }
    aliases {
        "word-wrap" => OverflowWrap,
    }
}

/// The largest longhand key.
pub const MAX_LONGHAND_PROPERTY_KEY: usize = property_counts::LONGHANDS;

impl PropertyKey {
    /// Whether this is a longhand.
    #[inline]
    pub fn is_longhand(self) -> bool {
        let index = self as usize;
        index >= 1 && index <= MAX_LONGHAND_PROPERTY_KEY
    }

    /// Whether this is a shorthand.
    #[inline]
    pub fn is_shorthand(self) -> bool {
        self as usize > MAX_LONGHAND_PROPERTY_KEY
    }

    /// Returns the key whose integer value is `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index == 0 {
            return Some(PropertyKey::None);
        }
        if index <= MAX_LONGHAND_PROPERTY_KEY {
            return Some(LONGHAND_KEYS[index - 1]);
        }
        SHORTHAND_KEYS
            .get(index - MAX_LONGHAND_PROPERTY_KEY - 1)
            .copied()
    }

    /// Returns whether this property can be parsed, which is only false when
    /// the property is behind a preference that is turned off. A shorthand is
    /// enabled when all its longhands are.
    pub fn enabled(self) -> bool {
        if self.is_shorthand() {
            return self.expand_shorthand().iter().all(|l| l.enabled());
        }
        match self.pref() {
            Some(pref) => style_config::get_bool(pref),
            None => true,
        }
    }

    #[track_caller]
    pub(crate) fn assert_longhand(self) {
        assert!(
            self.is_longhand(),
            "{:?} is not a longhand property key",
            self
        );
    }
}

impl ToCss for PropertyKey {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str(self.name())
    }
}

/// A set of longhand properties
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct LonghandIdSet {
    storage: [u32; (MAX_LONGHAND_PROPERTY_KEY + 1 + 31) / 32],
}

impl LonghandIdSet {
    /// Return an empty LonghandIdSet.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: Default::default(),
        }
    }

    /// Iterate over the current longhand id set, in ascending key order.
    pub fn iter(&self) -> LonghandIdSetIterator {
        LonghandIdSetIterator {
            longhands: self,
            cur: 1,
        }
    }

    /// Return whether the given property is in the set
    #[inline]
    pub fn contains(&self, id: PropertyKey) -> bool {
        let bit = id as usize;
        match self.storage.get(bit / 32) {
            Some(cell) => (cell & (1 << (bit % 32))) != 0,
            None => false,
        }
    }

    /// Add the given property to the set
    #[inline]
    #[track_caller]
    pub fn insert(&mut self, id: PropertyKey) {
        id.assert_longhand();
        let bit = id as usize;
        self.storage[bit / 32] |= 1 << (bit % 32);
    }

    /// Remove the given property from the set
    #[inline]
    #[track_caller]
    pub fn remove(&mut self, id: PropertyKey) {
        id.assert_longhand();
        let bit = id as usize;
        self.storage[bit / 32] &= !(1 << (bit % 32));
    }

    /// Clear all bits
    #[inline]
    pub fn clear(&mut self) {
        for cell in &mut self.storage {
            *cell = 0
        }
    }

    /// Returns whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.iter().all(|c| *c == 0)
    }

    /// The number of longhands in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.iter().map(|c| c.count_ones() as usize).sum()
    }
}

/// An iterator over a set of longhand ids.
pub struct LonghandIdSetIterator<'a> {
    longhands: &'a LonghandIdSet,
    cur: usize,
}

impl<'a> Iterator for LonghandIdSetIterator<'a> {
    type Item = PropertyKey;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cur <= MAX_LONGHAND_PROPERTY_KEY {
            let id = LONGHAND_KEYS[self.cur - 1];
            self.cur += 1;
            if self.longhands.contains(id) {
                return Some(id);
            }
        }
        None
    }
}

/// A stack-allocated buffer of longhand declarations, large enough to parse
/// one CSS `key: value` declaration. (Shorthands expand to multiple
/// longhands.)
#[derive(Debug, Default)]
pub struct SourcePropertyDeclaration {
    declarations: SmallVec<[(PropertyKey, SharedValue); MAX_SHORTHAND_EXPANDED]>,
}

impl SourcePropertyDeclaration {
    /// Create an empty buffer.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a single longhand declaration.
    #[track_caller]
    pub fn push(&mut self, key: PropertyKey, value: SharedValue) {
        key.assert_longhand();
        self.declarations.push((key, value));
    }

    /// Reset to initial state
    pub fn clear(&mut self) {
        self.declarations.clear();
    }

    /// Whether we're empty.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// The declarations pushed so far, in push order.
    pub fn declarations(&self) -> &[(PropertyKey, SharedValue)] {
        &self.declarations
    }

    /// Similar to Vec::drain: leaves this empty when the return value is dropped.
    pub fn drain(
        &mut self,
    ) -> smallvec::Drain<'_, [(PropertyKey, SharedValue); MAX_SHORTHAND_EXPANDED]> {
        self.declarations.drain(..)
    }
}
