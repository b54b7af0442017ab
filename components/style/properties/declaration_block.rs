/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The declared style of a rule or element, with its importance flags.

#![deny(missing_docs)]

use super::{
    LonghandIdSet, LonghandIdSetIterator, PropertyKey, SourcePropertyDeclaration,
    MAX_LONGHAND_PROPERTY_KEY, MAX_SHORTHAND_EXPANDED,
};
use crate::error_reporting::{ContextualParseError, ParseErrorReporter};
use crate::parser::ParserContext;
use crate::values::{Keyword, PropertyValue, SharedValue};
use cssparser::{
    parse_important, AtRuleParser, CowRcStr, DeclarationParser, Delimiter, ParseErrorKind, Parser,
    ParserInput, ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};
use log::debug;
use smallvec::SmallVec;
use std::fmt::{self, Write};
use style_traits::{CssWriter, ParseError, ParsingMode, StyleParseErrorKind, ToCss};

/// A declaration [importance][importance].
///
/// [importance]: https://drafts.csswg.org/css-cascade/#importance
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Importance {
    /// Indicates a declaration without `!important`.
    #[default]
    Normal,

    /// Indicates a declaration with `!important`.
    Important,
}

impl Importance {
    /// Return whether this is an important declaration.
    pub fn important(self) -> bool {
        match self {
            Importance::Normal => false,
            Importance::Important => true,
        }
    }
}

impl From<bool> for Importance {
    #[inline]
    fn from(important: bool) -> Self {
        if important {
            Importance::Important
        } else {
            Importance::Normal
        }
    }
}

/// The declared values of a declaration block, indexed by longhand key.
///
/// `declared_properties` holds exactly the keys whose value is set, and
/// `important_properties` is always a subset of it. Iteration, serialization
/// and equality all go through the presence bitset, so the order in which
/// properties were set is never observable.
#[derive(Clone)]
pub struct DeclaredStyleData {
    declared_properties: LonghandIdSet,
    values: [Option<SharedValue>; MAX_LONGHAND_PROPERTY_KEY + 1],
    important_properties: LonghandIdSet,
}

impl Default for DeclaredStyleData {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DeclaredStyleData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, value, importance)| (key, (value, importance))))
            .finish()
    }
}

/// Iterator over `(PropertyKey, &SharedValue, Importance)` for a declaration
/// block, in ascending key order.
pub struct DeclarationImportanceIterator<'a> {
    data: &'a DeclaredStyleData,
    keys: LonghandIdSetIterator<'a>,
}

impl<'a> Iterator for DeclarationImportanceIterator<'a> {
    type Item = (PropertyKey, &'a SharedValue, Importance);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        let value = self.data.values[key as usize].as_ref()?;
        Some((key, value, self.data.importance(key)))
    }
}

impl DeclaredStyleData {
    /// Create an empty block.
    pub fn new() -> Self {
        DeclaredStyleData {
            declared_properties: LonghandIdSet::new(),
            values: std::array::from_fn(|_| None),
            important_properties: LonghandIdSet::new(),
        }
    }

    /// The number of declared longhands.
    #[inline]
    pub fn len(&self) -> usize {
        self.declared_properties.len()
    }

    /// Returns whether nothing is declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declared_properties.is_empty()
    }

    /// The `index`-th declared longhand in ascending key order.
    pub fn key_at(&self, index: usize) -> Option<PropertyKey> {
        self.declared_properties.iter().nth(index)
    }

    /// The name of the `index`-th declared longhand.
    ///
    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-item>
    pub fn item(&self, index: usize) -> Option<&'static str> {
        self.key_at(index).map(PropertyKey::name)
    }

    /// The set of declared longhands.
    #[inline]
    pub fn longhands(&self) -> &LonghandIdSet {
        &self.declared_properties
    }

    /// Returns whether `key` is declared. Always false for shorthands.
    #[inline]
    pub fn contains(&self, key: PropertyKey) -> bool {
        key.is_longhand() && self.declared_properties.contains(key)
    }

    /// Returns whether any declaration is `!important`.
    #[inline]
    pub fn any_important(&self) -> bool {
        !self.important_properties.is_empty()
    }

    /// Iterate over the declarations and their importance.
    #[inline]
    pub fn iter(&self) -> DeclarationImportanceIterator {
        DeclarationImportanceIterator {
            data: self,
            keys: self.declared_properties.iter(),
        }
    }

    /// The value declared for a longhand.
    ///
    /// Panics if `key` is not a longhand.
    #[track_caller]
    pub fn get_property_value(&self, key: PropertyKey) -> Option<&SharedValue> {
        key.assert_longhand();
        self.values[key as usize].as_ref()
    }

    /// The importance of a longhand declaration. Undeclared longhands are
    /// `Normal`.
    ///
    /// Panics if `key` is not a longhand.
    #[track_caller]
    pub fn importance(&self, key: PropertyKey) -> Importance {
        key.assert_longhand();
        self.important_properties.contains(key).into()
    }

    /// Declares `value` for a longhand, or removes the declaration when
    /// `value` is `None`.
    ///
    /// Removing never marks a key as declared or important, whatever
    /// `importance` says.
    ///
    /// Panics if `key` is not a longhand.
    #[track_caller]
    pub fn set_property_value_and_importance(
        &mut self,
        key: PropertyKey,
        value: Option<SharedValue>,
        importance: Importance,
    ) {
        key.assert_longhand();
        match value {
            Some(value) => {
                self.values[key as usize] = Some(value);
                self.declared_properties.insert(key);
                if importance.important() {
                    self.important_properties.insert(key);
                } else {
                    self.important_properties.remove(key);
                }
            },
            None => self.clear_longhand(key),
        }
    }

    /// Removes the declaration for a longhand, or for every longhand of a
    /// shorthand. Clearing something undeclared does nothing.
    ///
    /// Panics if `key` is `PropertyKey::None`.
    #[track_caller]
    pub fn clear_property_value_and_importance(&mut self, key: PropertyKey) {
        if key.is_shorthand() {
            for &longhand in key.expand_shorthand() {
                self.clear_longhand(longhand);
            }
            return;
        }
        key.assert_longhand();
        self.clear_longhand(key);
    }

    fn clear_longhand(&mut self, key: PropertyKey) {
        self.values[key as usize] = None;
        self.declared_properties.remove(key);
        self.important_properties.remove(key);
    }

    /// Replaces the whole content of this block with a copy of `other`.
    pub fn assign_from(&mut self, other: &Self) {
        self.clone_from(other)
    }

    /// Removes every declaration.
    pub fn clear(&mut self) {
        for key in self.declared_properties.iter() {
            self.values[key as usize] = None;
        }
        self.declared_properties.clear();
        self.important_properties.clear();
    }

    /// Sets a declaration, overriding whatever was there. Returns whether
    /// the block changed.
    #[track_caller]
    pub fn update(
        &mut self,
        key: PropertyKey,
        value: SharedValue,
        importance: Importance,
    ) -> bool {
        let unchanged = match self.get_property_value(key) {
            Some(existing) => {
                self.importance(key) == importance &&
                    (SharedValue::ptr_eq(existing, &value) || **existing == *value)
            },
            None => false,
        };
        if unchanged {
            return false;
        }
        self.set_property_value_and_importance(key, Some(value), importance);
        true
    }

    /// Adds a declaration with the cascade rules of a single block: a
    /// normal declaration never overrides an important one.
    ///
    /// Returns whether the declaration was applied.
    #[track_caller]
    pub fn push(&mut self, key: PropertyKey, value: SharedValue, importance: Importance) -> bool {
        if !importance.important() && self.importance(key).important() {
            return false;
        }
        self.update(key, value, importance)
    }

    /// Adds the declarations expanded from a single source declaration.
    ///
    /// Returns whether anything changed.
    pub fn extend(
        &mut self,
        drain: smallvec::Drain<'_, [(PropertyKey, SharedValue); MAX_SHORTHAND_EXPANDED]>,
        importance: Importance,
    ) -> bool {
        let mut changed = false;
        for (key, value) in drain {
            changed |= self.push(key, value, importance);
        }
        changed
    }

    /// The serialized value of a longhand or shorthand, or the empty string
    /// when it can't be represented.
    ///
    /// Panics if `key` is neither a longhand nor a shorthand.
    #[track_caller]
    pub fn get_property_value_string(&self, key: PropertyKey) -> String {
        let mut value = String::new();
        // Writing to a `String` can't fail.
        let _ = self.property_value_to_css(key, &mut value);
        value
    }

    /// Serializes the value of a longhand or shorthand.
    ///
    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue>
    #[track_caller]
    pub fn property_value_to_css<W>(&self, key: PropertyKey, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        if key.is_shorthand() {
            return self.shorthand_to_css(key, dest);
        }
        key.assert_longhand();
        match self.values[key as usize] {
            Some(ref value) => value.to_css(&mut CssWriter::new(dest)),
            None => Ok(()),
        }
    }

    /// Serializes a shorthand from its longhands. Nothing is written when a
    /// longhand is missing, when importance is mixed, or when the values
    /// can't be expressed by the shorthand.
    pub fn shorthand_to_css<W>(&self, shorthand: PropertyKey, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        let longhands = shorthand.expand_shorthand();
        let mut values = SmallVec::<[&PropertyValue; MAX_SHORTHAND_EXPANDED]>::new();
        let mut important_count = 0;
        for &longhand in longhands {
            match self.values[longhand as usize] {
                Some(ref value) => values.push(&**value),
                None => return Ok(()),
            }
            if self.important_properties.contains(longhand) {
                important_count += 1;
            }
        }
        if important_count != 0 && important_count != longhands.len() {
            return Ok(());
        }

        let first = values[0];
        if first.is_css_wide_keyword() && values.iter().all(|v| *v == first) {
            return first.to_css(&mut CssWriter::new(dest));
        }
        let has_cascade_keyword = values.iter().any(|v| {
            matches!(
                v.as_keyword(),
                Some(Keyword::Inherit) | Some(Keyword::Unset)
            )
        });
        if has_cascade_keyword {
            return Ok(());
        }
        shorthand.shorthand_values_to_css(&values, &mut CssWriter::new(dest))
    }

    /// The priority of a property: a shorthand is important only when all
    /// of its longhands are.
    ///
    /// Panics if `key` is neither a longhand nor a shorthand.
    ///
    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertypriority>
    #[track_caller]
    pub fn property_priority(&self, key: PropertyKey) -> Importance {
        if key.is_shorthand() {
            let all_important = key
                .expand_shorthand()
                .iter()
                .all(|&longhand| self.important_properties.contains(longhand));
            return all_important.into();
        }
        self.importance(key)
    }

    /// Serializes every declaration, in ascending key order.
    ///
    /// <https://drafts.csswg.org/cssom/#serialize-a-css-declaration-block>
    pub fn serialize_css_declaration_block(&self) -> String {
        self.to_css_string()
    }
}

impl PartialEq for DeclaredStyleData {
    fn eq(&self, other: &Self) -> bool {
        if self.declared_properties != other.declared_properties {
            return false;
        }
        self.declared_properties.iter().all(|key| {
            let index = key as usize;
            let values_equal = match (&self.values[index], &other.values[index]) {
                (Some(a), Some(b)) => SharedValue::ptr_eq(a, b) || **a == **b,
                _ => false,
            };
            values_equal &&
                self.important_properties.contains(key) ==
                    other.important_properties.contains(key)
        })
    }
}

impl ToCss for DeclaredStyleData {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        let mut is_first_serialization = true;
        for (key, value, importance) in self.iter() {
            append_serialization(dest, key, value, importance, &mut is_first_serialization)?;
        }
        Ok(())
    }
}

fn handle_first_serialization<W>(dest: &mut W, is_first_serialization: &mut bool) -> fmt::Result
where
    W: Write,
{
    if !*is_first_serialization {
        dest.write_char(' ')
    } else {
        *is_first_serialization = false;
        Ok(())
    }
}

/// Appends `name: value[ !important];` to `dest`.
fn append_serialization<W>(
    dest: &mut CssWriter<W>,
    key: PropertyKey,
    value: &PropertyValue,
    importance: Importance,
    is_first_serialization: &mut bool,
) -> fmt::Result
where
    W: Write,
{
    handle_first_serialization(dest, is_first_serialization)?;

    key.to_css(dest)?;
    dest.write_str(": ")?;
    value.to_css(dest)?;

    if importance.important() {
        dest.write_str(" !important")?;
    }

    dest.write_char(';')
}

/// A parser for the contents of a `style` attribute.
pub fn parse_style_attribute(
    input: &str,
    error_reporter: Option<&dyn ParseErrorReporter>,
) -> DeclaredStyleData {
    let context = ParserContext::new(ParsingMode::DEFAULT, error_reporter);
    let mut input = ParserInput::new(input);
    parse_property_declaration_list(&context, &mut Parser::new(&mut input))
}

/// Parse a single value for `key` into `declarations`, as
/// `CSSStyleDeclaration.setProperty` does. `!important` is not accepted.
///
/// Errors are reported through the context, and nothing is pushed on error.
pub fn parse_one_declaration_into(
    declarations: &mut SourcePropertyDeclaration,
    key: PropertyKey,
    input: &str,
    context: &ParserContext,
) -> Result<(), ()> {
    let mut input = ParserInput::new(input);
    let mut parser = Parser::new(&mut input);
    let start_position = parser.position();
    parser
        .parse_entirely(|parser| key.parse_into(declarations, context, parser))
        .map_err(|err| {
            declarations.clear();
            if context.error_reporting_enabled() {
                report_one_css_error(
                    context,
                    None,
                    err,
                    parser.slice_from(start_position),
                    Some(key),
                )
            }
        })
}

/// A struct to parse property declarations.
struct PropertyDeclarationParser<'a, 'b: 'a> {
    context: &'a ParserContext<'b>,
    declarations: &'a mut SourcePropertyDeclaration,
    /// The last parsed property, used for error reporting.
    last_parsed_property_id: Option<PropertyKey>,
}

/// Default methods reject all at rules.
impl<'a, 'b, 'i> AtRuleParser<'i> for PropertyDeclarationParser<'a, 'b> {
    type Prelude = ();
    type AtRule = Importance;
    type Error = StyleParseErrorKind<'i>;
}

/// Default methods reject all rules.
impl<'a, 'b, 'i> QualifiedRuleParser<'i> for PropertyDeclarationParser<'a, 'b> {
    type Prelude = ();
    type QualifiedRule = Importance;
    type Error = StyleParseErrorKind<'i>;
}

fn is_vendor_identifier(name: &str) -> bool {
    name.starts_with('-') || name.starts_with('_')
}

impl<'a, 'b, 'i> DeclarationParser<'i> for PropertyDeclarationParser<'a, 'b> {
    type Declaration = Importance;
    type Error = StyleParseErrorKind<'i>;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _declaration_start: &ParserState,
    ) -> Result<Importance, ParseError<'i>> {
        let key = match PropertyKey::from_name(&name) {
            Some(key) => key,
            None => {
                return Err(input.new_custom_error(StyleParseErrorKind::UnknownProperty(name)));
            },
        };
        if !key.enabled() {
            return Err(input.new_custom_error(StyleParseErrorKind::ExperimentalProperty));
        }
        if self.context.error_reporting_enabled() {
            self.last_parsed_property_id = Some(key);
        }
        input.parse_until_before(Delimiter::Bang, |input| {
            key.parse_into(self.declarations, self.context, input)
        })?;
        let importance = match input.try_parse(parse_important) {
            Ok(()) => Importance::Important,
            Err(_) => Importance::Normal,
        };
        // In case there is still unparsed text in the declaration, we should roll back.
        input.expect_exhausted()?;
        Ok(importance)
    }
}

impl<'a, 'b, 'i> RuleBodyItemParser<'i, Importance, StyleParseErrorKind<'i>>
    for PropertyDeclarationParser<'a, 'b>
{
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}

type SmallParseErrorVec<'i> = SmallVec<[(ParseError<'i>, &'i str, Option<PropertyKey>); 2]>;

#[cold]
fn report_one_css_error<'i>(
    context: &ParserContext,
    block: Option<&DeclaredStyleData>,
    mut error: ParseError<'i>,
    slice: &'i str,
    property: Option<PropertyKey>,
) {
    debug_assert!(context.error_reporting_enabled());

    fn all_properties_in_block(block: &DeclaredStyleData, property: PropertyKey) -> bool {
        if property.is_shorthand() {
            return property
                .expand_shorthand()
                .iter()
                .all(|&longhand| block.contains(longhand));
        }
        block.contains(property)
    }

    if let ParseErrorKind::Custom(StyleParseErrorKind::UnknownProperty(ref name)) = error.kind {
        if is_vendor_identifier(name) {
            // If the unrecognized property looks like a vendor-specific property,
            // silently ignore it instead of polluting the error output.
            return;
        }
    }

    if let Some(property) = property {
        if let Some(block) = block {
            if all_properties_in_block(block, property) {
                return;
            }
        }
        error = StyleParseErrorKind::new_invalid(property.name(), error);
    }

    let location = error.location;
    let error = ContextualParseError::UnsupportedPropertyDeclaration(slice, error);
    context.log_css_error(location, error);
}

#[cold]
fn report_css_errors(
    context: &ParserContext,
    block: &DeclaredStyleData,
    errors: &mut SmallParseErrorVec,
) {
    for (error, slice, property) in errors.drain(..) {
        report_one_css_error(context, Some(block), error, slice, property)
    }
}

/// Parse a list of property declarations and return the declared style
/// they produce.
pub fn parse_property_declaration_list(
    context: &ParserContext,
    input: &mut Parser,
) -> DeclaredStyleData {
    let mut declarations = SourcePropertyDeclaration::new();
    let mut block = DeclaredStyleData::new();
    let mut parser = PropertyDeclarationParser {
        context,
        last_parsed_property_id: None,
        declarations: &mut declarations,
    };
    let mut iter = RuleBodyParser::new(input, &mut parser);
    let mut errors = SmallParseErrorVec::new();
    while let Some(declaration) = iter.next() {
        match declaration {
            Ok(importance) => {
                block.extend(iter.parser.declarations.drain(), importance);
                // We've successfully parsed a declaration, so forget about
                // `last_parsed_property_id`. It'd be wrong to associate any
                // following error with this property.
                iter.parser.last_parsed_property_id = None;
            },
            Err((error, slice)) => {
                iter.parser.declarations.clear();

                if context.error_reporting_enabled() {
                    let property = iter.parser.last_parsed_property_id.take();
                    errors.push((error, slice, property));
                }
            },
        }
    }
    if !errors.is_empty() {
        report_css_errors(context, &block, &mut errors)
    }
    debug!("parsed {} declared longhands", block.len());
    block
}
