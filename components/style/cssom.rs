/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The `CSSStyleDeclaration` interface over a declared style block.
//!
//! <https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface>

use crate::error_reporting::ParseErrorReporter;
use crate::parser::ParserContext;
use crate::properties::{
    parse_one_declaration_into, parse_style_attribute, DeclaredStyleData, Importance,
    PropertyKey, SourcePropertyDeclaration,
};
use log::debug;
use std::fmt;
use std::sync::Arc;
use style_traits::{ParsingMode, ToCss};

/// Errors thrown by the mutating methods.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The declaration block is read-only.
    NoModificationAllowed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NoModificationAllowed => f.write_str("NoModificationAllowedError"),
        }
    }
}

impl std::error::Error for Error {}

/// Something to tell about mutations of a declaration block, typically the
/// owner element of a `style` attribute.
pub trait MutationObserver: Send + Sync {
    /// Called once after each mutation of the block.
    fn on_css_mutation(&self);
}

/// A `CSSStyleDeclaration`.
pub struct CSSStyleDeclaration {
    data: DeclaredStyleData,
    readonly: bool,
    mutation_observer: Option<Arc<dyn MutationObserver>>,
    error_reporter: Option<Arc<dyn ParseErrorReporter>>,
}

impl fmt::Debug for CSSStyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CSSStyleDeclaration")
            .field("data", &self.data)
            .field("readonly", &self.readonly)
            .finish()
    }
}

impl Default for CSSStyleDeclaration {
    fn default() -> Self {
        Self::new(DeclaredStyleData::new())
    }
}

impl CSSStyleDeclaration {
    /// A mutable declaration over `data`.
    pub fn new(data: DeclaredStyleData) -> Self {
        CSSStyleDeclaration {
            data,
            readonly: false,
            mutation_observer: None,
            error_reporter: None,
        }
    }

    /// A declaration whose mutating methods all fail with
    /// `NoModificationAllowed`.
    pub fn new_readonly(data: DeclaredStyleData) -> Self {
        CSSStyleDeclaration {
            readonly: true,
            ..Self::new(data)
        }
    }

    /// Notify `observer` of every mutation.
    pub fn with_mutation_observer(mut self, observer: Arc<dyn MutationObserver>) -> Self {
        self.mutation_observer = Some(observer);
        self
    }

    /// Report parse errors in `cssText` and `setProperty` to `reporter`.
    pub fn with_error_reporter(mut self, reporter: Arc<dyn ParseErrorReporter>) -> Self {
        self.error_reporter = Some(reporter);
        self
    }

    /// The underlying declared style.
    #[inline]
    pub fn declared_style(&self) -> &DeclaredStyleData {
        &self.data
    }

    fn check_mutable(&self) -> Result<(), Error> {
        if self.readonly {
            return Err(Error::NoModificationAllowed);
        }
        Ok(())
    }

    fn notify_mutation(&self) {
        if let Some(ref observer) = self.mutation_observer {
            observer.on_css_mutation();
        }
    }

    /// Resolves a property name, ignoring properties that are disabled.
    fn parse_property_key(property: &str) -> Option<PropertyKey> {
        PropertyKey::from_name(property).filter(|key| key.enabled())
    }

    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-csstext>
    pub fn css_text(&self) -> String {
        self.data.to_css_string()
    }

    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-csstext>
    pub fn set_css_text(&mut self, value: &str) -> Result<(), Error> {
        // Step 1
        self.check_mutable()?;

        // Step 3
        self.data = parse_style_attribute(value, self.error_reporter.as_deref());
        self.notify_mutation();
        Ok(())
    }

    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-length>
    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-item>
    pub fn item(&self, index: usize) -> String {
        self.data
            .item(index)
            .map(String::from)
            .unwrap_or_default()
    }

    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue>
    pub fn get_property_value(&self, property: &str) -> String {
        match Self::parse_property_key(property) {
            Some(key) => self.data.get_property_value_string(key),
            None => String::new(),
        }
    }

    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertypriority>
    pub fn get_property_priority(&self, property: &str) -> &'static str {
        let key = match Self::parse_property_key(property) {
            Some(key) => key,
            None => return "",
        };
        if self.data.property_priority(key).important() {
            "important"
        } else {
            ""
        }
    }

    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty>
    pub fn set_property(&mut self, property: &str, value: &str, priority: &str) -> Result<(), Error> {
        // Step 1
        self.check_mutable()?;

        // Step 3
        let key = match Self::parse_property_key(property) {
            Some(key) => key,
            None => return Ok(()),
        };

        // Step 4
        if value.is_empty() {
            return self.remove_property(property).map(|_| ());
        }

        // Step 5
        let importance = if priority.is_empty() {
            Importance::Normal
        } else if priority.eq_ignore_ascii_case("important") {
            Importance::Important
        } else {
            return Ok(());
        };

        // Step 6
        let mut declarations = SourcePropertyDeclaration::new();
        let context = ParserContext::new(ParsingMode::DEFAULT, self.error_reporter.as_deref());
        if parse_one_declaration_into(&mut declarations, key, value, &context).is_err() {
            debug!("Ignoring invalid value for {}: {:?}", key.name(), value);
            return Ok(());
        }

        // Steps 7 & 8
        let mut changed = false;
        for (longhand, value) in declarations.drain() {
            changed |= self.data.update(longhand, value, importance);
        }
        if changed {
            self.notify_mutation();
        }
        Ok(())
    }

    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-removeproperty>
    pub fn remove_property(&mut self, property: &str) -> Result<String, Error> {
        // Step 1
        self.check_mutable()?;

        let key = match Self::parse_property_key(property) {
            Some(key) => key,
            None => return Ok(String::new()),
        };

        // Step 3
        let value = self.data.get_property_value_string(key);

        // Steps 4 & 5
        let removed = if key.is_shorthand() {
            key.expand_shorthand()
                .iter()
                .any(|&longhand| self.data.contains(longhand))
        } else {
            self.data.contains(key)
        };
        if removed {
            self.data.clear_property_value_and_importance(key);
            self.notify_mutation();
        }

        // Step 6
        Ok(value)
    }
}
