/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Declared style storage.
//!
//! This crate maps CSS declarations onto a fixed table of longhand and
//! shorthand properties, and stores the declared values of a rule or element
//! in a bitset-indexed block:
//!
//! * [`properties::PropertyKey`] is the property table: names, shorthand
//!   expansion and per-property value parsers.
//! * [`properties::DeclaredStyleData`] holds the declared longhand values
//!   and their `!important` flags, and knows how to serialize and compare
//!   them.
//! * [`properties::parse_style_attribute`] and friends turn declaration
//!   lists into declared style, reporting errors through an
//!   [`error_reporting::ParseErrorReporter`].
//! * [`cssom::CSSStyleDeclaration`] exposes a block with the CSSOM
//!   `CSSStyleDeclaration` semantics.

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod cssom;
pub mod error_reporting;
pub mod parser;
pub mod properties;
pub mod values;

pub use crate::cssom::CSSStyleDeclaration;
pub use crate::properties::{DeclaredStyleData, Importance, PropertyKey};
