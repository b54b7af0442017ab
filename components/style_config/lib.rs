/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Process-wide preferences consulted by the style crate, such as the
//! switches that enable experimental properties.
//!
//! Every preference starts unset, which reads as `false`.

#![deny(missing_docs)]

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use log::{debug, warn};
use parking_lot::RwLock;
use serde_json::Value;

lazy_static! {
    static ref PREFS: Preferences = Preferences::default();
}

/// A set of boolean preferences keyed by dotted name, such as
/// `layout.css.text-overflow.enabled`.
#[derive(Debug, Default)]
pub struct Preferences {
    bool_prefs: RwLock<HashMap<String, bool>>,
}

impl Preferences {
    /// The value of a preference, or `false` if it was never set.
    pub fn get_bool(&self, key: &str) -> bool {
        *self.bool_prefs.read().get(key).unwrap_or(&false)
    }

    /// Sets a preference, replacing any earlier value.
    pub fn set_bool(&self, key: &str, value: bool) {
        let mut prefs = self.bool_prefs.write();
        if let Some(pref) = prefs.get_mut(key) {
            *pref = value;
        } else {
            prefs.insert(key.to_owned(), value);
        }
    }

    /// Merges a flat JSON object of preferences into this set, returning
    /// how many were read.
    ///
    /// Only booleans are accepted; any other value is skipped with a warning.
    pub fn read_from_json(&self, json: &str) -> Result<usize, PrefsError> {
        let map = match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => map,
            _ => return Err(PrefsError::NotAnObject),
        };
        let mut count = 0;
        for (key, value) in map {
            match value {
                Value::Bool(b) => self.set_bool(&key, b),
                other => {
                    warn!("Ignoring preference {} with unsupported value {}", key, other);
                    continue;
                },
            }
            count += 1;
        }
        debug!("Read {} preferences", count);
        Ok(count)
    }
}

/// An error reading a preferences file.
#[derive(Debug)]
pub enum PrefsError {
    /// The input was not valid JSON.
    Json(serde_json::Error),
    /// The top-level JSON value was not an object.
    NotAnObject,
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PrefsError::Json(ref e) => write!(f, "invalid preferences JSON: {}", e),
            PrefsError::NotAnObject => f.write_str("preferences must be a JSON object"),
        }
    }
}

impl std::error::Error for PrefsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            PrefsError::Json(ref e) => Some(e),
            PrefsError::NotAnObject => None,
        }
    }
}

impl From<serde_json::Error> for PrefsError {
    fn from(e: serde_json::Error) -> Self {
        PrefsError::Json(e)
    }
}

/// Reads a process-wide preference.
pub fn get_bool(key: &str) -> bool {
    PREFS.get_bool(key)
}

/// Sets a process-wide preference.
pub fn set_bool(key: &str, value: bool) {
    PREFS.set_bool(key, value)
}

/// Merges a JSON object of preferences into the process-wide set.
pub fn read_prefs_from_json(json: &str) -> Result<usize, PrefsError> {
    PREFS.read_from_json(json)
}
