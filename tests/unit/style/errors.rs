/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use cssparser::SourceLocation;
use parking_lot::Mutex;
use style::error_reporting::{ContextualParseError, ParseErrorReporter, RustLogReporter};
use style::properties::{parse_style_attribute, PropertyKey};

#[derive(Debug)]
pub struct CSSError {
    pub line: u32,
    pub column: u32,
    pub message: String,
}

pub struct TestingErrorReporter {
    errors: Mutex<Vec<CSSError>>,
}

impl TestingErrorReporter {
    pub fn new() -> Self {
        TestingErrorReporter {
            errors: Mutex::new(Vec::new()),
        }
    }

    pub fn assert_messages_contain(&self, expected_errors: &[&str]) {
        let errors = self.errors.lock();
        for (i, (error, message)) in errors.iter().zip(expected_errors).enumerate() {
            assert!(
                error.message.contains(message),
                "the {}th error {:?} does not contain {:?}",
                i + 1,
                error.message,
                message
            );
        }
        if errors.len() < expected_errors.len() {
            panic!("Missing errors: {:#?}", &expected_errors[errors.len()..]);
        }
        if errors.len() > expected_errors.len() {
            panic!("Extra errors: {:#?}", &errors[expected_errors.len()..]);
        }
    }
}

impl ParseErrorReporter for TestingErrorReporter {
    fn report_error(&self, location: SourceLocation, error: ContextualParseError) {
        self.errors.lock().push(CSSError {
            line: location.line,
            column: location.column,
            message: error.to_string(),
        })
    }
}

#[test]
fn unknown_and_invalid_declarations_are_reported() {
    let error_reporter = TestingErrorReporter::new();
    let block = parse_style_attribute(
        "bogus: 1px; color: 12px; margin: red; width: 1px",
        Some(&error_reporter),
    );
    assert_eq!(block.len(), 1);
    error_reporter.assert_messages_contain(&[
        "Unsupported property declaration: 'bogus: 1px",
        "InvalidColor(\"color\"",
        "OtherInvalidValue(\"margin\")",
    ]);
}

#[test]
fn errors_are_located_in_the_source() {
    let error_reporter = TestingErrorReporter::new();
    parse_style_attribute("color: red;\nwidth: blue", Some(&error_reporter));
    let errors = error_reporter.errors.lock();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 1);
    assert_eq!(errors[0].column, 8);
    assert!(errors[0].message.contains("width"), "{}", errors[0].message);
}

#[test]
fn vendor_prefixed_unknown_properties_are_silent() {
    let error_reporter = TestingErrorReporter::new();
    let block = parse_style_attribute(
        "-webkit-transition: none; _zoom: 1; -moz-bogus: 2",
        Some(&error_reporter),
    );
    assert!(block.is_empty());
    error_reporter.assert_messages_contain(&[]);
}

#[test]
fn errors_for_properties_already_in_the_block_are_dropped() {
    let error_reporter = TestingErrorReporter::new();
    let block = parse_style_attribute(
        "color: red; color: rgb(1, 2); padding: 1px; padding: -1px; border-width: thick",
        Some(&error_reporter),
    );
    assert_eq!(block.get_property_value_string(PropertyKey::Color), "red");
    assert_eq!(block.get_property_value_string(PropertyKey::Padding), "1px");
    error_reporter.assert_messages_contain(&[]);
}

#[test]
fn logging_reporter_accepts_errors() {
    let _ = env_logger::builder().is_test(true).try_init();
    let block = parse_style_attribute("color: nope; display: block", Some(&RustLogReporter));
    assert_eq!(block.len(), 1);
}
