/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::errors::TestingErrorReporter;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use style::cssom::{CSSStyleDeclaration, MutationObserver};
use style::properties::parse_style_attribute;

#[derive(Default)]
struct MutationCounter(AtomicUsize);

impl MutationCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl MutationObserver for MutationCounter {
    fn on_css_mutation(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn observed(css: &str) -> (CSSStyleDeclaration, Arc<MutationCounter>) {
    let counter = Arc::new(MutationCounter::default());
    let declaration = CSSStyleDeclaration::new(parse_style_attribute(css, None))
        .with_mutation_observer(counter.clone());
    (declaration, counter)
}

#[test]
fn css_text_round_trips() {
    let (mut declaration, counter) = observed("");
    declaration
        .set_css_text("color: red; margin: 1px 2px 3px 4px !important;")
        .unwrap();
    assert_eq!(counter.count(), 1);
    assert_eq!(declaration.length(), 5);
    assert_eq!(
        declaration.css_text(),
        "color: red; margin-bottom: 3px !important; margin-left: 4px !important; \
         margin-right: 2px !important; margin-top: 1px !important;"
    );

    declaration.set_css_text("").unwrap();
    assert_eq!(counter.count(), 2);
    assert_eq!(declaration.length(), 0);
    assert_eq!(declaration.css_text(), "");
}

#[test]
fn items_are_longhand_names_in_order() {
    let (declaration, _) = observed("margin: 0; color: red");
    assert_eq!(declaration.length(), 5);
    assert_eq!(declaration.item(0), "color");
    assert_eq!(declaration.item(4), "margin-top");
    assert_eq!(declaration.item(5), "");
}

#[test]
fn get_property_value_handles_shorthands() {
    let (declaration, _) = observed("margin: 1px 2px; color: red");
    assert_eq!(declaration.get_property_value("margin"), "1px 2px");
    assert_eq!(declaration.get_property_value("MARGIN-LEFT"), "2px");
    assert_eq!(declaration.get_property_value("padding"), "");
    assert_eq!(declaration.get_property_value("bogus"), "");
}

#[test]
fn get_property_priority() {
    let (declaration, _) = observed("margin: 1px !important; padding: 1px; padding-top: 2px !important");
    assert_eq!(declaration.get_property_priority("margin"), "important");
    assert_eq!(declaration.get_property_priority("margin-top"), "important");
    assert_eq!(declaration.get_property_priority("padding"), "");
    assert_eq!(declaration.get_property_priority("padding-top"), "important");
    assert_eq!(declaration.get_property_priority("bogus"), "");
}

#[test]
fn set_property_notifies_effective_changes_only() {
    let (mut declaration, counter) = observed("");

    declaration.set_property("color", "red", "").unwrap();
    assert_eq!(counter.count(), 1);
    assert_eq!(declaration.get_property_value("color"), "red");

    declaration.set_property("color", "red", "").unwrap();
    assert_eq!(counter.count(), 1);

    declaration.set_property("color", "nonsense", "").unwrap();
    declaration.set_property("bogus", "red", "").unwrap();
    declaration.set_property("color", "blue", "very").unwrap();
    assert_eq!(counter.count(), 1);
    assert_eq!(declaration.get_property_value("color"), "red");

    declaration.set_property("padding", "1px 2px", "important").unwrap();
    assert_eq!(counter.count(), 2);
    assert_eq!(declaration.length(), 5);
    assert_eq!(declaration.get_property_priority("padding"), "important");
}

#[test]
fn set_property_overrides_important_declarations() {
    let (mut declaration, counter) = observed("width: 1px !important");
    declaration.set_property("width", "2px", "").unwrap();
    assert_eq!(counter.count(), 1);
    assert_eq!(declaration.css_text(), "width: 2px;");
}

#[test]
fn set_property_with_an_empty_value_removes() {
    let (mut declaration, counter) = observed("color: red; width: 1px");
    declaration.set_property("color", "", "important").unwrap();
    assert_eq!(counter.count(), 1);
    assert_eq!(declaration.css_text(), "width: 1px;");
}

#[test]
fn remove_property_returns_the_old_value() {
    let (mut declaration, counter) = observed("margin: 1px; color: red");

    assert_eq!(declaration.remove_property("margin").unwrap(), "1px");
    assert_eq!(counter.count(), 1);
    assert_eq!(declaration.length(), 1);

    assert_eq!(declaration.remove_property("margin").unwrap(), "");
    assert_eq!(declaration.remove_property("bogus").unwrap(), "");
    assert_eq!(counter.count(), 1);

    assert_eq!(declaration.remove_property("color").unwrap(), "red");
    assert_eq!(counter.count(), 2);
    assert_eq!(declaration.length(), 0);
}

#[test]
fn invalid_values_are_reported() {
    let reporter = Arc::new(TestingErrorReporter::new());
    let mut declaration = CSSStyleDeclaration::default().with_error_reporter(reporter.clone());
    declaration.set_property("width", "red", "").unwrap();
    assert_eq!(declaration.length(), 0);
    reporter.assert_messages_contain(&["OtherInvalidValue(\"width\")"]);
}
