/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use style::properties::{DeclaredStyleData, Importance, PropertyKey};
use style::values::{Keyword, Length, PropertyValue, SharedValue};

fn px(value: f32) -> SharedValue {
    SharedValue::new(PropertyValue::Length(Length::from_px(value)))
}

fn keyword(keyword: Keyword) -> SharedValue {
    SharedValue::new(PropertyValue::Keyword(keyword))
}

fn block_from<I>(iterable: I) -> DeclaredStyleData
where
    I: IntoIterator<Item = (PropertyKey, SharedValue, Importance)>,
{
    let mut block = DeclaredStyleData::new();
    for (key, value, importance) in iterable {
        block.set_property_value_and_importance(key, Some(value), importance);
    }
    block
}

fn sample() -> Vec<(PropertyKey, SharedValue, Importance)> {
    vec![
        (PropertyKey::Width, px(70.), Importance::Normal),
        (PropertyKey::MinHeight, px(20.), Importance::Normal),
        (PropertyKey::Height, px(20.), Importance::Important),
        (PropertyKey::Display, keyword(Keyword::InlineBlock), Importance::Normal),
        (PropertyKey::Overflow, keyword(Keyword::Auto), Importance::Normal),
    ]
}

#[test]
fn setting_a_value_declares_the_key_once() {
    let mut block = DeclaredStyleData::new();
    assert!(block.is_empty());

    block.set_property_value_and_importance(PropertyKey::Width, Some(px(1.)), Importance::Normal);
    assert_eq!(block.len(), 1);
    assert_eq!(**block.get_property_value(PropertyKey::Width).unwrap(), *px(1.));

    block.set_property_value_and_importance(PropertyKey::Width, Some(px(2.)), Importance::Normal);
    assert_eq!(block.len(), 1);
    assert_eq!(block.get_property_value_string(PropertyKey::Width), "2px");

    block.set_property_value_and_importance(PropertyKey::Height, Some(px(2.)), Importance::Normal);
    assert_eq!(block.len(), 2);
}

#[test]
fn clearing_is_idempotent() {
    let mut block = block_from(sample());
    assert_eq!(block.len(), 5);

    block.clear_property_value_and_importance(PropertyKey::Height);
    assert_eq!(block.len(), 4);
    assert!(block.get_property_value(PropertyKey::Height).is_none());
    assert!(!block.any_important());

    block.clear_property_value_and_importance(PropertyKey::Height);
    assert_eq!(block.len(), 4);

    block.set_property_value_and_importance(PropertyKey::Width, None, Importance::Normal);
    assert_eq!(block.len(), 3);
}

#[test]
fn clearing_a_shorthand_clears_its_longhands() {
    let mut block = block_from(vec![
        (PropertyKey::MarginTop, px(1.), Importance::Normal),
        (PropertyKey::MarginLeft, px(1.), Importance::Important),
        (PropertyKey::Color, keyword(Keyword::CurrentColor), Importance::Normal),
    ]);
    block.clear_property_value_and_importance(PropertyKey::Margin);
    assert_eq!(block.len(), 1);
    assert_eq!(block.key_at(0), Some(PropertyKey::Color));
    assert!(!block.any_important());
}

#[test]
fn empty_values_never_declare_a_key() {
    let mut block = DeclaredStyleData::new();
    block.set_property_value_and_importance(PropertyKey::Color, None, Importance::Important);
    assert_eq!(block.len(), 0);
    assert!(block.get_property_value(PropertyKey::Color).is_none());
    assert_eq!(block.importance(PropertyKey::Color), Importance::Normal);
    assert_eq!(block, DeclaredStyleData::new());
}

#[test]
fn clearing_importance_with_a_normal_value() {
    let mut block = DeclaredStyleData::new();
    block.set_property_value_and_importance(PropertyKey::Top, Some(px(1.)), Importance::Important);
    assert!(block.any_important());
    block.set_property_value_and_importance(PropertyKey::Top, Some(px(1.)), Importance::Normal);
    assert!(!block.any_important());
    assert_eq!(block.importance(PropertyKey::Top), Importance::Normal);
}

#[test]
fn keys_enumerate_in_ascending_order() {
    let block = block_from(sample());
    let keys: Vec<_> = (0..block.len()).filter_map(|i| block.key_at(i)).collect();
    assert_eq!(
        keys,
        vec![
            PropertyKey::Display,
            PropertyKey::Height,
            PropertyKey::MinHeight,
            PropertyKey::Overflow,
            PropertyKey::Width,
        ]
    );
    assert_eq!(block.item(1), Some("height"));
    assert_eq!(block.key_at(5), None);
    assert_eq!(block.item(5), None);

    let iterated: Vec<_> = block.iter().map(|(key, _, _)| key).collect();
    assert_eq!(iterated, keys);
}

#[test]
fn serialization_does_not_depend_on_insertion_order() {
    let block = block_from(sample());
    let reversed = block_from(sample().into_iter().rev());

    assert_eq!(
        block.serialize_css_declaration_block(),
        "display: inline-block; height: 20px !important; min-height: 20px; overflow: auto; \
         width: 70px;"
    );
    assert_eq!(
        block.serialize_css_declaration_block(),
        reversed.serialize_css_declaration_block()
    );
}

#[test]
fn equality_is_content_based() {
    let block = block_from(sample());
    let reversed = block_from(sample().into_iter().rev());
    assert_eq!(block, block);
    assert_eq!(block, reversed);
    assert_eq!(reversed, block);

    let mut different_importance = block_from(sample());
    different_importance.set_property_value_and_importance(
        PropertyKey::Height,
        Some(px(20.)),
        Importance::Normal,
    );
    assert_ne!(block, different_importance);

    let mut different_value = block_from(sample());
    different_value.set_property_value_and_importance(
        PropertyKey::Width,
        Some(px(71.)),
        Importance::Normal,
    );
    assert_ne!(block, different_value);

    let mut missing_key = block_from(sample());
    missing_key.clear_property_value_and_importance(PropertyKey::Overflow);
    assert_ne!(block, missing_key);
}

#[test]
fn assign_from_copies_independently() {
    let mut original = block_from(sample());
    let mut copy = DeclaredStyleData::new();
    copy.set_property_value_and_importance(PropertyKey::ZIndex, Some(px(1.)), Importance::Normal);

    copy.assign_from(&original);
    assert_eq!(copy, original);
    assert!(!copy.contains(PropertyKey::ZIndex));

    original.clear_property_value_and_importance(PropertyKey::Width);
    original.set_property_value_and_importance(PropertyKey::Height, Some(px(5.)), Importance::Normal);
    assert_ne!(copy, original);
    assert_eq!(copy.len(), 5);
    assert_eq!(copy.importance(PropertyKey::Height), Importance::Important);
    assert_eq!(copy.get_property_value_string(PropertyKey::Height), "20px");
}

#[test]
fn shared_values_can_live_in_several_blocks() {
    let value = px(3.);
    let first = block_from(vec![(PropertyKey::Left, value.clone(), Importance::Normal)]);
    let second = block_from(vec![(PropertyKey::Left, value.clone(), Importance::Normal)]);
    assert!(SharedValue::ptr_eq(
        first.get_property_value(PropertyKey::Left).unwrap(),
        second.get_property_value(PropertyKey::Left).unwrap()
    ));
    assert_eq!(first, second);
}

#[test]
fn declared_style_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DeclaredStyleData>();
}

#[test]
#[should_panic]
fn shorthand_keys_are_rejected_by_longhand_accessors() {
    let block = DeclaredStyleData::new();
    block.get_property_value(PropertyKey::Margin);
}

#[test]
#[should_panic]
fn the_none_key_cannot_be_set() {
    let mut block = DeclaredStyleData::new();
    block.set_property_value_and_importance(PropertyKey::None, Some(px(1.)), Importance::Normal);
}

#[test]
#[should_panic]
fn the_none_key_has_no_value_string() {
    let block = DeclaredStyleData::new();
    block.get_property_value_string(PropertyKey::None);
}

#[test]
#[should_panic]
fn the_none_key_has_no_priority() {
    let block = DeclaredStyleData::new();
    block.property_priority(PropertyKey::None);
}

#[test]
#[should_panic]
fn the_none_key_cannot_be_cleared() {
    let mut block = DeclaredStyleData::new();
    block.clear_property_value_and_importance(PropertyKey::None);
}
