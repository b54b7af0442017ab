/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use style::parser::ParserContext;
use style::properties::{
    parse_one_declaration_into, parse_style_attribute, DeclaredStyleData, Importance, PropertyKey,
    SourcePropertyDeclaration,
};
use style::values::{Keyword, PropertyValue};
use style_traits::{ParsingMode, ToCss};

fn parse(css: &str) -> DeclaredStyleData {
    parse_style_attribute(css, None)
}

fn value_of(block: &DeclaredStyleData, key: PropertyKey) -> String {
    block.get_property_value_string(key)
}

#[test]
fn longhands_and_important_shorthands() {
    let block = parse("color: red; margin: 1px 2px 3px 4px !important;");

    assert_eq!(block.len(), 5);
    assert_eq!(value_of(&block, PropertyKey::Color), "red");
    assert_eq!(block.importance(PropertyKey::Color), Importance::Normal);
    for &(key, expected) in &[
        (PropertyKey::MarginTop, "1px"),
        (PropertyKey::MarginRight, "2px"),
        (PropertyKey::MarginBottom, "3px"),
        (PropertyKey::MarginLeft, "4px"),
    ] {
        assert_eq!(value_of(&block, key), expected);
        assert_eq!(block.importance(key), Importance::Important);
    }

    let serialized = block.serialize_css_declaration_block();
    assert_eq!(
        serialized,
        "color: red; margin-bottom: 3px !important; margin-left: 4px !important; \
         margin-right: 2px !important; margin-top: 1px !important;"
    );
    assert_eq!(parse(&serialized), block);
}

#[test]
fn invalid_declarations_do_not_affect_their_neighbors() {
    let block = parse("width: 10px; height: red; color: 12px; display: block; opacity");
    assert_eq!(block.len(), 2);
    assert_eq!(value_of(&block, PropertyKey::Width), "10px");
    assert_eq!(value_of(&block, PropertyKey::Display), "block");
    assert!(!block.contains(PropertyKey::Height));
    assert!(!block.contains(PropertyKey::Color));
}

#[test]
fn invalid_shorthands_set_none_of_their_longhands() {
    let block = parse("margin: 1px 2px 3px 4px 5px; padding: 1px red");
    assert!(block.is_empty());
}

#[test]
fn trailing_garbage_after_important_is_rejected() {
    let block = parse("color: red !important garbage; width: 1px ! important");
    assert_eq!(block.len(), 1);
    assert_eq!(value_of(&block, PropertyKey::Width), "1px");
    assert_eq!(block.importance(PropertyKey::Width), Importance::Important);
}

#[test]
fn later_declarations_win_unless_earlier_ones_are_important() {
    let block = parse("color: red; color: blue");
    assert_eq!(value_of(&block, PropertyKey::Color), "blue");

    let block = parse("color: red !important; color: blue");
    assert_eq!(value_of(&block, PropertyKey::Color), "red");
    assert_eq!(block.importance(PropertyKey::Color), Importance::Important);

    let block = parse("margin: 0 !important; margin-top: 5px; margin-left: 6px !important");
    assert_eq!(value_of(&block, PropertyKey::MarginTop), "0px");
    assert_eq!(value_of(&block, PropertyKey::MarginLeft), "6px");
}

#[test]
fn property_names_are_case_insensitive_and_aliases_resolve() {
    let block = parse("COLOR: Red; Word-Wrap: break-word");
    assert_eq!(value_of(&block, PropertyKey::Color), "red");
    assert_eq!(value_of(&block, PropertyKey::OverflowWrap), "break-word");
}

#[test]
fn css_wide_keywords_apply_to_every_longhand() {
    let block = parse("border-color: inherit; padding: unset !important; color: INITIAL");
    for &longhand in PropertyKey::BorderColor.expand_shorthand() {
        assert_eq!(
            **block.get_property_value(longhand).unwrap(),
            PropertyValue::Keyword(Keyword::Inherit)
        );
    }
    for &longhand in PropertyKey::Padding.expand_shorthand() {
        assert_eq!(value_of(&block, longhand), "unset");
        assert_eq!(block.importance(longhand), Importance::Important);
    }
    assert_eq!(value_of(&block, PropertyKey::Color), "initial");
    assert_eq!(block.len(), 9);

    let block = parse("margin: 1px inherit");
    assert!(block.is_empty());
}

#[test]
fn four_sided_shorthands_replicate_sides() {
    let block = parse("padding: 1px 2px 3px");
    assert_eq!(value_of(&block, PropertyKey::PaddingTop), "1px");
    assert_eq!(value_of(&block, PropertyKey::PaddingRight), "2px");
    assert_eq!(value_of(&block, PropertyKey::PaddingBottom), "3px");
    assert_eq!(value_of(&block, PropertyKey::PaddingLeft), "2px");

    let block = parse("border-style: solid dashed");
    assert_eq!(value_of(&block, PropertyKey::BorderTopStyle), "solid");
    assert_eq!(value_of(&block, PropertyKey::BorderRightStyle), "dashed");
    assert_eq!(value_of(&block, PropertyKey::BorderBottomStyle), "solid");
    assert_eq!(value_of(&block, PropertyKey::BorderLeftStyle), "dashed");

    let block = parse("border-width: thin");
    for &longhand in PropertyKey::BorderWidth.expand_shorthand() {
        assert_eq!(value_of(&block, longhand), "thin");
    }
}

#[test]
fn border_components_can_come_in_any_order() {
    let block = parse("border: blue 2px solid");
    assert_eq!(block.len(), 12);
    for (index, &longhand) in PropertyKey::Border.expand_shorthand().iter().enumerate() {
        let expected = match index / 4 {
            0 => "2px",
            1 => "solid",
            _ => "blue",
        };
        assert_eq!(value_of(&block, longhand), expected, "{:?}", longhand);
    }

    let block = parse("border-left: dashed");
    assert_eq!(value_of(&block, PropertyKey::BorderLeftStyle), "dashed");
    assert_eq!(value_of(&block, PropertyKey::BorderLeftWidth), "initial");
    assert_eq!(value_of(&block, PropertyKey::BorderLeftColor), "initial");

    assert!(parse("border-top: solid solid").is_empty());
    assert!(parse("border: 1px 2px").is_empty());
}

#[test]
fn background_sets_omitted_components_to_initial() {
    let block = parse("background: no-repeat url(a.png) #0047ab");
    assert_eq!(block.len(), 5);
    assert_eq!(value_of(&block, PropertyKey::BackgroundColor), "rgb(0, 71, 171)");
    assert_eq!(value_of(&block, PropertyKey::BackgroundImage), "url(\"a.png\")");
    assert_eq!(value_of(&block, PropertyKey::BackgroundRepeat), "no-repeat");
    assert_eq!(value_of(&block, PropertyKey::BackgroundPosition), "initial");
    assert_eq!(value_of(&block, PropertyKey::BackgroundSize), "initial");
}

#[test]
fn lengths_need_units_unless_zero() {
    let block = parse("width: 0; height: 10; top: -5px; min-width: -5px; left: 50%");
    assert_eq!(value_of(&block, PropertyKey::Width), "0px");
    assert_eq!(value_of(&block, PropertyKey::Top), "-5px");
    assert_eq!(value_of(&block, PropertyKey::Left), "50%");
    assert!(!block.contains(PropertyKey::Height));
    assert!(!block.contains(PropertyKey::MinWidth));
}

#[test]
fn font_values() {
    let block = parse(
        "font-weight: 700; font-family: \"Gill Sans\", Helvetica Neue, sans-serif; \
         font-style: italic",
    );
    assert_eq!(value_of(&block, PropertyKey::FontWeight), "bold");
    assert_eq!(
        value_of(&block, PropertyKey::FontFamily),
        "\"Gill Sans\", \"Helvetica Neue\", sans-serif"
    );
    assert_eq!(value_of(&block, PropertyKey::FontStyle), "italic");

    assert!(parse("font-weight: 450").is_empty());
}

#[test]
fn preference_gated_properties() {
    const PREF: &str = "layout.css.text-overflow.enabled";

    assert!(!PropertyKey::TextOverflow.enabled());
    assert!(parse("text-overflow: ellipsis").is_empty());

    style_config::set_bool(PREF, true);
    let block = parse("text-overflow: ellipsis");
    style_config::set_bool(PREF, false);

    assert_eq!(value_of(&block, PropertyKey::TextOverflow), "ellipsis");
}

#[test]
fn one_declaration_without_importance() {
    let context = ParserContext::new(ParsingMode::DEFAULT, None);
    let mut declarations = SourcePropertyDeclaration::new();

    assert!(parse_one_declaration_into(&mut declarations, PropertyKey::Margin, "1px 2px", &context).is_ok());
    let keys: Vec<_> = declarations.declarations().iter().map(|&(key, _)| key).collect();
    assert_eq!(keys, PropertyKey::Margin.expand_shorthand());

    declarations.clear();
    assert!(parse_one_declaration_into(&mut declarations, PropertyKey::Color, "red !important", &context).is_err());
    assert!(declarations.is_empty());
}

#[test]
fn unitless_lengths_in_quirky_contexts() {
    let context = ParserContext::new(ParsingMode::ALLOW_UNITLESS_LENGTH, None);
    let mut declarations = SourcePropertyDeclaration::new();
    assert!(parse_one_declaration_into(&mut declarations, PropertyKey::Width, "10", &context).is_ok());
    assert_eq!(declarations.declarations()[0].1.to_css_string(), "10px");
}
