/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use style::properties::{parse_style_attribute, Importance, PropertyKey};
use style_traits::ToCss;

fn shorthand_value(css: &str, shorthand: PropertyKey) -> String {
    parse_style_attribute(css, None).get_property_value_string(shorthand)
}

#[test]
fn declaration_block_should_serialize_correctly() {
    let block = parse_style_attribute(
        "width: 70px; min-height: 20px; height: 20px !important; display: inline-block; \
         overflow: auto;",
        None,
    );
    assert_eq!(
        block.to_css_string(),
        "display: inline-block; height: 20px !important; min-height: 20px; overflow: auto; \
         width: 70px;"
    );
    assert_eq!(parse_style_attribute("", None).to_css_string(), "");
}

#[test]
fn serialized_blocks_parse_back_to_the_same_block() {
    let block = parse_style_attribute(
        "background: url(\"img.png\") rgba(0, 0, 0, 0.5); font-family: serif, 'A B'; \
         border-top: 1px solid; z-index: -3 !important; line-height: 1.5; tab-size: 4",
        None,
    );
    let reparsed = parse_style_attribute(&block.serialize_css_declaration_block(), None);
    assert_eq!(reparsed, block);
}

mod four_sides {
    use super::*;

    #[test]
    fn all_equal_sides_serialize_to_one_value() {
        assert_eq!(shorthand_value("margin: 1px", PropertyKey::Margin), "1px");
        assert_eq!(
            shorthand_value("margin: 1px 1px 1px 1px", PropertyKey::Margin),
            "1px"
        );
    }

    #[test]
    fn equal_vertical_and_horizontal_sides_serialize_to_two_values() {
        assert_eq!(
            shorthand_value("padding: 1px 2px 1px 2px", PropertyKey::Padding),
            "1px 2px"
        );
    }

    #[test]
    fn equal_horizontal_sides_serialize_to_three_values() {
        assert_eq!(
            shorthand_value("padding: 1px 2px 3px 2px", PropertyKey::Padding),
            "1px 2px 3px"
        );
    }

    #[test]
    fn different_sides_serialize_to_four_values() {
        assert_eq!(
            shorthand_value("margin: 1px 2px 3px 4px", PropertyKey::Margin),
            "1px 2px 3px 4px"
        );
        assert_eq!(
            shorthand_value(
                "border-color: red; border-left-color: blue",
                PropertyKey::BorderColor
            ),
            "red red red blue"
        );
    }

    #[test]
    fn longhands_build_the_shorthand() {
        assert_eq!(
            shorthand_value(
                "margin-top: 1px; margin-bottom: 1px; margin-left: auto; margin-right: auto",
                PropertyKey::Margin
            ),
            "1px auto"
        );
    }

    #[test]
    fn missing_longhands_serialize_to_nothing() {
        assert_eq!(
            shorthand_value("margin-top: 1px; margin-left: 1px", PropertyKey::Margin),
            ""
        );
    }
}

mod border {
    use super::*;

    #[test]
    fn matching_sides_serialize_as_border() {
        assert_eq!(
            shorthand_value("border: 2px solid blue", PropertyKey::Border),
            "2px solid blue"
        );
        assert_eq!(shorthand_value("border: dotted", PropertyKey::Border), "dotted");
        assert_eq!(
            shorthand_value("border: 2px solid blue", PropertyKey::BorderLeft),
            "2px solid blue"
        );
        assert_eq!(
            shorthand_value("border: 2px solid blue", PropertyKey::BorderWidth),
            "2px"
        );
    }

    #[test]
    fn differing_sides_cannot_serialize_as_border() {
        assert_eq!(
            shorthand_value(
                "border: 2px solid blue; border-top-color: red",
                PropertyKey::Border
            ),
            ""
        );
    }

    #[test]
    fn omitted_components_serialize_as_initial() {
        assert_eq!(shorthand_value("border: dotted", PropertyKey::BorderWidth), "initial");
        assert_eq!(
            shorthand_value("border: dotted; border-top-width: 1px", PropertyKey::BorderWidth),
            ""
        );
        assert_eq!(shorthand_value("border: dotted", PropertyKey::BorderStyle), "dotted");
    }
}

mod background {
    use super::*;

    #[test]
    fn background_serializes_the_given_components() {
        assert_eq!(
            shorthand_value("background: url(a.png) repeat-x red", PropertyKey::Background),
            "red url(\"a.png\") repeat-x"
        );
    }

    #[test]
    fn background_size_cannot_be_expressed() {
        assert_eq!(
            shorthand_value(
                "background: red; background-size: cover",
                PropertyKey::Background
            ),
            ""
        );
    }
}

mod keywords_and_importance {
    use super::*;

    #[test]
    fn css_wide_keywords_serialize_alone() {
        assert_eq!(shorthand_value("margin: inherit", PropertyKey::Margin), "inherit");
        assert_eq!(shorthand_value("border: initial", PropertyKey::Border), "initial");
        assert_eq!(
            shorthand_value("margin: 1px; margin-top: unset", PropertyKey::Margin),
            ""
        );
    }

    #[test]
    fn mixed_importance_serializes_to_nothing() {
        let css = "padding: 1px; padding-top: 2px !important";
        let block = parse_style_attribute(css, None);
        assert_eq!(block.get_property_value_string(PropertyKey::Padding), "");
        assert_eq!(block.property_priority(PropertyKey::Padding), Importance::Normal);

        let block = parse_style_attribute("padding: 1px !important", None);
        assert_eq!(block.get_property_value_string(PropertyKey::Padding), "1px");
        assert_eq!(block.property_priority(PropertyKey::Padding), Importance::Important);
    }
}
