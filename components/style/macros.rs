/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Various macro helpers.

/// A macro to parse an identifier, or return an unexpected-token error
/// otherwise.
macro_rules! try_match_ident_ignore_ascii_case {
    ($input:expr, $( $match_body:tt )*) => {{
        let location = $input.current_source_location();
        let ident = $input.expect_ident_cloned()?;
        (cssparser::match_ignore_ascii_case! { &ident,
            $( $match_body )*
            _ => Err(()),
        })
        .map_err(|()| location.new_unexpected_token_error(cssparser::Token::Ident(ident.clone())))
    }}
}

/// Defines a keyword enum whose variants map one-to-one to CSS identifiers.
///
/// Generates `as_str`, ASCII-case-insensitive `from_ident` and a `ToCss`
/// implementation.
macro_rules! define_css_keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $css:tt, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum $name {
            $(
                #[allow(missing_docs)]
                $variant,
            )+
        }

        impl $name {
            /// The CSS identifier for this keyword.
            pub fn as_str(&self) -> &'static str {
                match *self {
                    $( $name::$variant => $css, )+
                }
            }

            /// Looks up a keyword by identifier, ignoring ASCII case.
            pub fn from_ident(ident: &str) -> Result<Self, ()> {
                cssparser::match_ignore_ascii_case! { ident,
                    $( $css => Ok($name::$variant), )+
                    _ => Err(()),
                }
            }
        }

        impl style_traits::ToCss for $name {
            fn to_css<W>(&self, dest: &mut style_traits::CssWriter<W>) -> std::fmt::Result
            where
                W: std::fmt::Write,
            {
                std::fmt::Write::write_str(dest, self.as_str())
            }
        }
    };
}
