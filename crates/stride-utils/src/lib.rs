// stride/stride-utils
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Declares a newtype around `String` that serializes transparently.
///
/// The generated type converts from anything `Into<String>`, borrows as `str` (so it can be used
/// as a `HashMap` key looked up by `&str`) and displays as its inner value.
#[macro_export]
macro_rules! id_string {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
            Hash,
            Clone,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            #[allow(dead_code)]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[allow(dead_code)]
            pub fn into_inner(self) -> String {
                self.0
            }

            #[allow(dead_code)]
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl<T> From<T> for $t
        where
            T: Into<String>,
        {
            fn from(s: T) -> $t {
                $t(s.into())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.to_string()))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}
