//! Wire-string helpers.
//!
//! The backend stores statuses as free-form strings. Known values map onto
//! variants; anything else is kept verbatim in `Other` so that a re-serialised
//! record is byte-for-byte what the server reported.
//!
//! Dates travel as strings too, and a missing date is rendered by the server
//! as the literal `"null"`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

macro_rules! wire_status {
    (
        $(#[$meta:meta])*
        $t:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $t {
            $( $(#[$vmeta])* $variant, )+
            /// A value this client does not recognise, preserved verbatim.
            Other(String),
        }

        impl $t {
            /// Every recognised value, in display order.
            pub fn known() -> Vec<Self> {
                vec![$( $t::$variant ),+]
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $( $t::$variant => $wire, )+
                    $t::Other(raw) => raw.as_str(),
                }
            }
        }

        impl From<String> for $t {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $( $wire => $t::$variant, )+
                    _ => $t::Other(raw),
                }
            }
        }

        impl From<&str> for $t {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                match value {
                    $t::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Decode an optional `YYYY-MM-DD` date. JSON null, a blank string and the
/// string `"null"` all mean "no date".
pub(crate) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("null") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Decode a field the server may send as JSON null, substituting the default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
