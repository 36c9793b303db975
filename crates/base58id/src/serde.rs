//! Serde support for [`Codec`] configuration and for `i64` IDs serialized as
//! base58 tokens.
//!
//! A [`Codec`] (de)serializes as `{ "alphabet": "...", "offset": 0 }`, and
//! deserialization goes through [`Codec::new`], so a config file can never
//! produce an unvalidated codec.
//!
//! The `as_*` modules plug into `#[serde(with = "...")]` for ID fields:
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # {
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Link {
//!     #[serde(with = "base58id::as_flickr")]
//!     id: i64,
//! }
//! # }
//! ```
use crate::Codec;
use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
struct CodecRef<'a> {
    alphabet: &'a str,
    offset: i64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CodecOwned {
    alphabet: String,
    #[serde(default)]
    offset: i64,
}

impl Serialize for Codec {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CodecRef {
            alphabet: self.alphabet().as_str(),
            offset: self.offset(),
        }
        .serialize(s)
    }
}

impl<'de> Deserialize<'de> for Codec {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = CodecOwned::deserialize(d)?;
        Self::new(&raw.alphabet, raw.offset).map_err(serde::de::Error::custom)
    }
}

struct TokenVisitor {
    codec: Codec,
    expecting: &'static str,
}

impl serde::de::Visitor<'_> for TokenVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        self.codec.decode(v).map_err(E::custom)
    }
}

macro_rules! token_adapter {
    ($(#[$meta:meta])* $name:ident, $codec:expr, $expecting:literal) => {
        $(#[$meta])*
        pub mod $name {
            use serde::{Deserializer, Serializer};

            /// Serialize an ID as a token.
            ///
            /// # Errors
            ///
            /// Returns an error if the ID is negative or the underlying
            /// serializer fails.
            pub fn serialize<S>(id: &i64, s: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut buf = [0_u8; crate::MAX_TOKEN_LEN];
                let token = $codec
                    .encode_to_buf(*id, &mut buf)
                    .map_err(serde::ser::Error::custom)?;
                s.serialize_str(token)
            }

            /// Deserialize an ID from a token.
            ///
            /// # Errors
            ///
            /// Returns an error if the underlying deserializer fails or the
            /// string is not a valid token.
            pub fn deserialize<'de, D>(d: D) -> Result<i64, D::Error>
            where
                D: Deserializer<'de>,
            {
                d.deserialize_str(super::TokenVisitor {
                    codec: $codec,
                    expecting: $expecting,
                })
            }
        }
    };
}

token_adapter!(
    /// (De)serialize an `i64` ID as a Bitcoin-alphabet token, offset 0.
    as_bitcoin,
    crate::Codec::bitcoin(),
    "a bitcoin base58 token"
);
token_adapter!(
    /// (De)serialize an `i64` ID as a Flickr-alphabet token, offset 0.
    as_flickr,
    crate::Codec::flickr(),
    "a flickr base58 token"
);
token_adapter!(
    /// (De)serialize an `i64` ID as a Ripple-alphabet token, offset 0.
    as_ripple,
    crate::Codec::ripple(),
    "a ripple base58 token"
);
