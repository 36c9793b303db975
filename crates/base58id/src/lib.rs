//! Short, reversible base58 tokens for integer IDs.
//!
//! A [`Codec`] binds one of the built-in alphabets ([`BITCOIN`], [`FLICKR`],
//! [`RIPPLE`]) or a custom 58-symbol ASCII [`Alphabet`] to an additive
//! offset. Encoding is plain positional base58 of `id + offset`, most
//! significant digit first; decoding reverses it and fails on any byte that
//! is not part of the alphabet.
//!
//! ```
//! use base58id::{Codec, FLICKR};
//!
//! let codec = Codec::new(FLICKR, 1_000).unwrap();
//! let token = codec.encode(42).unwrap();
//! assert_eq!(codec.decode(&token).unwrap(), 42);
//! ```
//!
//! Tokens are an encoding, not an obfuscation: anyone who knows the alphabet
//! and offset can recover the ID.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Codec`] and `#[serde(with)]`
//!   adapters for ID fields.
//! - `tracing`: trace spans on encode/decode and a warning when a codec is
//!   built from an alphabet with repeated symbols.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod alphabet;
mod codec;
mod error;
#[cfg(feature = "serde")]
mod serde;

pub use crate::alphabet::*;
pub use crate::codec::*;
pub use crate::error::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
