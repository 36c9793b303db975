use crate::{
    Alphabet, BITCOIN_ALPHABET, Error, FLICKR_ALPHABET, RIPPLE_ALPHABET, Result, StringError,
};
use alloc::string::String;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Largest offset accepted by [`Codec::new`].
///
/// Keeps `id + offset` far away from `i64::MAX` for every realistic ID.
pub const MAX_OFFSET: i64 = 1_000_000_000;

/// Length of the longest token a non-negative `i64` can encode to.
///
/// `58^10 <= i64::MAX < 58^11`.
pub const MAX_TOKEN_LEN: usize = 11;

const BASE: i64 = 58;

/// Converts non-negative integer IDs to base58 tokens and back.
///
/// A codec binds an [`Alphabet`] to an offset that is added to every ID
/// before encoding and subtracted after decoding, so that ID `0` does not
/// have to map to the shortest, most guessable token.
///
/// Codecs are immutable and `Copy`; share one across threads freely.
///
/// ## Policies
/// - Negative IDs are rejected by [`Codec::encode`].
/// - ID `0` is an ordinary value and encodes to a single symbol.
/// - [`Codec::decode`] is strict: the first byte outside the alphabet fails
///   the whole token, as do empty tokens and tokens that decode below the
///   offset.
///
/// # Example
///
/// ```
/// use base58id::{Codec, FLICKR};
///
/// let codec = Codec::new(FLICKR, 0).unwrap();
/// assert_eq!(codec.encode(15).unwrap(), "g");
/// assert_eq!(codec.decode("g").unwrap(), 15);
///
/// let shifted = Codec::new(FLICKR, 1).unwrap();
/// assert_eq!(shifted.encode(15).unwrap(), "h");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Codec {
    alphabet: Alphabet,
    offset: i64,
}

impl Codec {
    /// Creates a codec from an alphabet string and an offset.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidAlphabet`] if `alphabet` is not 58 ASCII characters
    /// - [`Error::InvalidOffset`] if `offset` is negative or exceeds
    ///   [`MAX_OFFSET`]
    pub fn new(alphabet: &str, offset: i64) -> Result<Self> {
        Self::with_alphabet(Alphabet::new(alphabet)?, offset)
    }

    /// Creates a codec from an already validated [`Alphabet`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOffset`] if `offset` is negative or exceeds
    /// [`MAX_OFFSET`].
    pub fn with_alphabet(alphabet: Alphabet, offset: i64) -> Result<Self> {
        if !(0..=MAX_OFFSET).contains(&offset) {
            return Err(Error::InvalidOffset { offset });
        }

        #[cfg(feature = "tracing")]
        if !alphabet.is_distinct() {
            tracing::warn!(
                alphabet = alphabet.as_str(),
                "alphabet has repeated symbols, tokens will not round-trip"
            );
        }

        Ok(Self { alphabet, offset })
    }

    /// A codec over the Bitcoin alphabet with no offset.
    pub const fn bitcoin() -> Self {
        Self {
            alphabet: BITCOIN_ALPHABET,
            offset: 0,
        }
    }

    /// A codec over the Flickr alphabet with no offset.
    pub const fn flickr() -> Self {
        Self {
            alphabet: FLICKR_ALPHABET,
            offset: 0,
        }
    }

    /// A codec over the Ripple alphabet with no offset.
    pub const fn ripple() -> Self {
        Self {
            alphabet: RIPPLE_ALPHABET,
            offset: 0,
        }
    }

    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// Encodes `id` into a token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if `id` is negative or `id + offset`
    /// overflows `i64`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn encode(&self, id: i64) -> Result<String> {
        let mut buf = [0_u8; MAX_TOKEN_LEN];
        let token = self.encode_to_buf(id, &mut buf)?;
        Ok(String::from(token))
    }

    /// Encodes `id` into `buf` without allocating, returning the token as a
    /// slice of `buf`.
    ///
    /// Digits are written right-aligned, least-significant first, so the
    /// returned slice is the tail of `buf`.
    ///
    /// # Errors
    ///
    /// Same as [`Codec::encode`].
    ///
    /// # Example
    ///
    /// ```
    /// use base58id::{Codec, MAX_TOKEN_LEN};
    ///
    /// let codec = Codec::flickr();
    /// let mut buf = [0_u8; MAX_TOKEN_LEN];
    /// assert_eq!(codec.encode_to_buf(59, &mut buf).unwrap(), "22");
    /// ```
    pub fn encode_to_buf<'a>(&self, id: i64, buf: &'a mut [u8; MAX_TOKEN_LEN]) -> Result<&'a str> {
        if id < 0 {
            return Err(Error::InvalidId { id });
        }
        let mut value = id.checked_add(self.offset).ok_or(Error::InvalidId { id })?;

        let mut start = MAX_TOKEN_LEN;
        while value >= BASE {
            start -= 1;
            buf[start] = self.alphabet.symbol_at((value % BASE) as usize);
            value /= BASE;
        }
        start -= 1;
        buf[start] = self.alphabet.symbol_at(value as usize);

        // SAFETY: every byte written comes from the alphabet, which is ASCII.
        Ok(unsafe { core::str::from_utf8_unchecked(&buf[start..]) })
    }

    /// Decodes a token produced by a codec with the same alphabet and offset.
    ///
    /// Tokens with superfluous leading zero symbols are accepted and decode
    /// to the same ID as their canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidString`] if the token is empty, contains a byte
    /// outside the alphabet, overflows `i64`, or decodes to a value below the
    /// offset.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn decode(&self, token: &str) -> Result<i64> {
        if token.is_empty() {
            return Err(StringError::Empty.into());
        }

        let mut value: i64 = 0;
        for (index, byte) in token.bytes().enumerate() {
            let digit = self
                .alphabet
                .digit(byte)
                .ok_or(StringError::InvalidSymbol { byte, index })?;
            value = value
                .checked_mul(BASE)
                .and_then(|v| v.checked_add(i64::from(digit)))
                .ok_or(StringError::Overflow)?;
        }

        if value < self.offset {
            return Err(StringError::BelowOffset { value }.into());
        }
        Ok(value - self.offset)
    }
}
