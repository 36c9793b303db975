/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `base58id` can produce.
///
/// Construction errors ([`Error::InvalidAlphabet`], [`Error::InvalidOffset`])
/// are returned by [`crate::Alphabet::new`] and [`crate::Codec::new`]. The
/// remaining variants are produced by [`crate::Codec::encode`] and
/// [`crate::Codec::decode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The alphabet is not pure ASCII or does not hold exactly 58 symbols.
    #[error("invalid base58 alphabet: {0}")]
    InvalidAlphabet(AlphabetError),

    /// The offset is negative or larger than [`crate::MAX_OFFSET`].
    #[error("invalid offset: {offset}")]
    InvalidOffset { offset: i64 },

    /// The ID is negative, or adding the offset to it overflows `i64`.
    #[error("invalid id: {id}")]
    InvalidId { id: i64 },

    /// The token could not be decoded back into an ID.
    #[error("invalid base58 string: {0}")]
    InvalidString(StringError),
}

/// Why an alphabet was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AlphabetError {
    /// The character starting at byte `index` is outside the ASCII range.
    #[error("non-ascii character at byte {index}")]
    NonAscii { index: usize },

    /// The alphabet does not contain exactly 58 characters.
    #[error("expected 58 characters, got {len}")]
    InvalidLength { len: usize },
}

/// Why a token was rejected by [`crate::Codec::decode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StringError {
    /// The token is empty.
    #[error("empty string")]
    Empty,

    /// `byte` at position `index` is not a symbol of the codec's alphabet.
    #[error("invalid symbol {byte:#04x} at index {index}")]
    InvalidSymbol { byte: u8, index: usize },

    /// The token encodes a value larger than `i64::MAX`.
    #[error("value overflows i64")]
    Overflow,

    /// The token encodes a value smaller than the codec's offset, so no
    /// non-negative ID maps to it.
    #[error("value {value} is below the offset")]
    BelowOffset { value: i64 },
}

impl From<AlphabetError> for Error {
    fn from(err: AlphabetError) -> Self {
        Self::InvalidAlphabet(err)
    }
}

impl From<StringError> for Error {
    fn from(err: StringError) -> Self {
        Self::InvalidString(err)
    }
}
