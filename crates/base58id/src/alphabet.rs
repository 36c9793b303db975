use crate::{AlphabetError, Error, Result};
use core::fmt;

/// Number of symbols in a base58 alphabet.
pub const ALPHABET_LEN: usize = 58;

/// Lookup slot for bytes that are not part of the alphabet.
const NO_VALUE: u8 = 0xFF;

/// The Bitcoin ordering: digits, then upper-case, then lower-case, without
/// `0`, `O`, `I` and `l`.
pub const BITCOIN: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The Flickr ordering: digits, then lower-case, then upper-case, without
/// `0`, `O`, `I` and `l`.
pub const FLICKR: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// The Ripple ordering. Same symbol set as [`BITCOIN`], shuffled.
pub const RIPPLE: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Prebuilt [`BITCOIN`] alphabet.
pub const BITCOIN_ALPHABET: Alphabet = match Alphabet::new(BITCOIN) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("invalid bitcoin alphabet"),
};

/// Prebuilt [`FLICKR`] alphabet.
pub const FLICKR_ALPHABET: Alphabet = match Alphabet::new(FLICKR) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("invalid flickr alphabet"),
};

/// Prebuilt [`RIPPLE`] alphabet.
pub const RIPPLE_ALPHABET: Alphabet = match Alphabet::new(RIPPLE) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("invalid ripple alphabet"),
};

/// A validated base58 alphabet together with its reverse lookup table.
///
/// The position of a symbol is its digit value. The reverse table maps every
/// possible byte to its digit value (`0..58`), or to a sentinel for bytes
/// outside the alphabet, so decoding a symbol is a single array index.
///
/// Symbols are expected to be distinct. A repeated symbol is not rejected:
/// the later position wins in the reverse table and tokens containing the
/// earlier digit no longer decode to the value they were encoded from. Use
/// [`Alphabet::is_distinct`] to check a caller-supplied alphabet.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_LEN],
    lookup: [u8; 256],
}

impl Alphabet {
    /// Validates `alphabet` and builds its reverse lookup table.
    ///
    /// ASCII-ness is checked before length, so a string of 58 bytes that
    /// contains multi-byte characters reports [`AlphabetError::NonAscii`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlphabet`] if the string contains a non-ASCII
    /// character or is not exactly [`ALPHABET_LEN`] characters long.
    ///
    /// # Example
    ///
    /// ```
    /// use base58id::{Alphabet, AlphabetError, Error, FLICKR};
    ///
    /// let alphabet = Alphabet::new(FLICKR).unwrap();
    /// assert_eq!(alphabet.symbol(0), Some(b'1'));
    ///
    /// assert_eq!(
    ///     Alphabet::new("abcdefg"),
    ///     Err(Error::InvalidAlphabet(AlphabetError::InvalidLength { len: 7 }))
    /// );
    /// ```
    pub const fn new(alphabet: &str) -> Result<Self> {
        let bytes = alphabet.as_bytes();

        let mut i = 0;
        while i < bytes.len() {
            if !bytes[i].is_ascii() {
                return Err(Error::InvalidAlphabet(AlphabetError::NonAscii { index: i }));
            }
            i += 1;
        }

        // All bytes are ASCII here, so bytes and characters coincide.
        if bytes.len() != ALPHABET_LEN {
            return Err(Error::InvalidAlphabet(AlphabetError::InvalidLength {
                len: bytes.len(),
            }));
        }

        let mut symbols = [0_u8; ALPHABET_LEN];
        let mut lookup = [NO_VALUE; 256];
        let mut i = 0;
        while i < ALPHABET_LEN {
            let c = bytes[i];
            symbols[i] = c;
            lookup[c as usize] = i as u8;
            i += 1;
        }

        Ok(Self { symbols, lookup })
    }

    /// Returns the alphabet as a string slice.
    pub const fn as_str(&self) -> &str {
        // SAFETY: `new` only accepts ASCII, which is always valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(&self.symbols) }
    }

    /// Returns the symbol for `digit`, or `None` if `digit >= 58`.
    pub const fn symbol(&self, digit: u8) -> Option<u8> {
        if (digit as usize) < ALPHABET_LEN {
            Some(self.symbols[digit as usize])
        } else {
            None
        }
    }

    /// Returns the digit value of `byte`, or `None` if it is not a symbol of
    /// this alphabet.
    #[inline]
    pub const fn digit(&self, byte: u8) -> Option<u8> {
        match self.lookup[byte as usize] {
            NO_VALUE => None,
            digit => Some(digit),
        }
    }

    /// Returns `true` if no symbol appears twice.
    pub const fn is_distinct(&self) -> bool {
        let mut seen = 0;
        let mut i = 0;
        while i < self.lookup.len() {
            if self.lookup[i] != NO_VALUE {
                seen += 1;
            }
            i += 1;
        }
        seen == ALPHABET_LEN
    }

    /// Symbol lookup for digits already reduced modulo 58.
    #[inline(always)]
    pub(crate) const fn symbol_at(&self, digit: usize) -> u8 {
        self.symbols[digit]
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = Error;

    fn try_from(alphabet: &str) -> Result<Self> {
        Self::new(alphabet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_alphabets_are_valid_and_distinct() {
        for (alphabet, raw) in [
            (BITCOIN_ALPHABET, BITCOIN),
            (FLICKR_ALPHABET, FLICKR),
            (RIPPLE_ALPHABET, RIPPLE),
        ] {
            assert_eq!(alphabet.as_str(), raw);
            assert!(alphabet.is_distinct(), "{raw} has repeated symbols");
        }
    }

    #[test]
    fn builtin_alphabets_exclude_ambiguous_symbols() {
        for alphabet in [BITCOIN_ALPHABET, FLICKR_ALPHABET, RIPPLE_ALPHABET] {
            for ambiguous in [b'0', b'O', b'I', b'l'] {
                assert_eq!(alphabet.digit(ambiguous), None);
            }
        }
    }

    #[test]
    fn lookup_maps_every_symbol_to_its_position() {
        let alphabet = Alphabet::new(RIPPLE).unwrap();
        for (i, &c) in RIPPLE.as_bytes().iter().enumerate() {
            assert_eq!(alphabet.digit(c), Some(i as u8));
            assert_eq!(alphabet.symbol(i as u8), Some(c));
        }
        assert_eq!(alphabet.symbol(58), None);
        assert_eq!(alphabet.digit(b'0'), None);
        assert_eq!(alphabet.digit(0xFF), None);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Alphabet::new(""),
            Err(Error::InvalidAlphabet(AlphabetError::InvalidLength { len: 0 }))
        );
        assert_eq!(
            Alphabet::new(&FLICKR[..57]),
            Err(Error::InvalidAlphabet(AlphabetError::InvalidLength { len: 57 }))
        );

        let mut long = alloc::string::String::from(FLICKR);
        long.push('0');
        assert_eq!(
            Alphabet::new(&long),
            Err(Error::InvalidAlphabet(AlphabetError::InvalidLength { len: 59 }))
        );
    }

    #[test]
    fn rejects_non_ascii_before_length() {
        // Too short as well, but the non-ascii check runs first.
        assert_eq!(
            Alphabet::new("ab\u{e9}"),
            Err(Error::InvalidAlphabet(AlphabetError::NonAscii { index: 2 }))
        );

        // 57 ascii characters plus one two-byte character: 58 characters,
        // 59 bytes.
        let mut mixed = alloc::string::String::from(&FLICKR[..57]);
        mixed.push('\u{e9}');
        assert_eq!(mixed.chars().count(), ALPHABET_LEN);
        assert_eq!(
            Alphabet::new(&mixed),
            Err(Error::InvalidAlphabet(AlphabetError::NonAscii { index: 57 }))
        );
    }

    #[test]
    fn repeated_symbol_overwrites_earlier_position() {
        let mut repeated = alloc::string::String::from(&FLICKR[..57]);
        repeated.push('1');
        let alphabet = Alphabet::new(&repeated).unwrap();

        assert!(!alphabet.is_distinct());
        assert_eq!(alphabet.symbol(0), Some(b'1'));
        assert_eq!(alphabet.digit(b'1'), Some(57));
    }

    #[test]
    fn debug_and_display_show_symbols() {
        use alloc::format;

        assert_eq!(format!("{BITCOIN_ALPHABET}"), BITCOIN);
        assert_eq!(
            format!("{FLICKR_ALPHABET:?}"),
            format!("Alphabet({FLICKR:?})")
        );
    }
}
