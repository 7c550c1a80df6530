use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
};
use core::{char::REPLACEMENT_CHARACTER, fmt, str::FromStr};

use bstr::ByteSlice;

use crate::error::{DecodeError, UnsupportedCharset};

/// Text decoding capability.
///
/// `decode_lossy` substitutes U+FFFD for malformed input and never fails.
/// `decode_strict` reports the first malformed sequence instead.
pub trait Decode {
    /// Decodes `bytes`, replacing malformed sequences with U+FFFD.
    fn decode_lossy(&self, bytes: &[u8]) -> String;

    /// Decodes `bytes`, failing on the first malformed sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] describing the rejected input.
    fn decode_strict(&self, bytes: &[u8]) -> Result<String, DecodeError>;
}

/// Character encodings understood by the built-in decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Charset {
    /// UTF-8.
    Utf8,
    /// UTF-16, big-endian, no byte-order mark handling.
    Utf16Be,
    /// UTF-16, little-endian, no byte-order mark handling.
    Utf16Le,
    /// ISO-8859-1. Every byte maps to the code point of the same value.
    Latin1,
    /// US-ASCII. Bytes above 0x7F are malformed.
    Ascii,
}

/// Accepted spellings, compared ASCII case-insensitively.
const ALIASES: &[(&str, Charset)] = &[
    ("utf-8", Charset::Utf8),
    ("utf8", Charset::Utf8),
    ("utf-16be", Charset::Utf16Be),
    ("utf16be", Charset::Utf16Be),
    ("utf-16le", Charset::Utf16Le),
    ("utf16le", Charset::Utf16Le),
    ("iso-8859-1", Charset::Latin1),
    ("iso8859-1", Charset::Latin1),
    ("iso_8859_1", Charset::Latin1),
    ("latin1", Charset::Latin1),
    ("l1", Charset::Latin1),
    ("cp819", Charset::Latin1),
    ("us-ascii", Charset::Ascii),
    ("ascii", Charset::Ascii),
    ("iso646-us", Charset::Ascii),
];

impl Charset {
    /// Canonical name of the encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Latin1 => "ISO-8859-1",
            Charset::Ascii => "US-ASCII",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = UnsupportedCharset;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();
        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(trimmed))
            .map(|&(_, charset)| charset)
            .ok_or_else(|| UnsupportedCharset {
                name: name.to_string(),
            })
    }
}

impl Decode for Charset {
    fn decode_lossy(&self, bytes: &[u8]) -> String {
        match self {
            Charset::Utf8 => bytes.to_str_lossy().into_owned(),
            Charset::Utf16Be => utf16_lossy(bytes, u16::from_be_bytes),
            Charset::Utf16Le => utf16_lossy(bytes, u16::from_le_bytes),
            Charset::Latin1 => latin1(bytes),
            Charset::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { char::from(b) } else { REPLACEMENT_CHARACTER })
                .collect(),
        }
    }

    fn decode_strict(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        let charset = *self;
        match charset {
            Charset::Utf8 => bytes.to_str().map(ToOwned::to_owned).map_err(|e| {
                let offset = e.valid_up_to();
                DecodeError::Malformed {
                    charset,
                    offset,
                    len: e.error_len().unwrap_or(bytes.len() - offset),
                }
            }),
            Charset::Utf16Be => utf16_strict(bytes, charset, u16::from_be_bytes),
            Charset::Utf16Le => utf16_strict(bytes, charset, u16::from_le_bytes),
            Charset::Latin1 => Ok(latin1(bytes)),
            Charset::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(DecodeError::Malformed {
                    charset,
                    offset,
                    len: 1,
                }),
                None => Ok(latin1(bytes)),
            },
        }
    }
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

fn utf16_units(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> impl Iterator<Item = u16> + '_ {
    bytes.chunks_exact(2).map(move |pair| unit([pair[0], pair[1]]))
}

fn utf16_lossy(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let mut text: String = char::decode_utf16(utf16_units(bytes, unit))
        .map(|c| c.unwrap_or(REPLACEMENT_CHARACTER))
        .collect();
    // Dangling odd byte.
    if bytes.len() % 2 == 1 {
        text.push(REPLACEMENT_CHARACTER);
    }
    text
}

fn utf16_strict(
    bytes: &[u8],
    charset: Charset,
    unit: fn([u8; 2]) -> u16,
) -> Result<String, DecodeError> {
    let mut text = String::with_capacity(bytes.len() / 2);
    let mut offset = 0;
    for decoded in char::decode_utf16(utf16_units(bytes, unit)) {
        let c = decoded.map_err(|_| DecodeError::Malformed {
            charset,
            offset,
            len: 2,
        })?;
        offset += 2 * c.len_utf16();
        text.push(c);
    }
    if bytes.len() % 2 == 1 {
        return Err(DecodeError::Malformed {
            charset,
            offset: bytes.len() - 1,
            len: 1,
        });
    }
    Ok(text)
}
