//! Decoding a byte buffer's remaining content into text.
//!
//! All functions read `[position, limit)` through a shared reference, so the
//! caller's cursor never moves.
use alloc::string::String;

use crate::{
    buffer::ByteBuffer,
    charset::Decode,
    error::DecodeError,
    options::{DecodeOptions, MalformedInput},
};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Decodes the remaining bytes of `buffer`, replacing malformed sequences
/// with U+FFFD.
#[must_use]
pub fn decode_to_string<D: Decode + ?Sized>(buffer: &ByteBuffer, decoder: &D) -> String {
    decoder.decode_lossy(buffer.as_slice())
}

/// Decodes the remaining bytes of `buffer`, failing on malformed input.
///
/// # Errors
///
/// Propagates the decoder's [`DecodeError`].
pub fn try_decode_to_string<D: Decode + ?Sized>(
    buffer: &ByteBuffer,
    decoder: &D,
) -> Result<String, DecodeError> {
    decoder.decode_strict(buffer.as_slice())
}

/// Decodes the remaining bytes of `buffer` as configured by `options`.
///
/// # Errors
///
/// With [`MalformedInput::Report`], propagates the decoder's
/// [`DecodeError`]. Never fails with [`MalformedInput::Replace`].
pub fn decode_to_string_with<D: Decode + ?Sized>(
    buffer: &ByteBuffer,
    decoder: &D,
    options: DecodeOptions,
) -> Result<String, DecodeError> {
    let mut text = match options.on_malformed {
        MalformedInput::Replace => decode_to_string(buffer, decoder),
        MalformedInput::Report => try_decode_to_string(buffer, decoder)?,
    };
    if options.strip_bom && text.starts_with(BYTE_ORDER_MARK) {
        text.replace_range(..BYTE_ORDER_MARK.len_utf8(), "");
    }
    Ok(text)
}
