/// How decoding treats byte sequences that are not valid in the charset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MalformedInput {
    /// Substitute U+FFFD for each malformed sequence.
    #[default]
    Replace,
    /// Fail with [`DecodeError::Malformed`](crate::DecodeError::Malformed).
    Report,
}

/// Configuration for [`decode_to_string_with`](crate::decode_to_string_with).
///
/// # Examples
///
/// ```rust
/// use fsabuf::{ByteBuffer, Charset, DecodeOptions, MalformedInput, decode_to_string_with};
///
/// let options = DecodeOptions {
///     on_malformed: MalformedInput::Report,
///     ..Default::default()
/// };
/// let buffer = ByteBuffer::from(&b"\xEF\xBB\xBFhi"[..]);
/// let text = decode_to_string_with(&buffer, &Charset::Utf8, options).unwrap();
/// assert_eq!(text, "\u{FEFF}hi");
/// ```
///
/// # Default
///
/// Malformed input is replaced and a leading byte-order mark is kept, which
/// matches [`decode_to_string`](crate::decode_to_string).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    /// Policy for malformed byte sequences.
    ///
    /// # Default
    ///
    /// [`MalformedInput::Replace`]
    pub on_malformed: MalformedInput,

    /// Whether to drop a leading U+FEFF from the decoded text.
    ///
    /// # Default
    ///
    /// `false`
    pub strip_bom: bool,
}
