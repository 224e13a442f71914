//! Bounded message text for diagnostic records.
//!
//! `Message` mirrors the fixed 255-byte message buffer of the record it
//! replaces: text is truncated at construction time, truncation never splits
//! a code point, and formatting a message cannot fail or overrun anything.

use std::fmt;

/// Maximum number of message bytes retained.
pub const MAX_MESSAGE_LEN: usize = 254;

/// Diagnostic message text, truncated to [`MAX_MESSAGE_LEN`] bytes at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    /// Creates a message, truncating on a `char` boundary at the capacity.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(truncated(text).to_owned())
    }

    /// Formats a message from `format_args!`, truncating at the capacity.
    #[must_use]
    pub fn from_args(args: fmt::Arguments<'_>) -> Self {
        Self::new(&args.to_string())
    }

    /// Returns the message as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the retained byte length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no text was retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Message {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the longest prefix of `text` that fits the capacity without
/// splitting a code point.
fn truncated(text: &str) -> &str {
    if text.len() <= MAX_MESSAGE_LEN {
        return text;
    }
    let end = (0..=MAX_MESSAGE_LEN)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    text.get(..end).unwrap_or_default()
}
