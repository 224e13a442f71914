//! Numeric codes attached to diagnostic records.
//!
//! A code is either a platform error number (the C `errno` domain) or the
//! user sentinel, under which the record's message is authoritative and the
//! code carries no extra meaning. The errno-to-name mapping itself stays
//! outside this crate; the platform's error-text lookup is reached through
//! [`std::io::Error::from_raw_os_error`].

use std::io;

use crate::message::Message;

/// Origin of a diagnostic's numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// A platform error number from the C `errno` domain.
    Os(i32),
    /// The caller-supplied message is authoritative.
    User,
}

impl Code {
    /// Returns the raw platform error number, if any.
    #[must_use]
    pub const fn raw(self) -> Option<i32> {
        match self {
            Self::Os(code) => Some(code),
            Self::User => None,
        }
    }

    /// Platform error text for `code`, truncated to the message capacity.
    pub(crate) fn strerror(code: i32) -> Message {
        Message::new(&io::Error::from_raw_os_error(code).to_string())
    }
}
