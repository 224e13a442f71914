//! Diagnostic records: one reported event with severity, provenance, and a
//! code/message pair.

use std::fmt;
use std::io;

use crate::code::Code;
use crate::message::Message;
use crate::severity::Severity;

/// One reported diagnostic event.
///
/// Immutable once created. Provenance text (`function`, `file`) is borrowed
/// and must outlive the record; call sites normally supply string literals or
/// compiler-captured `file!()` text, in which case the record is `'static`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    severity: Severity,
    function: Option<&'a str>,
    file: &'a str,
    line: u32,
    column: Option<u32>,
    code: Code,
    message: Message,
}

impl<'a> Diagnostic<'a> {
    /// Creates a platform-code record; the message is filled from the
    /// platform's error text for `code`.
    #[must_use]
    pub fn os(
        severity: Severity,
        function: Option<&'a str>,
        file: &'a str,
        line: u32,
        code: i32,
    ) -> Self {
        Self {
            severity,
            function,
            file,
            line,
            column: None,
            code: Code::Os(code),
            message: Code::strerror(code),
        }
    }

    /// Creates a platform-code record for the calling thread's most recent
    /// OS error.
    ///
    /// Falls back to a user record carrying the error's display text when
    /// the platform exposes no raw code.
    #[must_use]
    pub fn last_os(
        severity: Severity,
        function: Option<&'a str>,
        file: &'a str,
        line: u32,
    ) -> Self {
        let last = io::Error::last_os_error();
        match last.raw_os_error() {
            Some(code) => Self::os(severity, function, file, line, code),
            None => Self::user(severity, function, file, line, None, format_args!("{last}")),
        }
    }

    /// Creates a user-message record from `format_args!`; text beyond the
    /// message capacity is truncated, never overrun.
    #[must_use]
    pub fn user(
        severity: Severity,
        function: Option<&'a str>,
        file: &'a str,
        line: u32,
        column: Option<u32>,
        args: fmt::Arguments<'_>,
    ) -> Self {
        Self {
            severity,
            function,
            file,
            line,
            column,
            code: Code::User,
            message: Message::from_args(args),
        }
    }

    /// Severity of the event.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Originating function or scope name, when captured.
    #[must_use]
    pub const fn function(&self) -> Option<&'a str> {
        self.function
    }

    /// Originating source file name.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// 1-based source line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Explicit 1-based column, or `None` to infer it from the first
    /// non-whitespace character of the line.
    #[must_use]
    pub const fn column(&self) -> Option<u32> {
        self.column
    }

    /// Numeric code attached to the event.
    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    /// Human-readable message text.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }
}
