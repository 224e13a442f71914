//! Call-site capture macros.
//!
//! The record constructors take provenance as plain values; these macros
//! capture it at the expansion point (`module_path!`, `file!`, `line!`,
//! `column!`) and hand the record back by value. Nothing is stored globally.

/// Builds a user-message [`Diagnostic`](crate::Diagnostic) at the call site.
///
/// The first argument is the [`Severity`](crate::Severity); the rest are
/// `format!`-style arguments for the message.
#[macro_export]
macro_rules! diag {
    ($severity:expr, $($arg:tt)+) => {
        $crate::Diagnostic::user(
            $severity,
            Some(module_path!()),
            file!(),
            line!(),
            Some(column!()),
            format_args!($($arg)+),
        )
    };
}

/// Builds a notice-severity user record at the call site.
#[macro_export]
macro_rules! notice {
    ($($arg:tt)+) => {
        $crate::diag!($crate::Severity::Notice, $($arg)+)
    };
}

/// Builds a warning-severity user record at the call site.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::diag!($crate::Severity::Warning, $($arg)+)
    };
}

/// Builds an error-severity user record at the call site.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::diag!($crate::Severity::Error, $($arg)+)
    };
}

/// Builds a fatal-severity user record at the call site.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::diag!($crate::Severity::Fatal, $($arg)+)
    };
}

/// Builds a platform-code [`Diagnostic`](crate::Diagnostic) at the call
/// site; the message is filled from the platform's error text.
#[macro_export]
macro_rules! os_diag {
    ($severity:expr, $code:expr) => {
        $crate::Diagnostic::os($severity, Some(module_path!()), file!(), line!(), $code)
    };
}

/// Builds an error-severity record for the calling thread's most recent OS
/// error at the call site.
#[macro_export]
macro_rules! syserr {
    () => {
        $crate::Diagnostic::last_os(
            $crate::Severity::Error,
            Some(module_path!()),
            file!(),
            line!(),
        )
    };
}
