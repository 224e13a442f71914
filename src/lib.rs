//! `errstack` — structured diagnostics with an ordered stack and
//! source-context rendering.
//!
//! Producers build [`Diagnostic`] records (directly or through the call-site
//! macros) and push them onto a [`DiagnosticStack`]; at a drain point,
//! [`drain`] pops them in production order and renders each with the
//! referenced source line and a caret under the offending column.

mod code;
mod macros;
mod message;
mod record;
mod render;
mod severity;
mod stack;

pub use code::Code;
pub use message::{MAX_MESSAGE_LEN, Message};
pub use record::Diagnostic;
pub use render::{RenderStyle, drain, render};
pub use severity::Severity;
pub use stack::{AllocError, DiagnosticStack, MAX_LEN, MIN_CAPACITY};
