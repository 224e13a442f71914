//! Source-context rendering and the dump driver.
//!
//! Rendering always emits a header block. Source context is best-effort: the
//! referenced file is re-opened and scanned line by line, and any failure to
//! open the file or locate the line silently omits the context block — a
//! diagnostic must never fail merely because its own context fetch did.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use camino::Utf8Path;

use crate::code::Code;
use crate::record::Diagnostic;
use crate::stack::DiagnosticStack;

/// Read chunk size for the line scan; a target line may span several chunks.
const READ_CHUNK: usize = 4096;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Output styling for rendered diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderStyle {
    /// Unstyled text, byte-stable across runs.
    #[default]
    Plain,
    /// ANSI escapes: bold provenance, per-severity label color.
    Ansi,
}

/// Renders one diagnostic to `out`: header block, then best-effort source
/// context (the referenced line with a caret under the recorded column).
///
/// The header block is stable in field order: an `In function` line when the
/// function name is present, then `file:line[:column]: severity[ (code)]:
/// message`. Context is omitted, never reported, when the file cannot be
/// read, is empty, or has fewer lines than the record claims.
///
/// # Errors
///
/// Returns an error only when writing to `out` fails.
pub fn render(
    diagnostic: &Diagnostic<'_>,
    out: &mut impl Write,
    style: RenderStyle,
) -> io::Result<()> {
    let (bold, reset) = match style {
        RenderStyle::Plain => ("", ""),
        RenderStyle::Ansi => (BOLD, RESET),
    };
    let color = match style {
        RenderStyle::Plain => "",
        RenderStyle::Ansi => diagnostic.severity().color(),
    };

    if let Some(function) = diagnostic.function() {
        writeln!(
            out,
            "{bold}{}:{reset} In function '{bold}{function}{reset}':",
            diagnostic.file(),
        )?;
    }

    let provenance = match diagnostic.column() {
        Some(column) => format!("{}:{}:{column}", diagnostic.file(), diagnostic.line()),
        None => format!("{}:{}", diagnostic.file(), diagnostic.line()),
    };
    let severity = diagnostic.severity();
    match diagnostic.code() {
        Code::Os(code) => writeln!(
            out,
            "{bold}{provenance}:{reset} {color}{severity}{reset} ({code}): {color}{}{reset}",
            diagnostic.message(),
        )?,
        Code::User => writeln!(
            out,
            "{bold}{provenance}:{reset} {color}{severity}{reset}: {color}{}{reset}",
            diagnostic.message(),
        )?,
    }

    if let Some(line) = source_line(Utf8Path::new(diagnostic.file()), diagnostic.line()) {
        writeln!(out, "{line}")?;
        writeln!(out, "{}^", " ".repeat(caret_pad(&line, diagnostic.column())))?;
    }
    Ok(())
}

/// Drains `stack` through [`render`] in FIFO order until empty.
///
/// Source-context failures are absorbed per record; after a successful drain
/// the stack is empty but remains a valid, reusable object.
///
/// # Errors
///
/// Returns an error when writing to `out` fails; records not yet popped stay
/// on the stack.
pub fn drain(
    stack: &mut DiagnosticStack<'_>,
    out: &mut impl Write,
    style: RenderStyle,
) -> io::Result<()> {
    while let Some(diagnostic) = stack.pop() {
        render(&diagnostic, out, style)?;
    }
    Ok(())
}

/// Scans `path` for 1-based line `target`, reading in [`READ_CHUNK`]-sized
/// chunks so a line longer than one chunk is still reassembled whole.
///
/// Returns the line text without its terminator, or `None` when the file
/// cannot be opened or holds fewer lines. Non-UTF-8 bytes are replaced
/// lossily for display.
fn source_line(path: &Utf8Path, target: u32) -> Option<String> {
    if target == 0 {
        return None;
    }
    let file = File::open(path).ok()?;
    let mut reader = BufReader::with_capacity(READ_CHUNK, file);
    let mut buf = Vec::new();
    let mut current = 0u32;
    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).ok()?;
        if read == 0 {
            return None;
        }
        current = current.saturating_add(1);
        if current == target {
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
            return Some(String::from_utf8_lossy(&buf).into_owned());
        }
    }
}

/// Caret padding for `line`: the explicit 1-based column, or the offset of
/// the first non-whitespace character when the column is unknown, clamped so
/// the caret never lands past the line's last character.
fn caret_pad(line: &str, column: Option<u32>) -> usize {
    let width = line.chars().count();
    let wanted = match column {
        Some(explicit) => usize::try_from(explicit).unwrap_or(usize::MAX).saturating_sub(1),
        None => line.chars().take_while(|c| c.is_whitespace()).count(),
    };
    wanted.min(width.saturating_sub(1))
}
