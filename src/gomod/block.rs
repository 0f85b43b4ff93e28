//! Locating and rebuilding the `require ( ... )` block of a `go.mod` file.

use crate::error::{MatchError, Result};
use crate::gomod::entry::Requirements;

/// Literal that opens the dependency block.
pub const OPEN_MARKER: &str = "require (";

/// Literal that closes the dependency block.
pub const CLOSE_MARKER: char = ')';

/// A manifest split around its dependency block.
///
/// `header + body + trailer` always reproduces the text it was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequireBlock<'a> {
    /// Everything up to and including `require (`.
    pub header: &'a str,
    /// Text strictly between the two markers.
    pub body: &'a str,
    /// Everything from the closing `)` to end of file.
    pub trailer: &'a str,
}

impl RequireBlock<'_> {
    /// `"\r\n"` if the `require (` line ends with one, otherwise `"\n"`.
    ///
    /// A block closed on its opening line falls back to the header's line
    /// ending.
    pub fn line_ending(&self) -> &'static str {
        let crlf = match self.body.find('\n') {
            Some(idx) => self.body[..idx].ends_with('\r'),
            None => self.header.contains("\r\n"),
        };
        if crlf { "\r\n" } else { "\n" }
    }
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    SearchingOpen,
    InsideBlock { body_start: usize },
    Done { body_start: usize, body_end: usize },
}

/// Splits manifest text into header, block body and trailer.
///
/// The first `require (` opens the block and the first `)` after it closes
/// it. Nested or repeated blocks are not distinguished.
///
/// # Errors
///
/// Returns `MalformedManifest` if either marker is missing.
pub fn extract_block(text: &str) -> Result<RequireBlock<'_>> {
    let mut state = ScanState::SearchingOpen;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        // The opening and closing marker may share a line, so a line can
        // advance the state twice.
        let mut from = 0;
        loop {
            state = match state {
                ScanState::SearchingOpen => match line[from..].find(OPEN_MARKER) {
                    Some(idx) => {
                        from += idx + OPEN_MARKER.len();
                        ScanState::InsideBlock {
                            body_start: line_start + from,
                        }
                    }
                    None => break,
                },
                ScanState::InsideBlock { body_start } => match line[from..].find(CLOSE_MARKER) {
                    Some(idx) => ScanState::Done {
                        body_start,
                        body_end: line_start + from + idx,
                    },
                    None => break,
                },
                ScanState::Done { .. } => break,
            };
        }

        if let ScanState::Done { .. } = state {
            break;
        }
    }

    match state {
        ScanState::SearchingOpen => Err(MatchError::MalformedManifest(format!(
            "could not find the list of required imports ('{}')",
            OPEN_MARKER
        ))),
        ScanState::InsideBlock { .. } => Err(MatchError::MalformedManifest(format!(
            "require block is never closed with '{}'",
            CLOSE_MARKER
        ))),
        ScanState::Done {
            body_start,
            body_end,
        } => {
            log::debug!("require block spans bytes {}..{}", body_start, body_end);
            Ok(RequireBlock {
                header: &text[..body_start],
                body: &text[body_start..body_end],
                trailer: &text[body_end..],
            })
        }
    }
}

/// Rebuilds a manifest from the block's header and trailer and `requirements`.
///
/// Each dependency is written on its own tab-indented line, in the order
/// recorded in `requirements`, followed by a final line break before the
/// trailer. Line breaks follow the block's own line ending.
pub fn encode_block(block: &RequireBlock<'_>, requirements: &Requirements) -> String {
    let newline = block.line_ending();
    let mut out = String::with_capacity(
        block.header.len() + block.trailer.len() + requirements.len() * 48,
    );
    out.push_str(block.header);

    for (name, version) in requirements.iter() {
        out.push_str(newline);
        out.push('\t');
        out.push_str(name);
        out.push(' ');
        out.push_str(version);
    }
    out.push_str(newline);

    out.push_str(block.trailer);
    out
}
