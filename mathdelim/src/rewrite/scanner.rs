//! Locating single-dollar inline spans.
//!
//! [`SpanScanner`] walks the input left to right and yields every
//! non-overlapping `$...$` span that satisfies:
//!
//! - the opening `$` is neither preceded nor followed by another `$`;
//! - the inner content is non-empty and holds no `$` and no newline;
//! - the closing `$` is not followed by another `$`.
//!
//! When a candidate opening fails, scanning resumes at the next byte, so the
//! failed closing `$` may itself open the next span. `$` and `\n` are ASCII,
//! which keeps every offset on a UTF-8 character boundary.

const DOLLAR: u8 = b'$';
const NEWLINE: u8 = b'\n';

/// A matched inline span.
///
/// Offsets are byte positions into the scanned text; `end` is exclusive and
/// includes the closing `$`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    pub start: usize,
    pub end: usize,
    pub inner: &'a str,
}

impl Span<'_> {
    /// Number of whitespace-separated words in the inner content.
    pub fn word_count(&self) -> usize {
        self.inner.split_whitespace().count()
    }
}

/// Iterator over the inline spans of a string.
#[derive(Clone, Debug)]
pub struct SpanScanner<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> SpanScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: 0 }
    }

    fn is_dollar(&self, index: usize) -> bool {
        self.text.as_bytes().get(index) == Some(&DOLLAR)
    }

    /// Attempts to match a span opening at `open`.
    fn match_at(&self, open: usize) -> Option<Span<'a>> {
        let bytes = self.text.as_bytes();
        if open > 0 && self.is_dollar(open - 1) {
            return None;
        }
        if self.is_dollar(open + 1) {
            return None;
        }

        let content = open + 1;
        let close = content
            + bytes[content..]
                .iter()
                .position(|&b| b == DOLLAR || b == NEWLINE)?;
        if bytes[close] == NEWLINE || close == content {
            return None;
        }
        if self.is_dollar(close + 1) {
            return None;
        }

        Some(Span {
            start: open,
            end: close + 1,
            inner: &self.text[content..close],
        })
    }
}

impl<'a> Iterator for SpanScanner<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        while self.cursor < bytes.len() {
            let open = self.cursor + bytes[self.cursor..].iter().position(|&b| b == DOLLAR)?;
            if let Some(span) = self.match_at(open) {
                self.cursor = span.end;
                return Some(span);
            }
            self.cursor = open + 1;
        }
        None
    }
}
