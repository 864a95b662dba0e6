//! Rewriting chunked UTF-8 text as it arrives.
//!
//! [`RewriteStream`] wraps a source of byte chunks and yields rewritten byte
//! chunks in the same order. It is pull-based: one source chunk is decoded,
//! rewritten and yielded before the next one is polled, and dropping the
//! stream drops the source with it.
//!
//! Two things are carried between chunks:
//!
//! - the incomplete tail of a multi-byte character, so no character is split;
//! - text after an unresolved `$` run at the end of a chunk, so a span that
//!   straddles a boundary can still match. This carry is bounded by the
//!   policy's stream window and by newlines (spans never cross one). A window
//!   of zero rewrites each chunk on its own.
//!
//! A source error ends the stream with a single [`StreamError::Source`] item.

use std::{
    pin::Pin,
    task::{Context, Poll, ready},
};

use futures_util::stream::{Stream, StreamExt};

use crate::{error::StreamError, rewrite::SpanScanner, rewriter::Rewriter};

const DOLLAR: u8 = b'$';
const NEWLINE: u8 = b'\n';

// =============================================================================
// Utf8Decoder - incremental decoding across chunk boundaries
// =============================================================================

/// Decodes UTF-8 incrementally, holding back an incomplete trailing
/// character until the next chunk. Invalid sequences become U+FFFD.
#[derive(Debug, Default)]
struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    fn decode(&mut self, chunk: &[u8]) -> String {
        let mut input = std::mem::take(&mut self.pending);
        input.extend_from_slice(chunk);

        let mut output = String::with_capacity(input.len());
        let mut rest = input.as_slice();
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    output.push_str(valid);
                    break;
                }
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    output.push_str(&String::from_utf8_lossy(valid));
                    match err.error_len() {
                        Some(invalid) => {
                            output.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[invalid..];
                        }
                        None => {
                            self.pending = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        output
    }

    /// Flushes whatever is left at end of input.
    fn finish(&mut self) -> String {
        let pending = std::mem::take(&mut self.pending);
        String::from_utf8_lossy(&pending).into_owned()
    }
}

/// Returns the byte index from which `text` must be held back.
///
/// Only a final `$` run that starts after the last matched span and has no
/// newline after it is undecided; everything before it rewrites the same
/// way whatever arrives next.
fn undecided_from(text: &str, window: usize) -> usize {
    let bytes = text.as_bytes();
    if window == 0 {
        return bytes.len();
    }
    let Some(last) = bytes.iter().rposition(|&b| b == DOLLAR) else {
        return bytes.len();
    };
    let run_start = bytes[..last]
        .iter()
        .rposition(|&b| b != DOLLAR)
        .map_or(0, |index| index + 1);
    let settled = SpanScanner::new(text).last().map_or(0, |span| span.end);

    if run_start < settled
        || bytes[run_start..].contains(&NEWLINE)
        || bytes.len() - run_start > window
    {
        return bytes.len();
    }
    run_start
}

// =============================================================================
// RewriteStream
// =============================================================================

/// A stream of rewritten UTF-8 chunks.
///
/// Created by [`crate::rewrite_stream`] or [`Rewriter::rewrite_stream`].
#[must_use = "streams do nothing unless polled"]
#[derive(Debug)]
pub struct RewriteStream<S> {
    /// `None` once the source has ended or failed; dropping it releases it.
    source: Option<S>,
    rewriter: Rewriter,
    decoder: Utf8Decoder,
    carry: String,
}

impl<S> RewriteStream<S> {
    pub(crate) fn new(source: S, rewriter: Rewriter) -> Self {
        tracing::debug!(
            window = rewriter.policy().stream_window(),
            "starting rewrite stream"
        );
        Self {
            source: Some(source),
            rewriter,
            decoder: Utf8Decoder::default(),
            carry: String::new(),
        }
    }

    /// Bytes of text currently held back awaiting the next chunk.
    pub fn carried_len(&self) -> usize {
        self.carry.len()
    }

    /// Decodes one chunk and returns the part that can be emitted now.
    fn push_chunk(&mut self, chunk: &[u8]) -> Option<Vec<u8>> {
        let mut text = std::mem::take(&mut self.carry);
        text.push_str(&self.decoder.decode(chunk));

        let split = undecided_from(&text, self.rewriter.policy().stream_window());
        self.carry = text.split_off(split);
        self.emit(&text)
    }

    /// Flushes carried text once the source has ended.
    fn finish(&mut self) -> Option<Vec<u8>> {
        let mut text = std::mem::take(&mut self.carry);
        text.push_str(&self.decoder.finish());
        self.emit(&text)
    }

    fn emit(&self, text: &str) -> Option<Vec<u8>> {
        if text.is_empty() {
            return None;
        }
        Some(self.rewriter.rewrite_leaf(text).into_owned().into_bytes())
    }
}

impl<S, E> Stream for RewriteStream<S>
where
    S: Stream<Item = Result<Vec<u8>, E>> + Unpin,
{
    type Item = Result<Vec<u8>, StreamError<E>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;
        loop {
            let Some(source) = this.source.as_mut() else {
                return Poll::Ready(None);
            };
            match ready!(source.poll_next_unpin(cx)) {
                Some(Ok(chunk)) => {
                    if let Some(rewritten) = this.push_chunk(&chunk) {
                        return Poll::Ready(Some(Ok(rewritten)));
                    }
                }
                Some(Err(err)) => {
                    this.source = None;
                    this.carry.clear();
                    this.rewriter.stats().record_error();
                    tracing::warn!("source stream failed; ending rewrite stream with an error");
                    return Poll::Ready(Some(Err(StreamError::Source(err))));
                }
                None => {
                    this.source = None;
                    tracing::debug!("source stream finished");
                    return Poll::Ready(this.finish().map(Ok));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => (0, source.size_hint().1.and_then(|upper| upper.checked_add(1))),
            None => (0, Some(0)),
        }
    }
}

impl Rewriter {
    /// Wraps `source` so every chunk it yields is rewritten.
    ///
    /// Output order matches input order. See [`RewriteStream`] for how
    /// chunk boundaries are handled.
    pub fn rewrite_stream<S, E>(&self, source: S) -> RewriteStream<S>
    where
        S: Stream<Item = Result<Vec<u8>, E>> + Unpin,
    {
        RewriteStream::new(source, self.clone())
    }
}
