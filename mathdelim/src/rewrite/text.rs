//! The delimiter rewrite itself.
//!
//! This is a pure string transformation: it neither counts nor logs. Callers
//! that need diagnostics go through [`crate::Rewriter`].

use std::borrow::Cow;

use super::scanner::SpanScanner;
use crate::policy::{INLINE_CLOSE, INLINE_OPEN, RewritePolicy};

/// Converts eligible `$...$` spans of `text` to `\(...\)`.
///
/// Returns `Cow::Borrowed` exactly when the output equals the input, so the
/// variant doubles as the "modified" signal.
pub(crate) fn rewrite_inline<'a>(policy: &RewritePolicy, text: &'a str) -> Cow<'a, str> {
    if !policy.admits(text) {
        return Cow::Borrowed(text);
    }

    let mut output: Option<String> = None;
    let mut copied = 0;
    for span in SpanScanner::new(text) {
        if !policy.accepts_span(span.inner) {
            continue;
        }
        let output = output.get_or_insert_with(|| String::with_capacity(text.len() + 8));
        output.push_str(&text[copied..span.start]);
        output.push_str(INLINE_OPEN);
        output.push_str(span.inner);
        output.push_str(INLINE_CLOSE);
        copied = span.end;
    }

    match output {
        Some(mut output) => {
            output.push_str(&text[copied..]);
            Cow::Owned(output)
        }
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str) -> Cow<'_, str> {
        rewrite_inline(&RewritePolicy::default(), text)
    }

    #[test]
    fn converts_inline_span() {
        assert_eq!(rewrite("area $\\pi r^2$ here"), r"area \(\pi r^2\) here");
    }

    #[test]
    fn converts_every_span() {
        assert_eq!(rewrite("$a$, $b$ and $c$"), r"\(a\), \(b\) and \(c\)");
    }

    #[test]
    fn leaves_display_math_borrowed() {
        assert!(matches!(rewrite("$$x^2$$"), Cow::Borrowed("$$x^2$$")));
    }

    #[test]
    fn converts_inline_beside_display_math() {
        assert_eq!(rewrite("$$a$$ and $b$"), r"$$a$$ and \(b\)");
    }

    #[test]
    fn no_dollar_is_borrowed() {
        assert!(matches!(rewrite("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn wordy_span_is_kept_but_later_spans_convert() {
        let wordy = "$one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen$";
        let text = format!("{wordy} then $y$");
        assert_eq!(rewrite(&text), format!(r"{wordy} then \(y\)"));
    }

    #[test]
    fn only_rejected_spans_stay_borrowed() {
        let policy = RewritePolicy::default().with_max_words(1);
        assert!(matches!(
            rewrite_inline(&policy, "$a b$"),
            Cow::Borrowed("$a b$")
        ));
    }

    #[test]
    fn multiline_text_converts_per_line() {
        assert_eq!(rewrite("$a$\n$b\nc$"), "\\(a\\)\n$b\nc$");
    }
}
