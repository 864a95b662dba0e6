//! End-to-end tests for single-string delimiter rewriting.
//!
//! These tests exercise:
//! - span detection (`$...$` versus `$$...$$`),
//! - the eligibility guards (URLs, converted text, length), and
//! - the word-count cutoff per span.

use mathdelim::{RewritePolicy, Rewriter, Span, SpanScanner, rewrite_text};

fn words(count: usize) -> String {
    (0..count)
        .map(|index| char::from(b'a' + u8::try_from(index % 26).unwrap()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

mod conversion {
    use super::*;

    #[test]
    fn converts_single_inline_span() {
        assert_eq!(rewrite_text("Let $x$ be real"), r"Let \(x\) be real");
    }

    #[test]
    fn converts_every_span_in_a_string() {
        assert_eq!(
            rewrite_text("$a+b$ equals $c$."),
            r"\(a+b\) equals \(c\)."
        );
    }

    #[test]
    fn leaves_display_math_alone() {
        let text = "Energy: $$E = mc^2$$ and $$\\int f$$";
        assert_eq!(rewrite_text(text), text);
    }

    #[test]
    fn converts_inline_next_to_display_math() {
        assert_eq!(
            rewrite_text("$$x^2$$ where $x$ is real"),
            r"$$x^2$$ where \(x\) is real"
        );
    }

    #[test]
    fn spans_do_not_cross_newlines() {
        let text = "cost $5\nand $6";
        assert_eq!(rewrite_text(text), text);
    }

    #[test]
    fn text_without_dollars_is_borrowed() {
        assert!(matches!(
            rewrite_text("plain text"),
            std::borrow::Cow::Borrowed(_)
        ));
    }

    #[test]
    fn multibyte_content_is_preserved() {
        assert_eq!(rewrite_text("angle $θ = π$ °"), r"angle \(θ = π\) °");
    }
}

mod guards {
    use super::*;

    #[test]
    fn url_guard_leaves_text_unchanged() {
        let text = "See https://a.b/$1$ for details";
        assert_eq!(rewrite_text(text), text);
    }

    #[test]
    fn plain_http_is_guarded_too() {
        let text = "http://x.y/$a$";
        assert_eq!(rewrite_text(text), text);
    }

    #[test]
    fn url_guard_can_be_disabled() {
        let rewriter = Rewriter::new(RewritePolicy::default().with_skip_urls(false));
        assert_eq!(
            rewriter.rewrite_text("https://a.b and $x$"),
            r"https://a.b and \(x\)"
        );
    }

    #[test]
    fn already_converted_text_is_left_alone() {
        let text = r"\(a\) and $b$";
        assert_eq!(rewrite_text(text), text);
    }

    #[test]
    fn over_long_text_is_left_alone() {
        let rewriter = Rewriter::new(RewritePolicy::default().with_max_chars(8));
        let text = "$x$ and more";
        assert_eq!(rewriter.rewrite_text(text), text);
        assert_eq!(rewriter.rewrite_text("$x$ y"), r"\(x\) y");
    }
}

mod word_cutoff {
    use super::*;

    #[test]
    fn fifteen_words_convert() {
        let text = format!("${}$", words(15));
        assert_eq!(rewrite_text(&text), format!(r"\({}\)", words(15)));
    }

    #[test]
    fn sixteen_words_stay() {
        let text = format!("${}$", words(16));
        assert_eq!(rewrite_text(&text), text);
    }

    #[test]
    fn the_documented_example_converts() {
        assert_eq!(
            rewrite_text("$a b c d e f g h i j k l m n o$"),
            r"\(a b c d e f g h i j k l m n o\)"
        );
    }

    #[test]
    fn cutoff_is_per_span() {
        let text = format!("${}$ and $y$", words(20));
        assert_eq!(rewrite_text(&text), format!("${}$ and \\(y\\)", words(20)));
    }

    #[test]
    fn cutoff_is_configurable() {
        let rewriter = Rewriter::new(RewritePolicy::default().with_max_words(2));
        assert_eq!(rewriter.rewrite_text("$a b$"), r"\(a b\)");
        assert_eq!(rewriter.rewrite_text("$a b c$"), "$a b c$");
    }
}

mod properties {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "plain",
        "$x$",
        "$$x$$",
        "a $b$ c $$d$$ e $f",
        "$5 and $10",
        "$$$x$$$",
        "$ $",
        "mixed $a$\n$b$ lines",
        "price: $3.50, tax: $0.20",
        r"\(done\) $x$",
    ];

    #[test]
    fn rewriting_is_idempotent() {
        for sample in SAMPLES {
            let once = rewrite_text(sample).into_owned();
            let twice = rewrite_text(&once).into_owned();
            assert_eq!(once, twice, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn display_only_strings_are_untouched() {
        for sample in ["$$a$$", "$$a$$ and $$b$$", "x $$\\frac{1}{2}$$ y"] {
            assert_eq!(rewrite_text(sample), sample);
        }
    }
}

mod scanner {
    use super::*;

    #[test]
    fn reports_byte_offsets_and_inner_text() {
        let spans: Vec<Span<'_>> = SpanScanner::new("a $x$ b $$y$$ $z w$").collect();
        let inner: Vec<&str> = spans.iter().map(|span| span.inner).collect();
        assert_eq!(inner, ["x", "z w"]);
        assert_eq!((spans[0].start, spans[0].end), (2, 5));
        assert_eq!(spans[1].word_count(), 2);
    }
}
