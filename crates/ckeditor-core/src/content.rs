//! Helpers for the HTML the editor hands back.
//!
//! The editor reports a visually empty document as `<p>&nbsp;</p>` rather
//! than an empty string, so callers checking for "no content" need to treat
//! both the same way.

/// What the editor emits for a document with nothing in it.
const EMPTY_PARAGRAPH: &str = "<p>&nbsp;</p>";

/// True if `html` is blank or only the editor's empty paragraph.
///
/// Surrounding whitespace is ignored and the paragraph comparison ignores
/// case across the whole string. Whitespace follows JavaScript's
/// `String.prototype.trim`.
pub fn is_content_empty(html: &str) -> bool {
    let trimmed = trim_js_whitespace(html);
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(EMPTY_PARAGRAPH)
}

/// Trim surrounding whitespace, collapsing empty content to `""`.
///
/// Non-empty content is returned as-is apart from the trim; its case is
/// preserved.
pub fn trim_content(html: &str) -> &str {
    let trimmed = trim_js_whitespace(html);
    if is_content_empty(trimmed) { "" } else { trimmed }
}

/// JavaScript whitespace: Unicode `White_Space` plus the BOM, minus NEL.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

fn trim_js_whitespace(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_empty() {
        assert!(is_content_empty(""));
        assert!(is_content_empty("   \n\t "));
    }

    #[test]
    fn empty_paragraph_any_case_and_padding() {
        assert!(is_content_empty("<p>&nbsp;</p>"));
        assert!(is_content_empty("  <P>&NBSP;</P>  "));
        assert!(is_content_empty("\n<p>&Nbsp;</P>\n"));
    }

    #[test]
    fn real_content_is_not_empty() {
        assert!(!is_content_empty("<p>Hello</p>"));
        assert!(!is_content_empty("<p>&nbsp;</p><p>&nbsp;</p>"));
        assert!(!is_content_empty("<p> </p>"));
    }

    #[test]
    fn trim_keeps_content_case() {
        assert_eq!(trim_content("  <p>Hello</p>  "), "<p>Hello</p>");
        assert_eq!(trim_content("<P>MiXeD</P>"), "<P>MiXeD</P>");
    }

    #[test]
    fn trim_collapses_empty_content() {
        assert_eq!(trim_content("  <P>&NBSP;</P>  "), "");
        assert_eq!(trim_content(" \n "), "");
    }

    #[test]
    fn trim_agrees_with_emptiness_check() {
        let samples = [
            "",
            "  ",
            "<p>&nbsp;</p>",
            " <p>&NBSP;</p>\n",
            "<p>a</p>",
            "\t<h2>Title</h2> ",
            "&nbsp;",
            "<p>\u{a0}</p>",
            "\u{feff}<p>x</p>",
            "\u{85}<p>&nbsp;</p>",
        ];
        for sample in samples {
            let trimmed = trim_content(sample);
            if is_content_empty(sample) {
                assert_eq!(trimmed, "", "{sample:?}");
            } else {
                assert_eq!(trimmed, trim_js_whitespace(sample), "{sample:?}");
            }
            assert_eq!(trim_content(trimmed), trimmed, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert!(is_content_empty("\u{feff}<p>&nbsp;</p>"));
        assert!(is_content_empty("\u{feff}"));
        assert_eq!(trim_content("\u{feff}<p>Hi</p>\u{3000}"), "<p>Hi</p>");
    }

    #[test]
    fn next_line_is_not_trimmed() {
        assert!(!is_content_empty("\u{85}<p>&nbsp;</p>"));
        assert_eq!(trim_content("\u{85}<p>Hi</p> "), "\u{85}<p>Hi</p>");
    }
}
