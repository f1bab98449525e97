//! Inline tokenization of block text into [`TextSpan`]s.
//!
//! The pipeline runs a fixed sequence of passes over a single plain span:
//! `**` bold, `_` italic, `` ` `` code, images, then links. Each pass only
//! looks inside spans that are still plain, so styles cannot nest: `**[a](b)**`
//! yields a bold span with the literal link text. Overlapping markup is
//! resolved purely by this pass order.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::span::{SpanKind, TextSpan};

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Parse inline markdown into an ordered list of spans.
pub fn parse_inline(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(&spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(&spans, "_", SpanKind::Italic)?;
    let spans = split_delimiter(&spans, "`", SpanKind::Code)?;
    let spans = split_images(&spans);
    Ok(split_links(&spans))
}

/// Split every plain span on `delimiter`, turning the enclosed parts into
/// spans of `kind`. Other spans are passed through untouched.
///
/// `kind` must not be [`SpanKind::Link`] or [`SpanKind::Image`].
pub fn split_delimiter(
    spans: &[TextSpan],
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ParseError> {
    if kind.has_url() {
        return Err(ParseError::UnsupportedDelimiterKind { kind });
    }
    if delimiter.is_empty() {
        return Ok(spans.to_vec());
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span.clone());
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 1 { kind } else { SpanKind::Plain };
            out.push(TextSpan::new(part, part_kind));
        }
    }
    Ok(out)
}

/// All `![alt](url)` occurrences in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    captures(&IMAGE_PATTERN, text)
}

/// All `[label](url)` occurrences in `text`, left to right.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    captures(&LINK_PATTERN, text)
}

fn captures(pattern: &Regex, text: &str) -> Vec<(String, String)> {
    pattern
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Split `![alt](url)` constructs out of plain spans.
pub fn split_images(spans: &[TextSpan]) -> Vec<TextSpan> {
    split_matches(spans, extract_images, |alt, url| {
        (format!("![{alt}]({url})"), TextSpan::image(alt, url))
    })
}

/// Split `[label](url)` constructs out of plain spans.
///
/// Run [`split_images`] first, otherwise the image syntax is taken for a link
/// with a stray `!` in front of it.
pub fn split_links(spans: &[TextSpan]) -> Vec<TextSpan> {
    split_matches(spans, extract_links, |label, url| {
        (format!("[{label}]({url})"), TextSpan::link(label, url))
    })
}

fn split_matches(
    spans: &[TextSpan],
    extract: fn(&str) -> Vec<(String, String)>,
    build: impl Fn(&str, &str) -> (String, TextSpan),
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span.clone());
            continue;
        }

        let found = extract(&span.text);
        if found.is_empty() {
            out.push(span.clone());
            continue;
        }

        let mut rest = span.text.as_str();
        for (label, url) in &found {
            let (literal, matched) = build(label, url);
            let Some((before, after)) = rest.split_once(literal.as_str()) else {
                break;
            };
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(matched);
            rest = after;
        }
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn span(text: &str, kind: SpanKind) -> TextSpan {
        TextSpan::new(text, kind)
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(
            parse_inline("This is **bold** and _italic_ text").unwrap(),
            vec![
                TextSpan::plain("This is "),
                span("bold", SpanKind::Bold),
                TextSpan::plain(" and "),
                span("italic", SpanKind::Italic),
                TextSpan::plain(" text"),
            ]
        );
    }

    #[test]
    fn every_construct() {
        let text = "This is **text** with an _italic_ word and a `code block` and an \
                    ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            parse_inline(text).unwrap(),
            vec![
                TextSpan::plain("This is "),
                span("text", SpanKind::Bold),
                TextSpan::plain(" with an "),
                span("italic", SpanKind::Italic),
                TextSpan::plain(" word and a "),
                span("code block", SpanKind::Code),
                TextSpan::plain(" and an "),
                TextSpan::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                TextSpan::plain(" and a "),
                TextSpan::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(
            parse_inline("nothing here").unwrap(),
            vec![TextSpan::plain("nothing here")]
        );
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert_eq!(parse_inline("").unwrap(), vec![]);
    }

    #[rstest]
    #[case("a **b", "**")]
    #[case("a _b", "_")]
    #[case("a `b", "`")]
    fn unmatched_delimiter(#[case] text: &str, #[case] delimiter: &str) {
        assert_eq!(
            parse_inline(text),
            Err(ParseError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: text.to_string(),
            })
        );
    }

    #[test]
    fn unmatched_error_names_the_offending_plain_part() {
        let err = parse_inline("**bold** then _one").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnmatchedDelimiter {
                delimiter: "_".to_string(),
                text: " then _one".to_string(),
            }
        );
    }

    #[test]
    fn split_keeps_non_plain_spans() {
        let spans = vec![
            span("a_b_c", SpanKind::Code),
            TextSpan::plain("x _y_ z"),
        ];
        assert_eq!(
            split_delimiter(&spans, "_", SpanKind::Italic).unwrap(),
            vec![
                span("a_b_c", SpanKind::Code),
                TextSpan::plain("x "),
                span("y", SpanKind::Italic),
                TextSpan::plain(" z"),
            ]
        );
    }

    #[rstest]
    #[case(SpanKind::Link)]
    #[case(SpanKind::Image)]
    fn split_rejects_url_kinds(#[case] kind: SpanKind) {
        assert_eq!(
            split_delimiter(&[TextSpan::plain("a|b|c")], "|", kind),
            Err(ParseError::UnsupportedDelimiterKind { kind })
        );
    }

    #[rstest]
    #[case("**bold**", vec![span("bold", SpanKind::Bold)])]
    #[case("****", vec![])]
    #[case("a****b", vec![TextSpan::plain("a"), TextSpan::plain("b")])]
    fn split_drops_empty_parts(#[case] text: &str, #[case] expected: Vec<TextSpan>) {
        assert_eq!(
            split_delimiter(&[TextSpan::plain(text)], "**", SpanKind::Bold).unwrap(),
            expected
        );
    }

    #[test]
    fn extract_images_and_links() {
        let text = "This is text with a ![rick roll](https://i.imgur.com/aKaOqIh.gif) and \
                    ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg)";
        assert_eq!(
            extract_images(text),
            vec![
                (
                    "rick roll".to_string(),
                    "https://i.imgur.com/aKaOqIh.gif".to_string()
                ),
                (
                    "obi wan".to_string(),
                    "https://i.imgur.com/fJRm4Vk.jpeg".to_string()
                ),
            ]
        );
        assert_eq!(
            extract_links("a [to boot dev](https://www.boot.dev) link"),
            vec![(
                "to boot dev".to_string(),
                "https://www.boot.dev".to_string()
            )]
        );
        assert_eq!(extract_links("[broken(link)"), vec![]);
    }

    #[test]
    fn links_in_order() {
        assert_eq!(
            split_links(&[TextSpan::plain(
                "See [docs](http://x) and [more](http://y)."
            )]),
            vec![
                TextSpan::plain("See "),
                TextSpan::link("docs", "http://x"),
                TextSpan::plain(" and "),
                TextSpan::link("more", "http://y"),
                TextSpan::plain("."),
            ]
        );
    }

    #[test]
    fn repeated_links_are_each_extracted() {
        assert_eq!(
            split_links(&[TextSpan::plain("[a](u) [a](u)")]),
            vec![
                TextSpan::link("a", "u"),
                TextSpan::plain(" "),
                TextSpan::link("a", "u"),
            ]
        );
    }

    #[test]
    fn images_before_links() {
        let spans = split_images(&[TextSpan::plain("![alt](i.png) and [l](u)")]);
        assert_eq!(
            spans,
            vec![
                TextSpan::image("alt", "i.png"),
                TextSpan::plain(" and [l](u)"),
            ]
        );
        assert_eq!(
            split_links(&spans),
            vec![
                TextSpan::image("alt", "i.png"),
                TextSpan::plain(" and "),
                TextSpan::link("l", "u"),
            ]
        );
    }

    #[test]
    fn link_pass_alone_keeps_the_bang() {
        assert_eq!(
            split_links(&[TextSpan::plain("![alt](i.png)")]),
            vec![TextSpan::plain("!"), TextSpan::link("alt", "i.png")]
        );
    }

    #[test]
    fn no_match_passes_through() {
        let spans = vec![TextSpan::plain("no links"), span("[a](b)", SpanKind::Code)];
        assert_eq!(split_links(&spans), spans);
        assert_eq!(split_images(&spans), spans);
    }

    #[test]
    fn styles_do_not_nest() {
        assert_eq!(
            parse_inline("**[a](b)**").unwrap(),
            vec![span("[a](b)", SpanKind::Bold)]
        );
    }
}
