use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::block::{Block, BlockType};
use crate::config::Config;
use crate::error::ParseError;
use crate::html::HtmlNode;
use crate::inline::parse_inline;
use crate::parser::{parse, strip_frontmatter};
use crate::span::{SpanKind, TextSpan};

static INFO_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_+#.-]+$").unwrap());

/// Convert a whole document into a single html tree under the configured root tag.
pub fn markdown_to_html_node(markdown: &str, config: &Config) -> Result<HtmlNode, ParseError> {
    let markdown = if config.render.strip_frontmatter {
        strip_frontmatter(markdown)
    } else {
        markdown
    };

    let blocks = parse(markdown);
    debug!(blocks = blocks.len(), "parsed document");

    let children = blocks
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent(config.render.root_tag.as_str(), children))
}

/// Lower one classified block to its html node.
pub fn block_to_html_node(block: &Block) -> Result<HtmlNode, ParseError> {
    match block.kind {
        BlockType::Heading => heading_to_html(&block.text),
        BlockType::Code => Ok(code_to_html(&block.text)),
        BlockType::Quote => {
            let text = block
                .lines()
                .map(|line| line.strip_prefix('>').unwrap_or(line).trim())
                .collect::<Vec<_>>()
                .join(" ");
            Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
        }
        BlockType::UnorderedList => {
            list_to_html("ul", block, |line| line.strip_prefix("- ").unwrap_or(line))
        }
        BlockType::OrderedList => list_to_html("ol", block, |line| {
            line.split_once(". ").map_or(line, |(_, item)| item)
        }),
        BlockType::Paragraph => {
            let text = block.lines().collect::<Vec<_>>().join(" ");
            Ok(HtmlNode::parent("p", text_to_children(&text)?))
        }
    }
}

/// Project a single span onto a leaf node.
pub fn span_to_html_node(span: &TextSpan) -> Result<HtmlNode, ParseError> {
    let node = match (span.kind, &span.url) {
        (SpanKind::Plain, None) => HtmlNode::text(span.text.as_str()),
        (SpanKind::Bold, None) => HtmlNode::leaf("b", span.text.as_str()),
        (SpanKind::Italic, None) => HtmlNode::leaf("i", span.text.as_str()),
        (SpanKind::Code, None) => HtmlNode::leaf("code", span.text.as_str()),
        (SpanKind::Link, Some(url)) => {
            HtmlNode::leaf("a", span.text.as_str()).with_prop("href", url.as_str())
        }
        (SpanKind::Image, Some(url)) => HtmlNode::leaf("img", "")
            .with_prop("src", url.as_str())
            .with_prop("alt", span.text.as_str()),
        (kind, url) => {
            return Err(ParseError::UnknownSpanKind {
                kind,
                url: url.clone(),
            });
        }
    };
    Ok(node)
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    parse_inline(text)?.iter().map(span_to_html_node).collect()
}

fn heading_to_html(text: &str) -> Result<HtmlNode, ParseError> {
    let content = text.trim_start_matches('#');
    let level = (text.len() - content.len()).clamp(1, 6);
    let content = content.trim_start();
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(content)?))
}

fn code_to_html(text: &str) -> HtmlNode {
    let inner = text
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(text);

    // Code bodies are emitted verbatim, never inline parsed. Only a lone
    // language token on the fence line is an info string.
    let (language, body) = match inner.split_once('\n') {
        Some((info, body)) if INFO_STRING.is_match(info.trim()) => (info.trim(), body),
        Some((info, body)) if info.trim().is_empty() => ("", body),
        _ => ("", inner),
    };

    let mut code = HtmlNode::leaf("code", body);
    if !language.is_empty() {
        code = code.with_prop("class", format!("language-{language}"));
    }
    HtmlNode::parent("pre", vec![code])
}

fn list_to_html(
    tag: &str,
    block: &Block,
    item_text: impl Fn(&str) -> &str,
) -> Result<HtmlNode, ParseError> {
    let items = block
        .lines()
        .map(|line| -> Result<HtmlNode, ParseError> {
            Ok(HtmlNode::parent("li", text_to_children(item_text(line))?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tag, items))
}
