use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::block::{Block, BlockType};

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6} .+$").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)^```.+```$").unwrap());
static QUOTE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>.+$").unwrap());
static UNORDERED_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^- .+$").unwrap());
static ORDERED_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d\. .+$").unwrap());

/// Strip YAML frontmatter from the beginning of markdown content
pub fn strip_frontmatter(markdown: &str) -> &str {
    if !markdown.starts_with("---") {
        return markdown;
    }
    // Find the closing ---
    if let Some(end) = markdown[3..].find("\n---") {
        let after_frontmatter = &markdown[3 + end + 4..];
        after_frontmatter.trim_start_matches(['\r', '\n'])
    } else {
        markdown
    }
}

/// Parse markdown text into a list of classified blocks
pub fn parse(markdown: &str) -> Vec<Block> {
    segment(markdown).into_iter().map(Block::new).collect()
}

/// Split a document into blocks on blank lines.
///
/// Every line of a block is trimmed; lines holding only whitespace count as
/// blank.
pub fn segment(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

/// Decide the structural type of a segmented block
pub fn classify(block: &str) -> BlockType {
    let kind = if HEADING.is_match(block) {
        BlockType::Heading
    } else if CODE.is_match(block) {
        BlockType::Code
    } else if every_line(block, &QUOTE_LINE) {
        BlockType::Quote
    } else if every_line(block, &UNORDERED_LINE) {
        BlockType::UnorderedList
    } else if every_line(block, &ORDERED_LINE) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    };
    trace!(?kind, "classified block");
    kind
}

fn every_line(block: &str, pattern: &Regex) -> bool {
    block.split('\n').all(|line| pattern.is_match(line))
}
