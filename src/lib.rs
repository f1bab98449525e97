mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;
mod render;
mod span;

pub use block::{Block, BlockType};
pub use config::{Config, ConfigError, RenderConfig};
pub use error::ParseError;
pub use html::{HtmlNode, Props, props_to_html};
pub use inline::{
    extract_images, extract_links, parse_inline, split_delimiter, split_images, split_links,
};
pub use parser::{classify, parse, segment, strip_frontmatter};
pub use render::{block_to_html_node, markdown_to_html_node, span_to_html_node};
pub use span::{SpanKind, TextSpan};

/// Convert markdown to an html string using default config.
pub fn markdown_to_html(markdown: &str) -> Result<String, ParseError> {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to an html string with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> Result<String, ParseError> {
    Ok(markdown_to_html_node(markdown, config)?.to_html())
}
