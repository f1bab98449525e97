use thiserror::Error;

use crate::span::SpanKind;

/// Errors raised while turning markdown into spans or html nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A plain span contains an odd number of `delimiter` occurrences.
    #[error("unmatched delimiter '{delimiter}' in text: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },

    /// Delimited text cannot produce spans of a kind that needs a url.
    #[error("delimiter cannot produce {kind:?} spans, they need a url")]
    UnsupportedDelimiterKind { kind: SpanKind },

    /// A span whose kind and url do not form one of the known span shapes.
    #[error("unknown span kind {kind:?} (url: {url:?})")]
    UnknownSpanKind { kind: SpanKind, url: Option<String> },
}
