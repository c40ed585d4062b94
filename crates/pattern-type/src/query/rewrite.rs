//! Pattern-type resolution and query rewriting.
//!
//! Directives are removed from the chunk stream and the surviving chunks
//! are rebuilt depending on the resolved mode:
//! - Regexp: concatenated and trimmed, nothing is quoted.
//! - Literal: every field token comes first, joined by single spaces, then
//!   all other text as one escaped, double-quoted string.
//!
//! Literal rewriting moves fields ahead of free text regardless of where
//! they appeared, and it is one-shot: feeding the output back in escapes it
//! again.

use serde::{Deserialize, Serialize};

use super::pattern_type::PatternType;
use super::tokenizer::{tokenize_query_chunks, QueryChunk};

/// A query with its `patterntype:` directives resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedQuery {
    pub query: String,
    pub pattern_type: PatternType,
}

impl ResolvedQuery {
    pub fn resolve(input: &str, default: PatternType) -> Self {
        let mut pattern_type = default;
        let mut remaining = Vec::new();

        for chunk in tokenize_query_chunks(input) {
            match PatternType::from_directive(chunk.as_str()) {
                Some(directive) => {
                    log::trace!("consumed directive {:?} -> {directive}", chunk.as_str());
                    pattern_type = directive;
                }
                None => remaining.push(chunk),
            }
        }

        let query = if pattern_type.is_regexp() {
            rebuild_regexp_query(&remaining)
        } else {
            rebuild_literal_query(&remaining)
        };
        log::debug!("resolved pattern type {pattern_type} (default {default})");

        Self {
            query,
            pattern_type,
        }
    }
}

/// Strips `patterntype:` directives from `input` and rewrites it for the
/// resolved mode. Returns the rewritten query and whether it is a regexp.
pub fn resolve_pattern_type(input: &str, default_to_regexp: bool) -> (String, bool) {
    let resolved = ResolvedQuery::resolve(input, PatternType::from_default(default_to_regexp));
    (resolved.query, resolved.pattern_type.is_regexp())
}

fn rebuild_regexp_query(chunks: &[QueryChunk]) -> String {
    concat_chunks(chunks.iter()).trim().to_string()
}

fn rebuild_literal_query(chunks: &[QueryChunk]) -> String {
    let (fields, text): (Vec<&QueryChunk>, Vec<&QueryChunk>) =
        chunks.iter().partition(|chunk| chunk.is_field());

    let mut pieces = Vec::with_capacity(2);
    if !fields.is_empty() {
        pieces.push(
            fields
                .iter()
                .map(|chunk| chunk.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        );
    }

    let text = concat_chunks(text.into_iter());
    let text = text.trim();
    if !text.is_empty() {
        pieces.push(quote_literal(text));
    }

    pieces.join(" ")
}

fn concat_chunks<'a>(chunks: impl Iterator<Item = &'a QueryChunk>) -> String {
    chunks.map(QueryChunk::as_str).collect()
}

fn quote_literal(text: &str) -> String {
    let escaped = text.replace('\\', r"\\").replace('"', r#"\""#);
    format!("\"{escaped}\"")
}
