//! Query tokenization and pattern-type rewriting.
//!
//! This module provides the pre-parse stage of a search query, including:
//! - Chunk tokenization (quoted field values, quoted strings, whitespace, words)
//! - Pattern-type directive recognition
//! - Mode resolution and literal-mode quoting

mod pattern_type;
mod rewrite;
mod tokenizer;

pub use pattern_type::PatternType;
pub use rewrite::{resolve_pattern_type, ResolvedQuery};
pub use tokenizer::{tokenize_query_chunks, QueryChunk, QueryChunkKind};
