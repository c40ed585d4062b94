//! Pattern-type resolution for search queries.
//!
//! This crate rewrites a raw search query before structured parsing:
//! - `patterntype:` directives are stripped and folded into a single mode
//! - Regexp mode passes the remaining text through untouched
//! - Literal mode keeps `field:value` tokens and quotes everything else

pub mod error;
pub mod query;
pub mod settings;

// Re-export main types
pub use error::{PatternTypeError, Result};
pub use query::{
    resolve_pattern_type, tokenize_query_chunks, PatternType, QueryChunk, QueryChunkKind,
    ResolvedQuery,
};
pub use settings::{PatternTypeSettings, PatternTypeSettingsStore};
