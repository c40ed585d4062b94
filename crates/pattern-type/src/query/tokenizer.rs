//! Query chunk tokenizer.
//!
//! Splitting happens in two phases:
//! 1. Every `field:"value"` / `field:'value'` span is extracted from the whole
//!    input, leftmost-first and non-overlapping. These chunks come first.
//! 2. What is left after removing those spans is split into double-quoted
//!    runs, whitespace runs, and non-whitespace runs.
//!
//! Quoted-field chunks are therefore hoisted ahead of everything else, even
//! when they appeared later in the raw input.

use memchr::memchr2;

// ---------------------------------------------------------------------------
// Chunk types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryChunkKind {
    /// `field:"value"` or `field:'value'` extracted in the first phase.
    QuotedField,
    /// Double-quoted run, e.g. `"foo bar"`.
    Quoted,
    Whitespace,
    Word,
}

/// A contiguous piece of the query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryChunk {
    kind: QueryChunkKind,
    text: String,
}

impl QueryChunk {
    fn new(kind: QueryChunkKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }

    pub fn kind(&self) -> QueryChunkKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Whether the chunk starts with a `-?[a-zA-Z]+:` field prefix.
    pub fn is_field(&self) -> bool {
        match self.kind {
            QueryChunkKind::QuotedField => true,
            _ => field_prefix_end(self.text.as_bytes(), 0).is_some(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Splits `input` into quoted-field chunks followed by the remaining chunks.
///
/// Every byte of the input ends up in exactly one chunk. Unbalanced quotes
/// never fail; the stray quote is treated as ordinary text.
pub fn tokenize_query_chunks(input: &str) -> Vec<QueryChunk> {
    let (mut chunks, remainder) = extract_quoted_fields(input);
    chunks.extend(split_remainder(&remainder));
    chunks
}

fn extract_quoted_fields(input: &str) -> (Vec<QueryChunk>, String) {
    let bytes = input.as_bytes();
    let mut chunks = Vec::new();
    let mut remainder = String::with_capacity(input.len());
    let mut copied = 0usize;
    let mut cursor = 0usize;

    while cursor < bytes.len() {
        let Some(end) = match_quoted_field(bytes, cursor) else {
            cursor += 1;
            continue;
        };
        remainder.push_str(&input[copied..cursor]);
        chunks.push(QueryChunk::new(
            QueryChunkKind::QuotedField,
            &input[cursor..end],
        ));
        copied = end;
        cursor = end;
    }
    remainder.push_str(&input[copied..]);

    (chunks, remainder)
}

fn split_remainder(remainder: &str) -> Vec<QueryChunk> {
    let bytes = remainder.as_bytes();
    let mut chunks = Vec::new();
    let mut cursor = 0usize;

    while cursor < bytes.len() {
        let quoted_end = if bytes[cursor] == b'"' {
            scan_quoted_value(bytes, cursor, b'"')
        } else {
            None
        };
        let (kind, end) = match quoted_end {
            Some(end) => (QueryChunkKind::Quoted, end),
            None if is_query_space(bytes[cursor]) => (
                QueryChunkKind::Whitespace,
                run_end(bytes, cursor, is_query_space),
            ),
            None => (
                QueryChunkKind::Word,
                run_end(bytes, cursor, |byte| !is_query_space(byte)),
            ),
        };
        chunks.push(QueryChunk::new(kind, &remainder[cursor..end]));
        cursor = end;
    }

    chunks
}

// ---------------------------------------------------------------------------
// Matchers
// ---------------------------------------------------------------------------

/// Matches `\b-?[a-zA-Z]+:` followed by a quoted value at `start`.
fn match_quoted_field(bytes: &[u8], start: usize) -> Option<usize> {
    if !is_word_boundary(bytes, start) {
        return None;
    }
    let value_start = field_prefix_end(bytes, start)?;
    match bytes.get(value_start) {
        Some(&quote @ (b'"' | b'\'')) => scan_quoted_value(bytes, value_start, quote),
        _ => None,
    }
}

/// Returns the index just past the colon of a `-?[a-zA-Z]+:` prefix.
fn field_prefix_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut cursor = start;
    if bytes.get(cursor) == Some(&b'-') {
        cursor += 1;
    }
    let letters_start = cursor;
    while bytes.get(cursor).is_some_and(u8::is_ascii_alphabetic) {
        cursor += 1;
    }
    if cursor == letters_start || bytes.get(cursor) != Some(&b':') {
        return None;
    }
    Some(cursor + 1)
}

/// Scans a quoted value opened at `open`, returning the index past its
/// closing quote. A backslash escapes any following byte except a newline.
fn scan_quoted_value(bytes: &[u8], open: usize, quote: u8) -> Option<usize> {
    let mut cursor = open + 1;
    loop {
        cursor += memchr2(quote, b'\\', &bytes[cursor..])?;
        if bytes[cursor] == quote {
            return Some(cursor + 1);
        }
        match bytes.get(cursor + 1) {
            None | Some(b'\n') => return None,
            Some(_) => cursor += 2,
        }
    }
}

fn run_end(bytes: &[u8], start: usize, accept: impl Fn(u8) -> bool) -> usize {
    bytes[start..]
        .iter()
        .position(|&byte| !accept(byte))
        .map_or(bytes.len(), |offset| start + offset)
}

// ASCII only; non-ASCII bytes are never word characters or whitespace.
fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn is_word_boundary(bytes: &[u8], at: usize) -> bool {
    let before = at
        .checked_sub(1)
        .is_some_and(|index| is_word_byte(bytes[index]));
    let after = bytes.get(at).is_some_and(|&byte| is_word_byte(byte));
    before != after
}

fn is_query_space(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | b'\x0C' | b'\r' | b' ')
}
