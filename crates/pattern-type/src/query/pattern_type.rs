//! Pattern-type values and `patterntype:` directives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PatternTypeError, Result};

/// How the pattern text of a query is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Regexp,
    #[default]
    Literal,
}

impl PatternType {
    pub fn is_regexp(self) -> bool {
        matches!(self, Self::Regexp)
    }

    pub fn from_default(default_to_regexp: bool) -> Self {
        if default_to_regexp {
            Self::Regexp
        } else {
            Self::Literal
        }
    }

    /// Recognizes a whole chunk as a `patterntype:` directive.
    ///
    /// Matching is case-insensitive and exact; unknown values such as
    /// `patterntype:structural` are not directives and return `None`.
    pub fn from_directive(chunk: &str) -> Option<Self> {
        match chunk.to_lowercase().as_str() {
            "patterntype:regex" | "patterntype:regexp" => Some(Self::Regexp),
            "patterntype:literal" => Some(Self::Literal),
            _ => None,
        }
    }
}

impl From<bool> for PatternType {
    fn from(default_to_regexp: bool) -> Self {
        Self::from_default(default_to_regexp)
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternType::Regexp => write!(f, "regexp"),
            PatternType::Literal => write!(f, "literal"),
        }
    }
}

impl FromStr for PatternType {
    type Err = PatternTypeError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "regex" | "regexp" => Ok(Self::Regexp),
            "literal" => Ok(Self::Literal),
            _ => Err(PatternTypeError::UnknownPatternType(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_is_case_insensitive() {
        for chunk in ["patterntype:regex", "PatternType:Regex", "PATTERNTYPE:REGEX"] {
            assert_eq!(PatternType::from_directive(chunk), Some(PatternType::Regexp));
        }
        assert_eq!(
            PatternType::from_directive("patternType:regexp"),
            Some(PatternType::Regexp)
        );
        assert_eq!(
            PatternType::from_directive("PATTERNTYPE:Literal"),
            Some(PatternType::Literal)
        );
    }

    #[test]
    fn unknown_directive_values_are_ignored() {
        assert_eq!(PatternType::from_directive("patterntype:structural"), None);
        assert_eq!(PatternType::from_directive("patterntype:"), None);
        assert_eq!(PatternType::from_directive("patterntype:regex)"), None);
        assert_eq!(PatternType::from_directive(r#"foo:"patterntype:regex""#), None);
    }

    #[test]
    fn parses_names() {
        assert_eq!("regex".parse::<PatternType>().unwrap(), PatternType::Regexp);
        assert_eq!(" Regexp ".parse::<PatternType>().unwrap(), PatternType::Regexp);
        assert_eq!("LITERAL".parse::<PatternType>().unwrap(), PatternType::Literal);

        let err = "glob".parse::<PatternType>().unwrap_err();
        assert!(matches!(err, PatternTypeError::UnknownPatternType(ref value) if value == "glob"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for pattern_type in [PatternType::Regexp, PatternType::Literal] {
            let parsed: PatternType = pattern_type.to_string().parse().unwrap();
            assert_eq!(parsed, pattern_type);
        }
    }

    #[test]
    fn default_flag_maps_to_pattern_type() {
        assert_eq!(PatternType::from(true), PatternType::Regexp);
        assert_eq!(PatternType::from(false), PatternType::Literal);
        assert!(PatternType::Regexp.is_regexp());
        assert!(!PatternType::Literal.is_regexp());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&PatternType::Regexp).unwrap();
        assert_eq!(json, "\"regexp\"");
        let parsed: PatternType = serde_json::from_str("\"literal\"").unwrap();
        assert_eq!(parsed, PatternType::Literal);
    }
}
