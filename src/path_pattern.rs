use crate::constants::MATCH_ALL;
use regex_automata::meta::Regex;
use std::fmt;
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 2_048;

/// Characters that carry meaning in regex syntax and must be escaped when
/// they appear literally in a path pattern.
const REGEX_META: &[char] = &[
    '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$', '#', '&', '-', '~',
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("path pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),
    #[error("path pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
    #[error("failed to compile path pattern `{pattern}`: {reason}")]
    Build { pattern: String, reason: String },
}

/// Ant-style matcher selecting which request paths a policy applies to.
///
/// `**` as a whole segment matches zero or more segments, `*` matches any run
/// of characters inside one segment and `?` matches exactly one. A pattern
/// without wildcards only matches the identical path.
#[derive(Clone, Debug, Default)]
pub enum PathPattern {
    #[default]
    Any,
    Exact(String),
    Wildcard { source: String, regex: Regex },
}

impl PathPattern {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        if !pattern.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        }

        if pattern == MATCH_ALL {
            return Ok(Self::Any);
        }

        if !pattern.contains(['*', '?']) {
            return Ok(Self::Exact(pattern.to_string()));
        }

        let regex = Regex::new(&Self::to_regex(pattern)).map_err(|err| PatternError::Build {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Self::Wildcard {
            source: pattern.to_string(),
            regex,
        })
    }

    fn to_regex(pattern: &str) -> String {
        let mut regex = String::with_capacity(pattern.len() * 2 + 2);
        regex.push('^');

        for segment in pattern[1..].split('/') {
            if segment == "**" {
                regex.push_str("(?:/[^/]*)*");
                continue;
            }

            regex.push('/');
            for ch in segment.chars() {
                match ch {
                    '*' => regex.push_str("[^/]*"),
                    '?' => regex.push_str("[^/]"),
                    literal if REGEX_META.contains(&literal) => {
                        regex.push('\\');
                        regex.push(literal);
                    }
                    literal => regex.push(literal),
                }
            }
        }

        regex.push('$');
        regex
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Any => true,
            PathPattern::Exact(value) => value == path,
            PathPattern::Wildcard { regex, .. } => regex.is_match(path),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PathPattern::Any => MATCH_ALL,
            PathPattern::Exact(value) => value,
            PathPattern::Wildcard { source, .. } => source,
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "path_pattern_test.rs"]
mod path_pattern_test;
