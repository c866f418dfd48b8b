use crate::util::{equals_ignore_case, trim_trailing_slash};
use indexmap::IndexSet;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Exact origins allowed to read cross-origin responses.
///
/// Entries are kept in configuration order. Comparison ignores ASCII case and
/// any trailing `/`, on both the configured and the requested side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedOrigins {
    origins: Vec<String>,
}

impl AllowedOrigins {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = IndexSet::new();
        let mut origins = Vec::new();
        for value in values {
            let value = value.into();
            let trimmed = trim_trailing_slash(value.trim()).to_string();
            if seen.insert(trimmed.to_ascii_lowercase()) {
                origins.push(trimmed);
            }
        }

        Self { origins }
    }

    pub fn values(&self) -> &[String] {
        &self.origins
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// Whether `origin`, as sent in the request's `Origin` header, is a member.
    pub fn allows(&self, origin: &str) -> bool {
        if origin.len() > MAX_ORIGIN_LENGTH {
            return false;
        }

        let candidate = trim_trailing_slash(origin.trim());
        if candidate.is_empty() {
            return false;
        }

        self.origins
            .iter()
            .any(|allowed| equals_ignore_case(allowed, candidate))
    }
}

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
