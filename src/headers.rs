use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in the order the policy emitted them.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(4)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name.to_string(), value);
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into();
        let merged = merge_vary(self.headers.get(header::VARY).map(String::as_str), &incoming);

        match merged {
            Some(value) => {
                self.headers.insert(header::VARY.to_string(), value);
            }
            None => {
                self.headers.shift_remove(header::VARY);
            }
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

/// Joins two `Vary` values, dropping blanks and case-insensitive duplicates.
pub(crate) fn merge_vary(existing: Option<&str>, incoming: &str) -> Option<String> {
    let mut deduped: Vec<&str> = Vec::new();
    let entries = existing
        .into_iter()
        .chain(std::iter::once(incoming))
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty());

    for entry in entries {
        if deduped
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(entry))
        {
            continue;
        }
        deduped.push(entry);
    }

    if deduped.is_empty() {
        None
    } else {
        Some(deduped.join(", "))
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
