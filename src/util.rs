#[doc(hidden)]
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    a.to_lowercase() == b.to_lowercase()
}

/// Drops trailing `/` characters so `http://host/` and `http://host` compare equal.
pub(crate) fn trim_trailing_slash(value: &str) -> &str {
    value.trim_end_matches('/')
}

/// Splits a comma separated header line, dropping blank entries.
pub(crate) fn split_header_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
