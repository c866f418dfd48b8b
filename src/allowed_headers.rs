use crate::util::split_header_list;
use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Wildcard: emits "*" on every preflight.
    #[default]
    Any,
    List(Vec<String>),
    /// Echo whatever the preflight listed in `Access-Control-Request-Headers`.
    MirrorRequest,
}

impl AllowedHeaders {
    /// Builds a list, collapsing to [`AllowedHeaders::Any`] when it contains `*`.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed == "*" {
                return Self::Any;
            }
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_ascii_lowercase()) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn mirror_request() -> Self {
        Self::MirrorRequest
    }

    /// Header value for a preflight that requested `request_headers`.
    pub fn header_value(&self, request_headers: Option<&str>) -> Option<String> {
        match self {
            AllowedHeaders::Any => Some("*".to_string()),
            AllowedHeaders::List(values) if values.is_empty() => None,
            AllowedHeaders::List(values) => Some(values.join(", ")),
            AllowedHeaders::MirrorRequest => {
                let requested = split_header_list(request_headers?)
                    .collect::<Vec<_>>()
                    .join(", ");
                if requested.is_empty() {
                    None
                } else {
                    Some(requested)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
