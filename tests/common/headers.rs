#![allow(dead_code)]

use frontend_cors_rs::Headers;
use frontend_cors_rs::constants::header;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

/// Every `Access-Control-*` header in `headers`, in emission order.
pub fn cors_headers(headers: &Headers) -> Vec<(String, String)> {
    headers
        .iter()
        .filter(|(name, _)| name.starts_with("Access-Control-") || name.as_str() == header::VARY)
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
