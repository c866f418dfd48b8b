use crate::headers::Headers;

/// Headers and status for answering a preflight without calling the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
    pub origin_allowed: bool,
}

/// Headers to merge into the handler's response to an actual CORS request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResult {
    pub headers: Headers,
    pub origin_allowed: bool,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    NotApplicable,
}

impl CorsDecision {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::Preflight(result) => Some(&result.headers),
            CorsDecision::Simple(result) => Some(&result.headers),
            CorsDecision::NotApplicable => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CorsDecision::Preflight(result) if result.origin_allowed => "preflight_allowed",
            CorsDecision::Preflight(_) => "preflight_disallowed",
            CorsDecision::Simple(result) if result.origin_allowed => "simple_allowed",
            CorsDecision::Simple(_) => "simple_disallowed",
            CorsDecision::NotApplicable => "not_applicable",
        }
    }
}
