use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::AllowedOrigins;
use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::path_pattern::PathPattern;
use crate::result::{CorsDecision, PreflightResult, SimpleResult};

/// Immutable CORS policy evaluated against every request the server handles.
///
/// Built once at startup and shared read-only; evaluation only borrows it.
#[derive(Clone, Debug)]
pub struct CorsPolicy {
    path_pattern: PathPattern,
    allowed_origins: AllowedOrigins,
    allowed_methods: AllowedMethods,
    allowed_headers: AllowedHeaders,
    preflight_status: u16,
}

impl Default for CorsPolicy {
    /// The frontend policy, built without going through validation.
    fn default() -> Self {
        let CorsOptions {
            path_pattern: _,
            allowed_origins,
            methods,
            allowed_headers,
            preflight_status,
        } = CorsOptions::default();

        Self {
            path_pattern: PathPattern::any(),
            allowed_origins,
            allowed_methods: methods,
            allowed_headers,
            preflight_status,
        }
    }
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate_fields()?;
        let path_pattern = PathPattern::parse(&options.path_pattern)?;

        Ok(Self {
            path_pattern,
            allowed_origins: options.allowed_origins,
            allowed_methods: options.methods,
            allowed_headers: options.allowed_headers,
            preflight_status: options.preflight_status,
        })
    }

    pub fn path_pattern(&self) -> &PathPattern {
        &self.path_pattern
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.allowed_origins
    }

    pub fn allowed_methods(&self) -> &AllowedMethods {
        &self.allowed_methods
    }

    pub fn allowed_headers(&self) -> &AllowedHeaders {
        &self.allowed_headers
    }

    pub fn preflight_status(&self) -> u16 {
        self.preflight_status
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        if !self.path_pattern.matches(request.path) {
            return CorsDecision::NotApplicable;
        }

        let Some(origin) = request.origin.filter(|value| !value.trim().is_empty()) else {
            return CorsDecision::NotApplicable;
        };

        let origin_allowed = self.allowed_origins.allows(origin);

        if Self::is_preflight(request) {
            CorsDecision::Preflight(self.evaluate_preflight(request, origin, origin_allowed))
        } else {
            CorsDecision::Simple(self.evaluate_simple(origin, origin_allowed))
        }
    }

    fn is_preflight(request: &RequestContext<'_>) -> bool {
        request.method.eq_ignore_ascii_case(method::OPTIONS)
            && request
                .access_control_request_method
                .is_some_and(|value| !value.trim().is_empty())
    }

    fn evaluate_preflight(
        &self,
        request: &RequestContext<'_>,
        origin: &str,
        origin_allowed: bool,
    ) -> PreflightResult {
        let mut headers = HeaderCollection::with_estimate(4);
        headers.add_vary(header::ORIGIN);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);

        if origin_allowed {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string());
            if let Some(value) = self.allowed_methods.header_value() {
                headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
            }
            if let Some(value) = self
                .allowed_headers
                .header_value(request.access_control_request_headers)
            {
                headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
            }
        }

        PreflightResult {
            headers: headers.into_headers(),
            status: self.preflight_status,
            origin_allowed,
        }
    }

    fn evaluate_simple(&self, origin: &str, origin_allowed: bool) -> SimpleResult {
        let mut headers = HeaderCollection::new();
        headers.add_vary(header::ORIGIN);

        if origin_allowed {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string());
        }

        SimpleResult {
            headers: headers.into_headers(),
            origin_allowed,
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
