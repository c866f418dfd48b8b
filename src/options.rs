use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::AllowedOrigins;
use crate::constants::{FRONTEND_ORIGIN, MATCH_ALL};
use crate::path_pattern::{PathPattern, PatternError};
use http::{HeaderName, HeaderValue, Method};
use thiserror::Error;

/// Configuration a [`CorsPolicy`](crate::CorsPolicy) is built from.
///
/// The default is the frontend policy: `http://localhost:3000` on every path,
/// `GET, POST, PUT, DELETE, OPTIONS`, any request header.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub path_pattern: String,
    pub allowed_origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub preflight_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            path_pattern: MATCH_ALL.to_string(),
            allowed_origins: AllowedOrigins::list([FRONTEND_ORIGIN]),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            preflight_status: 200,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one allowed origin must be configured")]
    EmptyOrigins,
    #[error("`*` is not accepted as an allowed origin; list the origin explicitly")]
    WildcardOrigin,
    #[error("allowed origin `{0}` is not of the form scheme://host[:port]")]
    InvalidOrigin(String),
    #[error("allowed method `{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("allowed header `{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("preflight status {0} is not a 2xx status code")]
    InvalidPreflightStatus(u16),
    #[error(transparent)]
    PathPattern(#[from] PatternError),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_fields()?;
        PathPattern::parse(&self.path_pattern)?;
        Ok(())
    }

    /// Everything [`validate`](Self::validate) checks except the path pattern.
    pub(crate) fn validate_fields(&self) -> Result<(), ValidationError> {
        if self.allowed_origins.is_empty() {
            return Err(ValidationError::EmptyOrigins);
        }

        for origin in self.allowed_origins.values() {
            validate_origin(origin)?;
        }

        for method in self.methods.values() {
            if Method::from_bytes(method.as_bytes()).is_err() {
                return Err(ValidationError::InvalidMethod(method.clone()));
            }
        }

        if let AllowedHeaders::List(names) = &self.allowed_headers {
            for name in names {
                if HeaderName::from_bytes(name.as_bytes()).is_err() {
                    return Err(ValidationError::InvalidHeaderName(name.clone()));
                }
            }
        }

        if !(200..300).contains(&self.preflight_status) {
            return Err(ValidationError::InvalidPreflightStatus(
                self.preflight_status,
            ));
        }

        Ok(())
    }
}

fn validate_origin(origin: &str) -> Result<(), ValidationError> {
    if origin == "*" {
        return Err(ValidationError::WildcardOrigin);
    }

    let well_formed = HeaderValue::from_str(origin).is_ok()
        && origin
            .split_once("://")
            .is_some_and(|(scheme, host)| {
                !scheme.is_empty() && !host.is_empty() && !host.contains('/')
            });

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::InvalidOrigin(origin.to_string()))
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
