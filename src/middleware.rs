//! Registration of a [`CorsPolicy`] with an axum request pipeline.

use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::{Headers, merge_vary};
use crate::policy::CorsPolicy;
use crate::result::CorsDecision;
use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub type SharedPolicy = Arc<CorsPolicy>;

/// Installs `policy` in front of every route and the fallback of `router`.
///
/// Call once while composing the application, before handing the router to
/// `axum::serve`. The policy is frozen from here on and shared by all
/// request tasks.
pub fn register_cors_policy<S>(router: Router<S>, policy: CorsPolicy) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    info!(
        path_pattern = %policy.path_pattern(),
        origins = ?policy.allowed_origins().values(),
        "registering CORS policy"
    );

    router.layer(middleware::from_fn_with_state(
        Arc::new(policy),
        cors_middleware,
    ))
}

pub async fn cors_middleware(
    State(policy): State<SharedPolicy>,
    request: Request,
    next: Next,
) -> Response {
    let decision = {
        let headers = request.headers();
        let context = RequestContext {
            method: request.method().as_str(),
            path: request.uri().path(),
            origin: header_str(headers, header::ORIGIN),
            access_control_request_method: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        };

        let decision = policy.evaluate(&context);
        if decision != CorsDecision::NotApplicable {
            debug!(
                method = context.method,
                path = context.path,
                origin = ?context.origin,
                decision = decision.label(),
                "evaluated CORS request"
            );
        }
        decision
    };

    match decision {
        CorsDecision::Preflight(result) => preflight_response(result.status, &result.headers),
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

fn preflight_response(status: u16, headers: &Headers) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
    apply_headers(response.headers_mut(), headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        if name.eq_ignore_ascii_case(header::VARY) {
            let existing = map
                .get_all(header::VARY)
                .iter()
                .filter_map(|value| value.to_str().ok())
                .collect::<Vec<_>>()
                .join(", ");
            let existing = (!existing.is_empty()).then_some(existing.as_str());
            if let Some(merged) = merge_vary(existing, value) {
                insert_header(map, name, &merged);
            }
        } else {
            insert_header(map, name, value);
        }
    }
}

fn insert_header(map: &mut HeaderMap, name: &str, value: &str) {
    match (HeaderName::try_from(name), HeaderValue::from_str(value)) {
        (Ok(header_name), Ok(header_value)) => {
            map.insert(header_name, header_value);
        }
        _ => warn!(header = name, "skipping CORS header that cannot be encoded"),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
