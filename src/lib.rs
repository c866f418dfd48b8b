pub mod constants;
mod allowed_headers;
mod allowed_methods;
mod allowed_origins;
mod context;
mod headers;
mod middleware;
mod options;
mod path_pattern;
mod policy;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use allowed_origins::AllowedOrigins;
pub use context::RequestContext;
pub use headers::Headers;
pub use middleware::{SharedPolicy, cors_middleware, register_cors_policy};
pub use options::{CorsOptions, ValidationError};
pub use path_pattern::{PathPattern, PatternError};
pub use policy::CorsPolicy;
pub use result::{CorsDecision, PreflightResult, SimpleResult};
pub use util::equals_ignore_case;
