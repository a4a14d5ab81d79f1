//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with method, URI and request ID)
//! 3. Request ID (read or generate `x-request-id`)
//!
//! Session checks are per-handler via the [`RequireSession`] extractor.

pub mod request_id;
pub mod session;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware, trace_layer};
pub use session::RequireSession;
