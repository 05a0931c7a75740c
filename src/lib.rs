//! REST service managing user records behind a shared-secret auth gate.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Request tracing middleware re-exported for app wiring.
pub use middleware::Trace;
