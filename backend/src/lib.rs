//! Items API library modules.
//!
//! The crate follows a small hexagonal layout: `domain` holds the item
//! record, the in-memory store, and the transport-agnostic error type;
//! `inbound::http` adapts the domain to actix-web; `middleware` carries
//! request correlation; `doc` exposes the OpenAPI surface.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-correlation middleware re-exported for server wiring.
pub use middleware::trace::Trace;
