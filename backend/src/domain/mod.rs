//! Domain types for the items service.
//!
//! Purpose: define the item record, the in-memory record store, and the
//! transport-agnostic error payload. Inbound adapters translate these
//! types to HTTP; nothing in this module imports actix.
//!
//! Public surface:
//! - [`Item`] / [`ItemDraft`]: the managed record and its id-less input shape.
//! - [`ItemStore`]: ordered in-memory collection plus the next-id counter.
//! - [`Error`] / [`ErrorCode`]: error payload with a stable code.

pub mod error;
pub mod item;
pub mod store;

pub use self::error::{Error, ErrorCode};
pub use self::item::{Item, ItemDraft};
pub use self::store::ItemStore;

/// Response header carrying the request-scoped trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
