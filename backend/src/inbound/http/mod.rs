//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod items;
pub mod meta;
pub mod state;
pub mod validation;

pub use error::ApiResult;
