//! Middleware applied to the HTTP server.

pub mod trace;
