//! HTTP exchange layer for the Tapcoin backend.
//!
//! [`ApiClient`] exposes one async method per backend operation. Every
//! exchange is one-shot: a single request, a single response, no retry,
//! no backoff, no timeout beyond the transport default. The caller decides
//! what a failure means; this crate only classifies it ([`ApiError`]).
//!
//! ```text
//! Session (above)  ← decides what to do with results
//!     ↕
//! Exchange layer (this crate)  ← speaks HTTP, maps status codes
//!     ↕
//! Protocol (below)  ← the JSON shapes on the wire
//! ```

mod client;
mod config;
mod error;

pub use client::ApiClient;
pub use config::{ClientConfig, API_URL_VAR, DEFAULT_BASE_URL};
pub use error::ApiError;
