//! Redirect service implementation for the hoplink URL shortener.
//!
//! [`RedirectService`] glues the token hasher to the key-value store:
//! shorten hashes the URL and writes the mapping with a fixed TTL,
//! resolve is a single store read. The HTTP surface lives in
//! `hoplink-gateway`.

pub mod service;

pub use service::{RedirectService, RedirectSettings, DEFAULT_TTL};
