//! Core types and traits for the hoplink URL shortener.
//!
//! This crate provides the shared vocabulary used by the hasher, the
//! store backends, and the redirect service: the validated [`ShortToken`],
//! the stored [`Mapping`], and the [`KvStore`] / [`LinkService`] seams.

pub mod error;
pub mod service;
pub mod store;
pub mod token;

pub use error::{ServiceError, StoreError, TokenError};
pub use service::LinkService;
pub use store::{KvStore, Mapping};
pub use token::{ShortToken, TOKEN_LENGTH};
