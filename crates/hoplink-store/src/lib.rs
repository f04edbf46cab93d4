//! [`KvStore`] backends for the hoplink URL shortener.
//!
//! [`RedisKvStore`] is the production backend; expiry is delegated to
//! Redis via `SET ... EX`. [`InMemoryKvStore`] emulates the same contract
//! for tests and local development.
//!
//! [`KvStore`]: hoplink_core::KvStore

pub mod memory;
pub mod redis;

pub use memory::InMemoryKvStore;
pub use redis::RedisKvStore;
