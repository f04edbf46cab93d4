//! Token hashing for the hoplink URL shortener.
//!
//! Tokens are a pure function of the target URL: the same URL always
//! yields the same token. Different URLs may collide once the digest is
//! truncated to eight characters; callers decide what that means.

use hoplink_core::{ShortToken, TOKEN_LENGTH};
use sha1::{Digest, Sha1};

/// Trait for deriving tokens from URLs.
///
/// Implementations are pure functions that don't interact with storage.
/// Any stable digest works as long as the output keeps the token shape
/// (8 lowercase hexadecimal characters).
pub trait TokenHasher: Send + Sync + 'static {
    /// Derives the token for a URL.
    ///
    /// Deterministic and total: every input string, including the empty
    /// string, hashes to a valid token.
    fn token_for(&self, url: &str) -> ShortToken;
}

/// SHA-1-based token hasher.
///
/// Computes the SHA-1 digest over the UTF-8 bytes of the URL and keeps
/// the first eight hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1TokenHasher;

impl TokenHasher for Sha1TokenHasher {
    fn token_for(&self, url: &str) -> ShortToken {
        let digest = Sha1::digest(url.as_bytes());
        let encoded = hex::encode(digest);
        ShortToken::new_unchecked(&encoded[..TOKEN_LENGTH])
    }
}
