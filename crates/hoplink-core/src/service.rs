use crate::error::ServiceError;
use crate::store::Mapping;
use crate::token::ShortToken;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ServiceError>;

/// The shorten/resolve seam between the HTTP surface and the backing store.
#[async_trait]
pub trait LinkService: Send + Sync + 'static {
    /// Shortens a URL, storing its mapping, and returns the token.
    async fn shorten(&self, url: &str) -> Result<ShortToken>;

    /// Resolves a token to its stored mapping.
    /// Returns `None` if the token does not exist or has expired.
    async fn resolve(&self, token: &ShortToken) -> Result<Option<Mapping>>;
}
