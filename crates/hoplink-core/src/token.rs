use crate::error::TokenError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of hexadecimal characters in a token.
pub const TOKEN_LENGTH: usize = 8;

/// A validated short token identifying a stored URL mapping.
///
/// Tokens are exactly [`TOKEN_LENGTH`] lowercase hexadecimal characters,
/// produced by truncating the digest of the target URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortToken(String);

impl ShortToken {
    /// Creates a new `ShortToken` after validating the input.
    ///
    /// Valid tokens are exactly 8 characters of `[0-9a-f]`.
    pub fn new(token: impl Into<String>) -> std::result::Result<Self, TokenError> {
        let token = token.into();
        Self::validate(&token)?;
        Ok(Self(token))
    }

    /// Creates a `ShortToken` without validation.
    ///
    /// Use this only for tokens produced by trusted internal sources
    /// (e.g. the hasher, which is guaranteed to produce valid output).
    pub fn new_unchecked(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(token: &str) -> std::result::Result<(), TokenError> {
        if token.len() != TOKEN_LENGTH {
            return Err(TokenError::InvalidToken(format!(
                "length must be {}, got {}",
                TOKEN_LENGTH,
                token.len()
            )));
        }

        if !token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(TokenError::InvalidToken(format!(
                "must contain only lowercase hexadecimal characters: '{}'",
                token
            )));
        }

        Ok(())
    }
}

impl Display for ShortToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tokens() {
        assert!(ShortToken::new("bf705e83").is_ok());
        assert!(ShortToken::new("00000000").is_ok());
        assert!(ShortToken::new("da39a3ee").is_ok());
    }

    #[test]
    fn wrong_length() {
        assert!(ShortToken::new("").is_err());
        assert!(ShortToken::new("abc1234").is_err());
        assert!(ShortToken::new("abc123456").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortToken::new("BF705E83").is_err());
        assert!(ShortToken::new("bf705e8g").is_err());
        assert!(ShortToken::new("bf705e-3").is_err());
        assert!(ShortToken::new("bf705 83").is_err());
    }

    #[test]
    fn display() {
        let token = ShortToken::new("bf705e83").unwrap();
        assert_eq!(token.to_string(), "bf705e83");
    }

    #[test]
    fn to_url() {
        let token = ShortToken::new("bf705e83").unwrap();
        assert_eq!(
            token.to_url("http://localhost:8080"),
            "http://localhost:8080/bf705e83"
        );
        assert_eq!(
            token.to_url("http://localhost:8080/"),
            "http://localhost:8080/bf705e83"
        );
    }
}
