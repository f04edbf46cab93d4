use serde::Deserialize;

/// Form payload for `POST /shorten`.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    /// An absent field deserializes to the empty string; the handler
    /// treats both the same and rejects the request.
    #[serde(default)]
    pub url: String,
}
