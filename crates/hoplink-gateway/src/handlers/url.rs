use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use hoplink_core::{ServiceError, ShortToken};
use tracing::{info, warn};

use crate::error::{ApiError, Result};
use crate::model::ShortenForm;
use crate::state::AppState;

/// `POST /shorten`: shortens the URL in the `url` form field and
/// answers with the fully qualified short URL as plain text.
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: std::result::Result<Form<ShortenForm>, FormRejection>,
) -> Result<String> {
    // A missing or unparsable form body is the same as a missing field.
    let url = form.map(|Form(body)| body.url).unwrap_or_default();
    info!(url = %url, "shorten request");

    match state.service().shorten(&url).await {
        Ok(token) => Ok(token.to_url(state.base_url())),
        Err(ServiceError::EmptyUrl) => Err(ApiError::MissingUrl),
        Err(ServiceError::Store(e)) => {
            warn!(url = %url, error = %e, "store write failed");
            Err(ApiError::ShortenFailed)
        }
    }
}

/// `GET /{token}`: answers with a 301 to the stored target URL.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    info!(token = %token, "redirect request");

    // A token that fails shape validation cannot exist in the store.
    let Ok(token) = ShortToken::new(token) else {
        return Err(ApiError::NotFound);
    };

    match state.service().resolve(&token).await {
        Ok(Some(mapping)) => Ok(moved_permanently(&mapping.target_url)),
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => {
            warn!(token = %token, error = %e, "store read failed");
            Err(ApiError::RetrieveFailed)
        }
    }
}

/// The redirect contract is pinned to 301; axum's `Redirect::permanent`
/// answers 308.
fn moved_permanently(location: &str) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
