//! Favorite Commands
//!
//! Frontend binding for the favorite toggle endpoint.

use crate::error::{UiError, UiResult};
use crate::models::{ErrorBody, FavoriteRequest, FavoriteResponse, FavoriteState};
use super::post_json;

/// Ask the server to toggle a favorite.
///
/// `prior` is the state the control showed when clicked; the server answers
/// with the state after the toggle.
pub async fn toggle_favorite(url: &str, prior: FavoriteState) -> UiResult<FavoriteResponse> {
    let body = serde_json::to_string(&FavoriteRequest::new(prior))
        .map_err(|e| UiError::Parse(e.to_string()))?;
    let raw = post_json(url, &body).await?;
    interpret_response(raw.status, raw.ok, &raw.body)
}

/// Turn a server reply into the authoritative state or an error
pub fn interpret_response(status: u16, ok: bool, body: &str) -> UiResult<FavoriteResponse> {
    if !ok {
        let message = serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error);
        return Err(UiError::Http { status, message });
    }
    serde_json::from_str(body).map_err(|e| UiError::Parse(e.to_string()))
}
