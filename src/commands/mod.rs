//! Server Request Wrappers
//!
//! Frontend bindings to the recipe server's JSON endpoints, organized by domain.

mod favorite;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

use crate::error::{UiError, UiResult};

pub use favorite::*;

/// Raw outcome of a request that reached the server
pub struct RawResponse {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

/// POST a JSON body with the session cookie and read the reply as text.
///
/// Any HTTP status counts as a reply; only a rejected fetch or unreadable
/// body is an error here.
pub async fn post_json(url: &str, body: &str) -> UiResult<RawResponse> {
    let window = web_sys::window().ok_or_else(|| UiError::Transport("no window".to_string()))?;

    let headers = Headers::new().map_err(|e| UiError::transport(&e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| UiError::transport(&e))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| UiError::transport(&e))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_credentials(RequestCredentials::SameOrigin);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init).map_err(|e| UiError::transport(&e))?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| UiError::transport(&e))?;
    let response: Response = value.dyn_into().map_err(|e| UiError::transport(&e))?;

    let text = JsFuture::from(response.text().map_err(|e| UiError::transport(&e))?)
        .await
        .map_err(|e| UiError::transport(&e))?;

    Ok(RawResponse {
        status: response.status(),
        ok: response.ok(),
        body: text.as_string().unwrap_or_default(),
    })
}
