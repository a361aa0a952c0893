//! UI Errors
//!
//! Every failure a page feature can hit. None of them are fatal to the page.

use wasm_bindgen::JsValue;

/// Common result type for page features
pub type UiResult<T> = Result<T, UiError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Recipe card has no usable `data-recipe-id`
    MissingRecipeId,
    /// Cached favorite flag is neither "true" nor "false"
    InvalidFlag(String),
    /// Server answered with a non-success status
    Http { status: u16, message: Option<String> },
    /// Request rejected or response body unreadable
    Transport(String),
    /// Success body was not the expected JSON
    Parse(String),
    /// Password and confirmation differ
    PasswordMismatch,
    /// A DOM call threw
    Dom(String),
}

impl UiError {
    pub fn transport(value: &JsValue) -> Self {
        UiError::Transport(dom_bind::describe_js_error(value))
    }

    pub fn dom(value: &JsValue) -> Self {
        UiError::Dom(dom_bind::describe_js_error(value))
    }
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::MissingRecipeId => write!(f, "Recipe card has no recipe id"),
            UiError::InvalidFlag(raw) => write!(f, "Invalid favorite flag: {:?}", raw),
            UiError::Http { status, message: Some(msg) } => write!(f, "HTTP {}: {}", status, msg),
            UiError::Http { status, message: None } => write!(f, "HTTP {}", status),
            UiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            UiError::Parse(msg) => write!(f, "Malformed response: {}", msg),
            UiError::PasswordMismatch => write!(f, "Passwords do not match"),
            UiError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}
