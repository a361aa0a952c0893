//! Frontend Models
//!
//! Values read from the DOM and the JSON bodies exchanged with the server.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::config::FavoriteConfig;
use crate::error::{UiError, UiResult};

/// Characters escaped when a recipe id becomes a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Opaque recipe identifier taken from the card markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeId(String);

impl RecipeId {
    /// Absent or blank ids are rejected
    pub fn parse(raw: Option<&str>) -> UiResult<Self> {
        match raw.map(str::trim) {
            Some(id) if !id.is_empty() => Ok(Self(id.to_string())),
            _ => Err(UiError::MissingRecipeId),
        }
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Toggle endpoint for this recipe
    pub fn favorite_url(&self, config: &FavoriteConfig) -> String {
        format!("{}{}", config.endpoint_base, utf8_percent_encode(&self.0, PATH_SEGMENT))
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Favorite state of one recipe for the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteState {
    Favorited,
    NotFavorited,
}

impl FavoriteState {
    /// Parse the cached `data-favorited` value.
    ///
    /// A missing attribute means the card was rendered as not favorited.
    pub fn from_attr(raw: Option<&str>) -> UiResult<Self> {
        match raw {
            None | Some("false") => Ok(FavoriteState::NotFavorited),
            Some("true") => Ok(FavoriteState::Favorited),
            Some(other) => Err(UiError::InvalidFlag(other.to_string())),
        }
    }

    pub fn as_attr(&self) -> &'static str {
        match self {
            FavoriteState::Favorited => "true",
            FavoriteState::NotFavorited => "false",
        }
    }

    pub fn is_favorited(&self) -> bool {
        matches!(self, FavoriteState::Favorited)
    }

    pub fn glyph<'a>(&self, config: &'a FavoriteConfig) -> &'a str {
        match self {
            FavoriteState::Favorited => &config.favorited_glyph,
            FavoriteState::NotFavorited => &config.unfavorited_glyph,
        }
    }
}

impl From<bool> for FavoriteState {
    fn from(favorited: bool) -> Self {
        if favorited {
            FavoriteState::Favorited
        } else {
            FavoriteState::NotFavorited
        }
    }
}

/// Toggle request body: the state *before* the toggle
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteRequest {
    pub is_favorited: bool,
}

impl FavoriteRequest {
    pub fn new(prior: FavoriteState) -> Self {
        Self { is_favorited: prior.is_favorited() }
    }
}

/// Toggle response body: the authoritative state *after* the toggle
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FavoriteResponse {
    pub is_favorited: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl FavoriteResponse {
    pub fn state(&self) -> FavoriteState {
        self.is_favorited.into()
    }
}

/// Error body the server sends with failures such as 401
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
