//! Page Configuration
//!
//! Selectors, attribute names and texts the features bind to.
//! Defaults match the markup the recipe pages render.

/// Configuration for every page feature
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    pub favorites: FavoriteConfig,
    pub register: RegisterConfig,
    pub collapsible: CollapsibleConfig,
}

#[derive(Debug, Clone)]
pub struct FavoriteConfig {
    /// Favorite controls
    pub button_selector: String,
    /// Container carrying the recipe id
    pub card_selector: String,
    pub recipe_id_attr: String,
    /// Cached flag on the control ("true"/"false")
    pub flag_attr: String,
    pub favorited_class: String,
    pub favorited_glyph: String,
    pub unfavorited_glyph: String,
    /// Prefix the encoded recipe id is appended to
    pub endpoint_base: String,
}

impl Default for FavoriteConfig {
    fn default() -> Self {
        Self {
            button_selector: ".favorite-btn".to_string(),
            card_selector: ".recipe-card".to_string(),
            recipe_id_attr: "data-recipe-id".to_string(),
            flag_attr: "data-favorited".to_string(),
            favorited_class: "favorited".to_string(),
            favorited_glyph: "⭐".to_string(),
            unfavorited_glyph: "☆".to_string(),
            endpoint_base: "/recipes/favorite/".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterConfig {
    pub form_selector: String,
    pub password_id: String,
    pub confirm_id: String,
    pub mismatch_message: String,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            form_selector: "form".to_string(),
            password_id: "password".to_string(),
            confirm_id: "confirm_password".to_string(),
            mismatch_message: "Passwords do not match. Please try again.".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CollapsibleConfig {
    pub trigger_selector: String,
    pub active_class: String,
}

impl Default for CollapsibleConfig {
    fn default() -> Self {
        Self {
            trigger_selector: ".collapsible".to_string(),
            active_class: "active".to_string(),
        }
    }
}
