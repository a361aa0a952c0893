//! Collapsible Panels
//!
//! Each trigger shows/hides the element right after it and carries an
//! "active" class while toggled. Pairs are independent.

use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, HtmlElement};

use crate::config::CollapsibleConfig;
use crate::error::{UiError, UiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// From a computed CSS `display` value
    pub fn from_display(display: &str) -> Self {
        if display.trim() == "none" {
            Visibility::Hidden
        } else {
            Visibility::Shown
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }

    /// Inline `display` value that produces this visibility
    pub fn as_display(self) -> &'static str {
        match self {
            Visibility::Shown => "block",
            Visibility::Hidden => "none",
        }
    }
}

/// One trigger/content pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    pub active: bool,
    pub visibility: Visibility,
}

impl PanelState {
    pub fn clicked(self) -> Self {
        Self {
            active: !self.active,
            visibility: self.visibility.toggled(),
        }
    }
}

/// Bind every trigger on the page
pub fn bind(document: &Document, config: CollapsibleConfig) -> UiResult<usize> {
    let active_class = config.active_class;

    let bound = dom_bind::bind_each(document, &config.trigger_selector, "click", |trigger| {
        let active_class = active_class.clone();
        move |_: Event| {
            if let Err(e) = toggle(&trigger, &active_class) {
                console::error_1(&format!("[Collapsible] {}", e).into());
            }
        }
    })
    .map_err(|e| UiError::dom(&e))?;

    console::log_1(&format!("[Collapsible] Triggers found: {}", bound).into());
    Ok(bound)
}

fn toggle(trigger: &Element, active_class: &str) -> UiResult<()> {
    let Some(content) = trigger.next_element_sibling() else {
        console::warn_1(&"[Collapsible] Trigger has no content sibling".into());
        return Ok(());
    };
    let content: HtmlElement = content
        .dyn_into()
        .map_err(|_| UiError::Dom("content is not an HTML element".to_string()))?;

    let classes = trigger.class_list();
    let current = PanelState {
        active: classes.contains(active_class),
        visibility: Visibility::from_display(&computed_display(&content)?),
    };
    let next = current.clicked();

    classes
        .toggle_with_force(active_class, next.active)
        .map_err(|e| UiError::dom(&e))?;
    content
        .style()
        .set_property("display", next.visibility.as_display())
        .map_err(|e| UiError::dom(&e))
}

/// Display value after stylesheets, falling back to the inline style
fn computed_display(content: &HtmlElement) -> UiResult<String> {
    let window = web_sys::window().ok_or_else(|| UiError::Dom("no window".to_string()))?;

    match window.get_computed_style(content).map_err(|e| UiError::dom(&e))? {
        Some(style) => style.get_property_value("display").map_err(|e| UiError::dom(&e)),
        None => content
            .style()
            .get_property_value("display")
            .map_err(|e| UiError::dom(&e)),
    }
}
