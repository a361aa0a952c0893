//! Favorite Toggle
//!
//! Click handler for the favorite control on each recipe card. The control
//! only ever shows the state the server reported back.

mod sequence;
mod toggle;

use sequence::ToggleSequencer;
use toggle::{begin, settle, FavoriteControl, Settled};

use std::rc::Rc;

use leptos::task::spawn_local;
use web_sys::{console, Document, Element, Event};

use crate::commands;
use crate::config::FavoriteConfig;
use crate::error::{UiError, UiResult};
use crate::models::FavoriteState;

/// A favorite button in the live page
#[derive(Clone)]
struct ButtonControl {
    button: Element,
    config: Rc<FavoriteConfig>,
}

impl FavoriteControl for ButtonControl {
    fn recipe_id(&self) -> Option<String> {
        dom_bind::closest_attribute(&self.button, &self.config.card_selector, &self.config.recipe_id_attr)
    }

    fn cached_flag(&self) -> Option<String> {
        self.button.get_attribute(&self.config.flag_attr)
    }

    fn render(&self, state: FavoriteState) -> UiResult<()> {
        self.button
            .set_attribute(&self.config.flag_attr, state.as_attr())
            .map_err(|e| UiError::dom(&e))?;
        self.button.set_text_content(Some(state.glyph(&self.config)));
        self.button
            .class_list()
            .toggle_with_force(&self.config.favorited_class, state.is_favorited())
            .map_err(|e| UiError::dom(&e))?;
        Ok(())
    }
}

/// Bind every favorite control on the page, each with its own click sequence
pub fn bind(document: &Document, config: FavoriteConfig) -> UiResult<usize> {
    let config = Rc::new(config);

    dom_bind::bind_each(document, &config.button_selector, "click", |button| {
        let control = ButtonControl {
            button,
            config: Rc::clone(&config),
        };
        let sequencer = ToggleSequencer::default();

        move |ev: Event| {
            ev.prevent_default();
            on_click(&control, &sequencer);
        }
    })
    .map_err(|e| UiError::dom(&e))
}

fn on_click(control: &ButtonControl, sequencer: &ToggleSequencer) {
    let pending = match begin(control, sequencer) {
        Ok(pending) => pending,
        Err(e) => {
            console::error_1(&format!("[Favorites] Not toggling: {}", e).into());
            return;
        }
    };

    let url = pending.recipe_id.favorite_url(&control.config);
    let control = control.clone();
    let sequencer = sequencer.clone();

    spawn_local(async move {
        let outcome = commands::toggle_favorite(&url, pending.prior).await;

        match settle(&control, &sequencer, pending.ticket, outcome) {
            Settled::Applied(response) => {
                console::log_1(&format!(
                    "[Favorites] Recipe {} click {}: favorited={} ({})",
                    pending.recipe_id,
                    pending.ticket,
                    response.is_favorited,
                    response.message.as_deref().unwrap_or("no message"),
                ).into());
            }
            Settled::Stale(response) => {
                console::warn_1(&format!(
                    "[Favorites] Recipe {} click {}: dropped stale favorited={}",
                    pending.recipe_id, pending.ticket, response.is_favorited
                ).into());
            }
            Settled::Failed(e) => {
                console::error_1(&format!(
                    "[Favorites] Failed to toggle recipe {}: {}",
                    pending.recipe_id, e
                ).into());
            }
        }
    });
}
