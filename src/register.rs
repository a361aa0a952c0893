//! Registration Form
//!
//! Blocks submission while the password confirmation does not match.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{console, Document, Event, HtmlInputElement};

use crate::config::RegisterConfig;
use crate::error::{UiError, UiResult};

/// Exact comparison, no trimming
pub fn check_confirmation(password: &str, confirm: &str) -> UiResult<()> {
    if password == confirm {
        Ok(())
    } else {
        Err(UiError::PasswordMismatch)
    }
}

/// What a submit should do with the current field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Passwords match
    Allow,
    /// Passwords differ: cancel and alert
    Block,
    /// A field could not be read; the server checks again
    AllowUnchecked(UiError),
}

pub fn decide_submit(password: UiResult<String>, confirm: UiResult<String>) -> SubmitDecision {
    let (password, confirm) = match (password, confirm) {
        (Ok(password), Ok(confirm)) => (password, confirm),
        (Err(e), _) | (_, Err(e)) => return SubmitDecision::AllowUnchecked(e),
    };

    match check_confirmation(&password, &confirm) {
        Ok(()) => SubmitDecision::Allow,
        Err(_) => SubmitDecision::Block,
    }
}

/// A registration page carries both the password and its confirmation.
/// Login forms have only the first.
fn is_registration_page(config: &RegisterConfig, has_field: impl Fn(&str) -> bool) -> bool {
    has_field(&config.password_id) && has_field(&config.confirm_id)
}

/// Bind the submit check on registration pages
pub fn bind(document: &Document, config: RegisterConfig) -> UiResult<usize> {
    if !is_registration_page(&config, |id| document.get_element_by_id(id).is_some()) {
        return Ok(0);
    }

    let config = Rc::new(config);
    dom_bind::bind_each(document, &config.form_selector, "submit", |_form| {
        let document = document.clone();
        let config = Rc::clone(&config);

        move |ev: Event| on_submit(&ev, &document, &config)
    })
    .map_err(|e| UiError::dom(&e))
}

fn on_submit(ev: &Event, document: &Document, config: &RegisterConfig) {
    let password = input_value(document, &config.password_id);
    let confirm = input_value(document, &config.confirm_id);

    match decide_submit(password, confirm) {
        SubmitDecision::Allow => {}
        SubmitDecision::AllowUnchecked(e) => {
            console::error_1(&format!("[Register] Skipping check: {}", e).into());
        }
        SubmitDecision::Block => {
            ev.prevent_default();
            console::warn_1(&format!("[Register] Submission blocked: {}", UiError::PasswordMismatch).into());
            if let Some(win) = web_sys::window() {
                if let Err(e) = win.alert_with_message(&config.mismatch_message) {
                    console::error_1(&format!("[Register] Alert failed: {}", UiError::dom(&e)).into());
                }
            }
        }
    }
}

fn input_value(document: &Document, id: &str) -> UiResult<String> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .ok_or_else(|| UiError::Dom(format!("no input #{}", id)))
}
