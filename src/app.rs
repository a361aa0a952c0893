//! Recipe Box Page Wiring
//!
//! Binds every feature whose markup is present on the current page.

use web_sys::{console, Document};

use crate::config::PageConfig;
use crate::error::UiResult;
use crate::{collapsible, favorites, register};

/// Attach all handlers. Called once per page load.
pub fn init(document: &Document, config: PageConfig) {
    report("favorite buttons", favorites::bind(document, config.favorites));
    report("registration forms", register::bind(document, config.register));
    report("collapsible triggers", collapsible::bind(document, config.collapsible));
}

fn report(what: &str, result: UiResult<usize>) {
    match result {
        Ok(0) => {}
        Ok(count) => console::log_1(&format!("[App] Bound {} {}", count, what).into()),
        Err(e) => console::error_1(&format!("[App] Could not bind {}: {}", what, e).into()),
    }
}
