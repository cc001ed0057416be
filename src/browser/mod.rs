//! WebAssembly entry point and DOM wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the module is instantiated. If the document is still
//! parsing it defers to `DOMContentLoaded`; otherwise it enhances the page
//! immediately. Each feature is wired independently, so a missing element
//! only disables its own feature.

pub mod listeners;
pub mod page;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Window};

use crate::config::{ConfigError, SiteConfig};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        listeners::listen(&document, "DOMContentLoaded", |_| enhance_page());
    } else {
        enhance_page();
    }
}

/// Apply every enhancement to the current document.
pub fn enhance_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, rejected) = load_config(&document);
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(config.log_level);
    for e in rejected {
        log::warn!("page config attribute ignored, keeping its default: {e}");
    }

    let reduced_motion = prefers_reduced_motion(&window);
    if let Some(controller) = listeners::wire_theme(&document, &config.theme) {
        listeners::wire_shortcut(&document, config.shortcut, controller);
    }
    listeners::wire_back_to_top(&window, &document, &config.back_to_top);
    listeners::wire_reveal(&document, &config.reveal, reduced_motion);
    listeners::wire_typing(&document, &config.typing, reduced_motion);
    listeners::spawn_last_updated(&document, &config.commits);
}

fn load_config(document: &Document) -> (SiteConfig, Vec<ConfigError>) {
    let body = document.body();
    SiteConfig::from_attributes(|name| body.as_ref().and_then(|b| b.get_attribute(name)))
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}
