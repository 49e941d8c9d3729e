use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

/// Smoothly scrolls the element with `id` into view, if it exists.
pub fn scroll_to_section(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("No section '{}' to scroll to", id),
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            debug!("Browser refused to open {}", url);
        }
    }
}

/// The page's own address, for share links.
pub fn current_url() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_else(|| config::get_site_url().to_string())
}
