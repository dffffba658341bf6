//! Section scrolling and new-tab navigation.
//!
//! Requires a browser environment; SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// In-page anchor for a section id.
#[must_use]
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

/// Anchor id for a navigation label (`"About"` → `"about"`).
#[must_use]
pub fn section_id(label: &str) -> String {
    label.trim().to_ascii_lowercase().replace(' ', "-")
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::debug!("scroll target #{id} not found");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Open `href` in a new browser tab.
pub fn open_in_new_tab(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(href, "_blank").is_err() {
                log::warn!("failed to open {href}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}
