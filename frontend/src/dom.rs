use log::warn;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// Smoothly scrolls the element with the given id into view. Returns false if it is not on the page.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Location hash without the leading `#`.
pub fn current_hash() -> Option<String> {
    let hash = window()?.location().hash().ok()?;
    let hash = hash.trim_start_matches('#');
    (!hash.is_empty()).then(|| hash.to_string())
}

/// Navigates the browser to `url`, e.g. a `mailto:` link that opens the mail client.
pub fn open_url(url: &str) {
    match window() {
        Some(window) => {
            if let Err(e) = window.location().set_href(url) {
                warn!("Could not open {}: {:?}", url, e);
            }
        }
        None => warn!("No window to open {}", url),
    }
}

pub fn focus_element(id: &str) {
    use wasm_bindgen::JsCast;
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = element.focus();
    }
}

/// Id of the last section whose top has scrolled above `offset` pixels.
pub fn active_section(ids: &[&'static str], offset: f64) -> Option<&'static str> {
    let document = window()?.document()?;
    ids.iter()
        .copied()
        .filter(|id| {
            document
                .get_element_by_id(id)
                .map(|el| el.get_bounding_client_rect().top() <= offset)
                .unwrap_or(false)
        })
        .last()
}
