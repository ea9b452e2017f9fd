//! Thin wrappers over `window` APIs used by components.
//!
//! TRADE-OFFS
//! ==========
//! Everything here is browser-only; the non-hydrate paths return neutral
//! values so SSR rendering stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Ask the user to confirm an action with a native dialog.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Current vertical scroll position of the page.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Whether a mouseover on `container` came from an element outside it.
///
/// Entries with no related target, from inside the container, or from the
/// `<html>` element itself (pointer coming back from outside the window)
/// do not count.
#[cfg(feature = "hydrate")]
pub fn entered_from_outside(ev: &web_sys::MouseEvent, container: Option<&web_sys::HtmlElement>) -> bool {
    use wasm_bindgen::JsCast;

    let Some(related) = ev.related_target() else {
        return false;
    };
    let Some(node) = related.dyn_ref::<web_sys::Node>() else {
        return false;
    };
    if container.is_some_and(|container| container.contains(Some(node))) {
        return false;
    }
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    !root.is_some_and(|root| root.is_same_node(Some(node)))
}
