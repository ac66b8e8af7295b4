use log::warn;
use shared::routing::{ScrollPosition, ScrollTarget};
use web_sys::ScrollRestoration;

/// Stops the browser from restoring scroll on back/forward; the router does it.
pub fn take_over_restoration() {
    let result = web_sys::window()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no global window"))
        .and_then(|window| window.history())
        .and_then(|history| history.set_scroll_restoration(ScrollRestoration::Manual));
    if let Err(e) = result {
        warn!("Cannot switch scroll restoration to manual: {:?}", e);
    }
}

pub fn current_position() -> ScrollPosition {
    web_sys::window()
        .map(|window| {
            ScrollPosition::new(
                window.scroll_x().unwrap_or_default(),
                window.scroll_y().unwrap_or_default(),
            )
        })
        .unwrap_or_default()
}

pub fn apply(target: &ScrollTarget) {
    let Some(window) = web_sys::window() else {
        return;
    };

    match target {
        ScrollTarget::Restore(position) => window.scroll_to_with_x_and_y(position.left, position.top),
        ScrollTarget::Top => window.scroll_to_with_x_and_y(0.0, 0.0),
        ScrollTarget::Element(id) => {
            match window.document().and_then(|doc| doc.get_element_by_id(id)) {
                Some(element) => element.scroll_into_view(),
                None => warn!("No element with id {:?} to scroll to", id),
            }
        }
    }
}
