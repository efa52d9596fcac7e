use crate::constants::ENTRY_HIDDEN_CLASS;
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(entry: &web::HtmlElement) {
    _ = entry.style().remove_property("display");
    _ = entry.class_list().remove_1(ENTRY_HIDDEN_CLASS);
    _ = entry.set_attribute("aria-hidden", "false");
}

/// Start the fade (CSS, via the hidden class) and take the view out of flow
/// once it is done. `fade_ms == 0` hides at once.
pub fn hide(entry: &web::HtmlElement, fade_ms: u32) {
    _ = entry.class_list().add_1(ENTRY_HIDDEN_CLASS);
    _ = entry.set_attribute("aria-hidden", "true");
    if fade_ms == 0 {
        _ = entry.style().set_property("display", "none");
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let el = entry.clone();
    dom::set_timeout(&window, fade_ms, move || {
        // shown again while fading
        if is_hidden(&el) {
            _ = el.style().set_property("display", "none");
        }
    });
}

#[inline]
pub fn is_hidden(entry: &web::HtmlElement) -> bool {
    entry.class_list().contains(ENTRY_HIDDEN_CLASS)
}
