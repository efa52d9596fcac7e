use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{id} has an unexpected element type"))
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn add_listener<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", handler);
    } else {
        log::debug!("[dom] no #{element_id}; skipping click wiring");
    }
}

pub fn set_timeout(window: &web::Window, delay_ms: u32, callback: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(callback);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        delay_ms.min(i32::MAX as u32) as i32,
    );
}

#[inline]
pub fn media_matches(window: &web::Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(mql)) if mql.matches())
}

#[inline]
pub fn location_hash(window: &web::Window) -> String {
    window.location().hash().unwrap_or_default()
}

/// Rewrite the fragment in place: no scroll jump, no new history entry.
pub fn replace_fragment(window: &web::Window, href: &str) {
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(href)) {
                log::warn!("[url] replaceState failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("[url] no history: {:?}", e),
    }
}

/// Resolves once the window `load` event has fired (immediately if it has).
pub async fn window_loaded(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() == "complete" {
        return Ok(());
    }
    let target = window.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = target.add_event_listener_with_callback("load", &resolve);
    });
    JsFuture::from(promise).await.map_err(js_err)?;
    Ok(())
}
