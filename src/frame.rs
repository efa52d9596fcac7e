use crate::app::App;
use crate::dom;
use roomscroll_core::{FrameTicket, NavEvent};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// One display-refresh callback for the animation loop owning `ticket`. The
/// loop re-arms itself through the coordinator until it finishes or a newer
/// request supersedes it.
pub fn request(app: &Rc<App>, ticket: FrameTicket) {
    let app_tick = app.clone();
    let cb = Closure::once_into_js(move |now_ms: f64| {
        app_tick.dispatch(NavEvent::Frame { ticket, now_ms });
    });
    if let Err(e) = app.page.window.request_animation_frame(cb.unchecked_ref()) {
        log::warn!("[scroll] requestAnimationFrame failed: {:?}", e);
    }
}

/// Feed `event` back into the coordinator after `delay_ms`.
pub fn defer(app: &Rc<App>, delay_ms: u32, event: NavEvent) {
    let app_later = app.clone();
    dom::set_timeout(&app.page.window, delay_ms, move || {
        app_later.dispatch(event);
    });
}
