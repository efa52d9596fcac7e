use crate::app::App;
use crate::dom;
use roomscroll_core::NavEvent;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe every room for the lifetime of the page. Each entry goes to the
/// coordinator as-is; crossing detection and filtering happen there.
pub fn wire_panel_observer(app: &Rc<App>) -> anyhow::Result<()> {
    let app_obs = app.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                app_obs.dispatch(NavEvent::PanelVisibility {
                    id: entry.target().id(),
                    ratio: entry.intersection_ratio(),
                    intersecting: entry.is_intersecting(),
                });
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(app.visible_threshold()));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom::js_err)?;
    for room in &app.page.rooms {
        observer.observe(room);
    }
    callback.forget();
    log::info!(
        "[nav] observing {} rooms at threshold {:.2}",
        app.page.rooms.len(),
        app.visible_threshold()
    );
    Ok(())
}
