use crate::app::App;
use crate::dom;
use roomscroll_core::NavEvent;
use std::rc::Rc;
use web_sys as web;

// Raw resize events; the coordinator debounces them.
pub fn wire_resize(app: &Rc<App>) {
    let app_resize = app.clone();
    dom::add_listener(&app.page.window, "resize", move |_: web::Event| {
        app_resize.dispatch(NavEvent::Resized);
    });
}
