use crate::app::App;
use crate::{dom, input};
use roomscroll_core::NavEvent;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Enter/Space on a focused choice behaves like a click.
pub fn wire_choice_keys(app: &Rc<App>) {
    for choice in &app.page.choices {
        let Some(button) = choice.dyn_ref::<web::HtmlElement>().cloned() else {
            continue;
        };
        dom::add_listener(choice, "keydown", move |ev: web::KeyboardEvent| {
            if input::activates_choice(&ev.key()) {
                ev.prevent_default();
                button.click();
            }
        });
    }
}

pub fn wire_room_keys(app: &Rc<App>) {
    let app_keys = app.clone();
    dom::add_listener(
        &app.page.window,
        "keydown",
        move |ev: web::KeyboardEvent| {
            if ev.alt_key() || ev.ctrl_key() || ev.meta_key() {
                return;
            }
            let Some(step) = input::nav_step_for_key(&ev.key()) else {
                return;
            };
            let in_rooms = app_keys.page.focus_in_rooms();
            // Otherwise the browser keeps its own arrow-key scrolling.
            if app_keys.takes_arrow_keys(in_rooms) {
                ev.prevent_default();
            }
            log::debug!("[keys] {step:?} in_rooms={in_rooms}");
            app_keys.dispatch(NavEvent::Key { step, in_rooms });
        },
    );
}
