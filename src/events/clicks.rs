use crate::app::App;
use crate::constants::*;
use crate::{dom, input};
use roomscroll_core::NavEvent;
use std::rc::Rc;
use web_sys as web;

pub fn wire_click_handlers(app: &Rc<App>) {
    wire_choices(app);
    wire_hud(app);
    wire_controls(app);
}

fn wire_choices(app: &Rc<App>) {
    for choice in &app.page.choices {
        let Some(target) = input::target_of(choice.get_attribute(TARGET_ATTR)) else {
            log::warn!("[dom] choice without {TARGET_ATTR}; skipping");
            continue;
        };
        let app = app.clone();
        dom::add_listener(choice, "click", move |_: web::MouseEvent| {
            app.dispatch(NavEvent::ChoiceSelected {
                target: target.clone(),
            });
        });
    }
}

fn wire_hud(app: &Rc<App>) {
    for button in &app.page.hud_buttons {
        let Some(target) = input::target_of(button.get_attribute(TARGET_ATTR)) else {
            continue;
        };
        let app = app.clone();
        dom::add_listener(button, "click", move |_: web::MouseEvent| {
            app.dispatch(NavEvent::HudClicked {
                target: target.clone(),
            });
        });
    }
}

fn wire_controls(app: &Rc<App>) {
    let document = &app.page.document;

    let app_back = app.clone();
    dom::add_click_listener(document, BACK_BUTTON_ID, move |_| {
        app_back.dispatch(NavEvent::ReturnToArrival);
    });

    let app_menu = app.clone();
    dom::add_click_listener(document, VIEW_MENU_ID, move |_| {
        app_menu.dispatch(NavEvent::Skip);
    });

    let app_skip = app.clone();
    dom::add_click_listener(document, SKIP_LINK_ID, move |ev| {
        ev.prevent_default();
        app_skip.dispatch(NavEvent::Skip);
    });
}
