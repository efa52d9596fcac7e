use crate::app::App;
use crate::constants::VISIBLE_CLASS;
use crate::{dom, entry, frame, hud, input};
use roomscroll_core::{Effect, ScrollAxis};
use std::rc::Rc;

pub fn apply(app: &Rc<App>, effect: Effect) {
    let page = &app.page;
    match effect {
        Effect::HideEntry { fade_ms } => entry::hide(&page.entry, fade_ms),
        Effect::ShowEntry => entry::show(&page.entry),
        Effect::FocusRooms => {
            _ = page.rooms_section.focus();
        }
        Effect::Reveal(id) => {
            if let Some(el) = page.document.get_element_by_id(id.as_str()) {
                _ = el.class_list().add_1(VISIBLE_CLASS);
            }
        }
        Effect::Highlight(active) => hud::highlight(&page.hud_buttons, active.as_ref()),
        Effect::ReplaceFragment(token) => {
            dom::replace_fragment(&page.window, &input::fragment_href(&token))
        }
        Effect::WriteScroll { axis, offset } => match axis {
            ScrollAxis::Horizontal => page.rooms_list.set_scroll_left(offset.round() as i32),
            ScrollAxis::Vertical => {
                let x = page.window.scroll_x().unwrap_or(0.0);
                page.window.scroll_to_with_x_and_y(x, offset);
            }
        },
        Effect::RequestFrame(ticket) => frame::request(app, ticket),
        Effect::Defer { delay_ms, event } => frame::defer(app, delay_ms, event),
    }
}
