use crate::constants::{ACTIVE_CLASS, TARGET_ATTR};
use crate::input;
use roomscroll_core::PanelId;
use web_sys as web;

/// Press the controls targeting `active` and release every other one.
pub fn highlight(buttons: &[web::Element], active: Option<&PanelId>) {
    for b in buttons {
        let on = match (active, input::target_of(b.get_attribute(TARGET_ATTR))) {
            (Some(id), Some(target)) => target == id.as_str(),
            _ => false,
        };
        _ = b.class_list().toggle_with_force(ACTIVE_CLASS, on);
        _ = b.set_attribute("aria-pressed", if on { "true" } else { "false" });
    }
}
