pub mod clicks;
pub mod keyboard;
pub mod resize;
pub mod visibility;

pub use clicks::wire_click_handlers;
pub use keyboard::{wire_choice_keys, wire_room_keys};
pub use resize::wire_resize;
pub use visibility::wire_panel_observer;
