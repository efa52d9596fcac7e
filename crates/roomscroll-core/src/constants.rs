// Navigation tuning defaults shared by the core and the web frontend.

// Layout
pub const BREAKPOINT_PX: f64 = 901.0; // viewport widths at/above this scroll horizontally
pub const HUD_ANCHOR_PX: f64 = 18.0; // vertical gap kept above a panel for the fixed HUD

// Motion
pub const SCROLL_DURATION_MS: f64 = 650.0; // eased scroll window
pub const MIN_ANIMATED_DISTANCE_PX: f64 = 0.5; // shorter moves jump instead of animating

// Visibility
pub const VISIBLE_THRESHOLD: f64 = 0.45; // intersection ratio at which a panel counts as "in view"

// Timers (milliseconds)
pub const RESIZE_DEBOUNCE_MS: u32 = 180;
pub const ENTRY_FADE_MS: u32 = 420; // arrival view fade-out before it is taken out of flow
pub const ENTER_DELAY_MS: u32 = 460; // navigation starts once the fade has finished
pub const DEEP_LINK_DELAY_MS: u32 = 80; // let layout settle before the first jump

// Fragment tokens that all mean "the arrival view"
pub const ARRIVAL_TOKEN: &str = "arrival";
pub const HOME_ALIASES: &[&str] = &["", ARRIVAL_TOKEN, "home"];

#[inline]
pub fn is_home_alias(token: &str) -> bool {
    let t = token.trim();
    HOME_ALIASES.iter().any(|alias| alias.eq_ignore_ascii_case(t))
}
