// DOM hooks and state classes shared with the page markup and stylesheet.

// Elements looked up by id
pub const ENTRY_ID: &str = "entry"; // arrival view
pub const ROOMS_SECTION_ID: &str = "rooms"; // focusable rooms region
pub const ROOMS_LIST_ID: &str = "roomsList"; // horizontal scroll container
pub const BACK_BUTTON_ID: &str = "backToArrival";
pub const VIEW_MENU_ID: &str = "viewMenuBtn";
pub const SKIP_LINK_ID: &str = "skip";

// Collections
pub const ROOM_SELECTOR: &str = ".room";
pub const CHOICE_SELECTOR: &str = ".choice";
pub const HUD_BUTTON_SELECTOR: &str = ".hud-btn";
pub const TARGET_ATTR: &str = "data-target";

// State classes; the stylesheet owns how they look
pub const ENTRY_HIDDEN_CLASS: &str = "entry-hidden";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const ACTIVE_CLASS: &str = "active";

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
