use roomscroll_core::KeyNav;

#[inline]
pub fn nav_step_for_key(key: &str) -> Option<KeyNav> {
    match key {
        "ArrowLeft" | "Left" => Some(KeyNav::Previous),
        "ArrowRight" | "Right" => Some(KeyNav::Next),
        _ => None,
    }
}

// Keys that press a focused entry choice, as a native button would
#[inline]
pub fn activates_choice(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Trimmed `data-target` value; absent and blank attributes mean no target.
#[inline]
pub fn target_of(attr: Option<String>) -> Option<String> {
    attr.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/// Markup attribute carrying a `NavConfig` override for `key`.
#[inline]
pub fn config_attribute(key: &str) -> String {
    format!("data-{key}")
}

#[inline]
pub fn fragment_href(token: &str) -> String {
    format!("#{token}")
}
