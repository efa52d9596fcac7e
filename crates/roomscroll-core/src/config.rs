use crate::constants::*;
use crate::error::ConfigError;

/// Runtime-tunable navigation parameters. Defaults mirror `constants.rs`;
/// the web frontend may override individual fields from `data-*` attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub breakpoint_px: f64,
    pub anchor_offset_px: f64,
    pub visible_threshold: f64,
    pub scroll_duration_ms: f64,
    pub resize_debounce_ms: u32,
    pub entry_fade_ms: u32,
    pub enter_delay_ms: u32,
    pub deep_link_delay_ms: u32,
    /// Center narrower panels in the container instead of aligning them flush-left.
    pub center_panels: bool,
    /// Deep links glide into place (unless motion is reduced) instead of jumping.
    pub cinematic_deep_link: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: BREAKPOINT_PX,
            anchor_offset_px: HUD_ANCHOR_PX,
            visible_threshold: VISIBLE_THRESHOLD,
            scroll_duration_ms: SCROLL_DURATION_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            entry_fade_ms: ENTRY_FADE_MS,
            enter_delay_ms: ENTER_DELAY_MS,
            deep_link_delay_ms: DEEP_LINK_DELAY_MS,
            center_panels: false,
            cinematic_deep_link: false,
        }
    }
}

impl NavConfig {
    /// Names accepted by [`NavConfig::apply_override`].
    pub const KEYS: &'static [&'static str] = &[
        "breakpoint",
        "anchor-offset",
        "visible-threshold",
        "scroll-duration",
        "resize-debounce",
        "entry-fade",
        "enter-delay",
        "deep-link-delay",
        "center-panels",
        "cinematic-deep-link",
    ];

    /// Parse and apply one setting. On error the config is left untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "breakpoint" => self.breakpoint_px = parse_f64(key, value, 1.0, 10_000.0, "1..=10000")?,
            "anchor-offset" => {
                self.anchor_offset_px = parse_f64(key, value, 0.0, 1_000.0, "0..=1000")?
            }
            "visible-threshold" => {
                self.visible_threshold = parse_f64(key, value, 0.01, 1.0, "0.01..=1")?
            }
            "scroll-duration" => {
                self.scroll_duration_ms = parse_f64(key, value, 1.0, 10_000.0, "1..=10000")?
            }
            "resize-debounce" => self.resize_debounce_ms = parse_ms(key, value)?,
            "entry-fade" => self.entry_fade_ms = parse_ms(key, value)?,
            "enter-delay" => self.enter_delay_ms = parse_ms(key, value)?,
            "deep-link-delay" => self.deep_link_delay_ms = parse_ms(key, value)?,
            "center-panels" => self.center_panels = parse_bool(key, value)?,
            "cinematic-deep-link" => self.cinematic_deep_link = parse_bool(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        log::debug!("[config] {key} = {value}");
        Ok(())
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_f64(
    key: &str,
    value: &str,
    min: f64,
    max: f64,
    range: &'static str,
) -> Result<f64, ConfigError> {
    let v: f64 = value
        .trim()
        .trim_end_matches("px")
        .parse()
        .map_err(|_| invalid(key, value))?;
    if !v.is_finite() {
        return Err(invalid(key, value));
    }
    if v < min || v > max {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value: v,
            range,
        });
    }
    Ok(v)
}

fn parse_ms(key: &str, value: &str) -> Result<u32, ConfigError> {
    let v = value.trim().trim_end_matches("ms");
    v.parse::<u32>().map_err(|_| invalid(key, value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}
