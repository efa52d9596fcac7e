//! Geometry resolver.
//!
//! Turns live layout measurements into the scroll offset that puts a panel at
//! its anchor. Measurements come from a [`Viewport`] at call time and are
//! never kept: panel sizes follow the viewport width.

use crate::config::NavConfig;
use crate::error::NavError;
use crate::layout::{LayoutMode, ScrollAxis};
use crate::panels::PanelId;

/// Axis-aligned box in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Live view of the page the navigation engine runs against.
pub trait Viewport {
    /// Current viewport width in CSS pixels.
    fn width(&self) -> f64;
    /// The user's reduced-motion preference, read fresh on every call.
    fn prefers_reduced_motion(&self) -> bool;
    /// Monotonic clock in milliseconds, same timebase as frame timestamps.
    fn now_ms(&self) -> f64;
    fn panel_rect(&self, id: &PanelId) -> Option<Rect>;
    /// Bounding box of the horizontal rooms container.
    fn container_rect(&self) -> Option<Rect>;
    fn scroll_offset(&self, axis: ScrollAxis) -> f64;
}

/// Scroll offset along `mode.axis()` that brings `id` to the active anchor.
pub fn resolve_offset(
    viewport: &impl Viewport,
    id: &PanelId,
    mode: LayoutMode,
    config: &NavConfig,
) -> Result<f64, NavError> {
    let panel = viewport
        .panel_rect(id)
        .ok_or_else(|| NavError::UnknownTarget(id.to_string()))?;
    if !panel.is_measurable() {
        return Err(NavError::DegenerateGeometry(id.to_string()));
    }

    let offset = match mode {
        LayoutMode::Expanded => {
            let container = viewport
                .container_rect()
                .filter(Rect::is_measurable)
                .ok_or_else(|| NavError::DegenerateGeometry(id.to_string()))?;
            horizontal_offset(
                panel,
                container,
                viewport.scroll_offset(ScrollAxis::Horizontal),
                config.center_panels,
            )
        }
        LayoutMode::Compact => vertical_offset(
            panel,
            viewport.scroll_offset(ScrollAxis::Vertical),
            config.anchor_offset_px,
        ),
    };

    if offset.is_finite() {
        Ok(offset.max(0.0))
    } else {
        Err(NavError::DegenerateGeometry(id.to_string()))
    }
}

/// Panel's left edge relative to the container's content origin, optionally
/// shifted so a narrower panel sits centered.
#[inline]
pub fn horizontal_offset(panel: Rect, container: Rect, scroll_left: f64, center: bool) -> f64 {
    let left = panel.left - container.left + scroll_left;
    if center {
        left - ((container.width - panel.width).max(0.0) / 2.0)
    } else {
        left
    }
}

/// Panel's top edge in document coordinates minus the HUD anchor margin.
#[inline]
pub fn vertical_offset(panel: Rect, scroll_y: f64, anchor: f64) -> f64 {
    panel.top + scroll_y - anchor
}
