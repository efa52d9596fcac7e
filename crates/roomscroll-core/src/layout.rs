//! Layout mode switch.
//!
//! The mode is a pure function of the viewport width and is recomputed for
//! every decision; nothing here is cached across a resize.

/// Desktop (`Expanded`, rooms scroll horizontally inside their container)
/// vs. mobile (`Compact`, the document scrolls vertically).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Expanded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    /// The rooms container's `scrollLeft`.
    Horizontal,
    /// The document's vertical scroll.
    Vertical,
}

impl LayoutMode {
    #[inline]
    pub fn for_width(viewport_width: f64, breakpoint: f64) -> Self {
        if viewport_width >= breakpoint {
            LayoutMode::Expanded
        } else {
            LayoutMode::Compact
        }
    }

    #[inline]
    pub fn axis(self) -> ScrollAxis {
        match self {
            LayoutMode::Expanded => ScrollAxis::Horizontal,
            LayoutMode::Compact => ScrollAxis::Vertical,
        }
    }
}

impl ScrollAxis {
    pub const ALL: [ScrollAxis; 2] = [ScrollAxis::Horizontal, ScrollAxis::Vertical];

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            ScrollAxis::Horizontal => 0,
            ScrollAxis::Vertical => 1,
        }
    }
}
