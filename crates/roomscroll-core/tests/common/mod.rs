// Deterministic stand-in for the browser page used by the host-side tests.

#![allow(dead_code)]

use roomscroll_core::*;

pub const CONTAINER_LEFT: f64 = 40.0;
pub const CONTAINER_TOP: f64 = 120.0;
pub const PAGE_TOP: f64 = 300.0;

/// Rooms laid out in a row (expanded) or a column (compact), like the page.
pub struct FakePage {
    pub ids: Vec<&'static str>,
    pub width: f64,
    pub reduced_motion: bool,
    pub now_ms: f64,
    pub panel_width: f64,
    pub panel_height: f64,
    pub gap: f64,
    pub container_width: f64,
    pub scroll_left: f64,
    pub scroll_y: f64,
}

impl FakePage {
    pub fn new(ids: &[&'static str]) -> Self {
        Self {
            ids: ids.to_vec(),
            width: 1280.0,
            reduced_motion: false,
            now_ms: 1_000.0,
            panel_width: 600.0,
            panel_height: 500.0,
            gap: 22.0,
            container_width: 1200.0,
            scroll_left: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn compact(mut self) -> Self {
        self.width = 600.0;
        self
    }

    /// Applies the scroll writes a frontend would perform.
    pub fn apply(&mut self, fx: &[Effect]) {
        for e in fx {
            if let Effect::WriteScroll { axis, offset } = e {
                match axis {
                    ScrollAxis::Horizontal => self.scroll_left = *offset,
                    ScrollAxis::Vertical => self.scroll_y = *offset,
                }
            }
        }
    }

    pub fn index_of(&self, id: &str) -> usize {
        self.ids.iter().position(|i| *i == id).expect("known id")
    }

    /// Offset at which `id` sits flush-left in the container.
    pub fn row_offset(&self, id: &str) -> f64 {
        self.index_of(id) as f64 * (self.panel_width + self.gap)
    }

    /// Offset at which `id` sits under the HUD anchor.
    pub fn column_offset(&self, id: &str) -> f64 {
        PAGE_TOP + self.index_of(id) as f64 * (self.panel_height + self.gap) - HUD_ANCHOR_PX
    }
}

impl Viewport for FakePage {
    fn width(&self) -> f64 {
        self.width
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn panel_rect(&self, id: &PanelId) -> Option<Rect> {
        let i = self.ids.iter().position(|p| *p == id.as_str())? as f64;
        if self.width >= BREAKPOINT_PX {
            Some(Rect::new(
                CONTAINER_LEFT + i * (self.panel_width + self.gap) - self.scroll_left,
                CONTAINER_TOP,
                self.panel_width,
                self.panel_height,
            ))
        } else {
            Some(Rect::new(
                16.0,
                PAGE_TOP + i * (self.panel_height + self.gap) - self.scroll_y,
                self.width - 32.0,
                self.panel_height,
            ))
        }
    }

    fn container_rect(&self) -> Option<Rect> {
        Some(Rect::new(
            CONTAINER_LEFT,
            CONTAINER_TOP,
            self.container_width,
            self.panel_height,
        ))
    }

    fn scroll_offset(&self, axis: ScrollAxis) -> f64 {
        match axis {
            ScrollAxis::Horizontal => self.scroll_left,
            ScrollAxis::Vertical => self.scroll_y,
        }
    }
}

pub fn rooms() -> PanelSet {
    PanelSet::new(["counter", "breakfast", "dinner"])
}

pub fn page() -> FakePage {
    FakePage::new(&["counter", "breakfast", "dinner"])
}

/// Pull the single deferred event out of an effect list.
pub fn deferred(fx: &[Effect]) -> (u32, NavEvent) {
    fx.iter()
        .find_map(|e| match e {
            Effect::Defer { delay_ms, event } => Some((*delay_ms, event.clone())),
            _ => None,
        })
        .expect("a deferred event")
}

pub fn frame_ticket(fx: &[Effect]) -> Option<FrameTicket> {
    fx.iter().find_map(|e| match e {
        Effect::RequestFrame(t) => Some(*t),
        _ => None,
    })
}

/// Run animation frames 16 ms apart until the loop stops asking for more.
pub fn run_frames(nav: &mut Coordinator, page: &mut FakePage, mut ticket: FrameTicket) -> usize {
    let mut frames = 0;
    loop {
        page.now_ms += 16.0;
        let fx = nav.dispatch(
            NavEvent::Frame {
                ticket,
                now_ms: page.now_ms,
            },
            &*page,
        );
        page.apply(&fx);
        frames += 1;
        match frame_ticket(&fx) {
            Some(next) => ticket = next,
            None => return frames,
        }
        assert!(frames < 1_000, "animation never finished");
    }
}

/// Dispatch and apply in one step.
pub fn step(nav: &mut Coordinator, page: &mut FakePage, ev: NavEvent) -> Vec<Effect> {
    let fx = nav.dispatch(ev, &*page);
    page.apply(&fx);
    fx.into_vec()
}

/// Deep-link into `fragment` and run the deferred settle.
pub fn load(nav: &mut Coordinator, page: &mut FakePage, fragment: &str) -> Vec<Effect> {
    let mut all = step(
        nav,
        page,
        NavEvent::PageLoaded {
            fragment: fragment.to_string(),
        },
    );
    let settle = all.iter().find_map(|e| match e {
        Effect::Defer { event, .. } => Some(event.clone()),
        _ => None,
    });
    if let Some(event) = settle {
        all.extend(step(nav, page, event));
    }
    all
}

pub fn highlights(fx: &[Effect]) -> Vec<Option<String>> {
    fx.iter()
        .filter_map(|e| match e {
            Effect::Highlight(h) => Some(h.as_ref().map(|p| p.to_string())),
            _ => None,
        })
        .collect()
}

pub fn fragments(fx: &[Effect]) -> Vec<String> {
    fx.iter()
        .filter_map(|e| match e {
            Effect::ReplaceFragment(f) => Some(f.clone()),
            _ => None,
        })
        .collect()
}
