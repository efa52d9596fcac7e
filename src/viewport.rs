use crate::constants::REDUCED_MOTION_QUERY;
use crate::dom;
use roomscroll_core::{PanelId, Rect, ScrollAxis, Viewport};
use web_sys as web;

/// Live DOM measurements; every call reads the page afresh.
#[derive(Clone)]
pub struct DomViewport {
    pub window: web::Window,
    pub document: web::Document,
    pub rooms_list: web::HtmlElement,
}

#[inline]
fn rect_of(r: &web::DomRect) -> Rect {
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

impl Viewport for DomViewport {
    fn width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn prefers_reduced_motion(&self) -> bool {
        dom::media_matches(&self.window, REDUCED_MOTION_QUERY)
    }

    fn now_ms(&self) -> f64 {
        instant::now()
    }

    fn panel_rect(&self, id: &PanelId) -> Option<Rect> {
        self.document
            .get_element_by_id(id.as_str())
            .map(|el| rect_of(&el.get_bounding_client_rect()))
    }

    fn container_rect(&self) -> Option<Rect> {
        Some(rect_of(&self.rooms_list.get_bounding_client_rect()))
    }

    fn scroll_offset(&self, axis: ScrollAxis) -> f64 {
        match axis {
            ScrollAxis::Horizontal => self.rooms_list.scroll_left() as f64,
            ScrollAxis::Vertical => self.window.scroll_y().unwrap_or(0.0),
        }
    }
}
