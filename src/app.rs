use crate::constants::*;
use crate::viewport::DomViewport;
use crate::{dom, effects, input};
use roomscroll_core::{Coordinator, NavConfig, NavEvent, PanelSet};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Handles to the markup the navigation drives, collected once at start.
pub struct Page {
    pub window: web::Window,
    pub document: web::Document,
    pub entry: web::HtmlElement,
    pub rooms_section: web::HtmlElement,
    pub rooms_list: web::HtmlElement,
    pub rooms: Vec<web::Element>,
    pub choices: Vec<web::Element>,
    pub hud_buttons: Vec<web::Element>,
}

impl Page {
    pub fn collect(window: web::Window, document: web::Document) -> anyhow::Result<Self> {
        let entry = dom::element_by_id::<web::HtmlElement>(&document, ENTRY_ID)?;
        let rooms_section = dom::element_by_id::<web::HtmlElement>(&document, ROOMS_SECTION_ID)?;
        let rooms_list = dom::element_by_id::<web::HtmlElement>(&document, ROOMS_LIST_ID)?;
        let rooms = dom::query_all(&document, ROOM_SELECTOR);
        if rooms.is_empty() {
            anyhow::bail!("no {ROOM_SELECTOR} panels in the page");
        }
        let choices = dom::query_all(&document, CHOICE_SELECTOR);
        let hud_buttons = dom::query_all(&document, HUD_BUTTON_SELECTOR);
        Ok(Self {
            window,
            document,
            entry,
            rooms_section,
            rooms_list,
            rooms,
            choices,
            hud_buttons,
        })
    }

    /// `NavConfig` defaults with `data-*` overrides from the rooms section.
    pub fn config(&self) -> NavConfig {
        let mut config = NavConfig::default();
        for key in NavConfig::KEYS {
            if let Some(value) = self.rooms_section.get_attribute(&input::config_attribute(key)) {
                if let Err(e) = config.apply_override(key, &value) {
                    log::warn!("[config] {e}; keeping default");
                }
            }
        }
        config
    }

    /// Whether keyboard focus currently sits inside the rooms region.
    pub fn focus_in_rooms(&self) -> bool {
        self.document
            .active_element()
            .map(|el| self.rooms_section.contains(Some(&*el)))
            .unwrap_or(false)
    }
}

pub struct App {
    pub page: Page,
    pub viewport: DomViewport,
    nav: RefCell<Coordinator>,
}

impl App {
    pub fn new(page: Page) -> Rc<Self> {
        let config = page.config();
        let panels = PanelSet::new(page.rooms.iter().map(|r| r.id()));
        log::info!(
            "[nav] {} rooms, breakpoint {}px",
            panels.len(),
            config.breakpoint_px
        );
        let viewport = DomViewport {
            window: page.window.clone(),
            document: page.document.clone(),
            rooms_list: page.rooms_list.clone(),
        };
        Rc::new(Self {
            page,
            viewport,
            nav: RefCell::new(Coordinator::new(panels, config)),
        })
    }

    pub fn takes_arrow_keys(&self, in_rooms: bool) -> bool {
        self.nav
            .try_borrow()
            .map(|nav| nav.takes_arrow_keys(in_rooms, &self.viewport))
            .unwrap_or(false)
    }

    pub fn visible_threshold(&self) -> f64 {
        self.nav.borrow().config().visible_threshold
    }

    /// Run `event` through the coordinator, then apply what it asks for.
    pub fn dispatch(self: &Rc<Self>, event: NavEvent) {
        let fx = match self.nav.try_borrow_mut() {
            Ok(mut nav) => nav.dispatch(event, &self.viewport),
            Err(_) => {
                log::warn!("[nav] re-entrant dispatch of {:?} dropped", event);
                return;
            }
        };
        for effect in fx {
            effects::apply(self, effect);
        }
    }
}
