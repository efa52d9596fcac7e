//! View-state coordinator.
//!
//! All navigation funnels through [`Coordinator::dispatch`]: the frontend
//! turns DOM callbacks (clicks, keys, observer entries, resize, animation
//! frames, timers) into [`NavEvent`]s and applies the [`Effect`]s that come
//! back. The HUD highlight and the URL fragment are both derived from the
//! single [`ActiveState`] in `sync_outputs` and nowhere else.

use smallvec::SmallVec;

use crate::animator::{AnimationStart, FrameStep, FrameTicket, ScrollAnimator, TransitionMode};
use crate::config::NavConfig;
use crate::constants::{is_home_alias, ARRIVAL_TOKEN};
use crate::geometry::{resolve_offset, Viewport};
use crate::layout::{LayoutMode, ScrollAxis};
use crate::panels::{KeyNav, PanelId, PanelSet};
use crate::visibility::{Crossing, VisibilityTracker};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveState {
    /// The introductory view; no room is active.
    Arrival,
    AtPanel(PanelId),
}

impl ActiveState {
    #[inline]
    pub fn panel(&self) -> Option<&PanelId> {
        match self {
            ActiveState::Arrival => None,
            ActiveState::AtPanel(id) => Some(id),
        }
    }

    /// Token written to the URL fragment for this state.
    pub fn fragment_token(&self) -> &str {
        match self {
            ActiveState::Arrival => ARRIVAL_TOKEN,
            ActiveState::AtPanel(id) => id.as_str(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTarget {
    pub panel: PanelId,
    pub mode: TransitionMode,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavEvent {
    /// Window finished loading; `fragment` is the raw `location.hash`.
    PageLoaded { fragment: String },
    /// An entry-view choice naming a room.
    ChoiceSelected { target: String },
    /// Skip link or "view menu": enter the first room.
    Skip,
    HudClicked { target: String },
    /// Arrow key; `in_rooms` is whether focus sits inside the rooms region.
    Key { step: KeyNav, in_rooms: bool },
    PanelVisibility {
        id: String,
        ratio: f64,
        intersecting: bool,
    },
    Resized,
    /// Debounce timer for the resize numbered `seq`.
    ResizeSettled { seq: u64 },
    ReturnToArrival,
    /// Deferred second half of an entry transition or deep link.
    EnterRooms(NavigationTarget),
    /// Direct programmatic navigation.
    Navigate(NavigationTarget),
    Frame { ticket: FrameTicket, now_ms: f64 },
}

/// Instructions for the frontend, applied in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fade the arrival view out; take it out of flow after `fade_ms`.
    HideEntry { fade_ms: u32 },
    ShowEntry,
    FocusRooms,
    /// Mark a panel as revealed (it has been seen at least once).
    Reveal(PanelId),
    /// Exactly this HUD control (or none) is pressed.
    Highlight(Option<PanelId>),
    /// Replace the URL fragment without scrolling or adding history.
    ReplaceFragment(String),
    WriteScroll { axis: ScrollAxis, offset: f64 },
    RequestFrame(FrameTicket),
    /// Dispatch `event` after `delay_ms`.
    Defer { delay_ms: u32, event: NavEvent },
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Debug)]
struct Pending {
    target: PanelId,
    // None while waiting on a deferred EnterRooms.
    ticket: Option<FrameTicket>,
}

pub struct Coordinator {
    config: NavConfig,
    panels: PanelSet,
    active: ActiveState,
    // What the page currently shows; None until first written.
    highlighted: Option<Option<PanelId>>,
    url_state: Option<ActiveState>,
    animator: ScrollAnimator,
    tracker: VisibilityTracker,
    pending: Option<Pending>,
    // Set by a return to arrival until the row reset reports the first room.
    returning: bool,
    resize_seq: u64,
}

impl Coordinator {
    pub fn new(panels: PanelSet, config: NavConfig) -> Self {
        let animator = ScrollAnimator::new(config.scroll_duration_ms);
        let tracker = VisibilityTracker::new(config.visible_threshold);
        Self {
            config,
            panels,
            active: ActiveState::Arrival,
            highlighted: None,
            url_state: None,
            animator,
            tracker,
            pending: None,
            returning: false,
            resize_seq: 0,
        }
    }

    #[inline]
    pub fn active(&self) -> &ActiveState {
        &self.active
    }

    #[inline]
    pub fn panels(&self) -> &PanelSet {
        &self.panels
    }

    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// HUD control the page was last told to highlight.
    pub fn highlighted(&self) -> Option<&PanelId> {
        self.highlighted.as_ref().and_then(|h| h.as_ref())
    }

    /// Fragment token the URL was last seeded with or written to.
    pub fn fragment(&self) -> Option<&str> {
        self.url_state.as_ref().map(ActiveState::fragment_token)
    }

    /// A programmatic navigation has not settled yet.
    pub fn is_navigating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn tracker(&self) -> &VisibilityTracker {
        &self.tracker
    }

    /// Arrow keys step between rooms: focus is in the rooms region, the
    /// layout is expanded and a room is active.
    pub fn takes_arrow_keys(&self, in_rooms: bool, viewport: &impl Viewport) -> bool {
        in_rooms
            && LayoutMode::for_width(viewport.width(), self.config.breakpoint_px)
                == LayoutMode::Expanded
            && self.active.panel().is_some()
    }

    pub fn dispatch(&mut self, event: NavEvent, viewport: &impl Viewport) -> Effects {
        let mut fx = Effects::new();
        match event {
            NavEvent::PageLoaded { fragment } => self.on_page_loaded(&fragment, viewport, &mut fx),
            NavEvent::ChoiceSelected { target } => self.enter_rooms(&target, &mut fx),
            NavEvent::Skip => {
                if let Some(first) = self.panels.first().cloned() {
                    self.enter_rooms(first.as_str(), &mut fx);
                }
            }
            NavEvent::HudClicked { target } => {
                if is_home_alias(&target) {
                    self.return_to_arrival(viewport, &mut fx);
                } else if let Some(id) = self.panels.resolve(&target).cloned() {
                    self.navigate(id, TransitionMode::Animated, viewport, &mut fx);
                } else {
                    log::debug!("[nav] HUD target `{target}` is not a room; ignoring");
                }
            }
            NavEvent::Key { step, in_rooms } => self.on_key(step, in_rooms, viewport, &mut fx),
            NavEvent::PanelVisibility {
                id,
                ratio,
                intersecting,
            } => self.on_visibility(&id, ratio, intersecting, &mut fx),
            NavEvent::Resized => {
                self.resize_seq += 1;
                fx.push(Effect::Defer {
                    delay_ms: self.config.resize_debounce_ms,
                    event: NavEvent::ResizeSettled {
                        seq: self.resize_seq,
                    },
                });
            }
            NavEvent::ResizeSettled { seq } => self.on_resize_settled(seq, viewport, &mut fx),
            NavEvent::ReturnToArrival => self.return_to_arrival(viewport, &mut fx),
            NavEvent::EnterRooms(target) => {
                let awaiting = matches!(
                    &self.pending,
                    Some(p) if p.target == target.panel && p.ticket.is_none()
                );
                if !awaiting {
                    log::debug!("[nav] dropping stale entry into {}", target.panel);
                    // A resize may have re-anchored the room already.
                    if self.active.panel() == Some(&target.panel) {
                        fx.push(Effect::FocusRooms);
                    }
                } else {
                    fx.push(Effect::FocusRooms);
                    self.navigate(target.panel, target.mode, viewport, &mut fx);
                }
            }
            NavEvent::Navigate(target) => {
                if self.panels.position(&target.panel).is_some() {
                    self.navigate(target.panel, target.mode, viewport, &mut fx);
                } else {
                    log::debug!("[nav] unknown room `{}`; ignoring", target.panel);
                }
            }
            NavEvent::Frame { ticket, now_ms } => self.on_frame(ticket, now_ms, &mut fx),
        }
        fx
    }

    fn on_page_loaded(&mut self, fragment: &str, viewport: &impl Viewport, fx: &mut Effects) {
        let token = fragment.trim().trim_start_matches('#').trim();
        self.url_state = if is_home_alias(token) {
            Some(ActiveState::Arrival)
        } else {
            self.panels.resolve(token).cloned().map(ActiveState::AtPanel)
        };
        // Whatever the markup pre-selected gets overwritten.
        self.highlighted = None;
        self.returning = false;

        match self.panels.resolve(token).cloned() {
            Some(id) => {
                let mode = if self.config.cinematic_deep_link && !viewport.prefers_reduced_motion() {
                    TransitionMode::Animated
                } else {
                    TransitionMode::Instant
                };
                log::info!("[nav] deep link into {id} ({mode:?})");
                fx.push(Effect::HideEntry { fade_ms: 0 });
                self.set_active(ActiveState::AtPanel(id.clone()), fx);
                self.pending = Some(Pending {
                    target: id.clone(),
                    ticket: None,
                });
                fx.push(Effect::Defer {
                    delay_ms: self.config.deep_link_delay_ms,
                    event: NavEvent::EnterRooms(NavigationTarget { panel: id, mode }),
                });
            }
            None => {
                if !is_home_alias(token) {
                    log::debug!("[nav] fragment #{token} names no room; showing arrival");
                }
                self.pending = None;
                fx.push(Effect::ShowEntry);
                self.set_active(ActiveState::Arrival, fx);
            }
        }
    }

    fn enter_rooms(&mut self, token: &str, fx: &mut Effects) {
        let Some(id) = self.panels.resolve(token).cloned() else {
            log::debug!("[nav] choice target `{token}` is not a room; ignoring");
            return;
        };
        self.animator.cancel_all();
        self.returning = false;
        fx.push(Effect::HideEntry {
            fade_ms: self.config.entry_fade_ms,
        });
        self.set_active(ActiveState::AtPanel(id.clone()), fx);
        self.pending = Some(Pending {
            target: id.clone(),
            ticket: None,
        });
        fx.push(Effect::Defer {
            delay_ms: self.config.enter_delay_ms,
            event: NavEvent::EnterRooms(NavigationTarget {
                panel: id,
                mode: TransitionMode::Animated,
            }),
        });
    }

    fn on_key(&mut self, step: KeyNav, in_rooms: bool, viewport: &impl Viewport, fx: &mut Effects) {
        if !self.takes_arrow_keys(in_rooms, viewport) {
            return;
        }
        let ActiveState::AtPanel(current) = &self.active else {
            return;
        };
        let Some(next) = self.panels.step(current, step).cloned() else {
            return;
        };
        if next == *current {
            log::debug!("[keys] {next} is the last room that way");
            return;
        }
        self.navigate(next, TransitionMode::Animated, viewport, fx);
    }

    fn on_visibility(&mut self, raw_id: &str, ratio: f64, intersecting: bool, fx: &mut Effects) {
        let Some(id) = self.panels.resolve(raw_id).cloned() else {
            return;
        };
        match self.tracker.observe(&id, ratio, intersecting) {
            Some(Crossing::Entered(id)) => {
                fx.push(Effect::Reveal(id.clone()));
                if self.active == ActiveState::Arrival && self.passed_on_return(&id) {
                    return;
                }
                if let Some(p) = &self.pending {
                    if p.target != id {
                        log::debug!("[nav] {id} passed by on the way to {}", p.target);
                        return;
                    }
                }
                self.set_active(ActiveState::AtPanel(id), fx);
            }
            Some(Crossing::Exited(id)) => log::trace!("[nav] {id} left view"),
            None => {}
        }
    }

    // Rooms crossed by the glide back to the top, and the first room shown
    // again by the row reset, are not the user scrolling into the rooms.
    fn passed_on_return(&mut self, id: &PanelId) -> bool {
        let is_first = self.panels.first() == Some(id);
        if self.animator.is_animating(ScrollAxis::Vertical) {
            if is_first {
                self.returning = false;
            }
            log::debug!("[nav] {id} passed by on the way back to arrival");
            return true;
        }
        if std::mem::take(&mut self.returning) && is_first {
            log::debug!("[nav] {id} shown by the row reset");
            return true;
        }
        false
    }

    fn on_resize_settled(&mut self, seq: u64, viewport: &impl Viewport, fx: &mut Effects) {
        if seq != self.resize_seq {
            return;
        }
        let ActiveState::AtPanel(id) = self.active.clone() else {
            return;
        };
        log::debug!(
            "[resize] re-anchoring {id} at width {:.0}",
            viewport.width()
        );
        self.animator.cancel_all();
        self.pending = None;
        self.navigate(id, TransitionMode::Instant, viewport, fx);
    }

    fn return_to_arrival(&mut self, viewport: &impl Viewport, fx: &mut Effects) {
        self.pending = None;
        self.animator.cancel_all();
        // Resetting the row to its origin only brings the first room into
        // view in expanded layout, and only if it was out of view.
        let layout = LayoutMode::for_width(viewport.width(), self.config.breakpoint_px);
        self.returning = layout == LayoutMode::Expanded
            && self
                .panels
                .first()
                .is_some_and(|first| !self.tracker.is_visible(first));
        fx.push(Effect::ShowEntry);
        self.set_active(ActiveState::Arrival, fx);
        fx.push(Effect::WriteScroll {
            axis: ScrollAxis::Horizontal,
            offset: 0.0,
        });
        let start = self.animator.start(
            ScrollAxis::Vertical,
            viewport.scroll_offset(ScrollAxis::Vertical),
            0.0,
            TransitionMode::Animated,
            viewport.prefers_reduced_motion(),
            viewport.now_ms(),
        );
        push_start(ScrollAxis::Vertical, start, fx);
    }

    fn on_frame(&mut self, ticket: FrameTicket, now_ms: f64, fx: &mut Effects) {
        match self.animator.frame(ticket, now_ms) {
            FrameStep::Superseded => {}
            FrameStep::Write { offset, done } => {
                fx.push(Effect::WriteScroll {
                    axis: ticket.axis,
                    offset,
                });
                if !done {
                    fx.push(Effect::RequestFrame(ticket));
                } else if self.pending.as_ref().and_then(|p| p.ticket) == Some(ticket) {
                    if let Some(p) = self.pending.take() {
                        log::debug!("[nav] settled on {}", p.target);
                    }
                }
            }
        }
    }

    fn navigate(
        &mut self,
        id: PanelId,
        mode: TransitionMode,
        viewport: &impl Viewport,
        fx: &mut Effects,
    ) {
        let layout = LayoutMode::for_width(viewport.width(), self.config.breakpoint_px);
        self.returning = false;
        self.set_active(ActiveState::AtPanel(id.clone()), fx);

        let offset = match resolve_offset(viewport, &id, layout, &self.config) {
            Ok(offset) => offset,
            Err(e) => {
                log::debug!("[nav] {e}; leaving scroll position as is");
                self.pending = None;
                return;
            }
        };

        let axis = layout.axis();
        let other = match axis {
            ScrollAxis::Horizontal => ScrollAxis::Vertical,
            ScrollAxis::Vertical => ScrollAxis::Horizontal,
        };
        if self.animator.is_animating(other) {
            self.animator.cancel(other);
        }

        let start = self.animator.start(
            axis,
            viewport.scroll_offset(axis),
            offset,
            mode,
            viewport.prefers_reduced_motion(),
            viewport.now_ms(),
        );
        self.pending = match start {
            AnimationStart::Jump(_) => None,
            AnimationStart::Animate(ticket) => Some(Pending {
                target: id,
                ticket: Some(ticket),
            }),
        };
        push_start(axis, start, fx);
    }

    fn set_active(&mut self, next: ActiveState, fx: &mut Effects) {
        if self.active != next {
            log::info!(
                "[nav] {} -> {}",
                self.active.fragment_token(),
                next.fragment_token()
            );
            self.active = next;
        }
        self.sync_outputs(fx);
    }

    fn sync_outputs(&mut self, fx: &mut Effects) {
        let want = self.active.panel().cloned();
        if self.highlighted.as_ref() != Some(&want) {
            self.highlighted = Some(want.clone());
            fx.push(Effect::Highlight(want));
        }
        if self.url_state.as_ref() != Some(&self.active) {
            self.url_state = Some(self.active.clone());
            fx.push(Effect::ReplaceFragment(
                self.active.fragment_token().to_string(),
            ));
        }
    }
}

#[inline]
fn push_start(axis: ScrollAxis, start: AnimationStart, fx: &mut Effects) {
    match start {
        AnimationStart::Jump(offset) => fx.push(Effect::WriteScroll { axis, offset }),
        AnimationStart::Animate(ticket) => fx.push(Effect::RequestFrame(ticket)),
    }
}
