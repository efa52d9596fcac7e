//! Scroll animator.
//!
//! Each axis has a generation counter. Every start (jump or animated) and
//! every cancel bumps it, so a frame loop holding an older ticket finds its
//! generation stale and stops without writing. At most one loop per axis can
//! ever write.

use crate::constants::MIN_ANIMATED_DISTANCE_PX;
use crate::layout::ScrollAxis;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionMode {
    Animated,
    Instant,
}

/// Handle carried by a scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTicket {
    pub axis: ScrollAxis,
    pub generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationStart {
    /// Write this offset now; nothing is in flight on the axis afterwards.
    Jump(f64),
    /// Schedule a frame carrying this ticket.
    Animate(FrameTicket),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameStep {
    /// A newer request owns the axis; drop the frame silently.
    Superseded,
    Write { offset: f64, done: bool },
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
}

#[derive(Clone, Copy, Debug, Default)]
struct Track {
    generation: u64,
    tween: Option<Tween>,
}

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Debug)]
pub struct ScrollAnimator {
    duration_ms: f64,
    tracks: [Track; 2],
}

impl ScrollAnimator {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms: duration_ms.max(1.0),
            tracks: [Track::default(); 2],
        }
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn is_animating(&self, axis: ScrollAxis) -> bool {
        self.tracks[axis.index()].tween.is_some()
    }

    pub fn generation(&self, axis: ScrollAxis) -> u64 {
        self.tracks[axis.index()].generation
    }

    /// Begin moving `axis` from `from` to `to`. Reduced motion forces a jump
    /// whatever `mode` says.
    pub fn start(
        &mut self,
        axis: ScrollAxis,
        from: f64,
        to: f64,
        mode: TransitionMode,
        reduced_motion: bool,
        now_ms: f64,
    ) -> AnimationStart {
        let track = &mut self.tracks[axis.index()];
        track.generation += 1;

        let jump = mode == TransitionMode::Instant
            || reduced_motion
            || !from.is_finite()
            || (to - from).abs() < MIN_ANIMATED_DISTANCE_PX;
        if jump {
            track.tween = None;
            return AnimationStart::Jump(to);
        }

        track.tween = Some(Tween {
            from,
            to,
            start_ms: now_ms,
        });
        AnimationStart::Animate(FrameTicket {
            axis,
            generation: track.generation,
        })
    }

    /// Advance the loop identified by `ticket` to `now_ms`.
    pub fn frame(&mut self, ticket: FrameTicket, now_ms: f64) -> FrameStep {
        let duration = self.duration_ms;
        let track = &mut self.tracks[ticket.axis.index()];
        if track.generation != ticket.generation {
            return FrameStep::Superseded;
        }
        let Some(tween) = track.tween else {
            return FrameStep::Superseded;
        };

        let t = ((now_ms - tween.start_ms) / duration).clamp(0.0, 1.0);
        let done = t >= 1.0;
        let offset = if done {
            tween.to
        } else {
            tween.from + (tween.to - tween.from) * ease_out_cubic(t)
        };
        if done {
            track.tween = None;
        }
        FrameStep::Write { offset, done }
    }

    pub fn cancel(&mut self, axis: ScrollAxis) {
        let track = &mut self.tracks[axis.index()];
        if track.tween.take().is_some() {
            log::debug!("[scroll] cancelled {:?} generation {}", axis, track.generation);
        }
        track.generation += 1;
    }

    pub fn cancel_all(&mut self) {
        for axis in ScrollAxis::ALL {
            self.cancel(axis);
        }
    }
}
