//! Visibility tracker: turns raw intersection reports into threshold
//! crossings. It reports every crossing it sees; deciding which ones matter
//! is the coordinator's job.

use crate::panels::PanelId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Crossing {
    Entered(PanelId),
    Exited(PanelId),
}

#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    threshold: f64,
    // Panels currently at/above threshold, in the order they crossed in.
    visible: Vec<PanelId>,
}

impl VisibilityTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: Vec::new(),
        }
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self, id: &PanelId) -> bool {
        self.visible.contains(id)
    }

    pub fn visible(&self) -> &[PanelId] {
        &self.visible
    }

    /// Feed one observer entry. Returns a crossing only when the panel's
    /// above/below-threshold status changed.
    pub fn observe(&mut self, id: &PanelId, ratio: f64, intersecting: bool) -> Option<Crossing> {
        let now_visible = intersecting && ratio >= self.threshold;
        let was_visible = self.is_visible(id);
        match (was_visible, now_visible) {
            (false, true) => {
                self.visible.push(id.clone());
                Some(Crossing::Entered(id.clone()))
            }
            (true, false) => {
                self.visible.retain(|v| v != id);
                Some(Crossing::Exited(id.clone()))
            }
            _ => None,
        }
    }
}
