use fnv::FnvHashMap;
use std::fmt;

/// Stable identity of a room panel (its element id).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Keyboard step through the panel sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyNav {
    Previous,
    Next,
}

/// The ordered panel sequence, fixed at load time.
#[derive(Clone, Debug, Default)]
pub struct PanelSet {
    order: Vec<PanelId>,
    index: FnvHashMap<String, usize>,
}

impl PanelSet {
    /// Builds the set in document order. Blank and repeated ids are skipped;
    /// the first occurrence keeps its position.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = PanelSet::default();
        for id in ids {
            let id: String = id.into();
            let id = id.trim().to_string();
            if id.is_empty() || set.index.contains_key(&id) {
                continue;
            }
            set.index.insert(id.clone(), set.order.len());
            set.order.push(PanelId(id));
        }
        set
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelId> {
        self.order.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<&PanelId> {
        self.order.first()
    }

    #[inline]
    pub fn position(&self, id: &PanelId) -> Option<usize> {
        self.index.get(id.as_str()).copied()
    }

    /// Look up a raw token (a `data-target` value or fragment).
    pub fn resolve(&self, token: &str) -> Option<&PanelId> {
        self.index
            .get(token.trim())
            .and_then(|&i| self.order.get(i))
    }

    /// Neighbor of `id` in `dir`, clamped to the ends of the sequence.
    pub fn step(&self, id: &PanelId, dir: KeyNav) -> Option<&PanelId> {
        let i = self.position(id)?;
        let j = match dir {
            KeyNav::Previous => i.saturating_sub(1),
            KeyNav::Next => (i + 1).min(self.order.len() - 1),
        };
        self.order.get(j)
    }
}
