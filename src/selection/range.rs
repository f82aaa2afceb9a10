use serde::{Deserialize, Serialize};

/// Committed value-space range delivered to the host callback and observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommittedRange {
    pub start: f64,
    pub end: f64,
}

/// The authoritative selection state owned by the overlay instance.
///
/// Bounds are in axis value units. `None` means "not yet resolved";
/// resolution happens lazily on first use via the default range resolver
/// and persists afterwards. Once resolved, `start <= end` holds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionRange {
    start: Option<f64>,
    end: Option<f64>,
}

impl SelectionRange {
    #[must_use]
    pub fn new(start: Option<f64>, end: Option<f64>) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(self) -> Option<f64> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> Option<f64> {
        self.end
    }

    #[must_use]
    pub fn is_resolved(self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    #[must_use]
    pub fn resolved(self) -> Option<(f64, f64)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Caches a lazily resolved or freshly committed pair of bounds.
    pub fn commit(&mut self, start: f64, end: f64) {
        self.start = Some(start);
        self.end = Some(end);
    }
}
