use std::fmt;
use std::ops::Range;

/// Half-open range of values `[start, stop)`.
///
/// Construction never fails; an interval with `start >= stop` is simply
/// empty and gets dropped by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    start: u64,
    stop: u64,
}

impl Interval {
    pub const fn new(start: u64, stop: u64) -> Self {
        Self { start, stop }
    }

    /// `[start, start + len)`, or `None` if the end does not fit in `u64`
    pub fn with_len(start: u64, len: u64) -> Option<Self> {
        start.checked_add(len).map(|stop| Self { start, stop })
    }

    pub const fn start(&self) -> u64 {
        self.start
    }

    pub const fn stop(&self) -> u64 {
        self.stop
    }

    pub const fn len(&self) -> u64 {
        self.stop.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.stop
    }

    pub const fn contains(&self, value: u64) -> bool {
        self.start <= value && value < self.stop
    }

    /// Overlapping part of two intervals, `None` when they are disjoint
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let overlap = Interval::new(self.start.max(other.start), self.stop.min(other.stop));
        (!overlap.is_empty()).then_some(overlap)
    }

    /// `Some(self)` unless empty
    pub(crate) fn non_empty(self) -> Option<Self> {
        (!self.is_empty()).then_some(self)
    }
}

impl From<Range<u64>> for Interval {
    fn from(range: Range<u64>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Interval> for Range<u64> {
    fn from(interval: Interval) -> Self {
        interval.start..interval.stop
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.stop)
    }
}
