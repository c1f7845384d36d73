use super::interval::Interval;

/// Maps `[source, source + length)` onto `[destination, destination + length)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    destination: u64,
    source: u64,
    length: u64,
}

impl Rule {
    /// `None` if either end of the rule does not fit in `u64`
    pub fn new(destination: u64, source: u64, length: u64) -> Option<Self> {
        source.checked_add(length)?;
        destination.checked_add(length)?;
        Some(Self {
            destination,
            source,
            length,
        })
    }

    pub fn destination(&self) -> u64 {
        self.destination
    }

    pub fn source(&self) -> u64 {
        self.source
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn source_interval(&self) -> Interval {
        Interval::new(self.source, self.source + self.length)
    }

    pub fn destination_interval(&self) -> Interval {
        Interval::new(self.destination, self.destination + self.length)
    }

    /// `destination - source`
    pub fn offset(&self) -> i128 {
        i128::from(self.destination) - i128::from(self.source)
    }

    pub fn map_value(&self, value: u64) -> Option<u64> {
        self.source_interval()
            .contains(value)
            .then(|| value - self.source + self.destination)
    }

    /// Shift an interval lying inside the source interval
    fn map_interval(&self, interval: Interval) -> Interval {
        debug_assert!(interval.start() >= self.source);
        debug_assert!(interval.stop() <= self.source + self.length);
        Interval::new(
            interval.start() - self.source + self.destination,
            interval.stop() - self.source + self.destination,
        )
    }
}

/// One piece of a stage's split of an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Claimed by a rule: `source` was shifted to `target`
    Mapped { source: Interval, target: Interval },
    /// Not covered by any rule, passes through unchanged
    Unmapped(Interval),
}

impl Segment {
    /// The part of the input interval this segment covers
    pub fn source(&self) -> Interval {
        match self {
            Segment::Mapped { source, .. } => *source,
            Segment::Unmapped(interval) => *interval,
        }
    }

    /// What the next stage receives
    pub fn output(&self) -> Interval {
        match self {
            Segment::Mapped { target, .. } => *target,
            Segment::Unmapped(interval) => *interval,
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, Segment::Mapped { .. })
    }
}

/// A named table of rules, sorted by source start.
///
/// Values no rule claims map to themselves, so a stage without rules is the
/// identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    name: String,
    rules: Vec<Rule>,
}

impl Stage {
    /// Zero-length rules claim nothing and are dropped.
    pub fn new(name: impl Into<String>, mut rules: Vec<Rule>) -> Self {
        rules.retain(|rule| rule.length() > 0);
        rules.sort_by_key(Rule::source);
        Self {
            name: name.into(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Map a single value.
    ///
    /// Rules are not checked for overlap; if several claim `value` the lowest
    /// result wins.
    pub fn map_value(&self, value: u64) -> u64 {
        self.rules
            .iter()
            .filter_map(|rule| rule.map_value(value))
            .min()
            .unwrap_or(value)
    }

    /// Split `interval` into mapped and unmapped segments, in ascending
    /// source order.
    ///
    /// The segments' sources are non-empty, pairwise disjoint and cover
    /// `interval` exactly. An empty `interval` yields no segments.
    pub fn partition(&self, interval: Interval) -> Vec<Segment> {
        let mut segments = Vec::new();
        let Some(mut remaining) = interval.non_empty() else {
            return segments;
        };

        for rule in &self.rules {
            let source = rule.source_interval();
            if source.stop() <= remaining.start() {
                continue;
            }
            if source.start() >= remaining.stop() {
                break;
            }

            if let Some(gap) = Interval::new(remaining.start(), source.start()).non_empty() {
                segments.push(Segment::Unmapped(gap));
            }

            // Non-empty: the rule neither ends before nor starts after `remaining`
            let overlap = Interval::new(
                remaining.start().max(source.start()),
                remaining.stop().min(source.stop()),
            );
            segments.push(Segment::Mapped {
                source: overlap,
                target: rule.map_interval(overlap),
            });

            remaining = Interval::new(overlap.stop(), remaining.stop());
            if remaining.is_empty() {
                return segments;
            }
        }

        segments.push(Segment::Unmapped(remaining));
        segments
    }

    /// The intervals `interval` becomes after this stage
    pub fn apply(&self, interval: Interval) -> impl Iterator<Item = Interval> {
        self.partition(interval).into_iter().map(|segment| segment.output())
    }
}
