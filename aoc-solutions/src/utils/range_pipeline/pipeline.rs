use super::interval::Interval;
use super::stage::Stage;

/// Stages applied one after another, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn map_value(&self, value: u64) -> u64 {
        self.stages
            .iter()
            .fold(value, |value, stage| stage.map_value(value))
    }

    /// The value after each stage; the last entry equals `map_value(value)`
    pub fn trace_value(&self, value: u64) -> Vec<u64> {
        self.stages
            .iter()
            .scan(value, |value, stage| {
                *value = stage.map_value(*value);
                Some(*value)
            })
            .collect()
    }

    /// Push `seeds` through every stage and return the final generation,
    /// sorted and without duplicates.
    ///
    /// Empty seeds are dropped before the first stage.
    pub fn map_intervals<I>(&self, seeds: I) -> Vec<Interval>
    where
        I: IntoIterator<Item = Interval>,
    {
        let mut generation: Vec<Interval> = seeds.into_iter().filter_map(Interval::non_empty).collect();
        generation.sort_unstable();
        generation.dedup();

        for stage in &self.stages {
            let mut next: Vec<Interval> = generation
                .iter()
                .flat_map(|&interval| stage.apply(interval))
                .collect();
            next.sort_unstable();
            next.dedup();

            log::debug!(
                "stage {}: {} intervals in, {} out",
                stage.name(),
                generation.len(),
                next.len()
            );
            generation = next;
        }

        generation
    }

    /// Smallest value any of `seeds` can end up as, `None` if every seed is
    /// empty
    pub fn lowest<I>(&self, seeds: I) -> Option<u64>
    where
        I: IntoIterator<Item = Interval>,
    {
        self.map_intervals(seeds)
            .iter()
            .map(Interval::start)
            .min()
    }
}
