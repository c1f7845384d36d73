use std::num::ParseIntError;
use std::str::FromStr;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;

use crate::utils::range_pipeline::{Interval, Pipeline, PipelineError, numbered_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["khangp0000", "intervals"])]
pub struct Solver;

#[derive(Debug, Error)]
pub enum AlmanacError {
    #[error("expected the almanac to start with a `seeds:` line")]
    MissingSeeds,
    #[error("line {line}: invalid seed `{token}`")]
    InvalidSeed {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{0} seeds cannot be read as (start, length) pairs")]
    UnpairedSeed(usize),
    #[error("seed range starting at {start} with length {len} overflows")]
    SeedOverflow { start: u64, len: u64 },
    #[error(transparent)]
    Stages(#[from] PipelineError),
}

/// Seed numbers from the header plus the stages they go through
#[derive(Debug, Clone)]
pub struct Almanac {
    seeds: Vec<u64>,
    pipeline: Pipeline,
}

impl FromStr for Almanac {
    type Err = AlmanacError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut header = numbered_lines(input)
            .skip_while(|(_, line)| line.is_empty())
            .take_while(|(_, line)| !line.is_empty());

        let (first_line, first) = header.next().ok_or(AlmanacError::MissingSeeds)?;
        let first = first.strip_prefix("seeds:").ok_or(AlmanacError::MissingSeeds)?;

        let seeds = std::iter::once((first_line, first))
            .chain(header)
            .flat_map(|(line, text)| text.split_whitespace().map(move |token| (line, token)))
            .map(|(line, token)| {
                token.parse::<u64>().map_err(|source| AlmanacError::InvalidSeed {
                    line,
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Almanac {
            seeds,
            pipeline: input.parse()?,
        })
    }
}

impl Almanac {
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Lowest location any single seed maps to
    pub fn lowest_location(&self) -> Option<u64> {
        if log::log_enabled!(log::Level::Trace) {
            for &seed in &self.seeds {
                log::trace!("seed {seed}: {:?}", self.pipeline.trace_value(seed));
            }
        }
        self.seeds
            .iter()
            .map(|&seed| self.pipeline.map_value(seed))
            .min()
    }

    /// Seeds read as `(start, length)` pairs
    pub fn seed_ranges(&self) -> Result<Vec<Interval>, AlmanacError> {
        let pairs = self.seeds.chunks_exact(2);
        if !pairs.remainder().is_empty() {
            return Err(AlmanacError::UnpairedSeed(self.seeds.len()));
        }
        pairs
            .map(|pair| {
                let (start, len) = (pair[0], pair[1]);
                Interval::with_len(start, len).ok_or(AlmanacError::SeedOverflow { start, len })
            })
            .collect()
    }

    /// Lowest location any seed range reaches, `None` if every range is empty
    pub fn lowest_range_location(&self) -> Result<Option<u64>, AlmanacError> {
        Ok(self.pipeline.lowest(self.seed_ranges()?))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input.parse::<Almanac>().map_err(|e| match e {
            AlmanacError::MissingSeeds => ParseError::MissingData(e.to_string()),
            _ => ParseError::InvalidFormat(e.to_string()),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .lowest_location()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("almanac lists no seeds").into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .lowest_range_location()
            .map_err(anyhow::Error::from)
            .and_then(|location| location.ok_or_else(|| anyhow!("almanac lists no non-empty seed ranges")))
            .map(|location| location.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use aoc_solver::Solver as _;

    use super::*;

    const EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn test_parse_seeds_and_stages() {
        let almanac: Almanac = EXAMPLE.parse().unwrap();
        assert_eq!(almanac.seeds(), &[79, 14, 55, 13]);
        assert_eq!(almanac.pipeline().stages().len(), 7);
        assert_eq!(
            almanac.seed_ranges().unwrap(),
            vec![Interval::new(79, 93), Interval::new(55, 68)]
        );
    }

    #[test]
    fn test_example_answers() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "35");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "46");
    }

    #[test]
    fn test_single_seeds_match_unit_ranges() {
        let almanac: Almanac = EXAMPLE.parse().unwrap();
        let unit_ranges = almanac.seeds().iter().map(|&seed| Interval::new(seed, seed + 1));
        assert_eq!(almanac.pipeline().lowest(unit_ranges), almanac.lowest_location());
    }

    #[test]
    fn test_header_may_be_preceded_by_blank_lines() {
        let almanac: Almanac = "\n\nseeds: 3 2\n\nm map:\n10 0 5\n".parse().unwrap();
        assert_eq!(almanac.lowest_location(), Some(12));
        assert_eq!(almanac.lowest_range_location().unwrap(), Some(13));
    }

    #[test]
    fn test_missing_header_is_missing_data() {
        assert!(matches!(
            Solver::parse("seed-to-soil map:\n50 98 2\n"),
            Err(ParseError::MissingData(_))
        ));
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_bad_seed_is_invalid_format() {
        let err = "seeds: 79 x\n".parse::<Almanac>().unwrap_err();
        assert!(matches!(err, AlmanacError::InvalidSeed { line: 1, ref token, .. } if token == "x"));
        assert!(matches!(Solver::parse("seeds: 79 x\n"), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_stage_errors_are_forwarded() {
        let err = "seeds: 1\n\na map:\n1 2 3 4\n".parse::<Almanac>().unwrap_err();
        assert!(matches!(
            err,
            AlmanacError::Stages(PipelineError::FieldCount { line: 4, found: 4 })
        ));
    }

    #[test]
    fn test_odd_seed_count_fails_part_two_only() {
        let mut shared = Solver::parse("seeds: 1 2 3\n\na map:\n10 0 5\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11");
        assert!(matches!(
            shared.seed_ranges(),
            Err(AlmanacError::UnpairedSeed(3))
        ));
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_overflowing_seed_range() {
        let almanac: Almanac = format!("seeds: {} 2\n", u64::MAX).parse().unwrap();
        assert!(matches!(
            almanac.seed_ranges(),
            Err(AlmanacError::SeedOverflow { start: u64::MAX, len: 2 })
        ));
    }

    #[test]
    fn test_no_seeds_fails_to_solve() {
        let mut shared = Solver::parse("seeds:\n\na map:\n1 2 3\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_zero_length_seed_ranges_are_ignored() {
        let mut shared = Solver::parse("seeds: 0 0 7 1\n\na map:\n100 0 10\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "107");
    }
}
