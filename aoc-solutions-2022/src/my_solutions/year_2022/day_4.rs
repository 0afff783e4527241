use std::str::FromStr;
use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["ranges"])]
pub struct Solver;

/// Inclusive span of section ids, `start <= end` assumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    pub start: u32,
    pub end: u32,
}

impl SectionRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, other: &SectionRange) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    pub fn overlaps(&self, other: &SectionRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl FromStr for SectionRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| anyhow!("range {s:?} is missing '-'"))?;
        Ok(SectionRange::new(parse_section(start)?, parse_section(end)?))
    }
}

fn parse_section(token: &str) -> anyhow::Result<u32> {
    token
        .trim()
        .parse()
        .with_context(|| format!("{token:?} is not a section id"))
}

/// Two elves' assignments from one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentPair(pub SectionRange, pub SectionRange);

impl FromStr for AssignmentPair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = s
            .split(',')
            .collect_tuple()
            .ok_or_else(|| anyhow!("expected two comma separated ranges"))?;
        Ok(AssignmentPair(first.parse()?, second.parse()?))
    }
}

/// True when either range covers the other entirely
pub fn has_full_overlap(first: &SectionRange, second: &SectionRange) -> bool {
    first.contains(second) || second.contains(first)
}

/// True when the ranges share at least one section
pub fn has_partial_overlap(first: &SectionRange, second: &SectionRange) -> bool {
    first.overlaps(second)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlapCounts {
    pub full: usize,
    pub partial: usize,
}

pub fn count_overlaps(pairs: &[AssignmentPair]) -> OverlapCounts {
    pairs
        .iter()
        .fold(OverlapCounts::default(), |mut counts, AssignmentPair(first, second)| {
            if has_full_overlap(first, second) {
                counts.full += 1;
            }
            if has_partial_overlap(first, second) {
                counts.partial += 1;
            }
            counts
        })
}

#[derive(Debug)]
pub struct SharedData {
    pairs: Vec<AssignmentPair>,
    counts: Option<OverlapCounts>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.parse::<AssignmentPair>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|pairs| SharedData {
                pairs,
                counts: None,
            })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(counts_once_for_both(shared).full.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(counts_once_for_both(shared).partial.to_string())
    }
}

fn counts_once_for_both(shared: &mut SharedData) -> OverlapCounts {
    *shared
        .counts
        .get_or_insert_with(|| count_overlaps(&shared.pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{DynSolver, SolverInstance};
    use proptest::prelude::*;

    const SAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

    fn answers(input: &str) -> (String, String) {
        let mut solver = SolverInstance::<Solver>::new(2022, 4, input).unwrap();
        (
            solver.solve(1).unwrap().answer,
            solver.solve(2).unwrap().answer,
        )
    }

    #[test]
    fn test_sample() {
        assert_eq!(answers(SAMPLE), ("2".to_string(), "4".to_string()));
    }

    #[test]
    fn test_overlapping_subset() {
        // 2-8 holds 3-7 and 4-6 holds 6-6
        let input = "5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8";
        assert_eq!(answers(input), ("2".to_string(), "4".to_string()));
    }

    #[test]
    fn test_touching_ranges_partially_overlap() {
        let a = SectionRange::new(5, 7);
        let b = SectionRange::new(7, 9);
        assert!(has_partial_overlap(&a, &b));
        assert!(!has_full_overlap(&a, &b));
    }

    #[test]
    fn test_disjoint_ranges() {
        let a = SectionRange::new(2, 3);
        let b = SectionRange::new(4, 5);
        assert!(!has_partial_overlap(&a, &b));
        assert!(!has_full_overlap(&a, &b));
    }

    #[test]
    fn test_empty_input_counts_nothing() {
        assert_eq!(answers(""), ("0".to_string(), "0".to_string()));
    }

    #[test]
    fn test_counts_are_cached_after_first_part() {
        let mut shared = <Solver as AocParser>::parse(SAMPLE).unwrap();
        assert!(shared.counts.is_none());
        <Solver as PartSolver<2>>::solve(&mut shared).unwrap();
        assert_eq!(shared.counts, Some(OverlapCounts { full: 2, partial: 4 }));
    }

    #[test]
    fn test_non_numeric_section_is_rejected() {
        let err = <Solver as AocParser>::parse("2-4,6-8\n2-x,4-5").unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => {
                assert!(msg.starts_with("(line 2)"), "{msg}");
                assert!(msg.contains("\"x\""), "{msg}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_malformed_lines_are_rejected() {
        for line in ["2-4", "2-4,6-8,1-1", "2-4;6-8", "24,68"] {
            assert!(
                <Solver as AocParser>::parse(line).is_err(),
                "{line:?} should not parse"
            );
        }
    }

    fn range() -> impl Strategy<Value = SectionRange> {
        (0u32..100, 0u32..100).prop_map(|(start, len)| SectionRange::new(start, start + len))
    }

    proptest! {
        #[test]
        fn prop_overlap_predicates_are_symmetric(a in range(), b in range()) {
            prop_assert_eq!(has_full_overlap(&a, &b), has_full_overlap(&b, &a));
            prop_assert_eq!(has_partial_overlap(&a, &b), has_partial_overlap(&b, &a));
        }

        #[test]
        fn prop_range_fully_overlaps_itself(a in range()) {
            prop_assert!(has_full_overlap(&a, &a));
        }

        #[test]
        fn prop_full_overlap_implies_partial(a in range(), b in range()) {
            prop_assert!(!has_full_overlap(&a, &b) || has_partial_overlap(&a, &b));
        }
    }
}
