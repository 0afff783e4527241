//! Property tests for `#[derive(AocSolver)]` dispatch

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

/// Part 1 sums span widths, part 2 finds the widest span
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Spans;

impl AocParser for Spans {
    type SharedData<'a> = Vec<(u32, u32)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| -> Result<(u32, u32), ParseError> {
                let (start, end) = l
                    .split_once('-')
                    .ok_or_else(|| ParseError::InvalidFormat(format!("no dash in {l:?}")))?;
                let start = start
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad start in {l:?}")))?;
                let end = end
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad end in {l:?}")))?;
                Ok((start, end))
            })
            .collect()
    }
}

impl PartSolver<1> for Spans {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|(s, e)| e - s + 1).sum::<u32>().to_string())
    }
}

impl PartSolver<2> for Spans {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|(s, e)| e - s + 1)
            .max()
            .unwrap_or(0)
            .to_string())
    }
}

fn span_input(spans: &[(u32, u32)]) -> String {
    spans
        .iter()
        .map(|(start, width)| format!("{}-{}", start, start + width))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `solve_part(n)` gives the same answer as `PartSolver<n>::solve`
    #[test]
    fn solve_part_dispatches_to_part_solver(
        spans in prop::collection::vec((0u32..100, 0u32..50), 1..8),
        part in 1u8..=2,
    ) {
        let input = span_input(&spans);
        let mut via_dispatch = Spans::parse(&input).unwrap();
        let mut direct = Spans::parse(&input).unwrap();

        let dispatched = Spans::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <Spans as PartSolver<1>>::solve(&mut direct),
            2 => <Spans as PartSolver<2>>::solve(&mut direct),
            _ => unreachable!(),
        }
        .unwrap();

        prop_assert_eq!(dispatched, expected);
    }

    /// Parts outside `1..=max_parts` are reported as not implemented
    #[test]
    fn invalid_part_returns_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = Spans::parse("1-3").unwrap();
        match Spans::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartNotImplemented for {}, got {:?}", part, other),
        }
    }
}

#[test]
fn test_parse_error_surfaces() {
    assert!(matches!(
        Spans::parse("1-3\n4to5"),
        Err(ParseError::InvalidFormat(_))
    ));
}
