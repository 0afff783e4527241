use std::collections::HashMap;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;
use tracing::trace;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["strings"])]
pub struct Solver;

pub const MARKER_WINDOW: usize = 4;
pub const MESSAGE_WINDOW: usize = 14;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("no run of {window} distinct characters in the stream (scanned {scanned})")]
    WindowNotFound { window: usize, scanned: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    /// Window complete; holds the number of characters consumed
    Found(usize),
    /// Stream ended first; holds the final pointer
    Exhausted(usize),
}

/// Forward scan for the first `window` pairwise-distinct characters.
///
/// On a repeat the pointer jumps to just after the earlier occurrence and
/// everything tracked so far is forgotten.
pub struct WindowScanner<'s> {
    stream: &'s [char],
    window: usize,
    pointer: usize,
    last_seen: HashMap<char, usize>,
}

impl<'s> WindowScanner<'s> {
    pub fn new(stream: &'s [char], window: usize) -> Self {
        Self {
            stream,
            window,
            pointer: 0,
            last_seen: HashMap::with_capacity(window),
        }
    }

    pub fn step(&mut self) -> ScanState {
        if self.last_seen.len() >= self.window {
            return ScanState::Found(self.pointer);
        }
        let Some(&current) = self.stream.get(self.pointer) else {
            return ScanState::Exhausted(self.pointer);
        };

        match self.last_seen.insert(current, self.pointer) {
            Some(previous) => {
                trace!(pointer = self.pointer, previous, "repeat, restarting scan");
                self.pointer = previous + 1;
                self.last_seen.clear();
            }
            None => self.pointer += 1,
        }
        ScanState::Scanning
    }

    pub fn run(mut self) -> Result<usize, ScanError> {
        loop {
            match self.step() {
                ScanState::Scanning => {}
                ScanState::Found(end) => return Ok(end),
                ScanState::Exhausted(scanned) => {
                    return Err(ScanError::WindowNotFound {
                        window: self.window,
                        scanned,
                    });
                }
            }
        }
    }
}

/// 1-based offset of the last character of the first distinct window
pub fn find_distinct_window_end(stream: &str, window: usize) -> Result<usize, ScanError> {
    let chars: Vec<char> = stream.chars().collect();
    WindowScanner::new(&chars, window).run()
}

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stream = input.trim_end_matches(['\r', '\n']);
        if stream.is_empty() {
            return Err(ParseError::MissingData("datastream is empty".to_string()));
        }
        Ok(stream)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_distinct_window_end(shared, MARKER_WINDOW)
            .map(|end| end.to_string())
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_distinct_window_end(shared, MESSAGE_WINDOW)
            .map(|end| end.to_string())
            .map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{DynSolver, SolverInstance};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_samples() {
        let samples = [
            ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19),
            ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
            ("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
            ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29),
            ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
        ];
        for (stream, marker, message) in samples {
            assert_eq!(find_distinct_window_end(stream, MARKER_WINDOW), Ok(marker), "{stream}");
            assert_eq!(find_distinct_window_end(stream, MESSAGE_WINDOW), Ok(message), "{stream}");
        }
    }

    #[test]
    fn test_solver_parts() {
        let mut solver =
            SolverInstance::<Solver>::new(2022, 6, "mjqjpqmgbljsphdztnvjfqwrcgsmlb\n").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "7");
        assert_eq!(solver.solve(2).unwrap().answer, "19");
    }

    #[test]
    fn test_state_machine_steps() {
        let stream: Vec<char> = "aab".chars().collect();
        let mut scanner = WindowScanner::new(&stream, 2);
        assert_eq!(scanner.step(), ScanState::Scanning);
        // repeat of 'a' jumps back to index 1
        assert_eq!(scanner.step(), ScanState::Scanning);
        assert_eq!(scanner.step(), ScanState::Scanning);
        assert_eq!(scanner.step(), ScanState::Scanning);
        assert_eq!(scanner.step(), ScanState::Found(3));
    }

    #[test]
    fn test_window_at_very_end() {
        assert_eq!(find_distinct_window_end("aaaabcd", 4), Ok(7));
    }

    #[test]
    fn test_exhausted_stream_fails_loudly() {
        assert_eq!(
            find_distinct_window_end("abcabc", 4),
            Err(ScanError::WindowNotFound {
                window: 4,
                scanned: 6
            })
        );

        let mut solver = SolverInstance::<Solver>::new(2022, 6, "abab").unwrap();
        assert!(matches!(solver.solve(1), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_degenerate_windows() {
        assert_eq!(find_distinct_window_end("xyz", 0), Ok(0));
        assert_eq!(find_distinct_window_end("xyz", 1), Ok(1));
        assert_eq!(find_distinct_window_end("zzzzy", 2), Ok(5));
    }

    #[test]
    fn test_non_ascii_characters_are_distinct_units() {
        assert_eq!(find_distinct_window_end("ääöüß", 4), Ok(5));
    }

    #[test]
    fn test_empty_stream_is_missing_data() {
        assert!(matches!(
            <Solver as AocParser>::parse("\n"),
            Err(ParseError::MissingData(_))
        ));
    }

    /// Checks every window directly
    fn naive_window_end(stream: &str, window: usize) -> Option<usize> {
        let chars: Vec<char> = stream.chars().collect();
        chars
            .windows(window)
            .position(|w| w.iter().collect::<HashSet<_>>().len() == window)
            .map(|start| start + window)
    }

    proptest! {
        #[test]
        fn prop_matches_naive_window_check(stream in "[a-f]{0,40}", window in 1usize..6) {
            let expected = naive_window_end(&stream, window);
            let actual = find_distinct_window_end(&stream, window).ok();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_scan_is_idempotent(stream in "[a-z]{0,60}") {
            prop_assert_eq!(
                find_distinct_window_end(&stream, MARKER_WINDOW),
                find_distinct_window_end(&stream, MARKER_WINDOW)
            );
        }
    }
}
