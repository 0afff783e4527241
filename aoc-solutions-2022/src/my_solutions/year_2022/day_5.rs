use std::str::FromStr;
use std::sync::LazyLock;
use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["stacks"])]
pub struct Solver;

static MOVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^move (\d+) from (\d+) to (\d+)$").expect("move pattern is valid")
});

/// Crates ordered bottom to top
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack(Vec<char>);

impl Stack {
    pub fn from_bottom(crates: impl IntoIterator<Item = char>) -> Self {
        Self(crates.into_iter().collect())
    }

    pub fn top(&self) -> Option<char> {
        self.0.last().copied()
    }

    pub fn push(&mut self, label: char) {
        self.0.push(label);
    }

    /// `None` when the stack is empty
    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    /// Remove up to `count` crates from the top, keeping their order
    pub fn take_top(&mut self, count: usize) -> Vec<char> {
        let split = self.0.len().saturating_sub(count);
        self.0.split_off(split)
    }

    pub fn put_on_top(&mut self, crates: Vec<char>) {
        self.0.extend(crates);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `move {count} from {from} to {to}` with zero-based stack indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub count: usize,
    pub from: usize,
    pub to: usize,
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = MOVE_REGEX
            .captures(s.trim())
            .ok_or_else(|| anyhow!("expected \"move N from X to Y\", got {s:?}"))?;
        let number = |group: usize| -> anyhow::Result<usize> {
            captures[group]
                .parse()
                .with_context(|| format!("{:?} is out of range", &captures[group]))
        };
        let stack_index = |group: usize| -> anyhow::Result<usize> {
            number(group)?
                .checked_sub(1)
                .ok_or_else(|| anyhow!("stack numbers start at 1"))
        };

        Ok(Move {
            count: number(1)?,
            from: stack_index(2)?,
            to: stack_index(3)?,
        })
    }
}

/// How a crane carries several crates in one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSemantics {
    /// One crate at a time, so the moved block lands reversed
    SingleCrate,
    /// The whole block at once, order preserved
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("move {step}: stack {stack} does not exist ({available} stacks)")]
    NoSuchStack {
        step: usize,
        stack: usize,
        available: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stacks(Vec<Stack>);

impl Stacks {
    pub fn new(stacks: Vec<Stack>) -> Self {
        Self(stacks)
    }

    pub fn get(&self, index: usize) -> Option<&Stack> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply one move; `step` is the 1-based move number used in errors.
    ///
    /// Moving more crates than the source holds moves only what is there.
    pub fn apply(
        &mut self,
        step: usize,
        mv: &Move,
        semantics: MoveSemantics,
    ) -> Result<(), StackError> {
        for index in [mv.from, mv.to] {
            if index >= self.0.len() {
                return Err(StackError::NoSuchStack {
                    step,
                    stack: index + 1,
                    available: self.0.len(),
                });
            }
        }

        match semantics {
            MoveSemantics::SingleCrate => {
                for _ in 0..mv.count {
                    let Some(label) = self.0[mv.from].pop() else {
                        break;
                    };
                    self.0[mv.to].push(label);
                }
            }
            MoveSemantics::Block => {
                let moved = self.0[mv.from].take_top(mv.count);
                self.0[mv.to].put_on_top(moved);
            }
        }
        Ok(())
    }

    /// Top crate of every stack in index order; empty stacks add nothing
    pub fn top_crates(&self) -> String {
        self.0.iter().filter_map(Stack::top).collect()
    }
}

/// Replay `moves` in order on a copy of `stacks`
pub fn rearrange(
    stacks: &Stacks,
    moves: &[Move],
    semantics: MoveSemantics,
) -> Result<Stacks, StackError> {
    let mut stacks = stacks.clone();
    for (step, mv) in moves.iter().enumerate() {
        stacks.apply(step + 1, mv, semantics)?;
    }
    Ok(stacks)
}

fn parse_stacks(diagram: &[&str]) -> anyhow::Result<Stacks> {
    let (labels, rows) = diagram
        .split_last()
        .ok_or_else(|| anyhow!("stack diagram is empty"))?;

    let label_count = labels
        .split_whitespace()
        .map(|label| {
            label
                .parse::<usize>()
                .with_context(|| format!("expected a stack number row, found {labels:?}"))
        })
        .process_results(|labels| labels.count())?;

    let width = rows
        .iter()
        .map(|row| row.chars().count().div_ceil(4))
        .max()
        .unwrap_or(0);
    let mut stacks = vec![Stack::default(); label_count.max(width)];

    // Bottom row first, so the first line of the diagram ends up on top
    for (row_idx, row) in rows.iter().enumerate().rev() {
        for (column, cell) in (&row.chars().chunks(4)).into_iter().enumerate() {
            let cell: Vec<char> = cell.collect();
            match cell.as_slice() {
                ['[', label, ']'] | ['[', label, ']', ' '] if !label.is_whitespace() => {
                    stacks[column].push(*label)
                }
                blank if blank.iter().all(|c| c.is_whitespace()) => {}
                other => bail!(
                    "(line {}) unreadable crate {:?} in column {}",
                    row_idx + 1,
                    other.iter().collect::<String>(),
                    column + 1
                ),
            }
        }
    }

    Ok(Stacks::new(stacks))
}

#[derive(Debug)]
pub struct SharedData {
    stacks: Stacks,
    moves: Vec<Move>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().enumerate();

        let diagram: Vec<&str> = lines
            .by_ref()
            .map(|(_, line)| line)
            .take_while(|line| !line.trim().is_empty())
            .collect();
        if diagram.is_empty() {
            return Err(ParseError::MissingData("stack diagram".to_string()));
        }
        let stacks = parse_stacks(&diagram).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))?;

        let moves = lines
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.parse::<Move>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(stacks = stacks.len(), moves = moves.len(), "parsed supply stacks");
        Ok(SharedData { stacks, moves })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(&shared.stacks, &shared.moves, MoveSemantics::SingleCrate)
            .map(|stacks| stacks.top_crates())
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(&shared.stacks, &shared.moves, MoveSemantics::Block)
            .map(|stacks| stacks.top_crates())
            .map_err(SolveError::failed)
    }
}
