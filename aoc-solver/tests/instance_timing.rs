//! Solver instances created through the registry

use aoc_solver::{
    AocParser, DynSolver, ParseError, RegisterableSolver, RegistrationError, RegistryBuilder,
    SolveError, Solver, SolverError, SolverInstance,
};

struct Words;

impl AocParser for Words {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("no words".to_string()));
        }
        Ok(input.split_whitespace().collect())
    }
}

impl Solver for Words {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.len().to_string()),
            2 => Ok(shared.iter().map(|w| w.len()).max().unwrap_or(0).to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[test]
fn test_instance_records_timing_and_metadata() {
    let mut instance = SolverInstance::<Words>::new(2022, 6, "bvwb jplbgvbh").unwrap();
    assert_eq!(instance.year(), 2022);
    assert_eq!(instance.day(), 6);
    assert_eq!(instance.parts(), 2);
    assert!(instance.parse_end() >= instance.parse_start());
    assert!(instance.parse_duration() >= chrono::TimeDelta::zero());

    let result = instance.solve(2).unwrap();
    assert_eq!(result.answer, "8");
    assert!(result.duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_instance_rejects_out_of_range_part() {
    let mut instance = SolverInstance::<Words>::new(2022, 6, "a b").unwrap();
    assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_registry_wraps_parse_errors() {
    let registry = Words
        .register_with(RegistryBuilder::new(), 2022, 6)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2022, 6, "   "),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
    assert!(matches!(
        registry.create_solver(2022, 7, "a"),
        Err(SolverError::NotFound(2022, 7))
    ));
}

#[test]
fn test_registry_info_is_ordered() {
    let registry = RegistryBuilder::new();
    let registry = Words.register_with(registry, 2022, 6).unwrap();
    let registry = Words.register_with(registry, 2021, 25).unwrap();
    let registry = Words.register_with(registry, 2022, 4).unwrap().build();

    let keys: Vec<(u16, u8)> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(keys, vec![(2021, 25), (2022, 4), (2022, 6)]);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_registry_rejects_duplicates_and_bad_slots() {
    let builder = Words.register_with(RegistryBuilder::new(), 2022, 6).unwrap();
    assert!(matches!(
        Words.register_with(builder, 2022, 6),
        Err(RegistrationError::DuplicateSolver(2022, 6))
    ));
    assert!(matches!(
        Words.register_with(RegistryBuilder::new(), 2022, 26),
        Err(RegistrationError::InvalidYearDay(2022, 26))
    ));
}
