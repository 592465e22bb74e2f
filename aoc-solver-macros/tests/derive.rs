use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    Solver, SolverRegistryBuilder,
};

/// Lowest and highest of a whitespace separated list
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 25, tags = ["macro-test", "extremes"])]
struct Extremes;

impl AocParser for Extremes {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
            .collect()
    }
}

impl PartSolver<1> for Extremes {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().min().copied().unwrap_or_default().to_string())
    }
}

impl PartSolver<2> for Extremes {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or_default().to_string())
    }
}

/// Only part 1 exists
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct FirstOnly;

impl AocParser for FirstOnly {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for FirstOnly {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn test_derive_sets_parts() {
    assert_eq!(<Extremes as Solver>::PARTS, 2);
    assert_eq!(<FirstOnly as Solver>::PARTS, 1);
}

#[test]
fn test_derive_dispatches_parts() {
    let mut shared = Extremes::parse("79 14 55 13").unwrap();
    assert_eq!(Extremes::solve_part(&mut shared, 1).unwrap(), "13");
    assert_eq!(Extremes::solve_part(&mut shared, 2).unwrap(), "79");
}

#[test]
fn test_derive_rejects_unknown_part() {
    let mut shared = FirstOnly::parse("seeds").unwrap();
    assert_eq!(FirstOnly::solve_part(&mut shared, 1).unwrap(), "5");
    assert!(matches!(
        FirstOnly::solve_part(&mut shared, 2),
        Err(SolveError::PartNotImplemented(2))
    ));
    assert!(matches!(
        FirstOnly::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
}

#[test]
fn test_auto_register_submits_plugin() {
    let plugin = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .find(|p| p.year == 2015 && p.day == 25)
        .expect("plugin registered");
    assert_eq!(plugin.tags, &["macro-test", "extremes"]);
    assert_eq!(plugin.solver.parts(), 2);
}

#[test]
fn test_registered_plugin_solves_through_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2015, 25, "3 -2 8").unwrap();
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "-2");
    assert_eq!(solver.solve(2).unwrap().answer, "8");
}
