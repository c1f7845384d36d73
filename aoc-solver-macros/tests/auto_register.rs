use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, RegistryBuilder, SolveError,
    SolverError,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2023, day = 6, tags = ["test", "lines"])]
struct LineCount;

impl AocParser for LineCount {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for LineCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4)]
struct WordStats;

impl AocParser for WordStats {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(input.split_whitespace().collect())
    }
}

impl PartSolver<1> for WordStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for WordStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared.iter().map(|w| w.len()).max().unwrap_or_default();
        Ok(longest.to_string())
    }
}

#[test]
fn test_all_plugins_are_registered() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.info(2023, 6).map(|i| i.parts), Some(1));
    assert_eq!(registry.info(2022, 4).map(|i| i.parts), Some(2));

    let mut solver = registry.create_solver(2022, 4, "seed soil fertilizer").unwrap();
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "10");
}

#[test]
fn test_tag_filter_selects_plugins() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"lines"))
        .unwrap()
        .build();

    assert!(registry.contains(2023, 6));
    assert!(!registry.contains(2022, 4));

    let mut solver = registry.create_solver(2023, 6, "a\nb").unwrap();
    assert_eq!(solver.year(), 2023);
    assert_eq!(solver.day(), 6);
    assert_eq!(solver.solve(1).unwrap().answer, "2");
}

#[test]
fn test_registering_plugins_twice_is_a_duplicate() {
    let result = RegistryBuilder::new()
        .register_all_plugins()
        .and_then(|builder| builder.register_all_plugins());
    assert!(result.is_err());
}

#[test]
fn test_parse_error_surfaces_from_registry() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
    let result = registry.create_solver(2022, 4, "   ");
    assert!(matches!(result, Err(SolverError::ParseError(ParseError::MissingData(_)))));
}
