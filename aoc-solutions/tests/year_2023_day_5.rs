//! End-to-end checks for the 2023 day 5 solver through the plugin registry

use aoc_solutions::my_solutions::year_2023::day_5::{
    Almanac, SeedMode, SeedResolver, SeedSet, Strategy,
};
use aoc_solver::{SolverError, SolverRegistryBuilder};

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

fn registry() -> aoc_solver::SolverRegistry {
    SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"almanac"))
        .unwrap()
        .build()
}

#[test]
fn test_plugin_is_discovered() {
    let registry = registry();
    let info = registry.get_info(2023, 5).expect("day 5 registered");
    assert_eq!(info.parts, 2);
}

#[test]
fn test_example_through_registry() {
    let registry = registry();
    let mut solver = registry.create_solver(2023, 5, EXAMPLE).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "35");
    assert_eq!(solver.solve(2).unwrap().answer, "46");
}

#[test]
fn test_bad_input_through_registry() {
    let registry = registry();
    let result = registry.create_solver(2023, 5, "seeds: 1\nthis is not an almanac");
    assert!(matches!(result, Err(SolverError::ParseError(_))));
}

#[test]
fn test_billions_of_seeds_are_never_expanded() {
    // Three billion seeds starting at one billion; the first ten of them
    // land on locations 0..10 after two stages.
    let input = "\
seeds: 1000000000 3000000000

seed-to-soil map:
500 1000000000 10

soil-to-location map:
0 500 10
";
    let almanac: Almanac = input.parse().unwrap();
    let seeds = almanac.seed_set(SeedMode::Ranges).unwrap();
    assert_eq!(seeds.count(), 3_000_000_000);
    assert_eq!(Strategy::for_seeds(&seeds), Strategy::ReverseProbing);

    let resolver = SeedResolver::new(almanac.pipeline());
    assert_eq!(resolver.lowest_location(&seeds), Ok(0));
    assert_eq!(resolver.parallel(true).lowest_location(&seeds), Ok(0));
}

#[test]
fn test_strategies_agree_on_example() {
    let almanac: Almanac = EXAMPLE.parse().unwrap();
    let resolver = SeedResolver::new(almanac.pipeline());
    for mode in [SeedMode::Discrete, SeedMode::Ranges] {
        let seeds: SeedSet = almanac.seed_set(mode).unwrap();
        assert_eq!(
            resolver.lowest_location_with(&seeds, Strategy::ForwardEnumeration),
            resolver.lowest_location_with(&seeds, Strategy::ReverseProbing),
        );
    }
}
