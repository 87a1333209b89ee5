mod common;

use common::random_map;
use greedy_route::algorithm::{Route, RouteFinder, SearchObserver, SearchStep, StepKind};
use greedy_route::graph::{parse_map, CityMap, Graph};
use greedy_route::{Error, GreedyRoute};
use rand::prelude::*;
use rand::rngs::StdRng;

const DETOUR: &str = r#"{"A": {"B": 5, "C": 1}, "B": {"D": 2}, "C": {"D": 10}, "D": {}}"#;

fn assert_route_is_consistent(map: &CityMap<f64>, route: &Route<f64>, origin: &str, destination: &str) {
    assert_eq!(route.origin(), origin, "Path should start at origin");
    assert_eq!(route.destination(), destination, "Path should end at destination");

    let mut sum = 0.0;
    for pair in route.path.windows(2) {
        let weight = map.road_weight(&pair[0], &pair[1]);
        assert!(weight.is_some(), "Path should only use existing roads");
        sum += weight.unwrap();
    }
    assert_eq!(route.total_distance, sum, "Total should equal the sum of road weights");
}

#[derive(Default)]
struct Recorder {
    steps: Vec<(StepKind, String, bool)>,
    failures: usize,
}

impl SearchObserver for Recorder {
    fn on_step(&mut self, step: &SearchStep<'_>) {
        self.steps.push((step.kind, step.current.to_string(), step.is_final));
    }

    fn on_failure(&mut self, _error: &Error) {
        self.failures += 1;
    }
}

#[test]
fn test_greedy_is_not_optimal() {
    let map = parse_map(DETOUR).unwrap();
    let route = GreedyRoute::new().find_route(&map, "A", "D").unwrap();

    // Cheapest first road leads to the expensive route; A->B->D would cost 7
    assert_eq!(route.path, vec!["A", "C", "D"]);
    assert_eq!(route.total_distance, 11.0);
    assert_eq!(route.hops(), 2);
}

#[test]
fn test_origin_equals_destination() {
    let map = parse_map(DETOUR).unwrap();
    let route = GreedyRoute::new().find_route(&map, "B", "B").unwrap();
    assert_eq!(route.path, vec!["B"]);
    assert_eq!(route.total_distance, 0.0);
}

#[test]
fn test_unknown_city_is_sentinel() {
    let map = parse_map(r#"{"A": {"B": 3}, "B": {}}"#).unwrap();
    let finder = GreedyRoute::new();

    assert_eq!(finder.path_and_distance(&map, "A", "C"), (None, 0.0));
    assert_eq!(finder.path_and_distance(&map, "C", "A"), (None, 0.0));

    let err = finder.find_route(&map, "A", "C").unwrap_err();
    assert!(matches!(err, Error::UnknownCity(ref city) if city == "C"));
}

#[test]
fn test_unknown_city_is_not_explored() {
    let map = parse_map(r#"{"A": {"B": 3}, "B": {}}"#).unwrap();
    let mut recorder = Recorder::default();
    let result: greedy_route::Result<Route<f64>> =
        GreedyRoute::new().find_route_observed(&map, "A", "C", &mut recorder);

    assert!(result.is_err());
    assert!(recorder.steps.is_empty());
    assert_eq!(recorder.failures, 1);
}

#[test]
fn test_sentinel_on_success() {
    let map = parse_map(DETOUR).unwrap();
    let (path, distance) = GreedyRoute::new().path_and_distance(&map, "A", "D");
    assert_eq!(path, Some(vec!["A".to_string(), "C".to_string(), "D".to_string()]));
    assert_eq!(distance, 11.0);
}

#[test]
fn test_observer_sees_every_step() {
    let map = parse_map(DETOUR).unwrap();
    let mut recorder = Recorder::default();
    GreedyRoute::new()
        .find_route_observed(&map, "A", "D", &mut recorder)
        .unwrap();

    assert_eq!(
        recorder.steps,
        vec![
            (StepKind::Start, "A".to_string(), false),
            (StepKind::Advance, "C".to_string(), false),
            (StepKind::Arrived, "D".to_string(), true),
        ]
    );
    assert_eq!(recorder.failures, 0);
}

#[test]
fn test_equal_weights_prefer_first_name() {
    let map = parse_map(r#"{"A": {"Y": 2, "X": 2}, "X": {"Z": 1}, "Y": {"Z": 1}, "Z": {}}"#).unwrap();
    let route = GreedyRoute::new().find_route(&map, "A", "Z").unwrap();
    assert_eq!(route.path, vec!["A", "X", "Z"]);
}

#[test]
fn test_cycle_terminates() {
    let map = parse_map(r#"{"A": {"B": 1, "D": 9}, "B": {"C": 1}, "C": {"A": 1}, "D": {}}"#).unwrap();
    let err = GreedyRoute::new().find_route(&map, "A", "D").unwrap_err();
    assert!(matches!(err, Error::CycleDetected(ref city) if city == "A"));
}

#[test]
fn test_random_maps_keep_route_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);
    let finder = GreedyRoute::new();

    for _ in 0..20 {
        let map = random_map(&mut rng, 12, 3);
        let cities: Vec<String> = map.cities().map(str::to_string).collect();

        for origin in &cities {
            for destination in &cities {
                match finder.find_route(&map, origin, destination) {
                    Ok(route) => assert_route_is_consistent(&map, &route, origin, destination),
                    Err(err) => assert!(err.is_no_route()),
                }
            }
        }
    }
}

#[test]
fn test_finders_report_their_names() {
    let greedy: &dyn RouteFinder<f64, CityMap<f64>> = &GreedyRoute::new();
    let backtracking: &dyn RouteFinder<f64, CityMap<f64>> = &greedy_route::BacktrackingRoute::new();
    assert_eq!(greedy.name(), "Greedy");
    assert_eq!(backtracking.name(), "Backtracking");
}
