use clap::Parser;
use greedy_route::algorithm::{NoopObserver, Route, RouteFinder, SearchObserver};
use greedy_route::config::{Algorithm, Heuristic, RouteConfig};
use greedy_route::graph::{load_map, CityMap, Graph, Layout};
use greedy_route::input::normalize_city_name;
use greedy_route::render::{TerminalAnimator, TraceObserver};
use greedy_route::{BacktrackingRoute, EuclideanToDestination, GreedyRoute};
use log::{error, info};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let config = RouteConfig::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RouteConfig) -> greedy_route::Result<()> {
    let map = load_map(&config.map_path)?;

    println!("\nAvailable cities:");
    for city in map.cities() {
        println!("{}", city);
    }

    let origin = match &config.origin {
        Some(city) => normalize_city_name(city),
        None => prompt("\nEnter the origin city: ")?,
    };
    let destination = match &config.destination {
        Some(city) => normalize_city_name(city),
        None => prompt("Enter the destination city: ")?,
    };

    for city in [&origin, &destination] {
        if !map.has_city(city) {
            println!("Error: The city was not found on the map.");
            return Ok(());
        }
    }

    let layout = Layout::random(&map, config.seed);
    match search(config, &map, &layout, &origin, &destination) {
        Ok(route) => {
            println!("\nPath found: {}", route.path.join(" -> "));
            println!("Total distance: {} km", route.total_distance);
        }
        Err(err) if err.is_no_route() => {
            info!("No route from {} to {}: {}", origin, destination, err);
            println!("\nCould not find a path.");
        }
        Err(err) => return Err(err),
    }

    Ok(())
}

fn search(
    config: &RouteConfig,
    map: &CityMap<f64>,
    layout: &Layout,
    origin: &str,
    destination: &str,
) -> greedy_route::Result<Route<f64>> {
    // Only the part of the map the search can reach gets drawn
    let view = layout.restricted_to(&map.reachable_from(origin));

    let mut observer: Box<dyn SearchObserver + '_> = if config.animate {
        Box::new(TerminalAnimator::stdout(&view, config.frame_delay()))
    } else if config.trace {
        Box::new(TraceObserver::stdout())
    } else {
        Box::new(NoopObserver)
    };
    let observer = observer.as_mut();

    let accounting = config.accounting();
    match (config.algorithm, config.heuristic) {
        (Algorithm::Greedy, Heuristic::Name) => {
            run_finder(&GreedyRoute::new(), map, origin, destination, observer)
        }
        (Algorithm::Greedy, Heuristic::Euclidean) => run_finder(
            &GreedyRoute::with_tie_break(EuclideanToDestination::new(layout.clone())),
            map,
            origin,
            destination,
            observer,
        ),
        (Algorithm::Backtracking, Heuristic::Name) => run_finder(
            &BacktrackingRoute::new().accounting(accounting),
            map,
            origin,
            destination,
            observer,
        ),
        (Algorithm::Backtracking, Heuristic::Euclidean) => run_finder(
            &BacktrackingRoute::with_tie_break(EuclideanToDestination::new(layout.clone())).accounting(accounting),
            map,
            origin,
            destination,
            observer,
        ),
    }
}

fn run_finder<F>(
    finder: &F,
    map: &CityMap<f64>,
    origin: &str,
    destination: &str,
    observer: &mut dyn SearchObserver,
) -> greedy_route::Result<Route<f64>>
where
    F: RouteFinder<f64, CityMap<f64>>,
{
    info!("{} search from {} to {}", finder.name(), origin, destination);
    finder.find_route_observed(map, origin, destination, observer)
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(normalize_city_name(&input))
}
