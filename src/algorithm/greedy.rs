use log::{debug, info, warn};
use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::algorithm::tie_break::{cheapest, NameOrder, TieBreak};
use crate::algorithm::traits::{check_endpoints, Route, RouteFinder, SearchObserver, SearchStep, StepKind};
use crate::graph::Graph;
use crate::{Error, Result};

/// Plain greedy walk: always take the cheapest road out of the current city.
///
/// The walk never backs up. Because every choice is deterministic, reaching a
/// city that is already on the path means the walk would repeat forever, so
/// that is reported as [`Error::CycleDetected`].
#[derive(Debug, Default, Clone)]
pub struct GreedyRoute<T = NameOrder>
where
    T: TieBreak,
{
    tie_break: T,
}

impl GreedyRoute<NameOrder> {
    /// Creates a greedy finder that breaks ties by city name
    pub fn new() -> Self {
        GreedyRoute { tie_break: NameOrder }
    }
}

impl<T: TieBreak> GreedyRoute<T> {
    pub fn with_tie_break(tie_break: T) -> Self {
        GreedyRoute { tie_break }
    }
}

impl<W, G, T> RouteFinder<W, G> for GreedyRoute<T>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    T: TieBreak,
{
    fn name(&self) -> &'static str {
        "Greedy"
    }

    fn find_route_observed(
        &self,
        graph: &G,
        origin: &str,
        destination: &str,
        observer: &mut dyn SearchObserver,
    ) -> Result<Route<W>> {
        if let Err(err) = check_endpoints(graph, origin, destination) {
            observer.on_failure(&err);
            return Err(err);
        }

        let mut path = vec![origin.to_string()];
        let mut on_path: HashSet<&str> = HashSet::new();
        on_path.insert(origin);
        let mut total = W::zero();
        let mut current = origin;

        observer.on_step(&SearchStep::new(&path, StepKind::Start, total, origin == destination));

        while current != destination {
            let Some((next, weight)) = cheapest(graph.neighbors(current), destination, &self.tie_break) else {
                warn!("Dead end at {} after {} steps", current, path.len() - 1);
                let err = Error::DeadEnd(current.to_string());
                observer.on_failure(&err);
                return Err(err);
            };

            if !on_path.insert(next) {
                warn!("Greedy walk returned to {}, giving up", next);
                let err = Error::CycleDetected(next.to_string());
                observer.on_failure(&err);
                return Err(err);
            }

            total = total + weight;
            path.push(next.to_string());
            debug!("{} -> {} ({:?}, total {:?})", current, next, weight, total);

            let arrived = next == destination;
            let kind = if arrived { StepKind::Arrived } else { StepKind::Advance };
            observer.on_step(&SearchStep::new(&path, kind, total, arrived));

            current = next;
        }

        info!("Greedy route {} -> {} found in {} steps", origin, destination, path.len() - 1);
        Ok(Route {
            path,
            total_distance: total,
        })
    }
}
