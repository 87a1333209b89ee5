use log::{debug, info, warn};
use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::algorithm::tie_break::{cheapest, NameOrder, TieBreak};
use crate::algorithm::traits::{check_endpoints, Route, RouteFinder, SearchObserver, SearchStep, StepKind};
use crate::graph::Graph;
use crate::{Error, Result};

/// How the running total treats roads that led into a dead end
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DistanceAccounting {
    /// Every road walked forward counts, abandoned detours included
    #[default]
    Traversed,
    /// Backing out of a city takes its road off the total again
    NetPath,
}

/// Greedy walk that remembers visited cities and backs out of dead ends.
///
/// A city enters the visited set when it is appended and stays there after
/// being popped, so each city is pushed and popped at most once.
#[derive(Debug, Default, Clone)]
pub struct BacktrackingRoute<T = NameOrder>
where
    T: TieBreak,
{
    tie_break: T,
    accounting: DistanceAccounting,
}

impl BacktrackingRoute<NameOrder> {
    /// Creates a backtracking finder that breaks ties by city name
    pub fn new() -> Self {
        BacktrackingRoute {
            tie_break: NameOrder,
            accounting: DistanceAccounting::Traversed,
        }
    }
}

impl<T: TieBreak> BacktrackingRoute<T> {
    pub fn with_tie_break(tie_break: T) -> Self {
        BacktrackingRoute {
            tie_break,
            accounting: DistanceAccounting::Traversed,
        }
    }

    pub fn accounting(mut self, accounting: DistanceAccounting) -> Self {
        self.accounting = accounting;
        self
    }
}

impl<W, G, T> RouteFinder<W, G> for BacktrackingRoute<T>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    T: TieBreak,
{
    fn name(&self) -> &'static str {
        "Backtracking"
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
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(origin.to_string());
        let mut total = W::zero();
        let mut backtracks = 0usize;

        observer.on_step(&SearchStep::new(&path, StepKind::Start, total, origin == destination));

        while let Some(current) = path.last().cloned() {
            if current == destination {
                info!(
                    "Backtracking route {} -> {} found with {} hops and {} backtracks",
                    origin,
                    destination,
                    path.len() - 1,
                    backtracks
                );
                return Ok(Route {
                    path,
                    total_distance: total,
                });
            }

            let candidates = graph
                .neighbors(&current)
                .filter(|(city, _)| !visited.contains(*city));

            match cheapest(candidates, destination, &self.tie_break) {
                Some((next, weight)) => {
                    visited.insert(next.to_string());
                    path.push(next.to_string());
                    total = total + weight;
                    debug!("{} -> {} ({:?}, total {:?})", current, next, weight, total);

                    let arrived = next == destination;
                    let kind = if arrived { StepKind::Arrived } else { StepKind::Advance };
                    observer.on_step(&SearchStep::new(&path, kind, total, arrived));
                }
                None => {
                    path.pop();
                    backtracks += 1;

                    if let (DistanceAccounting::NetPath, Some(previous)) = (self.accounting, path.last()) {
                        if let Some(weight) = graph.road_weight(previous, &current) {
                            total = total - weight;
                        }
                    }

                    if path.is_empty() {
                        break;
                    }
                    debug!("Dead end at {}, back to {}", current, path[path.len() - 1]);
                    observer.on_step(&SearchStep::new(&path, StepKind::Backtrack, total, false));
                }
            }
        }

        warn!("No route from {} to {} after {} backtracks", origin, destination, backtracks);
        let err = Error::Exhausted;
        observer.on_failure(&err);
        Err(err)
    }
}
