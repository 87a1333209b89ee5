use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::{Error, Result};

/// A route found by a search
#[derive(Debug, Clone, PartialEq)]
pub struct Route<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Cities from origin to destination
    pub path: Vec<String>,

    /// Sum of the weights counted while walking
    pub total_distance: W,
}

impl<W> Route<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn origin(&self) -> &str {
        &self.path[0]
    }

    pub fn destination(&self) -> &str {
        &self.path[self.path.len() - 1]
    }

    /// Number of roads travelled
    pub fn hops(&self) -> usize {
        self.path.len() - 1
    }
}

/// What happened in a single search step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// The path holds only the origin
    Start,
    /// A city was appended
    Advance,
    /// A dead end was popped off the path
    Backtrack,
    /// The destination was appended
    Arrived,
}

/// Search state handed to an observer after each step
#[derive(Debug, Clone, Copy)]
pub struct SearchStep<'a> {
    pub path: &'a [String],
    pub current: &'a str,
    pub kind: StepKind,
    pub distance: f64,
    /// True when this is the last frame of a successful search
    pub is_final: bool,
}

impl<'a> SearchStep<'a> {
    pub(crate) fn new<W>(path: &'a [String], kind: StepKind, distance: W, is_final: bool) -> Self
    where
        W: Float,
    {
        SearchStep {
            path,
            current: path.last().map(String::as_str).unwrap_or_default(),
            kind,
            distance: distance.to_f64().unwrap_or(f64::NAN),
            is_final,
        }
    }
}

/// Receives the search state as it changes, e.g. to draw an animation
pub trait SearchObserver {
    fn on_step(&mut self, step: &SearchStep<'_>);

    /// Called once when the search gives up
    fn on_failure(&mut self, _error: &Error) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_step(&mut self, _step: &SearchStep<'_>) {}
}

/// Trait for route finding strategies
pub trait RouteFinder<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Get the name of the strategy
    fn name(&self) -> &'static str;

    /// Search for a route, reporting every step to `observer`
    fn find_route_observed(
        &self,
        graph: &G,
        origin: &str,
        destination: &str,
        observer: &mut dyn SearchObserver,
    ) -> Result<Route<W>>;

    /// Search for a route from `origin` to `destination`
    fn find_route(&self, graph: &G, origin: &str, destination: &str) -> Result<Route<W>> {
        self.find_route_observed(graph, origin, destination, &mut NoopObserver)
    }

    /// Search and collapse every failure into `(None, 0)`
    fn path_and_distance(&self, graph: &G, origin: &str, destination: &str) -> (Option<Vec<String>>, W) {
        match self.find_route(graph, origin, destination) {
            Ok(route) => (Some(route.path), route.total_distance),
            Err(_) => (None, W::zero()),
        }
    }
}

/// Fails with `UnknownCity` unless both ends have an entry in the map
pub(crate) fn check_endpoints<W, G>(graph: &G, origin: &str, destination: &str) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    for city in [origin, destination] {
        if !graph.has_city(city) {
            return Err(Error::UnknownCity(city.to_string()));
        }
    }
    Ok(())
}
