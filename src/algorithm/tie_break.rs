//! Ordering of equally weighted candidates.
//!
//! Candidates are compared by road weight first, then by the strategy's
//! secondary key, then by city name. The name comparison keeps every search
//! deterministic for a given map (and layout, where one is used).

use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;
use std::fmt::Debug;

use crate::graph::layout::Layout;

/// Secondary key used when two roads weigh the same. Lower wins.
pub trait TieBreak: Debug {
    fn secondary(&self, candidate: &str, destination: &str) -> f64;
}

/// Leaves ties to lexicographic name order
#[derive(Debug, Default, Clone, Copy)]
pub struct NameOrder;

impl TieBreak for NameOrder {
    fn secondary(&self, _candidate: &str, _destination: &str) -> f64 {
        0.0
    }
}

/// Prefers the candidate drawn closest to the destination.
/// The layout is arbitrary, so this carries no geographic meaning.
#[derive(Debug, Clone)]
pub struct EuclideanToDestination {
    layout: Layout,
}

impl EuclideanToDestination {
    pub fn new(layout: Layout) -> Self {
        EuclideanToDestination { layout }
    }
}

impl TieBreak for EuclideanToDestination {
    fn secondary(&self, candidate: &str, destination: &str) -> f64 {
        match (self.layout.position(candidate), self.layout.position(destination)) {
            (Some(from), Some(to)) => from.distance(&to),
            _ => f64::INFINITY,
        }
    }
}

/// Picks the cheapest candidate under `tie_break`
pub(crate) fn cheapest<'a, W, T, I>(candidates: I, destination: &str, tie_break: &T) -> Option<(&'a str, W)>
where
    W: Float + Zero + Debug + Copy,
    T: TieBreak + ?Sized,
    I: Iterator<Item = (&'a str, W)>,
{
    candidates.min_by(|(a, wa), (b, wb)| {
        OrderedFloat(*wa)
            .cmp(&OrderedFloat(*wb))
            .then_with(|| {
                OrderedFloat(tie_break.secondary(a, destination))
                    .cmp(&OrderedFloat(tie_break.secondary(b, destination)))
            })
            .then_with(|| a.cmp(b))
    })
}
