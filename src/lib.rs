//! Greedy Route - nearest-neighbour route finding between named cities
//!
//! This library walks a small weighted city map from an origin towards a
//! destination by always taking the cheapest outgoing road. Two finders are
//! provided: the plain greedy walk and a variant that remembers visited cities
//! and backs out of dead ends.
//!
//! Neither finder is shortest-path optimal. A greedy walk may take a more
//! expensive route than necessary, or fail where a route exists.

pub mod algorithm;
pub mod config;
pub mod graph;
pub mod input;
pub mod render;

pub use algorithm::{
    backtracking::{BacktrackingRoute, DistanceAccounting},
    greedy::GreedyRoute,
    tie_break::{EuclideanToDestination, NameOrder, TieBreak},
    Route, RouteFinder, SearchObserver, SearchStep, StepKind,
};
/// Re-export main types for convenient use
pub use graph::city_map::CityMap;
pub use graph::layout::Layout;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("City not found on the map: {0}")]
    UnknownCity(String),

    #[error("Dead end at {0}: no outgoing roads")]
    DeadEnd(String),

    #[error("Every branch was explored without reaching the destination")]
    Exhausted,

    #[error("Greedy walk entered a cycle at {0}")]
    CycleDetected(String),

    #[error("Negative edge weight from {from} to {to}: {weight}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("Failed to read map file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid map file: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for the failures a route search can end in
    pub fn is_no_route(&self) -> bool {
        matches!(
            self,
            Error::UnknownCity(_) | Error::DeadEnd(_) | Error::Exhausted | Error::CycleDetected(_)
        )
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
