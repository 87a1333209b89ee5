pub mod traits;
pub mod tie_break;
pub mod greedy;
pub mod backtracking;

pub use traits::{NoopObserver, Route, RouteFinder, SearchObserver, SearchStep, StepKind};
