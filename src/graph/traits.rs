use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Trait representing a weighted directed map of named cities
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of cities with an entry in the map
    fn city_count(&self) -> usize;

    /// Returns the number of roads in the map
    fn road_count(&self) -> usize;

    /// Returns an iterator over the cities with an entry in the map, in name order
    fn cities(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns an iterator over the outgoing roads from a city, in neighbour name order.
    /// Cities without an entry have no outgoing roads.
    fn neighbors(&self, city: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_>;

    /// Returns true if the city has an entry in the map
    fn has_city(&self, city: &str) -> bool;

    /// Returns true if there's a road between the two cities
    fn has_road(&self, from: &str, to: &str) -> bool {
        self.road_weight(from, to).is_some()
    }

    /// Gets the weight of a road if it exists
    fn road_weight(&self, from: &str, to: &str) -> Option<W>;
}

/// Trait for building a map
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a city with no roads. Returns false if it was already present.
    fn add_city(&mut self, city: &str) -> bool;

    /// Adds or replaces a directed road. Negative weights are refused.
    fn add_road(&mut self, from: &str, to: &str, weight: W) -> bool;
}
