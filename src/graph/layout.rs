use num_traits::{Float, Zero};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::graph::city_map::CityMap;

/// A 2-D position used for drawing a city
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Euclidean distance between two points
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        f64::sqrt(dx * dx + dy * dy)
    }
}

/// City name -> position. Positions are arbitrary and unrelated to geography.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    positions: BTreeMap<String, Point>,
}

impl Layout {
    /// Places every city the map mentions at a random point in the unit square.
    /// The same seed yields the same layout for the same map.
    pub fn random<W>(map: &CityMap<W>, seed: Option<u64>) -> Self
    where
        W: Float + Zero + Debug + Copy,
    {
        match seed {
            Some(seed) => Self::random_with(map, &mut StdRng::seed_from_u64(seed)),
            None => Self::random_with(map, &mut rand::thread_rng()),
        }
    }

    /// Places every city using the given generator
    pub fn random_with<W, R>(map: &CityMap<W>, rng: &mut R) -> Self
    where
        W: Float + Zero + Debug + Copy,
        R: Rng,
    {
        let positions = map
            .all_names()
            .into_iter()
            .map(|name| {
                let x = rng.gen_range(0.0..1.0);
                let y = rng.gen_range(0.0..1.0);
                (name.to_string(), Point { x, y })
            })
            .collect();
        Layout { positions }
    }

    /// Sets a fixed position for a city
    pub fn place(&mut self, city: &str, x: f64, y: f64) {
        self.positions.insert(city.to_string(), Point { x, y });
    }

    pub fn position(&self, city: &str) -> Option<Point> {
        self.positions.get(city).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// A new layout holding only the cities `map` mentions, neighbour-only ones included
    pub fn restricted_to<W>(&self, map: &CityMap<W>) -> Self
    where
        W: Float + Zero + Debug + Copy,
    {
        let names = map.all_names();
        let positions = self
            .positions
            .iter()
            .filter(|(city, _)| names.contains(city.as_str()))
            .map(|(city, point)| (city.clone(), *point))
            .collect();
        Layout { positions }
    }
}
