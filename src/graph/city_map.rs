use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{Float, Zero};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::fmt::Debug;

/// A directed city map using name-ordered adjacency maps
#[derive(Debug, Clone, PartialEq)]
pub struct CityMap<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    /// city -> { neighbour -> weight }
    roads: BTreeMap<String, BTreeMap<String, W>>,
}

impl<W> CityMap<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty map
    pub fn new() -> Self {
        CityMap {
            roads: BTreeMap::new(),
        }
    }

    /// Wraps an adjacency map as is. Neighbours need not have their own entry.
    pub fn from_adjacency(roads: BTreeMap<String, BTreeMap<String, W>>) -> Self {
        CityMap { roads }
    }

    /// Every name the map mentions, including neighbour-only cities
    pub fn all_names(&self) -> BTreeSet<&str> {
        let mut names: BTreeSet<&str> = self.roads.keys().map(String::as_str).collect();
        for neighbours in self.roads.values() {
            names.extend(neighbours.keys().map(String::as_str));
        }
        names
    }

    /// Returns the first road with a negative weight, if any
    pub fn find_negative_weight(&self) -> Option<(&str, &str, W)> {
        self.roads.iter().find_map(|(from, neighbours)| {
            neighbours
                .iter()
                .find(|(_, weight)| **weight < W::zero())
                .map(|(to, weight)| (from.as_str(), to.as_str(), *weight))
        })
    }

    /// Builds a new map holding only the given cities and the roads between them.
    /// The source map is left untouched.
    pub fn subgraph<'a, I>(&self, cities: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keep: HashSet<&str> = cities.into_iter().collect();
        let roads = self
            .roads
            .iter()
            .filter(|(city, _)| keep.contains(city.as_str()))
            .map(|(city, neighbours)| {
                let kept = neighbours
                    .iter()
                    .filter(|(to, _)| keep.contains(to.as_str()))
                    .map(|(to, weight)| (to.clone(), *weight))
                    .collect();
                (city.clone(), kept)
            })
            .collect();
        CityMap { roads }
    }

    /// Builds the subgraph of cities reachable from `origin`, origin included
    pub fn reachable_from(&self, origin: &str) -> Self {
        if !self.has_city(origin) {
            return CityMap::new();
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(origin);
        queue.push_back(origin);

        while let Some(city) = queue.pop_front() {
            for (next, _) in self.neighbors(city) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        self.subgraph(seen)
    }
}

impl<W> Default for CityMap<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for CityMap<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn city_count(&self) -> usize {
        self.roads.len()
    }

    fn road_count(&self) -> usize {
        self.roads.values().map(|neighbours| neighbours.len()).sum()
    }

    fn cities(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.roads.keys().map(String::as_str))
    }

    fn neighbors(&self, city: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_> {
        if let Some(neighbours) = self.roads.get(city) {
            Box::new(neighbours.iter().map(|(to, weight)| (to.as_str(), *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_city(&self, city: &str) -> bool {
        self.roads.contains_key(city)
    }

    fn road_weight(&self, from: &str, to: &str) -> Option<W> {
        self.roads.get(from).and_then(|neighbours| neighbours.get(to)).copied()
    }
}

impl<W> MutableGraph<W> for CityMap<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_city(&mut self, city: &str) -> bool {
        if self.roads.contains_key(city) {
            return false;
        }
        self.roads.insert(city.to_string(), BTreeMap::new());
        true
    }

    fn add_road(&mut self, from: &str, to: &str, weight: W) -> bool {
        if weight < W::zero() || weight.is_nan() {
            return false;
        }
        self.roads
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), weight);
        true
    }
}
