use greedy_route::graph::{CityMap, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

// Random map with integer weights so sums compare exactly
pub fn random_map(rng: &mut StdRng, cities: usize, roads_per_city: usize) -> CityMap<f64> {
    let names: Vec<String> = (0..cities).map(|i| format!("City{:02}", i)).collect();
    let mut map = CityMap::new();
    for name in &names {
        map.add_city(name);
    }
    for from in &names {
        for _ in 0..rng.gen_range(0..=roads_per_city) {
            let to = &names[rng.gen_range(0..cities)];
            if to != from {
                map.add_road(from, to, rng.gen_range(1..20) as f64);
            }
        }
    }
    map
}
