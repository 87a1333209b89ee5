//! Loading city maps from JSON.
//!
//! A map file is a single UTF-8 JSON object. Each top-level key is a city and
//! its value is an object from neighbour name to road weight:
//!
//! ```json
//! { "Lisboa": { "Porto": 313, "Faro": 278 }, "Porto": {}, "Faro": {} }
//! ```

use log::{debug, info};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::graph::city_map::CityMap;
use crate::graph::traits::Graph;
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct MapFile {
    roads: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Parses a map from a JSON string
pub fn parse_map(json: &str) -> Result<CityMap<f64>> {
    let file: MapFile = serde_json::from_str(json)?;
    let map = CityMap::from_adjacency(file.roads);

    if let Some((from, to, weight)) = map.find_negative_weight() {
        return Err(Error::NegativeWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
    }

    debug!("Parsed map with {} cities and {} roads", map.city_count(), map.road_count());
    Ok(map)
}

/// Reads and parses a map file
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<CityMap<f64>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let map = parse_map(&contents)?;
    info!("Loaded {} cities from {}", map.city_count(), path.display());
    Ok(map)
}
