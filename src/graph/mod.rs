pub mod traits;
pub mod city_map;
pub mod layout;
pub mod loader;

pub use traits::{Graph, MutableGraph};
pub use city_map::CityMap;
pub use layout::{Layout, Point};
pub use loader::{load_map, parse_map};
