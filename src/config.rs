use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::algorithm::backtracking::DistanceAccounting;

/// Which route finder to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Greedy,
    Backtracking,
}

/// Which tie-break strategy to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Heuristic {
    /// Equal weights go to the first name
    Name,
    /// Equal weights go to the city drawn closest to the destination
    Euclidean,
}

/// Configuration for a route search run
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "greedy-route", version, about = "Finds a route between two cities by always taking the cheapest road")]
pub struct RouteConfig {
    /// City map JSON file
    #[arg(long = "map", value_name = "PATH", default_value = "cidades.json")]
    pub map_path: PathBuf,

    /// Route finder to run
    #[arg(long, value_enum, default_value_t = Algorithm::Greedy)]
    pub algorithm: Algorithm,

    /// Tie-break for equally weighted roads
    #[arg(long, value_enum, default_value_t = Heuristic::Name)]
    pub heuristic: Heuristic,

    /// Origin city, skips the prompt
    #[arg(long = "from", value_name = "CITY")]
    pub origin: Option<String>,

    /// Destination city, skips the prompt
    #[arg(long = "to", value_name = "CITY")]
    pub destination: Option<String>,

    /// Draw each search step in the terminal
    #[arg(long)]
    pub animate: bool,

    /// Pause between animation frames in milliseconds
    #[arg(long, value_name = "N", default_value_t = 500)]
    pub delay_ms: u64,

    /// Seed for the random layout
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Subtract abandoned detours from the total
    #[arg(long)]
    pub net_distance: bool,

    /// Print each search step
    #[arg(long, conflicts_with = "animate")]
    pub trace: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        RouteConfig::parse_from(["greedy-route"])
    }
}

impl RouteConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn accounting(&self) -> DistanceAccounting {
        if self.net_distance {
            DistanceAccounting::NetPath
        } else {
            DistanceAccounting::Traversed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let config = RouteConfig::try_parse_from(["greedy-route"]).unwrap();
        assert_eq!(config, RouteConfig::default());
        assert_eq!(config.map_path, PathBuf::from("cidades.json"));
        assert_eq!(config.algorithm, Algorithm::Greedy);
        assert_eq!(config.heuristic, Heuristic::Name);
        assert_eq!(config.frame_delay(), Duration::from_millis(500));
        assert_eq!(config.accounting(), DistanceAccounting::Traversed);
    }

    #[test]
    fn parses_every_option() {
        let config = RouteConfig::try_parse_from([
            "greedy-route",
            "--map", "maps/pt.json",
            "--algorithm", "backtracking",
            "--heuristic", "euclidean",
            "--from", "Lisboa",
            "--to", "Porto",
            "--animate",
            "--delay-ms", "50",
            "--seed", "9",
            "--net-distance",
        ])
        .unwrap();

        assert_eq!(config.map_path, PathBuf::from("maps/pt.json"));
        assert_eq!(config.algorithm, Algorithm::Backtracking);
        assert_eq!(config.heuristic, Heuristic::Euclidean);
        assert_eq!(config.origin.as_deref(), Some("Lisboa"));
        assert_eq!(config.destination.as_deref(), Some("Porto"));
        assert!(config.animate);
        assert!(!config.trace);
        assert_eq!(config.frame_delay(), Duration::from_millis(50));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.accounting(), DistanceAccounting::NetPath);
    }

    #[test]
    fn trace_alone_is_accepted() {
        let config = RouteConfig::try_parse_from(["greedy-route", "--trace"]).unwrap();
        assert!(config.trace && !config.animate);
    }

    #[test]
    fn animate_and_trace_conflict() {
        let err = RouteConfig::try_parse_from(["greedy-route", "--animate", "--trace"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(RouteConfig::try_parse_from(["greedy-route", "--algorithm", "dijkstra"]).is_err());
        assert!(RouteConfig::try_parse_from(["greedy-route", "--seed", "abc"]).is_err());
        assert!(RouteConfig::try_parse_from(["greedy-route", "--map"]).is_err());
        assert!(RouteConfig::try_parse_from(["greedy-route", "--verbose"]).is_err());
    }
}
