//! Single entry point over every algorithm in the crate.

use std::fmt;
use std::str::FromStr;

use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SearchOptions;
use crate::errors::PathPlannerError;
use crate::graph::{Distance, RoadMap};
use crate::graph_algos::{
    Route,
    a_star::{AStar, AoStar},
    bfs::bfs,
    depth_limited::{DepthLimited, IterativeDeepening},
    dfs::dfs,
    ucs::ucs,
};


/// Search algorithm selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Dls,
    Ids,
    Astar,
    AoStar,
    Genetic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Dls,
        Algorithm::Ids,
        Algorithm::Astar,
        Algorithm::AoStar,
        Algorithm::Genetic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ucs => "ucs",
            Algorithm::Dls => "dls",
            Algorithm::Ids => "ids",
            Algorithm::Astar => "astar",
            Algorithm::AoStar => "ao_star",
            Algorithm::Genetic => "genetic",
        }
    }

    /// Every algorithm except the genetic one returns the same answer for the same input
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Algorithm::Genetic)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PathPlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" => Ok(Algorithm::Ucs),
            "dls" => Ok(Algorithm::Dls),
            "ids" => Ok(Algorithm::Ids),
            "astar" | "a_star" | "a*" => Ok(Algorithm::Astar),
            "ao_star" | "aostar" | "ao*" => Ok(Algorithm::AoStar),
            "genetic" => Ok(Algorithm::Genetic),
            _ => Err(PathPlannerError::UnknownAlgorithm(s.to_string())),
        }
    }
}


/// Outcome of a search
/// An empty path with no cost means no path was found
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    pub path: Vec<String>,
    pub cost: Option<Distance>,
}

impl SearchResponse {

    pub fn no_path() -> Self {
        Self { path: Vec::new(), cost: None }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl<N: AsRef<str>> From<Route<N, Distance>> for SearchResponse {
    fn from(route: Route<N, Distance>) -> Self {
        Self {
            path: route.path.iter().map(|n| n.as_ref().to_string()).collect(),
            cost: Some(route.cost),
        }
    }
}


/// Run one algorithm from start to goal over the road map
///
/// Unknown locations are treated as having no roads, and a missing route is an
/// empty response rather than an error. The genetic algorithm always answers with
/// its fittest individual, whose cost is then its fitness.
/// `options` is used as given, call `SearchOptions::validate` first for untrusted input.
pub fn search<'a, R: Rng + ?Sized>(
    map: &RoadMap,
    algorithm: Algorithm,
    start: &'a str,
    goal: &str,
    options: &SearchOptions,
    rng: &mut R,
) -> SearchResponse {

    let neighbors = |location: &&'a str| -> Vec<(&'a str, Distance)> { map.neighbors(location).to_vec() };
    let heuristic = |location: &&'a str| map.estimate(location);
    let goal_fn = |location: &&'a str| *location == goal;

    let result = match algorithm {
        Algorithm::Bfs => bfs(start, neighbors, goal_fn),
        Algorithm::Dfs => dfs(start, neighbors, goal_fn),
        Algorithm::Ucs => ucs(start, neighbors, goal_fn),
        Algorithm::Dls => DepthLimited { limit: options.depth_limit }.plan(start, neighbors, goal_fn),
        Algorithm::Ids => IterativeDeepening { max_depth: options.max_depth }.plan(start, neighbors, goal_fn),
        Algorithm::Astar => AStar {}.plan(start, neighbors, heuristic, goal_fn),
        Algorithm::AoStar => AoStar {}.plan(start, neighbors, heuristic, goal_fn),
        Algorithm::Genetic => {
            let evolution = options.genetic().plan(start, neighbors, goal_fn, rng);
            if !evolution.converged {
                warn!(
                    "genetic {} -> {} did not converge in {} generations, best fitness {}",
                    start, goal, evolution.generations, evolution.best.fitness
                );
            }
            Ok(Route { path: evolution.best.path, cost: evolution.best.fitness })
        }
    };

    match result {
        Ok(route) => {
            info!("{} {} -> {}: {} edges, cost {}", algorithm, start, goal, route.edge_count(), route.cost);
            SearchResponse::from(route)
        }
        // the planners only fail with NoPathFound
        Err(e) => {
            info!("{} {} -> {}: {}", algorithm, start, goal, e);
            SearchResponse::no_path()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(algorithm: Algorithm, start: &str, goal: &str) -> SearchResponse {
        let mut rng = StdRng::seed_from_u64(42);
        search(RoadMap::romania(), algorithm, start, goal, &SearchOptions::default(), &mut rng)
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("BFS".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!("a*".parse::<Algorithm>().unwrap(), Algorithm::Astar);
        assert_eq!(" ao_star ".parse::<Algorithm>().unwrap(), Algorithm::AoStar);
        assert!(matches!("dijkstra".parse::<Algorithm>(), Err(PathPlannerError::UnknownAlgorithm(_))));

        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_ucs_arad_to_bucharest() {
        let response = run(Algorithm::Ucs, "Arad", "Bucharest");
        assert_eq!(response.path, vec!["Arad", "Sibiu", "Rimnicu Vilcea", "Pitesti", "Bucharest"]);
        assert_eq!(response.cost, Some(418));
    }

    #[test]
    fn test_astar_arad_to_bucharest() {
        let response = run(Algorithm::Astar, "Arad", "Bucharest");
        assert_eq!(response.path, vec!["Arad", "Sibiu", "Rimnicu Vilcea", "Pitesti", "Bucharest"]);
        assert_eq!(response.cost, Some(418));
    }

    #[test]
    fn test_bfs_arad_to_bucharest() {
        let response = run(Algorithm::Bfs, "Arad", "Bucharest");
        assert_eq!(response.path, vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]);
        assert_eq!(response.cost, Some(450));
    }

    #[test]
    fn test_dfs_arad_to_bucharest() {
        let response = run(Algorithm::Dfs, "Arad", "Bucharest");
        assert_eq!(
            response.path,
            vec!["Arad", "Zerind", "Oradea", "Sibiu", "Fagaras", "Bucharest"]
        );
        assert_eq!(response.cost, Some(607));
    }

    #[test]
    fn test_dls_neamt_to_arad_too_shallow() {
        let mut rng = StdRng::seed_from_u64(0);
        let options = SearchOptions { depth_limit: 3, ..Default::default() };
        let response = search(RoadMap::romania(), Algorithm::Dls, "Neamt", "Arad", &options, &mut rng);
        assert_eq!(response, SearchResponse::no_path());
        assert!(!response.is_found());
    }

    #[test]
    fn test_start_equals_goal() {
        for algorithm in Algorithm::ALL {
            let response = run(algorithm, "Sibiu", "Sibiu");
            assert_eq!(response.path, vec!["Sibiu"], "{algorithm}");
            assert_eq!(response.cost, Some(0), "{algorithm}");
        }
    }

    #[test]
    fn test_unknown_start_has_no_roads() {
        for algorithm in Algorithm::ALL.into_iter().filter(Algorithm::is_deterministic) {
            assert_eq!(run(algorithm, "Atlantis", "Arad"), SearchResponse::no_path(), "{algorithm}");
        }

        // the genetic algorithm still answers with its best effort
        let response = run(Algorithm::Genetic, "Atlantis", "Arad");
        assert_eq!(response.path, vec!["Atlantis"]);
        assert_eq!(response.cost, Some(1000));
    }

    #[test]
    fn test_unknown_goal_is_unreachable() {
        assert_eq!(run(Algorithm::Ucs, "Arad", "Atlantis"), SearchResponse::no_path());
        assert_eq!(run(Algorithm::Astar, "Arad", "Atlantis"), SearchResponse::no_path());
    }

    #[test]
    fn test_response_serializes_missing_cost_as_null() {
        let json = serde_json::to_value(SearchResponse::no_path()).unwrap();
        assert_eq!(json, serde_json::json!({ "path": [], "cost": null }));
    }
}
