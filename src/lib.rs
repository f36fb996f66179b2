//! Classical graph search over a fixed road map of Romania.
//!
//! Breadth-first, depth-first, uniform-cost, depth-limited, iterative-deepening,
//! A*, a simplified AO* and a genetic algorithm. The algorithms in `graph_algos`
//! and `evolutionary_algos` are generic over node and cost types and only see the
//! graph through neighbor, heuristic and goal callbacks. `search` wires them to the
//! built-in `RoadMap`.
//!
//! ```
//! use rand::SeedableRng;
//! use wayfinder::{search, Algorithm, RoadMap, SearchOptions};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let response = search(RoadMap::romania(), Algorithm::Ucs, "Arad", "Bucharest", &SearchOptions::default(), &mut rng);
//! assert_eq!(response.cost, Some(418));
//! ```

pub mod config;
pub mod errors;
pub mod evolutionary_algos;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod request;
pub mod search;
mod collections;

pub use config::SearchOptions;
pub use errors::PathPlannerError;
pub use graph::{Distance, Location, RoadMap, INFINITE_ESTIMATE};
pub use request::{route, RouteReport, RouteRequest};
pub use search::{search, Algorithm, SearchResponse};
