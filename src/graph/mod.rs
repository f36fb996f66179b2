mod data;

use crate::collections::FxIndexMap;
use crate::errors::PathPlannerError;
use crate::geometry::Point;
use crate::graph_algos::ucs::ucs;

use lazy_static::lazy_static;


/// Name of a location on the map
pub type Location = &'static str;

/// Road distance between two locations
pub type Distance = u32;

/// Estimate returned for locations missing from the heuristic table
pub const INFINITE_ESTIMATE: Distance = Distance::MAX;

lazy_static! {
    static ref ROMANIA: RoadMap = RoadMap::new(data::ROADS, data::ESTIMATES, data::COORDINATES);
}


/// Immutable weighted road graph
/// Holds the adjacency lists, the heuristic table and display coordinates
#[derive(Debug)]
pub struct RoadMap {
    roads: FxIndexMap<Location, Vec<(Location, Distance)>>,
    estimates: FxIndexMap<Location, Distance>,
    coordinates: FxIndexMap<Location, Point>,
}

impl RoadMap {

    /// Build a road map from static tables
    /// Adjacency order is kept as given
    pub fn new(
        roads: &[(Location, &[(Location, Distance)])],
        estimates: &[(Location, Distance)],
        coordinates: &[(Location, (f64, f64))],
    ) -> Self {
        Self {
            roads: roads.iter().map(|&(location, links)| (location, links.to_vec())).collect(),
            estimates: estimates.iter().copied().collect(),
            coordinates: coordinates.iter().map(|&(location, (x, y))| (location, Point::new(x, y))).collect(),
        }
    }

    /// The shared road map of Romania, built once per process
    pub fn romania() -> &'static RoadMap {
        &ROMANIA
    }

    /// Neighbors of a location with the road distance to each
    /// Unknown locations have no roads
    pub fn neighbors(&self, location: &str) -> &[(Location, Distance)] {
        self.roads.get(location).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Heuristic estimate of the remaining distance to Bucharest
    /// Returns INFINITE_ESTIMATE when the table has no entry
    pub fn estimate(&self, location: &str) -> Distance {
        self.estimates.get(location).copied().unwrap_or(INFINITE_ESTIMATE)
    }

    /// Canonical name for a location, if it is on the map
    pub fn location(&self, name: &str) -> Option<Location> {
        self.roads.get_key_value(name).map(|(&location, _)| location)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roads.contains_key(name)
    }

    /// All locations in table order
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.roads.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    pub fn coordinates(&self, location: &str) -> Option<Point> {
        self.coordinates.get(location).copied()
    }

    /// Length of the direct road between two locations
    pub fn distance(&self, from: &str, to: &str) -> Option<Distance> {
        self.neighbors(from)
            .iter()
            .find(|(neighbor, _)| *neighbor == to)
            .map(|&(_, distance)| distance)
    }

    /// Total length of a path, None if any step is not a road
    pub fn path_cost<S: AsRef<str>>(&self, path: &[S]) -> Option<Distance> {
        path.windows(2)
            .map(|step| self.distance(step[0].as_ref(), step[1].as_ref()))
            .sum()
    }

    /// Cost of the cheapest route between the two locations furthest apart by road
    /// Zero for a map without any connected pair
    pub fn longest_route(&self) -> Distance {
        let neighbors = |location: &Location| self.neighbors(location).to_vec();
        self.locations()
            .flat_map(|start| self.locations().map(move |goal| (start, goal)))
            .filter_map(|(start, goal)| ucs(start, neighbors, |location: &Location| *location == goal).ok())
            .map(|route| route.cost)
            .max()
            .unwrap_or(0)
    }

    /// Check the map invariants
    /// 1. Every neighbor is itself a location on the map
    /// 2. Every road is listed in both directions with the same distance
    /// 3. Every location has a heuristic estimate and display coordinates
    pub fn validate(&self) -> Result<(), PathPlannerError> {
        for (&location, links) in &self.roads {
            for &(neighbor, distance) in links {
                if !self.contains(neighbor) {
                    return Err(PathPlannerError::InvalidRoadMap(format!(
                        "{location} links to unknown location {neighbor}"
                    )));
                }
                if self.distance(neighbor, location) != Some(distance) {
                    return Err(PathPlannerError::InvalidRoadMap(format!(
                        "road {location} -> {neighbor} ({distance}) has no matching return road"
                    )));
                }
            }
            if !self.estimates.contains_key(location) {
                return Err(PathPlannerError::InvalidRoadMap(format!("{location} has no heuristic estimate")));
            }
            if !self.coordinates.contains_key(location) {
                return Err(PathPlannerError::InvalidRoadMap(format!("{location} has no coordinates")));
            }
        }
        Ok(())
    }
}
