//! Request handling in front of the searches: checks the names in a route request,
//! falls back to a random route when none is given and attaches display coordinates.

use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::config::SearchOptions;
use crate::errors::PathPlannerError;
use crate::geometry::Point;
use crate::graph::{Distance, Location, RoadMap};
use crate::search::{search, Algorithm};


#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub algorithm: String,
}

/// Route ready for display
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteReport {
    pub path: Vec<String>,
    pub cost: Option<Distance>,
    pub note: Option<String>, // set when a random route replaced the requested one
    pub coords: Vec<Point>, // one per path entry
}


/// Answer a route request
///
/// A missing, empty or identical start/end pair is replaced by two distinct random
/// locations and the report carries a note saying so. Names that are not on the map
/// and unsupported algorithm names are rejected before any search runs.
pub fn route<R: Rng + ?Sized>(
    map: &RoadMap,
    request: &RouteRequest,
    options: &SearchOptions,
    rng: &mut R,
) -> Result<RouteReport, PathPlannerError> {

    let start = request.start.as_deref().filter(|s| !s.is_empty());
    let end = request.end.as_deref().filter(|s| !s.is_empty());

    let (start, end, note) = match (start, end) {
        (Some(start), Some(end)) if start != end => (start, end, None),
        _ => {
            let (start, end) = random_pair(map, rng)?;
            info!("no valid route requested, picked {} -> {}", start, end);
            let note = format!("No valid cities given. Choosing random route from {start} to {end}.");
            (start, end, Some(note))
        }
    };

    for name in [start, end] {
        if !map.contains(name) {
            return Err(PathPlannerError::UnknownLocation(name.to_string()));
        }
    }

    let algorithm: Algorithm = request.algorithm.parse()?;
    options.validate()?;

    let response = search(map, algorithm, start, end, options, rng);
    let coords = response.path.iter().filter_map(|name| map.coordinates(name)).collect();

    Ok(RouteReport {
        path: response.path,
        cost: response.cost,
        note,
        coords,
    })
}


/// Two distinct locations chosen uniformly at random
pub fn random_pair<R: Rng + ?Sized>(map: &RoadMap, rng: &mut R) -> Result<(Location, Location), PathPlannerError> {
    let locations: Vec<Location> = map.locations().collect();
    let picks: Vec<Location> = locations.choose_multiple(rng, 2).copied().collect();

    match picks[..] {
        [start, end] => Ok((start, end)),
        _ => Err(PathPlannerError::InvalidRoadMap("fewer than two locations".to_string())),
    }
}
