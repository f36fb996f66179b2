use crate::errors::PathPlannerError;
use super::Route;

use std::fmt::Debug;
use log::debug;
use num_traits::Zero;


/// Depth-Limited Search
/// https://en.wikipedia.org/wiki/Iterative_deepening_depth-first_search
/// Depth first search that gives up on any branch deeper than `limit` edges.
/// Cycles are avoided by skipping neighbors already on the current path.
#[derive(Clone, Copy, Debug)]
pub struct DepthLimited {
    pub limit: usize, // maximum number of edges in a route
}

impl DepthLimited {

    /// From start Node, search depth first for a node meeting the goal criteria
    /// Returns the first route found within the limit, not necessarily the cheapest
    pub fn plan<N, C, IT, NN, G>(&self, start: N, neighbors: NN, goal_fn: G) -> Result<Route<N, C>, PathPlannerError>
    where
        N: Eq + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Copy + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        let result = limited_route(start, self.limit, &neighbors, &goal_fn);
        match &result {
            Ok(route) => debug!("dls: found route of {} edges within limit {}", route.edge_count(), self.limit),
            Err(_) => debug!("dls: no route within limit {}", self.limit),
        }
        result
    }
}


/// Iterative-Deepening Search
/// Runs depth-limited search with limits 0, 1, 2, ... below `max_depth` and returns
/// the first success. The route found has the fewest possible edges.
#[derive(Clone, Copy, Debug)]
pub struct IterativeDeepening {
    pub max_depth: usize, // exclusive bound on the depth limit
}

impl IterativeDeepening {

    pub fn plan<N, C, IT, NN, G>(&self, start: N, neighbors: NN, goal_fn: G) -> Result<Route<N, C>, PathPlannerError>
    where
        N: Eq + Clone + Debug,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>,
        C: Zero + Copy + Debug,
        G: Fn(&N) -> bool,
        {

        for limit in 0..self.max_depth {
            if let Ok(route) = limited_route(start.clone(), limit, &neighbors, &goal_fn) {
                debug!("ids: found route at depth {}", limit);
                return Ok(route);
            }
        }

        debug!("ids: no route below depth {}", self.max_depth);
        Err(PathPlannerError::NoPathFound)
    }
}


fn limited_route<N, C, IT, NN, G>(start: N, limit: usize, neighbors: &NN, goal_fn: &G) -> Result<Route<N, C>, PathPlannerError>
where
    N: Eq + Clone,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Copy,
    G: Fn(&N) -> bool,
{
    let mut path = vec![start];
    match explore(&mut path, Zero::zero(), limit, neighbors, goal_fn) {
        Some(cost) => Ok(Route { path, cost }),
        None => Err(PathPlannerError::NoPathFound),
    }
}


/// Depth first extension of `path` with a budget of `remaining` further edges
/// The goal check runs before the budget check, so a budget of 0 still succeeds
/// when the path already ends at the goal
fn explore<N, C, IT, NN, G>(path: &mut Vec<N>, cost: C, remaining: usize, neighbors: &NN, goal_fn: &G) -> Option<C>
where
    N: Eq + Clone,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Copy,
    G: Fn(&N) -> bool,
{
    let node = path.last()?.clone();
    if goal_fn(&node) {
        return Some(cost);
    }

    if remaining == 0 {
        return None;
    }

    for (neighbor, edge_cost) in neighbors(&node) {
        // path based cycle check
        if path.contains(&neighbor) {
            continue;
        }

        path.push(neighbor);
        if let Some(total) = explore(path, cost + edge_cost, remaining - 1, neighbors, goal_fn) {
            return Some(total);
        }
        path.pop();
    }

    None
}
