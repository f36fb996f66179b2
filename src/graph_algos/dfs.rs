use crate::errors::PathPlannerError;
use super::Route;

use std::fmt::Debug;
use log::debug;
use num_traits::Zero;


/// Depth-First Search
/// https://en.wikipedia.org/wiki/Depth-first_search
/// Recursive and unbounded in depth. Neighbors are tried in listed order and the
/// first route that reaches the goal is returned, which is not necessarily the cheapest.
pub fn dfs<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> Result<Route<N, C>, PathPlannerError>
where
    N: Eq + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    let mut path = vec![start];
    match explore(&mut path, Zero::zero(), &neighbors, &goal_fn) {
        Some(cost) => {
            debug!("dfs: found route of {} edges", path.len() - 1);
            Ok(Route { path, cost })
        }
        None => Err(PathPlannerError::NoPathFound),
    }
}


/// Extend `path` depth first until its last node meets the goal
/// The visited history of a branch is the path itself, so a dead end in one
/// branch never blocks a sibling branch.
/// On success `path` holds the full route and the total cost is returned,
/// on failure `path` is restored to its state on entry
fn explore<N, C, IT, NN, G>(path: &mut Vec<N>, cost: C, neighbors: &NN, goal_fn: &G) -> Option<C>
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

    for (neighbor, edge_cost) in neighbors(&node) {
        if path.contains(&neighbor) {
            continue;
        }

        path.push(neighbor);
        if let Some(total) = explore(path, cost + edge_cost, neighbors, goal_fn) {
            return Some(total);
        }
        path.pop();
    }

    None
}
