use crate::errors::PathPlannerError;
use crate::collections::FxIndexSet;
use super::Route;

use std::{collections::VecDeque, hash::Hash, fmt::Debug};
use log::debug;
use num_traits::Zero;


/// Breadth-First Search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Explores partial paths in order of edge count, so the route returned has the
/// fewest edges - its weighted cost is not necessarily the lowest
pub fn bfs<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> Result<Route<N, C>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // FIFO frontier of complete partial paths
    let mut queue: VecDeque<Route<N, C>> = VecDeque::from([Route::trivial(start, Zero::zero())]);

    // Expanded nodes
    let mut visited: FxIndexSet<N> = FxIndexSet::default();

    while let Some(route) = queue.pop_front() {

        let Some(node) = route.goal().cloned() else {
            continue;
        };

        // Goal check happens on dequeue, before expansion
        if goal_fn(&node) {
            debug!("bfs: reached {:?} after expanding {} nodes", node, visited.len());
            return Ok(route);
        }

        if visited.contains(&node) {
            continue;
        }

        for (neighbor, edge_cost) in neighbors(&node) {
            queue.push_back(route.extended(neighbor, edge_cost));
        }

        // Mark visited only once every extension is queued
        visited.insert(node);
    }

    debug!("bfs: frontier exhausted after expanding {} nodes", visited.len());
    Err(PathPlannerError::NoPathFound)
}
