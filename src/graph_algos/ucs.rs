use crate::errors::PathPlannerError;
use crate::collections::FxIndexSet;
use super::frontier::Candidate;
use super::Route;

use std::{collections::BinaryHeap, hash::Hash, fmt::Debug};
use log::debug;
use num_traits::Zero;


/// Uniform-Cost Search, Dijkstra's algorithm over partial paths
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, expand the cheapest partial path until its end meets the goal criteria.
/// With non-negative edge costs the first route popped at the goal is the cheapest.
pub fn ucs<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> Result<Route<N, C>, PathPlannerError>
where
    N: Ord + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Nodes to visit - ordered cheapest first
    let mut frontier: BinaryHeap<Candidate<N, C>> = BinaryHeap::new();
    frontier.push(Candidate {
        priority: Zero::zero(),
        route: Route::trivial(start, Zero::zero()),
    });

    // Expanded nodes, cost is known - no longer need to visit
    let mut visited: FxIndexSet<N> = FxIndexSet::default();

    // Loop over each path to visit, removing the cheapest
    while let Some(Candidate { route, .. }) = frontier.pop() {

        let Some(node) = route.goal().cloned() else {
            continue;
        };

        // Check if we've reached the goal
        if goal_fn(&node) {
            debug!("ucs: reached {:?} at cost {:?} after expanding {} nodes", node, route.cost, visited.len());
            return Ok(route);
        }

        // A cheaper path to this node was already expanded
        if !visited.insert(node.clone()) {
            continue;
        }

        for (neighbor, edge_cost) in neighbors(&node) {
            let next = route.extended(neighbor, edge_cost);
            frontier.push(Candidate {
                priority: next.cost,
                route: next,
            });
        }
    }

    debug!("ucs: frontier exhausted after expanding {} nodes", visited.len());
    Err(PathPlannerError::NoPathFound)
}
