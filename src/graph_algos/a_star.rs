use crate::errors::PathPlannerError;
use crate::collections::FxIndexSet;
use super::frontier::Candidate;
use super::Route;

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
};
use log::debug;
use num_traits::{SaturatingAdd, Zero};



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub struct AStar {}

impl AStar {

    /// From start Node, traverse through graph until node meets goal criteria
    /// Partial paths are expanded in order of cost + h(end of path)
    /// The route is the cheapest one when:
    /// 1. The heuristic function is admissible (never overestimates the true cost to reach the goal)
    /// 2. The heuristic function is consistent for the goal being searched
    /// Neither is checked here
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<Route<N, C>, PathPlannerError>
    where
        N: Ord + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + SaturatingAdd + Ord + Copy + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        informed_search("astar", start, neighbors, heuristic_fn, goal_fn, false)
    }
}


/// Simplified AO* Algorithm
///
/// Not an AND-OR graph search: there are no AND nodes and no solution graph cost
/// propagation. This is A* with one difference - neighbors that were already
/// expanded are never pushed back onto the frontier.
pub struct AoStar {}

impl AoStar {

    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<Route<N, C>, PathPlannerError>
    where
        N: Ord + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        H: Fn(&N) -> C,
        IT: IntoIterator<Item = (N, C)>,
        C: Zero + SaturatingAdd + Ord + Copy + Debug,
        G: Fn(&N) -> bool,
        {

        informed_search("ao_star", start, neighbors, heuristic_fn, goal_fn, true)
    }
}


/// Best first search over partial paths ordered by f = g + h
/// `prune_visited` drops neighbors that are already expanded before they reach the frontier
fn informed_search<N, C, IT, NN, H, G>(
    name: &str,
    start: N,
    neighbors: NN,
    heuristic_fn: H,
    goal_fn: G,
    prune_visited: bool,
) -> Result<Route<N, C>, PathPlannerError>
where
    N: Ord + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    H: Fn(&N) -> C,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + SaturatingAdd + Ord + Copy + Debug,
    G: Fn(&N) -> bool,
{
    // Open List
    // Partial paths that need to be evaluated, implemented as priority queue
    // Sorting is done by f_cost (cost + heuristic)
    let mut open_list: BinaryHeap<Candidate<N, C>> = BinaryHeap::new();

    // Closed List
    // Expanded nodes, avoids re-evaluating nodes
    let mut closed_list: FxIndexSet<N> = FxIndexSet::default();

    open_list.push(Candidate {
        priority: heuristic_fn(&start),
        route: Route::trivial(start, Zero::zero()),
    });

    while let Some(Candidate { route, .. }) = open_list.pop() {

        let Some(node) = route.goal().cloned() else {
            continue;
        };

        // Check if we've reached the goal
        if goal_fn(&node) {
            debug!("{}: reached {:?} at cost {:?} after expanding {} nodes", name, node, route.cost, closed_list.len());
            return Ok(route);
        }

        if !closed_list.insert(node.clone()) {
            continue;
        }

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(&node) {

            if prune_visited && closed_list.contains(&neighbor) {
                continue;
            }

            // calculate heuristic cost
            // saturating so an "infinite" estimate stays comparable instead of overflowing
            let h_cost: C = heuristic_fn(&neighbor);
            let next = route.extended(neighbor, edge_cost);

            open_list.push(Candidate {
                priority: next.cost.saturating_add(&h_cost),
                route: next,
            });
        }
    }

    debug!("{}: open list exhausted after expanding {} nodes", name, closed_list.len());
    Err(PathPlannerError::NoPathFound)
}
