use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{SaturatingAdd, Zero};
use rand::Rng;
use rand::seq::{IndexedRandom, index};


/// Candidate route in the population
/// The path may not reach the goal and may step between unconnected nodes,
/// both are reflected in the fitness instead of being rejected
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Individual<N, C> {
    pub path: Vec<N>,
    pub fitness: C, // lower is better
}

/// Result of a genetic run
#[derive(Clone, Debug)]
pub struct Evolution<N, C> {
    pub best: Individual<N, C>,
    pub converged: bool, // stopped early on a valid route to the goal
    pub generations: usize, // generations evaluated
}


/// Genetic Algorithm for path finding
/// https://en.wikipedia.org/wiki/Genetic_algorithm
///
/// The population starts as random walks from the start node. Each generation is
/// sorted by fitness, the best `elite_count` survive unchanged and the rest is
/// refilled with mutated crossover children of parents drawn from the best `parent_pool`.
/// The search stops as soon as the fittest individual is a real route to the goal.
///
/// Fitness is the summed edge cost, plus `penalty` for every step that is not an edge
/// and once more if the path does not end at the goal. Any individual scoring below
/// `penalty` is therefore a valid route.
///
/// Illustrative only - neither optimal nor complete within its generation budget.
#[derive(Clone, Debug)]
pub struct Genetic<C> {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64, // probability of mutating a child
    pub elite_count: usize, // individuals carried over unchanged
    pub parent_pool: usize, // parents are drawn from this many of the fittest
    pub penalty: C,
}

impl<C> Genetic<C>
where
    C: Zero + SaturatingAdd + Ord + Copy + Debug,
{

    /// Evolve routes from start towards a node meeting the goal criteria
    /// Always returns the fittest individual, even when it never reached the goal
    pub fn plan<N, IT, NN, G, R>(&self, start: N, neighbors: NN, goal_fn: G, rng: &mut R) -> Evolution<N, C>
    where
        N: Eq + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        G: Fn(&N) -> bool, // node qualifier for goal
        R: Rng + ?Sized,
        {

        let size = self.population_size.max(1);

        let mut population: Vec<Individual<N, C>> = (0..size)
            .map(|_| {
                let path = random_walk(start.clone(), &neighbors, &goal_fn, rng);
                self.evaluate(path, &neighbors, &goal_fn)
            })
            .collect();

        for generation in 0..self.generations {

            // stable sort, ties keep their order
            population.sort_by(|a, b| a.fitness.cmp(&b.fitness));

            let best = &population[0];
            trace!("genetic: generation {} best fitness {:?}", generation, best.fitness);

            if best.fitness < self.penalty && best.path.last().is_some_and(&goal_fn) {
                debug!("genetic: converged in generation {} with fitness {:?}", generation, best.fitness);
                return Evolution {
                    best: population.swap_remove(0),
                    converged: true,
                    generations: generation + 1,
                };
            }

            let mut next_generation: Vec<Individual<N, C>> = population
                .iter()
                .take(self.elite_count)
                .cloned()
                .collect();

            let pool = self.parent_pool.min(population.len());
            while next_generation.len() < size {
                let (first, second) = select_parents(pool, rng);
                let mut child = crossover(&population[first].path, &population[second].path, rng);
                self.mutate(&mut child, &neighbors, rng);
                next_generation.push(self.evaluate(child, &neighbors, &goal_fn));
            }

            population = next_generation;
        }

        population.sort_by(|a, b| a.fitness.cmp(&b.fitness));
        debug!("genetic: generation budget of {} spent, best fitness {:?}", self.generations, population[0].fitness);

        Evolution {
            best: population.swap_remove(0),
            converged: false,
            generations: self.generations,
        }
    }

    /// Score a path
    pub fn fitness<N, IT, NN, G>(&self, path: &[N], neighbors: NN, goal_fn: G) -> C
    where
        N: Eq,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>,
        G: Fn(&N) -> bool,
    {
        let mut total: C = Zero::zero();

        for step in path.windows(2) {
            let edge_cost = neighbors(&step[0])
                .into_iter()
                .find(|(neighbor, _)| *neighbor == step[1])
                .map(|(_, cost)| cost);

            total = match edge_cost {
                Some(cost) => total.saturating_add(&cost),
                None => total.saturating_add(&self.penalty), // not a road
            };
        }

        if !path.last().is_some_and(goal_fn) {
            total = total.saturating_add(&self.penalty);
        }

        total
    }

    fn evaluate<N, IT, NN, G>(&self, path: Vec<N>, neighbors: &NN, goal_fn: &G) -> Individual<N, C>
    where
        N: Eq,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>,
        G: Fn(&N) -> bool,
    {
        let fitness = self.fitness(&path, neighbors, goal_fn);
        Individual { path, fitness }
    }

    /// With probability `mutation_rate` replace one node after the start with a
    /// random neighbor of the node before it
    /// The rest of the path is left as is, even when it no longer connects
    fn mutate<N, IT, NN, R>(&self, path: &mut [N], neighbors: &NN, rng: &mut R)
    where
        N: Clone,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>,
        R: Rng + ?Sized,
    {
        if path.len() < 2 || rng.random::<f64>() >= self.mutation_rate {
            return;
        }

        let index = rng.random_range(1..path.len());
        let options: Vec<N> = neighbors(&path[index - 1]).into_iter().map(|(neighbor, _)| neighbor).collect();
        if let Some(replacement) = options.choose(rng) {
            path[index] = replacement.clone();
        }
    }
}


/// Random walk from start, never revisiting a node
/// Stops at the goal or when every neighbor of the tail is already on the path
fn random_walk<N, C, IT, NN, G, R>(start: N, neighbors: &NN, goal_fn: &G, rng: &mut R) -> Vec<N>
where
    N: Eq + Clone,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    G: Fn(&N) -> bool,
    R: Rng + ?Sized,
{
    let mut path = vec![start];

    while let Some(tail) = path.last() {
        if goal_fn(tail) {
            break;
        }

        let options: Vec<N> = neighbors(tail)
            .into_iter()
            .map(|(neighbor, _)| neighbor)
            .filter(|neighbor| !path.contains(neighbor))
            .collect();

        match options.choose(rng) {
            Some(next) => path.push(next.clone()),
            None => break, // stuck
        }
    }

    path
}


/// Single point crossover
/// The child takes parent1 up to a random cut in [1, shortest length - 1], then every
/// node of parent2 in order that it does not already contain.
/// Parents shorter than two nodes have no cut point, the child is a copy of parent1.
fn crossover<N, R>(parent1: &[N], parent2: &[N], rng: &mut R) -> Vec<N>
where
    N: Eq + Clone,
    R: Rng + ?Sized,
{
    let shortest = parent1.len().min(parent2.len());
    if shortest < 2 {
        return parent1.to_vec();
    }

    let cut = rng.random_range(1..shortest);
    let mut child = parent1[..cut].to_vec();
    for node in parent2 {
        if !child.contains(node) {
            child.push(node.clone());
        }
    }
    child
}


/// Two distinct indices below `pool`
fn select_parents<R: Rng + ?Sized>(pool: usize, rng: &mut R) -> (usize, usize) {
    if pool < 2 {
        return (0, 0);
    }
    let picks = index::sample(rng, pool, 2);
    (picks.index(0), picks.index(1))
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type Graph = HashMap<&'static str, Vec<(&'static str, u32)>>;

    fn create_neighbor_fn(graph: &Graph) -> impl Fn(&&'static str) -> Vec<(&'static str, u32)> + '_ {
        move |node| graph.get(node).cloned().unwrap_or_default()
    }

    fn genetic() -> Genetic<u32> {
        Genetic {
            population_size: 20,
            generations: 30,
            mutation_rate: 0.1,
            elite_count: 5,
            parent_pool: 10,
            penalty: 1000,
        }
    }

    // A - B - C - D with a detour A - E - D
    fn small_graph() -> Graph {
        HashMap::from([
            ("A", vec![("B", 1), ("E", 10)]),
            ("B", vec![("A", 1), ("C", 1)]),
            ("C", vec![("B", 1), ("D", 1)]),
            ("D", vec![("C", 1), ("E", 10)]),
            ("E", vec![("A", 10), ("D", 10)]),
        ])
    }

    #[test]
    fn test_fitness_penalties() {
        let graph = small_graph();
        let ga = genetic();
        let goal = |n: &&str| *n == "D";

        assert_eq!(ga.fitness(&["A", "B", "C", "D"], create_neighbor_fn(&graph), goal), 3);
        // stops short of the goal
        assert_eq!(ga.fitness(&["A", "B", "C"], create_neighbor_fn(&graph), goal), 1002);
        // B - D is not a road
        assert_eq!(ga.fitness(&["A", "B", "D"], create_neighbor_fn(&graph), goal), 1001);
        assert_eq!(ga.fitness(&["D"], create_neighbor_fn(&graph), goal), 0);
    }

    #[test]
    fn test_random_walk_stops_when_stuck() {
        let graph: Graph = HashMap::from([
            ("A", vec![("B", 1)]),
            ("B", vec![("A", 1)]),
            ("C", vec![]),
        ]);
        let mut rng = StdRng::seed_from_u64(7);

        let path = random_walk("A", &create_neighbor_fn(&graph), &|n: &&str| *n == "C", &mut rng);
        assert_eq!(path, vec!["A", "B"]);
    }

    #[test]
    fn test_random_walk_never_revisits() {
        let graph = small_graph();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let path = random_walk("A", &create_neighbor_fn(&graph), &|n: &&str| *n == "D", &mut rng);
            assert_eq!(path[0], "A");
            assert_eq!(path.last(), Some(&"D"));
            for (i, node) in path.iter().enumerate() {
                assert!(!path[i + 1..].contains(node), "{node} repeated in {path:?}");
            }
        }
    }

    #[test]
    fn test_crossover_keeps_prefix_and_skips_duplicates() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let child = crossover(&["A", "B", "C"], &["A", "D", "C"], &mut rng);
            assert!(
                child == vec!["A", "D", "C"] || child == vec!["A", "B", "D", "C"],
                "unexpected child {child:?}"
            );
        }
    }

    #[test]
    fn test_crossover_short_parent() {
        let mut rng = StdRng::seed_from_u64(3);
        let child = crossover(&["A", "B"], &["A"], &mut rng);
        assert_eq!(child, vec!["A", "B"]);
    }

    #[test]
    fn test_mutate_keeps_start() {
        let graph = small_graph();
        let neighbors = create_neighbor_fn(&graph);
        let mut rng = StdRng::seed_from_u64(5);

        let always = Genetic { mutation_rate: 1.0, ..genetic() };
        for _ in 0..20 {
            let mut path = vec!["A", "B", "C"];
            always.mutate(&mut path, &neighbors, &mut rng);
            assert_eq!(path.len(), 3);
            assert_eq!(path[0], "A");
            // the replaced node neighbors its predecessor
            assert!(
                path == vec!["A", "B", "C"] || path == vec!["A", "E", "C"] || path == vec!["A", "B", "A"],
                "unexpected mutation {path:?}"
            );
        }

        let never = Genetic { mutation_rate: 0.0, ..genetic() };
        let mut path = vec!["A", "B", "C"];
        never.mutate(&mut path, &neighbors, &mut rng);
        assert_eq!(path, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_genetic_start_is_goal() {
        let graph = small_graph();
        let mut rng = StdRng::seed_from_u64(1);

        let evolution = genetic().plan("A", create_neighbor_fn(&graph), |n| *n == "A", &mut rng);
        assert!(evolution.converged);
        assert_eq!(evolution.generations, 1);
        assert_eq!(evolution.best.path, vec!["A"]);
        assert_eq!(evolution.best.fitness, 0);
    }

    #[test]
    fn test_genetic_reaches_goal() {
        let graph = small_graph();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let evolution = genetic().plan("A", create_neighbor_fn(&graph), |n| *n == "D", &mut rng);

            assert!(evolution.converged);
            assert_eq!(evolution.best.path.first(), Some(&"A"));
            assert_eq!(evolution.best.path.last(), Some(&"D"));
            assert!(evolution.best.fitness == 3 || evolution.best.fitness == 20);
        }
    }

    #[test]
    fn test_genetic_unreachable_goal_returns_best_effort() {
        let graph: Graph = HashMap::from([
            ("A", vec![("B", 1)]),
            ("B", vec![("A", 1)]),
            ("Z", vec![]),
        ]);
        let mut rng = StdRng::seed_from_u64(9);

        let evolution = genetic().plan("A", create_neighbor_fn(&graph), |n| *n == "Z", &mut rng);
        assert!(!evolution.converged);
        assert_eq!(evolution.generations, 30);
        assert!(evolution.best.fitness >= 1000);
        assert_eq!(evolution.best.path[0], "A");
    }
}
