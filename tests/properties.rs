use rand::SeedableRng;
use rand::rngs::StdRng;

use wayfinder::{search, Algorithm, RoadMap, SearchOptions, SearchResponse};

fn run(algorithm: Algorithm, start: &str, goal: &str) -> SearchResponse {
    let mut rng = StdRng::seed_from_u64(0);
    search(RoadMap::romania(), algorithm, start, goal, &SearchOptions::default(), &mut rng)
}

fn pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    let map = RoadMap::romania();
    map.locations()
        .flat_map(move |start| map.locations().map(move |goal| (start, goal)))
        .filter(|(start, goal)| start != goal)
}

const DETERMINISTIC: [Algorithm; 7] = [
    Algorithm::Bfs,
    Algorithm::Dfs,
    Algorithm::Ucs,
    Algorithm::Dls,
    Algorithm::Ids,
    Algorithm::Astar,
    Algorithm::AoStar,
];

#[test]
fn test_complete_searches_always_find_a_route() {
    // the map is connected
    for (start, goal) in pairs() {
        for algorithm in [Algorithm::Bfs, Algorithm::Ucs, Algorithm::Ids, Algorithm::Astar] {
            let response = run(algorithm, start, goal);
            assert!(response.is_found(), "{algorithm} found no route {start} -> {goal}");
            assert_eq!(response.path.first().map(String::as_str), Some(start));
            assert_eq!(response.path.last().map(String::as_str), Some(goal));
        }
    }
}

#[test]
fn test_reported_cost_matches_path() {
    let map = RoadMap::romania();
    for (start, goal) in pairs() {
        for algorithm in DETERMINISTIC {
            let response = run(algorithm, start, goal);
            if response.is_found() {
                assert_eq!(map.path_cost(&response.path), response.cost, "{algorithm} {start} -> {goal}");
            } else {
                assert_eq!(response.cost, None);
            }
        }
    }
}

#[test]
fn test_uniform_cost_is_cheapest() {
    for (start, goal) in pairs() {
        let optimal = run(Algorithm::Ucs, start, goal).cost.unwrap();
        for algorithm in DETERMINISTIC {
            if let Some(cost) = run(algorithm, start, goal).cost {
                assert!(optimal <= cost, "{algorithm} beat ucs on {start} -> {goal}");
            }
        }
    }
}

#[test]
fn test_informed_search_is_optimal() {
    // the estimates are straight line distances to Bucharest, so optimality is only
    // guaranteed for that goal, but on this map it also holds for every other pair
    for (start, goal) in pairs() {
        let optimal = run(Algorithm::Ucs, start, goal).cost;
        assert_eq!(run(Algorithm::Astar, start, goal).cost, optimal, "astar {start} -> {goal}");
        assert_eq!(run(Algorithm::AoStar, start, goal).cost, optimal, "ao_star {start} -> {goal}");

        let astar = run(Algorithm::Astar, start, goal).cost.unwrap();
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dls, Algorithm::Ids] {
            if let Some(cost) = run(algorithm, start, goal).cost {
                assert!(astar <= cost, "{algorithm} beat astar on {start} -> {goal}");
            }
        }
    }
}

#[test]
fn test_breadth_first_and_iterative_deepening_agree_on_edges() {
    for (start, goal) in pairs() {
        let bfs = run(Algorithm::Bfs, start, goal);
        let ids = run(Algorithm::Ids, start, goal);
        assert_eq!(bfs.edge_count(), ids.edge_count(), "{start} -> {goal}");
    }
}

#[test]
fn test_deterministic_searches_are_idempotent() {
    for (start, goal) in pairs() {
        for algorithm in DETERMINISTIC {
            assert_eq!(run(algorithm, start, goal), run(algorithm, start, goal));
        }
    }
}

#[test]
fn test_start_equals_goal_is_trivial() {
    for location in RoadMap::romania().locations() {
        for algorithm in Algorithm::ALL {
            let response = run(algorithm, location, location);
            assert_eq!(response.path, vec![location]);
            assert_eq!(response.cost, Some(0));
        }
    }
}

#[test]
fn test_depth_limit_too_shallow() {
    let mut rng = StdRng::seed_from_u64(0);
    let options = SearchOptions { depth_limit: 3, ..Default::default() };
    let response = search(RoadMap::romania(), Algorithm::Dls, "Neamt", "Arad", &options, &mut rng);
    assert_eq!(response, SearchResponse::no_path());
}

#[test]
fn test_genetic_arad_to_bucharest() {
    let map = RoadMap::romania();
    let options = SearchOptions::default();
    let mut near_optimal = 0;

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let response = search(map, Algorithm::Genetic, "Arad", "Bucharest", &options, &mut rng);

        assert_eq!(response.path.first().map(String::as_str), Some("Arad"));
        assert_eq!(response.path.last().map(String::as_str), Some("Bucharest"), "seed {seed}");

        // a real route, so never cheaper than the optimum
        let cost = response.cost.unwrap();
        assert_eq!(map.path_cost(&response.path), Some(cost), "seed {seed}");
        assert!(cost >= 418);

        // 450 is the second best route, through Fagaras
        if cost <= 450 {
            near_optimal += 1;
        }
    }

    assert!(near_optimal >= 90, "only {near_optimal} of 100 runs within 450");
}
