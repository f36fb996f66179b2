//! Built-in dataset: the road map of Romania.
//! Neighbor order is significant - depth-first searches and random walks follow it.

use super::{Distance, Location};

pub(super) const ROADS: &[(Location, &[(Location, Distance)])] = &[
    ("Arad", &[("Zerind", 75), ("Timisoara", 118), ("Sibiu", 140)]),
    ("Zerind", &[("Arad", 75), ("Oradea", 71)]),
    ("Oradea", &[("Zerind", 71), ("Sibiu", 151)]),
    ("Sibiu", &[("Arad", 140), ("Oradea", 151), ("Fagaras", 99), ("Rimnicu Vilcea", 80)]),
    ("Timisoara", &[("Arad", 118), ("Lugoj", 111)]),
    ("Lugoj", &[("Timisoara", 111), ("Mehadia", 70)]),
    ("Mehadia", &[("Lugoj", 70), ("Dobreta", 75)]),
    ("Dobreta", &[("Mehadia", 75), ("Craiova", 120)]),
    ("Craiova", &[("Dobreta", 120), ("Rimnicu Vilcea", 146), ("Pitesti", 138)]),
    ("Rimnicu Vilcea", &[("Sibiu", 80), ("Craiova", 146), ("Pitesti", 97)]),
    ("Fagaras", &[("Sibiu", 99), ("Bucharest", 211)]),
    ("Pitesti", &[("Rimnicu Vilcea", 97), ("Craiova", 138), ("Bucharest", 101)]),
    ("Bucharest", &[("Fagaras", 211), ("Pitesti", 101), ("Giurgiu", 90), ("Urziceni", 85)]),
    ("Giurgiu", &[("Bucharest", 90)]),
    ("Urziceni", &[("Bucharest", 85), ("Hirsova", 98), ("Vaslui", 142)]),
    ("Hirsova", &[("Urziceni", 98), ("Eforie", 86)]),
    ("Eforie", &[("Hirsova", 86)]),
    ("Vaslui", &[("Urziceni", 142), ("Iasi", 92)]),
    ("Iasi", &[("Vaslui", 92), ("Neamt", 87)]),
    ("Neamt", &[("Iasi", 87)]),
];

/// Straight line distance to Bucharest
pub(super) const ESTIMATES: &[(Location, Distance)] = &[
    ("Arad", 366), ("Bucharest", 0), ("Craiova", 160), ("Dobreta", 242),
    ("Eforie", 161), ("Fagaras", 176), ("Giurgiu", 77), ("Hirsova", 151),
    ("Iasi", 226), ("Lugoj", 244), ("Mehadia", 241), ("Neamt", 234),
    ("Oradea", 380), ("Pitesti", 100), ("Rimnicu Vilcea", 193), ("Sibiu", 253),
    ("Timisoara", 329), ("Urziceni", 80), ("Vaslui", 199), ("Zerind", 374),
];

/// Display coordinates (pixels)
pub(super) const COORDINATES: &[(Location, (f64, f64))] = &[
    ("Arad", (100.0, 150.0)),
    ("Zerind", (120.0, 100.0)),
    ("Oradea", (140.0, 80.0)),
    ("Sibiu", (200.0, 160.0)),
    ("Timisoara", (80.0, 200.0)),
    ("Lugoj", (120.0, 230.0)),
    ("Mehadia", (140.0, 250.0)),
    ("Dobreta", (150.0, 270.0)),
    ("Craiova", (200.0, 300.0)),
    ("Rimnicu Vilcea", (220.0, 200.0)),
    ("Fagaras", (250.0, 150.0)),
    ("Pitesti", (250.0, 250.0)),
    ("Bucharest", (300.0, 270.0)),
    ("Giurgiu", (320.0, 300.0)),
    ("Urziceni", (350.0, 250.0)),
    ("Hirsova", (400.0, 220.0)),
    ("Eforie", (420.0, 260.0)),
    ("Vaslui", (380.0, 200.0)),
    ("Iasi", (400.0, 180.0)),
    ("Neamt", (380.0, 160.0)),
];
