use std::ops::Add;


/// Path found by a search together with its total edge cost
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<N, C> {
    pub path: Vec<N>, // start to goal, inclusive
    pub cost: C,
}

impl<N, C> Route<N, C> {

    /// Route consisting of the start node alone
    pub fn trivial(start: N, zero: C) -> Self {
        Self { path: vec![start], cost: zero }
    }

    /// Number of edges traversed
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn goal(&self) -> Option<&N> {
        self.path.last()
    }
}

impl<N: Clone, C: Add<Output = C> + Copy> Route<N, C> {

    /// Copy of this route extended by one edge
    pub(crate) fn extended(&self, next: N, edge_cost: C) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);
        Self { path, cost: self.cost + edge_cost }
    }
}
