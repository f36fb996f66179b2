use super::Route;

use std::cmp::Ordering;


/// Partial path waiting on a priority frontier
/// Ordering is reversed so BinaryHeap pops the lowest priority first
/// Ties fall back to the accumulated cost, then to the path itself (lexicographic)
/// which keeps every search deterministic
#[derive(Debug)]
pub(crate) struct Candidate<N, C> {
    pub priority: C, // cost for UCS, cost + h(n) for informed search
    pub route: Route<N, C>,
}

impl<N: Ord, C: Ord> Ord for Candidate<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
            .then_with(|| other.route.cost.cmp(&self.route.cost))
            .then_with(|| other.route.path.cmp(&self.route.path))
    }
}
impl<N: Ord, C: Ord> PartialOrd for Candidate<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N: Ord, C: Ord> PartialEq for Candidate<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<N: Ord, C: Ord> Eq for Candidate<N, C> {}
