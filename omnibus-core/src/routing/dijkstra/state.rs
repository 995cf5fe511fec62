use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

use crate::Minutes;

#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) cost: Minutes,
    pub(super) node: NodeIndex,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

// Min-heap by cost, equal costs pop the lower node index first
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn heap_pops_cheapest_then_lowest_node() {
        let mut heap = BinaryHeap::new();
        for (cost, node) in [(7.5, 0), (2.0, 3), (2.0, 1), (11.0, 2)] {
            heap.push(State {
                cost,
                node: NodeIndex::new(node),
            });
        }

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|state| state.node.index())
            .collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }
}
