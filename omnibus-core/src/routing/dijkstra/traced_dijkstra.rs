use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use super::state::State;
use crate::{Minutes, routing::graph::RouteGraph};

/// Cheapest path found by [`dijkstra_path`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TracedPath {
    pub(crate) cost: Minutes,
    /// Edges in traversal order
    pub(crate) edges: Vec<EdgeIndex>,
}

/// Dijkstra's algorithm from `start` to `target` over ride edges.
///
/// Returns `None` if `target` is unreachable. A label is replaced only on
/// strict improvement, so among equal-cost paths the first one relaxed wins.
pub(crate) fn dijkstra_path(
    graph: &RouteGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<TracedPath> {
    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, Minutes> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, EdgeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut settled = FixedBitSet::with_capacity(graph.node_count());
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Stale heap entry
        if settled.put(node.index()) {
            continue;
        }
        if node == target {
            break;
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            if settled.contains(next.index()) {
                continue;
            }
            let next_cost = cost + edge.weight().total_time;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, edge.id());
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, edge.id());
                    }
                }
            }
        }
    }

    let cost = *distances.get(&target)?;

    // Follow predecessors backward from target to start
    let mut edges = Vec::new();
    let mut current = target;
    while current != start {
        let edge = *predecessors.get(&current)?;
        edges.push(edge);
        current = graph.edge_endpoints(edge)?.0;
    }
    edges.reverse();

    Some(TracedPath { cost, edges })
}
