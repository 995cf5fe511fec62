use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::state::State;
use crate::{Minutes, routing::graph::RouteGraph};

/// Dijkstra's algorithm over the ride graph without path tracing.
/// Returns a map of node indices to the fastest travel time in minutes
pub(crate) fn dijkstra_path_weights(
    graph: &RouteGraph,
    start: NodeIndex,
    max_cost: Option<Minutes>,
) -> HashMap<NodeIndex, Minutes> {
    let mut distances: HashMap<NodeIndex, Minutes> = HashMap::new();
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().total_time;

            if max_cost.is_some_and(|max| next_cost > max) {
                continue;
            }

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    distances
}
