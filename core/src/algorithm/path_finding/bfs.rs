//! Breadth-first shortest augmenting path search (Edmonds-Karp)
//!
//! Explores the residual network level by level from the source, recording
//! the edge through which each node was first reached. Once the sink is
//! reached the path is rebuilt by walking predecessor edges back to the
//! source, and the bottleneck is taken over that reconstructed path.
//!
//! Always choosing a shortest path bounds the number of augmentations by
//! O(VE), independent of capacity values.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;

use crate::algorithm::traits::{AugmentingPath, AugmentingPathSearch, EdgeId, NodeId, INFINITE_CAPACITY};
use crate::data_structures::flow_network::FlowNetwork;
use crate::data_structures::visited::VisitedMarker;

/// Breadth-first search strategy
#[derive(Debug, Default, Clone)]
pub struct BreadthFirstSearch {
    queue: VecDeque<NodeId>,
    /// Edge through which each node was reached; only meaningful for nodes
    /// visited in the current generation
    predecessor: Vec<Option<EdgeId>>,
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    fn reconstruct(&self, network: &FlowNetwork, source: NodeId, sink: NodeId) -> Option<AugmentingPath> {
        let mut edges = Vec::new();
        let mut bottleneck = INFINITE_CAPACITY;
        let mut node = sink;

        while node != source {
            let id = self.predecessor[node]?;
            let edge = network.edge(id);
            bottleneck = bottleneck.min(edge.remaining_capacity());
            edges.push(id);
            node = edge.from;
        }

        edges.reverse();
        Some(AugmentingPath { edges, bottleneck })
    }
}

impl AugmentingPathSearch for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "Edmonds-Karp (BFS)"
    }

    fn find_path(
        &mut self,
        network: &FlowNetwork,
        source: NodeId,
        sink: NodeId,
        visited: &mut VisitedMarker,
    ) -> Option<AugmentingPath> {
        if self.predecessor.len() != network.node_count() {
            self.predecessor = vec![None; network.node_count()];
        }
        self.queue.clear();

        visited.visit(source);
        self.queue.push_back(source);

        'search: while let Some(node) = self.queue.pop_front() {
            for &id in network.adjacent(node) {
                let edge = network.edge(id);
                if edge.remaining_capacity() > 0 && !visited.is_visited(edge.to) {
                    visited.visit(edge.to);
                    self.predecessor[edge.to] = Some(id);
                    if edge.to == sink {
                        break 'search;
                    }
                    self.queue.push_back(edge.to);
                }
            }
        }

        if !visited.is_visited(sink) {
            return None;
        }
        self.reconstruct(network, source, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(network: &FlowNetwork, source: NodeId, sink: NodeId) -> Option<AugmentingPath> {
        let mut marker = VisitedMarker::new(network.node_count());
        BreadthFirstSearch::new().find_path(network, source, sink, &mut marker)
    }

    #[test]
    fn test_prefers_shortest_path() {
        // The long route 0 -> 1 -> 2 -> 3 is scanned first, the direct edge last.
        let mut network = FlowNetwork::new(4);
        network.add_edge(0, 1, 9).unwrap();
        network.add_edge(1, 2, 9).unwrap();
        network.add_edge(2, 3, 9).unwrap();
        let direct = network.add_edge(0, 3, 2).unwrap();

        let path = search(&network, 0, 3).unwrap();
        assert_eq!(path.edges, vec![direct]);
        assert_eq!(path.bottleneck, 2);
    }

    #[test]
    fn test_bottleneck_is_path_minimum() {
        let mut network = FlowNetwork::new(4);
        let a = network.add_edge(0, 1, 8).unwrap();
        let b = network.add_edge(1, 2, 3).unwrap();
        let c = network.add_edge(2, 3, 6).unwrap();

        let path = search(&network, 0, 3).unwrap();
        assert_eq!(path.edges, vec![a, b, c]);
        assert_eq!(path.bottleneck, 3);
    }

    #[test]
    fn test_unreachable_sink() {
        let mut network = FlowNetwork::new(4);
        network.add_edge(0, 1, 8).unwrap();
        network.add_edge(2, 3, 8).unwrap();

        assert!(search(&network, 0, 3).is_none());
    }

    #[test]
    fn test_reuses_buffers_across_rounds() {
        let mut network = FlowNetwork::new(3);
        let a = network.add_edge(0, 1, 4).unwrap();
        let b = network.add_edge(1, 2, 4).unwrap();

        let mut marker = VisitedMarker::new(3);
        let mut bfs = BreadthFirstSearch::new();
        let first = bfs.find_path(&network, 0, 2, &mut marker).unwrap();
        assert_eq!(first.edges, vec![a, b]);

        network.augment(a, 4);
        network.augment(b, 4);
        marker.advance();
        assert!(bfs.find_path(&network, 0, 2, &mut marker).is_none());
    }
}
