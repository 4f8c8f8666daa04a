//! Depth-first augmenting path search (Ford-Fulkerson)
//!
//! Walks the residual network depth-first from the source and stops at the
//! first path that reaches the sink. No attempt is made to find a wider path.
//! The walk runs on an explicit stack of frames instead of the call stack, so
//! long paths cannot exhaust it, but it visits nodes and edges in exactly the
//! order the classic recursive formulation does:
//!
//! - a node is marked visited for the round when it is entered
//! - its outgoing edges are scanned in adjacency order
//! - an edge is followed iff it has remaining capacity and its target is
//!   unvisited this round
//! - a dead-end subtree stays marked and the parent resumes at its next edge
//!
//! # Complexity
//! - One round: O(V + E)
//! - Rounds: bounded by the max flow value for integer capacities
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use crate::algorithm::traits::{
    AugmentingPath, AugmentingPathSearch, EdgeId, Flow, NodeId, INFINITE_CAPACITY,
};
use crate::data_structures::flow_network::FlowNetwork;
use crate::data_structures::visited::VisitedMarker;

/// One level of the simulated recursion
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    /// Next adjacency position to scan
    cursor: usize,
    /// Bottleneck of the path from the source down to `node`
    inbound: Flow,
    /// Edge used to enter `node`, `None` for the source
    via: Option<EdgeId>,
}

/// Depth-first search strategy
#[derive(Debug, Default, Clone)]
pub struct DepthFirstSearch {
    stack: Vec<Frame>,
}

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AugmentingPathSearch for DepthFirstSearch {
    fn name(&self) -> &'static str {
        "Ford-Fulkerson (DFS)"
    }

    fn find_path(
        &mut self,
        network: &FlowNetwork,
        source: NodeId,
        sink: NodeId,
        visited: &mut VisitedMarker,
    ) -> Option<AugmentingPath> {
        self.stack.clear();
        visited.visit(source);
        self.stack.push(Frame {
            node: source,
            cursor: 0,
            inbound: INFINITE_CAPACITY,
            via: None,
        });

        while let Some(frame) = self.stack.last_mut() {
            if frame.node == sink {
                let bottleneck = frame.inbound;
                let edges = self.stack.iter().filter_map(|f| f.via).collect();
                return Some(AugmentingPath { edges, bottleneck });
            }

            let adjacent = network.adjacent(frame.node);
            let mut child = None;
            while frame.cursor < adjacent.len() {
                let id = adjacent[frame.cursor];
                frame.cursor += 1;

                let edge = network.edge(id);
                let remaining = edge.remaining_capacity();
                if remaining > 0 && !visited.is_visited(edge.to) {
                    child = Some(Frame {
                        node: edge.to,
                        cursor: 0,
                        inbound: frame.inbound.min(remaining),
                        via: Some(id),
                    });
                    break;
                }
            }

            match child {
                Some(child) => {
                    visited.visit(child.node);
                    self.stack.push(child);
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}
