//! Flow network representation with paired residual edges
//!
//! Edges are stored in a single arena. Every call to `add_edge` pushes the
//! forward edge and its zero-capacity residual pair next to each other, so a
//! pair always occupies ids `2k` and `2k + 1`. Each edge records the id of its
//! pair, and per-node adjacency lists hold edge ids in insertion order.
//!
//! The network also keeps the total capacity entering and leaving each node.
//! `add_edge` rejects an edge that would push either total past `Flow::MAX`,
//! which bounds every flow sum the solver computes (the flow value, per-node
//! net outflow) to the `Flow` range.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Capacity, EdgeId, Flow, FlowError, FlowResult, NodeId};

/// Flow edge representation with residual capacity tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Source vertex
    pub from: NodeId,
    /// Target vertex
    pub to: NodeId,
    /// Original edge capacity, zero for residual edges
    pub capacity: Capacity,
    /// Current flow through edge
    pub flow: Flow,
    /// Id of the paired edge running the opposite way
    pub residual: EdgeId,
}

impl FlowEdge {
    /// Create new flow edge with specified capacity
    fn new(from: NodeId, to: NodeId, capacity: Capacity, residual: EdgeId) -> Self {
        Self {
            from,
            to,
            capacity,
            flow: 0,
            residual,
        }
    }

    /// Whether this is the reverse half of a pair
    pub fn is_residual(&self) -> bool {
        self.capacity == 0
    }

    /// Capacity still available for augmentation
    pub fn remaining_capacity(&self) -> Capacity {
        self.capacity - self.flow
    }
}

/// Flow network with residual graph
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    /// Adjacency list of outgoing edge ids per vertex
    adjacency: Vec<Vec<EdgeId>>,
    /// All edges in the network, real and residual
    edges: Vec<FlowEdge>,
    /// Sum of real edge capacities leaving each vertex
    outgoing_capacity: Vec<Capacity>,
    /// Sum of real edge capacities entering each vertex
    incoming_capacity: Vec<Capacity>,
}

impl FlowNetwork {
    /// Create new flow network with specified vertex count
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edges: Vec::new(),
            outgoing_capacity: vec![0; node_count],
            incoming_capacity: vec![0; node_count],
        }
    }

    /// Number of vertices, including source and sink
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of real edges added by the caller
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Add edge to flow network together with its residual pair
    ///
    /// Returns the id of the forward edge. Fails with `InvalidArgument` if
    /// the capacity is not positive, a node is out of range, or the total
    /// capacity leaving `from` or entering `to` would overflow `Flow`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: Capacity) -> FlowResult<EdgeId> {
        if capacity <= 0 {
            return Err(FlowError::InvalidArgument(format!(
                "forward edge capacity must be positive, got {}",
                capacity
            )));
        }
        self.check_node(from)?;
        self.check_node(to)?;

        let outgoing = self.outgoing_capacity[from].checked_add(capacity).ok_or_else(|| {
            FlowError::InvalidArgument(format!("total capacity leaving node {} overflows", from))
        })?;
        let incoming = self.incoming_capacity[to].checked_add(capacity).ok_or_else(|| {
            FlowError::InvalidArgument(format!("total capacity entering node {} overflows", to))
        })?;
        self.outgoing_capacity[from] = outgoing;
        self.incoming_capacity[to] = incoming;

        let forward = self.edges.len();
        let reverse = forward + 1;

        self.edges.push(FlowEdge::new(from, to, capacity, reverse));
        self.edges.push(FlowEdge::new(to, from, 0, forward));

        self.adjacency[from].push(forward);
        self.adjacency[to].push(reverse);

        debug!("added edge {} -> {} (capacity {}) as #{}", from, to, capacity, forward);
        Ok(forward)
    }

    /// Fails with `InvalidArgument` unless `node` is in range
    pub fn check_node(&self, node: NodeId) -> FlowResult<()> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(FlowError::InvalidArgument(format!(
                "node index {} out of range for {} nodes",
                node,
                self.node_count()
            )))
        }
    }

    /// Edge by id
    ///
    /// # Panics
    /// If `id` was not returned by this network.
    pub fn edge(&self, id: EdgeId) -> &FlowEdge {
        &self.edges[id]
    }

    #[cfg(test)]
    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> &mut FlowEdge {
        &mut self.edges[id]
    }

    /// Paired reverse edge of `id`
    pub fn residual_of(&self, id: EdgeId) -> &FlowEdge {
        &self.edges[self.edges[id].residual]
    }

    /// Outgoing edge ids of `node`, in insertion order
    pub fn adjacent(&self, node: NodeId) -> &[EdgeId] {
        &self.adjacency[node]
    }

    /// Outgoing edges of `node`, real and residual, in insertion order
    pub fn edges_from(&self, node: NodeId) -> impl Iterator<Item = &FlowEdge> + '_ {
        self.adjacency[node].iter().map(move |&id| &self.edges[id])
    }

    /// Every edge of the network in arena order
    pub fn edges(&self) -> impl Iterator<Item = &FlowEdge> + '_ {
        self.edges.iter()
    }

    /// Push `bottleneck` units through edge `id`
    ///
    /// The paired residual edge loses the same amount, which exposes
    /// `bottleneck` units of reverse capacity.
    pub(crate) fn augment(&mut self, id: EdgeId, bottleneck: Flow) {
        debug_assert!(bottleneck > 0, "augmentation requires a positive bottleneck");
        debug_assert!(
            bottleneck <= self.edges[id].remaining_capacity(),
            "augmentation exceeds remaining capacity"
        );
        let residual = self.edges[id].residual;
        self.edges[id].flow += bottleneck;
        self.edges[residual].flow -= bottleneck;
    }

    /// Net flow leaving `node` over real edges
    ///
    /// Residual edges in the adjacency list carry the negated flow of the
    /// incoming real edge they mirror, so a plain sum is outflow minus inflow.
    pub fn net_outflow(&self, node: NodeId) -> Flow {
        self.edges_from(node).map(|edge| edge.flow).sum()
    }
}
