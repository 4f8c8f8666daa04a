//! Core type and trait definitions for the maximum flow solver
//!
//! This module establishes the vocabulary shared by every component: node and
//! edge identifiers, the numeric flow domain, the error taxonomy, and the
//! `AugmentingPathSearch` trait through which search strategies plug into the
//! solver orchestrator.
//!
//! # Key Design Principles
//! - Strategies are selected at construction time and interchangeable
//! - Strategies read the residual network but never mutate flow
//! - Precondition failures surface at the offending call, never at solve time
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::Debug;

use crate::data_structures::flow_network::FlowNetwork;
use crate::data_structures::visited::VisitedMarker;
use crate::validation::correctness::InvariantViolation;

/// Node identifier, an index in `[0, node_count)`
pub type NodeId = usize;

/// Edge identifier, an index into the network's edge arena
pub type EdgeId = usize;

/// Edge capacity type
pub type Capacity = i64;

/// Flow value type
pub type Flow = i64;

/// Capacity carried into the source by a search round.
///
/// Kept well below `Capacity::MAX` so that `min()` against finite edge
/// capacities can never overflow.
pub const INFINITE_CAPACITY: Capacity = Capacity::MAX / 2;

/// Error types for flow network construction and solving
#[derive(Debug, Clone, thiserror::Error)]
pub enum FlowError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Augmenting round limit of {limit} exceeded before the flow was maximal")]
    RoundLimitExceeded { limit: usize },

    #[error("Invalid network state: {0}")]
    InvalidState(#[from] InvariantViolation),
}

/// Result type for flow operations
pub type FlowResult<T> = Result<T, FlowError>;

/// One augmenting path discovered by a search strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    /// Path edges ordered from source to sink
    pub edges: Vec<EdgeId>,
    /// Minimum remaining capacity along the path
    pub bottleneck: Flow,
}

impl AugmentingPath {
    /// Number of edges on the path
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Augmenting-path search strategy
///
/// # Contract
/// - Returns a path from `source` to `sink` along edges with strictly
///   positive remaining capacity, or `None` when no such path exists
/// - The returned bottleneck is the minimum remaining capacity on the path
/// - Nodes are marked in `visited` for the current generation only; the
///   caller advances the generation between rounds
/// - Flow is never mutated; augmentation belongs to the orchestrator
pub trait AugmentingPathSearch: Debug {
    /// Returns the strategy's descriptive name
    fn name(&self) -> &'static str;

    /// Finds one augmenting path in the current residual state
    fn find_path(
        &mut self,
        network: &FlowNetwork,
        source: NodeId,
        sink: NodeId,
        visited: &mut VisitedMarker,
    ) -> Option<AugmentingPath>;
}

impl<S: AugmentingPathSearch + ?Sized> AugmentingPathSearch for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn find_path(
        &mut self,
        network: &FlowNetwork,
        source: NodeId,
        sink: NodeId,
        visited: &mut VisitedMarker,
    ) -> Option<AugmentingPath> {
        (**self).find_path(network, source, sink, visited)
    }
}
