//! Augmenting-path maximum flow
//!
//! Build a `FlowNetwork` through `MaxFlowSolver::add_edge`, then query the
//! maximum flow or the residual graph. Two interchangeable search strategies
//! are provided: depth-first (Ford-Fulkerson) and breadth-first shortest path
//! (Edmonds-Karp). Any type implementing `AugmentingPathSearch` can be plugged
//! in as a third.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;
pub mod validation;

pub use crate::algorithm::graph::{MaxFlowAlgorithm, MaxFlowReport, MaxFlowSolver, SolverConfig};
pub use crate::algorithm::path_finding::{BreadthFirstSearch, DepthFirstSearch};
pub use crate::algorithm::state::{SolveStats, SolverPhase};
pub use crate::algorithm::traits::{
    AugmentingPath, AugmentingPathSearch, Capacity, EdgeId, Flow, FlowError, FlowResult, NodeId,
    INFINITE_CAPACITY,
};
pub use crate::data_structures::flow_network::{FlowEdge, FlowNetwork};
pub use crate::data_structures::visited::VisitedMarker;
