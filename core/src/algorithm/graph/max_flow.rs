//! Maximum Flow Solver
//!
//! This module drives augmenting-path maximum flow computation. A solver owns
//! one `FlowNetwork` and one search strategy chosen at construction time. The
//! first query runs the augmenting loop to completion and caches the result;
//! every later query returns the cached value without recomputation.
//!
//! # Algorithm Variants
//! - **Ford-Fulkerson**: depth-first search, first path found wins
//! - **Edmonds-Karp**: breadth-first search, shortest path first, O(VE)
//!   augmentations
//!
//! Both variants always produce the same maximum flow value. They may
//! distribute it differently across parallel edges.
//!
//! # Example
//! ```
//! use maxflow_core::algorithm::graph::MaxFlowSolver;
//!
//! let mut solver = MaxFlowSolver::new(4, 0, 3).unwrap();
//! solver.add_edge(0, 1, 3).unwrap();
//! solver.add_edge(0, 2, 2).unwrap();
//! solver.add_edge(1, 3, 2).unwrap();
//! solver.add_edge(2, 3, 3).unwrap();
//! assert_eq!(solver.max_flow().unwrap(), 4);
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;
use std::str::FromStr;

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::algorithm::path_finding::{BreadthFirstSearch, DepthFirstSearch};
use crate::algorithm::state::{SolveStats, SolverPhase};
use crate::algorithm::traits::{
    AugmentingPathSearch, Capacity, EdgeId, Flow, FlowError, FlowResult, NodeId,
};
use crate::data_structures::flow_network::{FlowEdge, FlowNetwork};
use crate::data_structures::visited::VisitedMarker;
use crate::validation::correctness;

/// Maximum flow algorithm variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaxFlowAlgorithm {
    /// Ford-Fulkerson with DFS path finding
    #[default]
    FordFulkerson,
    /// Edmonds-Karp with BFS shortest augmenting paths
    EdmondsKarp,
}

impl MaxFlowAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            MaxFlowAlgorithm::FordFulkerson => "Ford-Fulkerson",
            MaxFlowAlgorithm::EdmondsKarp => "Edmonds-Karp",
        }
    }

    /// Fresh search strategy implementing this variant
    pub fn strategy(self) -> Box<dyn AugmentingPathSearch> {
        match self {
            MaxFlowAlgorithm::FordFulkerson => Box::new(DepthFirstSearch::new()),
            MaxFlowAlgorithm::EdmondsKarp => Box::new(BreadthFirstSearch::new()),
        }
    }
}

impl fmt::Display for MaxFlowAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaxFlowAlgorithm {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "ford-fulkerson" | "fordfulkerson" => Ok(MaxFlowAlgorithm::FordFulkerson),
            "bfs" | "edmonds-karp" | "edmondskarp" => Ok(MaxFlowAlgorithm::EdmondsKarp),
            other => Err(FlowError::InvalidArgument(format!(
                "unknown max flow algorithm '{}'",
                other
            ))),
        }
    }
}

/// Configuration for maximum flow solving
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Augmenting-path search strategy
    pub algorithm: MaxFlowAlgorithm,

    /// Maximum number of augmenting rounds, unbounded when `None`
    pub round_limit: Option<usize>,

    /// Run the correctness checks after solving
    pub verify: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            algorithm: MaxFlowAlgorithm::FordFulkerson,
            round_limit: None,
            verify: false,
        }
    }
}

/// Serializable summary of a solved network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlowReport {
    /// Name of the strategy that produced the flow
    pub strategy: String,
    pub node_count: usize,
    pub source: NodeId,
    pub sink: NodeId,
    /// Maximum flow value
    pub max_flow: Flow,
    pub stats: SolveStats,
    /// Every edge of the residual graph, real and residual
    pub edges: Vec<FlowEdge>,
}

/// Maximum flow solver over a single source/sink pair
#[derive(Debug)]
pub struct MaxFlowSolver<S: AugmentingPathSearch = Box<dyn AugmentingPathSearch>> {
    network: FlowNetwork,
    source: NodeId,
    sink: NodeId,
    strategy: S,
    visited: VisitedMarker,
    phase: SolverPhase,
    max_flow: Flow,
    stats: SolveStats,
    round_limit: Option<usize>,
    verify: bool,
    /// Error every query repeats once the solve was aborted
    failure: Option<FlowError>,
}

impl MaxFlowSolver {
    /// Create a solver using the default configuration (depth-first search)
    ///
    /// # Arguments
    /// * `node_count` - number of nodes, including source and sink
    /// * `source` - source index, `0 <= source < node_count`
    /// * `sink` - sink index, `0 <= sink < node_count` and `sink != source`
    pub fn new(node_count: usize, source: NodeId, sink: NodeId) -> FlowResult<Self> {
        Self::with_config(node_count, source, sink, &SolverConfig::default())
    }

    /// Create a solver whose strategy and limits come from `config`
    pub fn with_config(
        node_count: usize,
        source: NodeId,
        sink: NodeId,
        config: &SolverConfig,
    ) -> FlowResult<Self> {
        let mut solver = Self::with_strategy(node_count, source, sink, config.algorithm.strategy())?;
        solver.round_limit = config.round_limit;
        solver.verify = config.verify;
        Ok(solver)
    }
}

impl<S: AugmentingPathSearch> MaxFlowSolver<S> {
    /// Create a solver driving a caller-supplied search strategy
    pub fn with_strategy(node_count: usize, source: NodeId, sink: NodeId, strategy: S) -> FlowResult<Self> {
        if node_count == 0 {
            return Err(FlowError::InvalidArgument("network needs at least one node".to_string()));
        }
        let network = FlowNetwork::new(node_count);
        network.check_node(source)?;
        network.check_node(sink)?;
        if source == sink {
            return Err(FlowError::InvalidArgument(format!(
                "source and sink must differ, both are {}",
                source
            )));
        }

        Ok(Self {
            network,
            source,
            sink,
            strategy,
            visited: VisitedMarker::new(node_count),
            phase: SolverPhase::Unsolved,
            max_flow: 0,
            stats: SolveStats::default(),
            round_limit: None,
            verify: false,
            failure: None,
        })
    }

    /// Cap the number of augmenting rounds
    pub fn with_round_limit(mut self, round_limit: Option<usize>) -> Self {
        self.round_limit = round_limit;
        self
    }

    /// Add a directed edge (and its residual pair) to the network
    ///
    /// Returns the id of the forward edge. Fails with `InvalidArgument` for a
    /// non-positive capacity, an out-of-range endpoint, a capacity total at
    /// either endpoint that would overflow `Flow`, or once solving began.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: Capacity) -> FlowResult<EdgeId> {
        if self.phase.is_terminal() {
            return Err(FlowError::InvalidArgument(
                "edges cannot be added after the network has been solved".to_string(),
            ));
        }
        self.network.add_edge(from, to, capacity)
    }

    /// Maximum flow from source to sink, solving on first call
    pub fn max_flow(&mut self) -> FlowResult<Flow> {
        self.solve()?;
        Ok(self.max_flow)
    }

    /// Residual graph after solving, solving on first call
    pub fn residual_graph(&mut self) -> FlowResult<&FlowNetwork> {
        self.solve()?;
        Ok(&self.network)
    }

    /// Serializable summary of the solved network
    pub fn report(&mut self) -> FlowResult<MaxFlowReport> {
        self.solve()?;
        Ok(MaxFlowReport {
            strategy: self.strategy.name().to_string(),
            node_count: self.network.node_count(),
            source: self.source,
            sink: self.sink,
            max_flow: self.max_flow,
            stats: self.stats.clone(),
            edges: self.network.edges().cloned().collect(),
        })
    }

    /// Network in its current state, without triggering a solve
    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn sink(&self) -> NodeId {
        self.sink
    }

    pub fn phase(&self) -> SolverPhase {
        self.phase
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Run the augmenting loop unless a terminal phase was already reached
    pub fn solve(&mut self) -> FlowResult<()> {
        match self.phase {
            SolverPhase::Solved => return Ok(()),
            SolverPhase::Aborted => {
                let failure = self
                    .failure
                    .clone()
                    .unwrap_or(FlowError::RoundLimitExceeded { limit: self.stats.rounds });
                return Err(failure);
            }
            SolverPhase::Unsolved => {}
        }

        debug!(
            "solving {} nodes / {} edges from {} to {} with {}",
            self.network.node_count(),
            self.network.edge_count(),
            self.source,
            self.sink,
            self.strategy.name()
        );

        while let Some(path) =
            self.strategy.find_path(&self.network, self.source, self.sink, &mut self.visited)
        {
            if path.bottleneck <= 0 {
                break;
            }
            if let Some(limit) = self.round_limit {
                if self.stats.rounds >= limit {
                    warn!(
                        "{} aborted after {} rounds with partial flow {}",
                        self.strategy.name(),
                        limit,
                        self.max_flow
                    );
                    return Err(self.abort(FlowError::RoundLimitExceeded { limit }));
                }
            }

            // Sink side first, the order a recursive search unwinds in
            for &id in path.edges.iter().rev() {
                self.network.augment(id, path.bottleneck);
            }
            self.max_flow += path.bottleneck;
            self.stats.record(&path);
            trace!(
                "round {}: {} edges, bottleneck {}",
                self.stats.rounds,
                path.len(),
                path.bottleneck
            );

            self.visited.advance();
        }

        if self.verify {
            if let Err(violation) =
                correctness::verify(&self.network, self.source, self.sink, self.max_flow)
            {
                warn!("post-solve verification failed: {}", violation);
                return Err(self.abort(FlowError::InvalidState(violation)));
            }
        }

        self.phase = SolverPhase::Solved;
        info!(
            "{} finished: max flow {} in {} rounds",
            self.strategy.name(),
            self.max_flow,
            self.stats.rounds
        );
        Ok(())
    }

    fn abort(&mut self, failure: FlowError) -> FlowError {
        self.phase = SolverPhase::Aborted;
        self.failure = Some(failure.clone());
        failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::traits::AugmentingPath;

    const SOURCE: NodeId = 6;
    const SINK: NodeId = 7;

    const SCENARIO_EDGES: [(NodeId, NodeId, Capacity); 14] = [
        (SOURCE, 0, 13),
        (SOURCE, 1, 10),
        (SOURCE, 2, 10),
        (0, 3, 24),
        (1, 2, 15),
        (2, 5, 15),
        (1, 0, 5),
        (3, 4, 1),
        (4, 5, 6),
        (1, 2, 15),
        (1, 5, 7),
        (3, SINK, 9),
        (4, SINK, 13),
        (5, SINK, 16),
    ];

    fn build(
        algorithm: MaxFlowAlgorithm,
        node_count: usize,
        source: NodeId,
        sink: NodeId,
        edges: &[(NodeId, NodeId, Capacity)],
    ) -> MaxFlowSolver {
        let config = SolverConfig { algorithm, verify: true, ..SolverConfig::default() };
        let mut solver = MaxFlowSolver::with_config(node_count, source, sink, &config).unwrap();
        for &(from, to, capacity) in edges {
            solver.add_edge(from, to, capacity).unwrap();
        }
        solver
    }

    fn all_algorithms() -> [MaxFlowAlgorithm; 2] {
        [MaxFlowAlgorithm::FordFulkerson, MaxFlowAlgorithm::EdmondsKarp]
    }

    #[test]
    fn test_reference_scenario() {
        for algorithm in all_algorithms() {
            let mut solver = build(algorithm, 8, SOURCE, SINK, &SCENARIO_EDGES);
            assert_eq!(solver.max_flow().unwrap(), 26, "{}", algorithm);
            assert_eq!(solver.phase(), SolverPhase::Solved);

            let network = solver.residual_graph().unwrap();
            assert_eq!(correctness::verify(network, SOURCE, SINK, 26), Ok(()));
        }
    }

    #[test]
    fn test_single_edge() {
        for algorithm in all_algorithms() {
            let mut solver = build(algorithm, 2, 0, 1, &[(0, 1, 5)]);
            assert_eq!(solver.max_flow().unwrap(), 5);

            let network = solver.residual_graph().unwrap();
            let edge = network.edge(0);
            assert_eq!(edge.flow, 5);
            assert_eq!(edge.remaining_capacity(), 0);
            assert_eq!(network.residual_of(0).flow, -5);
        }
    }

    #[test]
    fn test_disconnected_source_and_sink() {
        for algorithm in all_algorithms() {
            let mut solver = build(algorithm, 4, 0, 3, &[(0, 1, 4), (2, 3, 4)]);
            assert_eq!(solver.max_flow().unwrap(), 0);
            assert_eq!(solver.stats().rounds, 0);
            assert!(solver.residual_graph().unwrap().edges().all(|e| e.flow == 0));
        }
    }

    #[test]
    fn test_no_edges_at_all() {
        let mut solver = MaxFlowSolver::new(2, 0, 1).unwrap();
        assert_eq!(solver.max_flow().unwrap(), 0);
    }

    #[test]
    fn test_queries_are_memoized() {
        let mut solver = build(MaxFlowAlgorithm::FordFulkerson, 8, SOURCE, SINK, &SCENARIO_EDGES);
        assert_eq!(solver.phase(), SolverPhase::Unsolved);

        let edges_before: Vec<FlowEdge> = solver.residual_graph().unwrap().edges().cloned().collect();
        let stats = solver.stats().clone();
        assert!(stats.rounds > 0);

        assert_eq!(solver.max_flow().unwrap(), 26);
        assert_eq!(solver.max_flow().unwrap(), 26);
        let edges_after: Vec<FlowEdge> = solver.residual_graph().unwrap().edges().cloned().collect();

        assert_eq!(edges_before, edges_after);
        assert_eq!(solver.stats(), &stats);
    }

    #[test]
    fn test_add_edge_after_solve_is_rejected() {
        let mut solver = build(MaxFlowAlgorithm::EdmondsKarp, 3, 0, 2, &[(0, 1, 2), (1, 2, 2)]);
        assert_eq!(solver.max_flow().unwrap(), 2);

        let result = solver.add_edge(0, 2, 10);
        assert!(matches!(result, Err(FlowError::InvalidArgument(_))));
        assert_eq!(solver.max_flow().unwrap(), 2);
    }

    #[test]
    fn test_rejects_invalid_construction() {
        assert!(matches!(MaxFlowSolver::new(0, 0, 1), Err(FlowError::InvalidArgument(_))));
        assert!(matches!(MaxFlowSolver::new(3, 1, 1), Err(FlowError::InvalidArgument(_))));
        assert!(matches!(MaxFlowSolver::new(3, 3, 1), Err(FlowError::InvalidArgument(_))));
        assert!(matches!(MaxFlowSolver::new(3, 0, 7), Err(FlowError::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_invalid_edges() {
        let mut solver = MaxFlowSolver::new(3, 0, 2).unwrap();
        assert!(matches!(solver.add_edge(0, 1, 0), Err(FlowError::InvalidArgument(_))));
        assert!(matches!(solver.add_edge(0, 1, -3), Err(FlowError::InvalidArgument(_))));
        assert!(matches!(solver.add_edge(0, 3, 1), Err(FlowError::InvalidArgument(_))));
        assert_eq!(solver.network().edge_count(), 0);
    }

    #[test]
    fn test_capacity_sum_overflow_is_rejected() {
        for algorithm in all_algorithms() {
            let mut solver = build(algorithm, 2, 0, 1, &[(0, 1, Capacity::MAX)]);
            let result = solver.add_edge(0, 1, Capacity::MAX);
            assert!(matches!(result, Err(FlowError::InvalidArgument(_))));
            assert_eq!(solver.network().edge_count(), 1);
            assert_eq!(solver.max_flow().unwrap(), Flow::MAX, "{}", algorithm);
        }
    }

    #[test]
    fn test_capacity_sum_at_flow_limit() {
        let half = Capacity::MAX / 2;
        for algorithm in all_algorithms() {
            let mut solver = build(algorithm, 2, 0, 1, &[(0, 1, half), (0, 1, half), (0, 1, 1)]);
            assert_eq!(solver.max_flow().unwrap(), Flow::MAX, "{}", algorithm);
            assert_eq!(solver.stats().total_flow, Flow::MAX);
            assert_eq!(solver.stats().rounds, 3);
        }
    }

    #[test]
    fn test_round_limit_aborts_and_stays_aborted() {
        // Two disjoint unit paths need two rounds.
        let config = SolverConfig { round_limit: Some(1), ..SolverConfig::default() };
        let mut solver = MaxFlowSolver::with_config(4, 0, 3, &config).unwrap();
        solver.add_edge(0, 1, 1).unwrap();
        solver.add_edge(1, 3, 1).unwrap();
        solver.add_edge(0, 2, 1).unwrap();
        solver.add_edge(2, 3, 1).unwrap();

        assert!(matches!(solver.max_flow(), Err(FlowError::RoundLimitExceeded { limit: 1 })));
        assert_eq!(solver.phase(), SolverPhase::Aborted);
        assert!(matches!(solver.residual_graph(), Err(FlowError::RoundLimitExceeded { limit: 1 })));
        assert_eq!(solver.stats().rounds, 1);
        assert!(matches!(solver.add_edge(0, 3, 1), Err(FlowError::InvalidArgument(_))));
    }

    #[test]
    fn test_round_limit_that_suffices() {
        let mut solver = MaxFlowSolver::new(4, 0, 3).unwrap().with_round_limit(Some(2));
        solver.add_edge(0, 1, 1).unwrap();
        solver.add_edge(1, 3, 1).unwrap();
        solver.add_edge(0, 2, 1).unwrap();
        solver.add_edge(2, 3, 1).unwrap();

        assert_eq!(solver.max_flow().unwrap(), 2);
        assert_eq!(solver.stats().rounds, 2);
    }

    #[test]
    fn test_flow_is_undone_through_residual_edges() {
        // DFS first routes 0->1->2->3, then must cancel 1->2 to reach 2.
        let edges = [(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 2, 1), (1, 3, 1)];
        let mut solver = build(MaxFlowAlgorithm::FordFulkerson, 4, 0, 3, &edges);
        assert_eq!(solver.max_flow().unwrap(), 2);
        assert_eq!(solver.residual_graph().unwrap().edge(2).flow, 0);
    }

    #[test]
    fn test_strategy_equivalence() {
        let graphs: Vec<(usize, NodeId, NodeId, Vec<(NodeId, NodeId, Capacity)>)> = vec![
            (8, SOURCE, SINK, SCENARIO_EDGES.to_vec()),
            // Classic zig-zag trap for naive DFS
            (4, 0, 3, vec![(0, 1, 1000), (0, 2, 1000), (1, 2, 1), (1, 3, 1000), (2, 3, 1000)]),
            // Parallel edges and a back edge into the source
            (3, 0, 2, vec![(0, 1, 3), (0, 1, 4), (1, 0, 2), (1, 2, 5), (1, 2, 1)]),
            // Sink with outgoing edges and a cycle
            (5, 0, 4, vec![(0, 1, 7), (1, 2, 5), (2, 1, 5), (2, 4, 6), (4, 3, 9), (3, 2, 9), (1, 4, 1)]),
            // Grid-like layers
            (
                6,
                0,
                5,
                vec![(0, 1, 16), (0, 2, 13), (1, 2, 10), (2, 1, 4), (1, 3, 12), (3, 2, 9), (2, 4, 14), (4, 3, 7), (3, 5, 20), (4, 5, 4)],
            ),
        ];
        let expected = [26, 2000, 6, 6, 23];

        for ((node_count, source, sink, edges), expected) in graphs.iter().zip(expected) {
            let flows: Vec<Flow> = all_algorithms()
                .iter()
                .map(|&algorithm| {
                    let mut solver = build(algorithm, *node_count, *source, *sink, edges);
                    let flow = solver.max_flow().unwrap();
                    let network = solver.residual_graph().unwrap();
                    assert_eq!(correctness::verify(network, *source, *sink, flow), Ok(()));
                    flow
                })
                .collect();
            assert_eq!(flows, vec![expected, expected]);
        }
    }

    #[test]
    fn test_strategy_equivalence_on_generated_graphs() {
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move |bound: u64| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % bound
        };

        for _ in 0..40 {
            let node_count = 2 + next(9) as usize;
            let edge_count = next(30) as usize;
            let edges: Vec<(NodeId, NodeId, Capacity)> = (0..edge_count)
                .map(|_| {
                    let from = next(node_count as u64) as NodeId;
                    let to = next(node_count as u64) as NodeId;
                    (from, to, 1 + next(20) as Capacity)
                })
                .filter(|&(from, to, _)| from != to)
                .collect();
            let sink = node_count - 1;

            let mut dfs = build(MaxFlowAlgorithm::FordFulkerson, node_count, 0, sink, &edges);
            let mut bfs = build(MaxFlowAlgorithm::EdmondsKarp, node_count, 0, sink, &edges);
            let flow = dfs.max_flow().unwrap();
            assert_eq!(flow, bfs.max_flow().unwrap(), "edges: {:?}", edges);

            // Max flow never exceeds the capacity leaving the source
            let source_capacity: Capacity =
                edges.iter().filter(|e| e.0 == 0).map(|e| e.2).sum();
            assert!(flow <= source_capacity);
        }
    }

    #[test]
    fn test_edmonds_karp_avoids_zig_zag() {
        let edges = [(0, 1, 1000), (0, 2, 1000), (1, 2, 1), (1, 3, 1000), (2, 3, 1000)];
        let mut solver = build(MaxFlowAlgorithm::EdmondsKarp, 4, 0, 3, &edges);
        assert_eq!(solver.max_flow().unwrap(), 2000);
        assert_eq!(solver.stats().rounds, 2);
    }

    #[test]
    fn test_report() {
        let mut solver = build(MaxFlowAlgorithm::EdmondsKarp, 2, 0, 1, &[(0, 1, 5)]);
        let report = solver.report().unwrap();
        assert_eq!(report.max_flow, 5);
        assert_eq!(report.strategy, "Edmonds-Karp (BFS)");
        assert_eq!(report.edges.len(), 2);
        assert_eq!(report.stats.rounds, 1);

        let json = serde_json::to_string(&report).unwrap();
        let parsed: MaxFlowReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("dfs".parse::<MaxFlowAlgorithm>().unwrap(), MaxFlowAlgorithm::FordFulkerson);
        assert_eq!("Edmonds-Karp".parse::<MaxFlowAlgorithm>().unwrap(), MaxFlowAlgorithm::EdmondsKarp);
        assert_eq!("bfs".parse::<MaxFlowAlgorithm>().unwrap(), MaxFlowAlgorithm::EdmondsKarp);
        assert!("push-relabel".parse::<MaxFlowAlgorithm>().is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config: SolverConfig =
            serde_json::from_str(r#"{"algorithm": "edmonds-karp", "round_limit": 50}"#).unwrap();
        assert_eq!(config.algorithm, MaxFlowAlgorithm::EdmondsKarp);
        assert_eq!(config.round_limit, Some(50));
        assert!(!config.verify);

        let config: SolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    /// Wraps a strategy and counts how often the solver asks it for a path
    #[derive(Debug, Default)]
    struct CountingSearch {
        inner: DepthFirstSearch,
        calls: usize,
    }

    impl AugmentingPathSearch for CountingSearch {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn find_path(
            &mut self,
            network: &FlowNetwork,
            source: NodeId,
            sink: NodeId,
            visited: &mut VisitedMarker,
        ) -> Option<AugmentingPath> {
            self.calls += 1;
            self.inner.find_path(network, source, sink, visited)
        }
    }

    #[test]
    fn test_custom_strategy_runs_once() {
        let mut solver = MaxFlowSolver::with_strategy(8, SOURCE, SINK, CountingSearch::default()).unwrap();
        for &(from, to, capacity) in SCENARIO_EDGES.iter() {
            solver.add_edge(from, to, capacity).unwrap();
        }

        assert_eq!(solver.max_flow().unwrap(), 26);
        let calls = solver.strategy.calls;
        assert_eq!(calls, solver.stats().rounds + 1);

        solver.residual_graph().unwrap();
        solver.max_flow().unwrap();
        assert_eq!(solver.strategy.calls, calls);
        assert_eq!(solver.strategy_name(), "counting");
    }
}
