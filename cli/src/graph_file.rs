//! Network descriptions: the built-in example and JSON graph files
//!
//! A graph file looks like
//! `{"nodes": 4, "source": 0, "sink": 3, "edges": [{"from": 0, "to": 1, "capacity": 5}]}`.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs;
use std::path::Path;

use log::debug;
use maxflow_core::{Capacity, FlowResult, MaxFlowSolver, NodeId, SolverConfig};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Capacity,
}

/// Complete description of one max flow problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Node count, including source and sink
    pub nodes: usize,
    pub source: NodeId,
    pub sink: NodeId,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    /// Eight-node demonstration network with a maximum flow of 26
    pub fn example() -> Self {
        let nodes = 8;
        let s = nodes - 2;
        let t = nodes - 1;
        let edges = [
            // Edges from source
            (s, 0, 13),
            (s, 1, 10),
            (s, 2, 10),
            // Middle edges
            (0, 3, 24),
            (1, 2, 15),
            (2, 5, 15),
            (1, 0, 5),
            (3, 4, 1),
            (4, 5, 6),
            (1, 2, 15),
            (1, 5, 7),
            // Edges to sink
            (3, t, 9),
            (4, t, 13),
            (5, t, 16),
        ];

        Self {
            nodes,
            source: s,
            sink: t,
            edges: edges
                .iter()
                .map(|&(from, to, capacity)| EdgeSpec { from, to, capacity })
                .collect(),
        }
    }

    pub fn from_json(text: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let spec = Self::from_json(&text)?;
        debug!("loaded {} edges from {}", spec.edges.len(), path.display());
        Ok(spec)
    }

    /// Solver over this network, edges inserted in file order
    pub fn build(&self, config: &SolverConfig) -> FlowResult<MaxFlowSolver> {
        let mut solver = MaxFlowSolver::with_config(self.nodes, self.source, self.sink, config)?;
        for edge in &self.edges {
            solver.add_edge(edge.from, edge.to, edge.capacity)?;
        }
        Ok(solver)
    }
}

/// Reads a `SolverConfig` from a JSON file
pub fn load_config(path: &Path) -> CliResult<SolverConfig> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
