//! Solver lifecycle state and execution statistics
//!
//! The solver moves from `Unsolved` to exactly one terminal phase. `Solved`
//! caches the maximum flow; `Aborted` records that a configured round limit
//! was hit, so later queries keep failing instead of reporting a partial
//! flow.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AugmentingPath, Flow};

/// Solver state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverPhase {
    /// Edges may still be added; nothing computed yet
    Unsolved,
    /// Maximum flow computed and cached
    Solved,
    /// Round limit exceeded; the residual state holds a partial flow
    Aborted,
}

impl SolverPhase {
    /// Whether the phase is final
    pub fn is_terminal(self) -> bool {
        !matches!(self, SolverPhase::Unsolved)
    }
}

/// Counters gathered while solving
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Augmenting paths applied
    pub rounds: usize,
    /// Total edge augmentations across all rounds
    pub augmented_edges: usize,
    /// Longest augmenting path seen, in edges
    pub longest_path: usize,
    /// Flow accumulated so far
    pub total_flow: Flow,
}

impl SolveStats {
    pub(crate) fn record(&mut self, path: &AugmentingPath) {
        self.rounds += 1;
        self.augmented_edges += path.len();
        self.longest_path = self.longest_path.max(path.len());
        self.total_flow += path.bottleneck;
    }
}
