//! Generation-stamped visited set
//!
//! Node `i` counts as visited in the current round iff `stamps[i]` equals the
//! current generation. Starting a new round is a single increment instead of
//! an O(n) clear.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use crate::algorithm::traits::NodeId;

/// Per-round visited marker keyed by node index
#[derive(Debug, Clone)]
pub struct VisitedMarker {
    stamps: Vec<u32>,
    generation: u32,
}

impl VisitedMarker {
    /// Create a marker for `node_count` nodes with nothing visited
    pub fn new(node_count: usize) -> Self {
        Self {
            stamps: vec![0; node_count],
            generation: 1,
        }
    }

    /// Current round number
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Start a new round, forgetting every mark
    pub fn advance(&mut self) {
        if self.generation == u32::MAX {
            // Stale stamps would alias the restarted counter.
            self.stamps.fill(0);
            self.generation = 1;
        } else {
            self.generation += 1;
        }
    }

    #[inline]
    pub fn visit(&mut self, node: NodeId) {
        self.stamps[node] = self.generation;
    }

    #[inline]
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.stamps[node] == self.generation
    }

    /// Number of nodes marked in the current round
    pub fn visited_count(&self) -> usize {
        self.stamps.iter().filter(|&&stamp| stamp == self.generation).count()
    }
}
