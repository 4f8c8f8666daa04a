//! Human-readable residual graph listing
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;
use std::io::{self, Write};

use maxflow_core::{FlowEdge, FlowNetwork, NodeId};

/// Node name with the source shown as `s` and the sink as `t`
struct NodeLabel {
    node: NodeId,
    source: NodeId,
    sink: NodeId,
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.node == self.source {
            f.write_str("s")
        } else if self.node == self.sink {
            f.write_str("t")
        } else {
            write!(f, "{}", self.node)
        }
    }
}

/// One edge rendered as
/// `Edge s -> 0 | flow =  10 | capacity =  13 | is residual: false`
pub struct EdgeLabel<'a> {
    pub edge: &'a FlowEdge,
    pub source: NodeId,
    pub sink: NodeId,
}

impl fmt::Display for EdgeLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = NodeLabel { node: self.edge.from, source: self.source, sink: self.sink };
        let to = NodeLabel { node: self.edge.to, source: self.source, sink: self.sink };
        write!(
            f,
            "Edge {} -> {} | flow = {:>3} | capacity = {:>3} | is residual: {}",
            from,
            to,
            self.edge.flow,
            self.edge.capacity,
            self.edge.is_residual()
        )
    }
}

/// Writes every edge, node by node in adjacency order
pub fn write_residual_graph<W: Write>(
    out: &mut W,
    network: &FlowNetwork,
    source: NodeId,
    sink: NodeId,
) -> io::Result<()> {
    for node in 0..network.node_count() {
        for edge in network.edges_from(node) {
            writeln!(out, "{}", EdgeLabel { edge, source, sink })?;
        }
    }
    Ok(())
}
