//! Flow correctness verification
//!
//! Checks a residual network against the properties every valid flow must
//! satisfy:
//!
//! - **Capacity respect**: `0 <= flow <= capacity` on every real edge
//! - **Residual consistency**: an edge and its pair carry opposite flow, point
//!   at each other, and run in opposite directions
//! - **Conservation**: every node other than source and sink has equal inflow
//!   and outflow
//! - **Flow value**: the source emits and the sink absorbs exactly the
//!   reported maximum flow
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use thiserror::Error;

use crate::algorithm::traits::{EdgeId, Flow, NodeId};
use crate::data_structures::flow_network::FlowNetwork;

/// A broken flow invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("edge #{edge} carries {flow} units over capacity {capacity}")]
    CapacityExceeded { edge: EdgeId, flow: Flow, capacity: Flow },

    #[error("edge #{edge} carries negative flow {flow}")]
    NegativeFlow { edge: EdgeId, flow: Flow },

    #[error("edge #{edge} and its pair #{pair} are not mirrored")]
    ResidualMismatch { edge: EdgeId, pair: EdgeId },

    #[error("node {node} has net outflow {net_outflow}")]
    ConservationBroken { node: NodeId, net_outflow: Flow },

    #[error("node {node} moves {actual} units, expected {expected}")]
    FlowValueMismatch { node: NodeId, expected: Flow, actual: Flow },
}

/// Every real edge satisfies `0 <= flow <= capacity`
pub fn check_capacities(network: &FlowNetwork) -> Result<(), InvariantViolation> {
    for (id, edge) in network.edges().enumerate() {
        if edge.is_residual() {
            continue;
        }
        if edge.flow < 0 {
            return Err(InvariantViolation::NegativeFlow { edge: id, flow: edge.flow });
        }
        if edge.flow > edge.capacity {
            return Err(InvariantViolation::CapacityExceeded {
                edge: id,
                flow: edge.flow,
                capacity: edge.capacity,
            });
        }
    }
    Ok(())
}

/// Every edge and its pair carry opposite flow and reference each other
pub fn check_residual_pairs(network: &FlowNetwork) -> Result<(), InvariantViolation> {
    for (id, edge) in network.edges().enumerate() {
        let pair = network.edge(edge.residual);
        let mirrored = pair.residual == id
            && pair.from == edge.to
            && pair.to == edge.from
            && pair.flow == -edge.flow
            && (edge.is_residual() != pair.is_residual());
        if !mirrored {
            return Err(InvariantViolation::ResidualMismatch { edge: id, pair: edge.residual });
        }
    }
    Ok(())
}

/// Inflow equals outflow at every node except `source` and `sink`
pub fn check_conservation(
    network: &FlowNetwork,
    source: NodeId,
    sink: NodeId,
) -> Result<(), InvariantViolation> {
    for node in 0..network.node_count() {
        if node == source || node == sink {
            continue;
        }
        let net_outflow = network.net_outflow(node);
        if net_outflow != 0 {
            return Err(InvariantViolation::ConservationBroken { node, net_outflow });
        }
    }
    Ok(())
}

/// Source emits and sink absorbs exactly `expected` units
pub fn check_flow_value(
    network: &FlowNetwork,
    source: NodeId,
    sink: NodeId,
    expected: Flow,
) -> Result<(), InvariantViolation> {
    let emitted = network.net_outflow(source);
    if emitted != expected {
        return Err(InvariantViolation::FlowValueMismatch { node: source, expected, actual: emitted });
    }
    let absorbed = -network.net_outflow(sink);
    if absorbed != expected {
        return Err(InvariantViolation::FlowValueMismatch { node: sink, expected, actual: absorbed });
    }
    Ok(())
}

/// Runs every check in turn
pub fn verify(
    network: &FlowNetwork,
    source: NodeId,
    sink: NodeId,
    max_flow: Flow,
) -> Result<(), InvariantViolation> {
    check_capacities(network)?;
    check_residual_pairs(network)?;
    check_conservation(network, source, sink)?;
    check_flow_value(network, source, sink, max_flow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> (FlowNetwork, EdgeId, EdgeId) {
        let mut network = FlowNetwork::new(3);
        let a = network.add_edge(0, 1, 5).unwrap();
        let b = network.add_edge(1, 2, 3).unwrap();
        (network, a, b)
    }

    #[test]
    fn test_empty_flow_is_valid() {
        let (network, _, _) = chain();
        assert_eq!(verify(&network, 0, 2, 0), Ok(()));
    }

    #[test]
    fn test_consistent_flow_is_valid() {
        let (mut network, a, b) = chain();
        network.augment(a, 3);
        network.augment(b, 3);
        assert_eq!(verify(&network, 0, 2, 3), Ok(()));
    }

    #[test]
    fn test_detects_broken_conservation() {
        let (mut network, a, _) = chain();
        network.augment(a, 2);

        assert_eq!(check_capacities(&network), Ok(()));
        assert_eq!(check_residual_pairs(&network), Ok(()));
        assert_eq!(
            check_conservation(&network, 0, 2),
            Err(InvariantViolation::ConservationBroken { node: 1, net_outflow: -2 })
        );
    }

    #[test]
    fn test_detects_wrong_flow_value() {
        let (mut network, a, b) = chain();
        network.augment(a, 1);
        network.augment(b, 1);

        assert_eq!(
            check_flow_value(&network, 0, 2, 4),
            Err(InvariantViolation::FlowValueMismatch { node: 0, expected: 4, actual: 1 })
        );
    }

    #[test]
    fn test_detects_negative_real_flow() {
        let (mut network, a, _) = chain();
        network.edge_mut(a).flow = -1;

        assert_eq!(
            check_capacities(&network),
            Err(InvariantViolation::NegativeFlow { edge: a, flow: -1 })
        );
    }

    #[test]
    fn test_detects_capacity_overflow() {
        let (mut network, _, b) = chain();
        network.edge_mut(b).flow = 4;

        assert_eq!(
            check_capacities(&network),
            Err(InvariantViolation::CapacityExceeded { edge: b, flow: 4, capacity: 3 })
        );
    }

    #[test]
    fn test_detects_unmirrored_pair() {
        let (mut network, a, _) = chain();
        network.edge_mut(a).flow = 2;

        assert_eq!(
            check_residual_pairs(&network),
            Err(InvariantViolation::ResidualMismatch { edge: a, pair: a + 1 })
        );
    }
}
