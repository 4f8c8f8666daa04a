//! Residual network storage
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod flow_network;
pub mod visited;

pub use self::flow_network::{FlowEdge, FlowNetwork};
pub use self::visited::VisitedMarker;
