//! Augmenting-path search strategies
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod dfs;
pub mod bfs;

pub use self::dfs::DepthFirstSearch;
pub use self::bfs::BreadthFirstSearch;
