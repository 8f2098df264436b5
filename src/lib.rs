//! wdigraph - 有向带权图
//!
//! - 邻接表存储，支持动态增删顶点和边
//! - Bellman-Ford 最短路径（容忍负权边）
//! - 深度优先遍历与设施选址
//! - 二叉搜索树整数集合

pub mod algorithm;
pub mod bst;
pub mod cli;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{BellmanFord, DepthFirst, FacilityPlacement, Placement, ShortestPath};
pub use bst::IntSet;
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use types::{Distance, VertexKey};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
