//! 图算法模块
//!
//! 包含 Bellman-Ford 最短路径、深度优先遍历和设施选址

mod placement;
mod shortest_path;
mod traversal;

pub use placement::{FacilityPlacement, Placement};
pub use shortest_path::{BellmanFord, Relaxation, ShortestPath};
pub use traversal::DepthFirst;
