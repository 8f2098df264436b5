//! 图核心模块
//!
//! 定义边和有向带权图的核心数据结构

mod edge;
mod graph;

pub use edge::Edge;
pub use graph::Graph;
