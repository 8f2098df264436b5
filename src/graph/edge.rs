//! 边定义
//!
//! 有向带权边：起点、终点、距离

use serde::{Deserialize, Serialize};
use std::fmt;

/// 有向边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V, D> {
    /// 起点
    pub from: V,
    /// 终点
    pub to: V,
    /// 距离
    pub distance: D,
}

impl<V, D> Edge<V, D> {
    /// 创建新边
    pub fn new(from: V, to: V, distance: D) -> Self {
        Self { from, to, distance }
    }

    /// 是否与给定顶点相连
    pub fn touches(&self, v: &V) -> bool
    where
        V: PartialEq,
    {
        &self.from == v || &self.to == v
    }
}

impl<V: fmt::Display, D: fmt::Display> fmt::Display for Edge<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (distance: {})", self.from, self.to, self.distance)
    }
}
