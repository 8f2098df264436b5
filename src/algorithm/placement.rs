//! 设施选址
//!
//! 对图中每个顶点计算到目标的最短路径，取路径上最长的单条边作为瓶颈，
//! 选出瓶颈最小的顶点（极小化极大）。

use super::shortest_path::{BellmanFord, ShortestPath};
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::{Distance, VertexKey};
use tracing::{debug, warn};

/// 选址结果
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<V, D> {
    /// 选中的顶点
    pub vertex: V,
    /// 到目标最短路径上最长的单条边
    pub bottleneck: D,
    /// 到目标的最短路径
    pub path: Vec<Edge<V, D>>,
}

/// 设施选址查询
pub struct FacilityPlacement<'a, V, D> {
    graph: &'a Graph<V, D>,
}

impl<'a, V: VertexKey, D: Distance> FacilityPlacement<'a, V, D> {
    pub fn new(graph: &'a Graph<V, D>) -> Self {
        Self { graph }
    }

    /// 为目标顶点选出瓶颈最小的顶点
    ///
    /// 目标自身不参与候选；到不了目标的顶点被跳过；瓶颈相同时取顶点顺序中靠前的。
    /// 经由负权环导致前驱链无法回溯的顶点同样被跳过，不影响其他候选。
    /// 没有任何其他顶点能到达目标时返回 `Ok(None)`。
    pub fn optimal_for(&self, target: &V) -> Result<Option<Placement<V, D>>> {
        if !self.graph.has_vertex(target) {
            return Err(Error::VertexNotFound(format!("{:?}", target)));
        }

        let finder = BellmanFord::new(self.graph);
        let mut best: Option<Placement<V, D>> = None;

        for v in self.graph.iter_vertices() {
            if v == target {
                continue;
            }
            let path = match finder.shortest_path(v, target) {
                Ok(ShortestPath::Found(path)) => path,
                Ok(_) => continue,
                Err(e) => {
                    warn!(from = ?v, to = ?target, error = %e, "候选顶点无法回溯路径，跳过");
                    continue;
                }
            };
            let Some(bottleneck) = Self::bottleneck(&path) else {
                continue;
            };

            let better = best
                .as_ref()
                .map_or(true, |current| bottleneck < current.bottleneck);
            if better {
                best = Some(Placement {
                    vertex: v.clone(),
                    bottleneck,
                    path,
                });
            }
        }

        debug!(to = ?target, chosen = ?best.as_ref().map(|p| &p.vertex), "设施选址");
        Ok(best)
    }

    /// 路径上最长的单条边
    fn bottleneck(path: &[Edge<V, D>]) -> Option<D> {
        let mut iter = path.iter().map(|e| e.distance);
        let first = iter.next()?;
        Some(iter.fold(first, |max, d| if d > max { d } else { max }))
    }
}
