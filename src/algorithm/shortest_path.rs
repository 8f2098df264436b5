//! Bellman-Ford 最短路径
//!
//! 允许负权边。负权环不做检测：图中存在从起点可达的负权环时结果不保证正确，
//! 只保证前驱链回溯不会死循环（超过顶点数步仍未回到起点时返回错误）。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::{Distance, VertexKey};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// 最短路径查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum ShortestPath<V, D> {
    /// 找到路径（按 from -> ... -> to 顺序的边序列，非空）
    Found(Vec<Edge<V, D>>),
    /// 终点不可达（或端点不在图中）
    Unreachable,
    /// 起点即终点，空路径
    TrivialSelf,
}

impl<V, D: Distance> ShortestPath<V, D> {
    /// 路径上的边；不可达或起终点相同时为空
    pub fn edges(&self) -> &[Edge<V, D>] {
        match self {
            ShortestPath::Found(edges) => edges,
            _ => &[],
        }
    }

    /// 取出边序列
    pub fn into_edges(self) -> Vec<Edge<V, D>> {
        match self {
            ShortestPath::Found(edges) => edges,
            _ => Vec::new(),
        }
    }

    /// 是否可达（包括起点即终点）
    pub fn is_reachable(&self) -> bool {
        !matches!(self, ShortestPath::Unreachable)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ShortestPath::Found(_))
    }

    /// 路径总距离；不可达或累加溢出时为 None
    pub fn total_distance(&self) -> Option<D> {
        match self {
            ShortestPath::Found(edges) => edges
                .iter()
                .try_fold(D::zero(), |acc, e| acc.checked_add(e.distance)),
            ShortestPath::TrivialSelf => Some(D::zero()),
            ShortestPath::Unreachable => None,
        }
    }
}

/// 单源松弛结果：距离表和前驱表
#[derive(Debug, Clone)]
pub struct Relaxation<V, D> {
    source: V,
    distance: HashMap<V, D>,
    predecessor: HashMap<V, V>,
}

impl<V: VertexKey, D: Distance> Relaxation<V, D> {
    /// 起点
    pub fn source(&self) -> &V {
        &self.source
    }

    /// 到顶点的最短距离；不可达时为 None
    pub fn distance(&self, v: &V) -> Option<D> {
        self.distance.get(v).copied().filter(|d| d.is_finite())
    }

    /// 顶点在最短路径树上的前驱
    pub fn predecessor(&self, v: &V) -> Option<&V> {
        self.predecessor.get(v)
    }

    /// 沿前驱链回溯出到 `to` 的路径
    fn reconstruct_path(&self, to: &V, max_hops: usize) -> Result<Vec<Edge<V, D>>> {
        let mut edges = Vec::new();
        let mut current = to;

        while current != &self.source {
            if edges.len() >= max_hops {
                warn!(from = ?self.source, to = ?to, max_hops, "前驱链超过顶点数，放弃回溯");
                return Err(Error::PredecessorCycle(format!(
                    "{:?} -> {:?}",
                    self.source, to
                )));
            }
            let (Some(parent), Some(d_cur)) =
                (self.predecessor.get(current), self.distance(current))
            else {
                return Err(Error::PredecessorCycle(format!(
                    "{:?} 在 {:?} 处断开",
                    to, current
                )));
            };
            let d_parent = self.distance(parent).unwrap_or_else(D::zero);
            // 负权环未收敛时两个距离之差可能超出类型范围
            let Some(weight) = d_cur.checked_sub(d_parent) else {
                warn!(from = ?self.source, to = ?to, at = ?current, "边权差值溢出，放弃回溯");
                return Err(Error::PredecessorCycle(format!(
                    "{:?} 在 {:?} 处距离溢出",
                    to, current
                )));
            };

            edges.push(Edge::new(parent.clone(), current.clone(), weight));
            current = parent;
        }

        edges.reverse();
        Ok(edges)
    }
}

/// Bellman-Ford 最短路径查找器
pub struct BellmanFord<'a, V, D> {
    graph: &'a Graph<V, D>,
}

impl<'a, V: VertexKey, D: Distance> BellmanFord<'a, V, D> {
    /// 创建查找器
    pub fn new(graph: &'a Graph<V, D>) -> Self {
        Self { graph }
    }

    /// 从 `from` 出发做 |V|-1 轮松弛
    ///
    /// 距离仍为哨兵值的顶点不参与松弛，加法溢出的候选值也被丢弃。
    /// 某一轮没有任何更新时提前结束，结果与跑满所有轮次一致。
    pub fn relax(&self, from: &V) -> Relaxation<V, D> {
        let mut distance: HashMap<V, D> = self
            .graph
            .iter_vertices()
            .map(|v| (v.clone(), D::infinity()))
            .collect();
        distance.insert(from.clone(), D::zero());
        let mut predecessor: HashMap<V, V> = HashMap::new();

        let rounds = self.graph.order().saturating_sub(1);
        for round in 0..rounds {
            let mut updated = 0usize;

            for edge in self.graph.all_edges() {
                let Some(&d_from) = distance.get(&edge.from) else {
                    continue;
                };
                if !d_from.is_finite() {
                    continue;
                }
                let Some(candidate) = d_from.checked_add(edge.distance) else {
                    continue;
                };

                let improves = distance
                    .get(&edge.to)
                    .map_or(true, |&d_to| candidate < d_to);
                if improves {
                    distance.insert(edge.to.clone(), candidate);
                    predecessor.insert(edge.to.clone(), edge.from.clone());
                    updated += 1;
                }
            }

            trace!(round, updated, "松弛");
            if updated == 0 {
                break;
            }
        }

        Relaxation {
            source: from.clone(),
            distance,
            predecessor,
        }
    }

    /// 查找 from 到 to 的最短路径
    pub fn shortest_path(&self, from: &V, to: &V) -> Result<ShortestPath<V, D>> {
        if !self.graph.has_vertex(from) || !self.graph.has_vertex(to) {
            debug!(from = ?from, to = ?to, "端点不在图中");
            return Ok(ShortestPath::Unreachable);
        }
        if from == to {
            return Ok(ShortestPath::TrivialSelf);
        }

        let relaxation = self.relax(from);
        if relaxation.predecessor(to).is_none() {
            debug!(from = ?from, to = ?to, "不可达");
            return Ok(ShortestPath::Unreachable);
        }

        let edges = relaxation.reconstruct_path(to, self.graph.order())?;
        debug!(from = ?from, to = ?to, hops = edges.len(), "找到最短路径");
        Ok(ShortestPath::Found(edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> Graph<char, i32> {
        // A -1-> B -2-> C -1-> D
        //  \---10--->/
        let mut graph = Graph::new();
        graph.add_edge('A', 'B', 1);
        graph.add_edge('B', 'C', 2);
        graph.add_edge('A', 'C', 10);
        graph.add_edge('C', 'D', 1);
        graph
    }

    #[test]
    fn test_shortest_path() {
        let graph = create_test_graph();
        let path = BellmanFord::new(&graph).shortest_path(&'A', &'D').unwrap();

        assert_eq!(
            path,
            ShortestPath::Found(vec![
                Edge::new('A', 'B', 1),
                Edge::new('B', 'C', 2),
                Edge::new('C', 'D', 1),
            ])
        );
        assert_eq!(path.total_distance(), Some(4));
    }

    #[test]
    fn test_unreachable() {
        let mut graph: Graph<char, i32> = Graph::new();
        graph.add_vertex('A');
        graph.add_vertex('B');

        let path = graph.shortest_path(&'A', &'B').unwrap();
        assert_eq!(path, ShortestPath::Unreachable);
        assert!(!path.is_reachable());
        assert_eq!(path.total_distance(), None);
        assert!(path.edges().is_empty());
    }

    #[test]
    fn test_against_edge_direction() {
        let graph = create_test_graph();
        let path = graph.shortest_path(&'D', &'A').unwrap();
        assert_eq!(path, ShortestPath::Unreachable);
    }

    #[test]
    fn test_trivial_self() {
        let mut graph = create_test_graph();
        graph.add_edge('B', 'B', 5);

        assert_eq!(graph.shortest_path(&'A', &'A').unwrap(), ShortestPath::TrivialSelf);
        assert_eq!(graph.shortest_path(&'B', &'B').unwrap(), ShortestPath::TrivialSelf);

        let path = graph.shortest_path(&'A', &'A').unwrap();
        assert!(path.is_reachable());
        assert!(!path.is_found());
        assert_eq!(path.total_distance(), Some(0));
    }

    #[test]
    fn test_missing_endpoints() {
        let graph = create_test_graph();
        assert_eq!(graph.shortest_path(&'A', &'Z').unwrap(), ShortestPath::Unreachable);
        assert_eq!(graph.shortest_path(&'Z', &'A').unwrap(), ShortestPath::Unreachable);
        assert_eq!(graph.shortest_path(&'Z', &'Z').unwrap(), ShortestPath::Unreachable);
    }

    #[test]
    fn test_negative_weights() {
        let mut graph: Graph<i32, i32> = Graph::new();
        graph.add_edge(1, 2, 4);
        graph.add_edge(1, 3, 5);
        graph.add_edge(3, 2, -3);
        graph.add_edge(2, 4, 1);

        let path = graph.shortest_path(&1, &4).unwrap();
        assert_eq!(
            path.edges(),
            &[Edge::new(1, 3, 5), Edge::new(3, 2, -3), Edge::new(2, 4, 1)]
        );
        assert_eq!(path.total_distance(), Some(3));
    }

    #[test]
    fn test_parallel_edges_pick_cheapest() {
        let mut graph: Graph<i32, f64> = Graph::new();
        graph.add_edge(1, 2, 7.5);
        graph.add_edge(1, 2, 2.5);

        let path = graph.shortest_path(&1, &2).unwrap();
        assert_eq!(path.edges(), &[Edge::new(1, 2, 2.5)]);
    }

    #[test]
    fn test_sentinel_does_not_overflow() {
        // 不可达顶点 X 出发的负权边不能让哨兵值参与运算
        let mut graph: Graph<char, i8> = Graph::new();
        graph.add_edge('X', 'B', -100);
        graph.add_edge('A', 'B', 100);
        graph.add_edge('B', 'C', 100);

        let relaxation = BellmanFord::new(&graph).relax(&'A');
        assert_eq!(relaxation.distance(&'X'), None);
        assert_eq!(relaxation.distance(&'B'), Some(100));
        // 100 + 100 溢出 i8，C 保持不可达
        assert_eq!(relaxation.distance(&'C'), None);
        assert_eq!(graph.shortest_path(&'A', &'C').unwrap(), ShortestPath::Unreachable);
        assert_eq!(
            graph.shortest_path(&'A', &'B').unwrap().edges(),
            &[Edge::new('A', 'B', 100)]
        );
    }

    #[test]
    fn test_relaxation_maps() {
        let graph = create_test_graph();
        let relaxation = BellmanFord::new(&graph).relax(&'A');

        assert_eq!(relaxation.source(), &'A');
        assert_eq!(relaxation.distance(&'A'), Some(0));
        assert_eq!(relaxation.distance(&'C'), Some(3));
        assert_eq!(relaxation.distance(&'D'), Some(4));
        assert_eq!(relaxation.predecessor(&'C'), Some(&'B'));
        assert_eq!(relaxation.predecessor(&'A'), None);
    }

    /// 负权环不在检测范围内：这里只确认查询会终止，并且不会 panic。
    #[test]
    fn test_negative_cycle_is_not_detected() {
        let mut graph: Graph<i32, i32> = Graph::new();
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, -5);
        graph.add_edge(3, 2, 1);
        graph.add_edge(3, 4, 1);

        // 回溯可能得到一条（错误的）路径，也可能因前驱成环而报错，两者都可接受
        match graph.shortest_path(&1, &4) {
            Ok(path) => assert!(path.is_reachable()),
            Err(Error::PredecessorCycle(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    fn build_i8_graph(edges: &[(u8, u8, i8)]) -> Graph<u8, i8> {
        let mut graph = Graph::new();
        for &(from, to, d) in edges {
            graph.add_edge(from, to, d);
        }
        graph
    }

    #[test]
    fn test_negative_cycle_distance_difference_overflow() {
        // 环 2 -> 2 (-1) 让距离表不收敛，回溯时 d_cur - d_parent 超出 i8
        let graph = build_i8_graph(&[
            (1, 2, -103),
            (1, 0, 113),
            (1, 2, 3),
            (2, 2, 97),
            (2, 1, 104),
            (2, 2, -1),
            (2, 1, 11),
            (0, 2, -34),
            (0, 0, 24),
        ]);

        match graph.shortest_path(&2, &0) {
            Ok(path) => assert!(path.is_reachable()),
            Err(Error::PredecessorCycle(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_negative_cycle_total_distance_overflow() {
        let graph = build_i8_graph(&[
            (2, 0, -20),
            (2, 3, -113),
            (2, 1, 47),
            (2, 4, 89),
            (0, 4, -47),
            (3, 4, 94),
            (4, 3, -124),
            (4, 0, 107),
        ]);

        match graph.shortest_path(&3, &0) {
            // 总距离可能溢出而为 None，但不能 panic
            Ok(path) => {
                let _ = path.total_distance();
            }
            Err(Error::PredecessorCycle(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_total_distance_overflow_is_none() {
        let path: ShortestPath<u8, i8> =
            ShortestPath::Found(vec![Edge::new(1, 2, 100), Edge::new(2, 3, 100)]);
        assert_eq!(path.total_distance(), None);
        assert_eq!(path.edges().len(), 2);
    }

    #[test]
    fn test_predecessor_cycle_is_reported() {
        // 2 <-> 3 构成负权环，且 4 只能经由环到达
        let mut graph: Graph<i32, i32> = Graph::new();
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, -2);
        graph.add_edge(3, 2, -2);
        graph.add_edge(3, 4, 1);

        let err = graph.shortest_path(&1, &4).unwrap_err();
        assert!(matches!(err, Error::PredecessorCycle(_)));
    }
}
