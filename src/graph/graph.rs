//! 图数据结构
//!
//! 邻接表表示的有向带权图。顶点按插入顺序保存，每个顶点持有自己的出边列表。

use super::edge::Edge;
use crate::algorithm::{BellmanFord, DepthFirst, ShortestPath};
use crate::error::Result;
use crate::types::{Distance, VertexKey};
use indexmap::IndexMap;
use tracing::debug;

/// 有向带权图
///
/// 不变量：
/// - 每条边的 `from` 等于存放它的出边列表所属的顶点
/// - 任何边的端点都是图中的顶点（添加边时自动补全端点，删除顶点时清除相关边）
#[derive(Debug, Clone)]
pub struct Graph<V, D> {
    /// 顶点 -> 出边列表
    adjacency: IndexMap<V, Vec<Edge<V, D>>>,
}

impl<V, D> Default for Graph<V, D> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<V: VertexKey, D: Distance> Graph<V, D> {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 预分配顶点容量
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(vertex_count),
        }
    }

    // ==================== 顶点操作 ====================

    /// 顶点是否存在
    pub fn has_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// 添加顶点（已存在时不做任何事）
    pub fn add_vertex(&mut self, v: V) {
        self.adjacency.entry(v).or_default();
    }

    /// 删除顶点及所有与之相连的边
    ///
    /// 顶点不存在时返回 false。
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        let Some(own) = self.adjacency.shift_remove(v) else {
            return false;
        };

        let mut stripped = own.len();
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|e| !e.touches(v));
            stripped += before - edges.len();
        }

        debug!(vertex = ?v, stripped, "删除顶点");
        true
    }

    /// 所有顶点（按插入顺序）
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// 顶点迭代器
    pub fn iter_vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// 顶点数量（图的阶）
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// 是否为空图
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 起点或终点不存在时会自动添加。允许平行边。
    pub fn add_edge(&mut self, from: V, to: V, d: D) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Edge::new(from, to, d));
        }
    }

    /// 删除 from -> to 的第一条边（不考虑距离）
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        self.remove_first(from, to, |e| &e.to == to)
    }

    /// 删除与给定边终点和距离都相同的第一条边
    pub fn remove_edge_exact(&mut self, edge: &Edge<V, D>) -> bool {
        self.remove_first(&edge.from, &edge.to, |e| {
            e.to == edge.to && e.distance == edge.distance
        })
    }

    fn remove_first<F>(&mut self, from: &V, to: &V, matches: F) -> bool
    where
        F: Fn(&Edge<V, D>) -> bool,
    {
        if !self.has_vertex(to) {
            return false;
        }
        let Some(edges) = self.adjacency.get_mut(from) else {
            return false;
        };
        match edges.iter().position(matches) {
            Some(pos) => {
                edges.remove(pos);
                debug!(from = ?from, to = ?to, "删除边");
                true
            }
            None => false,
        }
    }

    /// 是否存在 from -> to 的边（不考虑距离）
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.has_vertex(to)
            && self
                .adjacency
                .get(from)
                .is_some_and(|edges| edges.iter().any(|e| &e.to == to))
    }

    /// 是否存在终点和距离都相同的边
    pub fn has_edge_exact(&self, edge: &Edge<V, D>) -> bool {
        self.has_vertex(&edge.to)
            && self.adjacency.get(&edge.from).is_some_and(|edges| {
                edges
                    .iter()
                    .any(|e| e.to == edge.to && e.distance == edge.distance)
            })
    }

    /// 顶点的所有出边（副本）；顶点不存在时返回空列表
    pub fn edges(&self, v: &V) -> Vec<Edge<V, D>> {
        self.adjacency.get(v).cloned().unwrap_or_default()
    }

    /// 图中所有边
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge<V, D>> {
        self.adjacency.values().flatten()
    }

    /// 出边列表（借用）
    pub(crate) fn outgoing(&self, v: &V) -> &[Edge<V, D>] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// 顶点的出度
    pub fn out_degree(&self, v: &V) -> usize {
        self.adjacency.get(v).map_or(0, Vec::len)
    }

    /// 图的度：所有顶点出度的最大值
    pub fn degree(&self) -> usize {
        self.adjacency.values().map(Vec::len).max().unwrap_or(0)
    }

    // ==================== 算法入口 ====================

    /// Bellman-Ford 最短路径
    pub fn shortest_path(&self, from: &V, to: &V) -> Result<ShortestPath<V, D>> {
        BellmanFord::new(self).shortest_path(from, to)
    }

    /// 深度优先遍历
    pub fn walk(&self, start: &V) -> Result<Vec<V>> {
        DepthFirst::new(self).walk(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_graph_basic() {
        let mut graph: Graph<i32, f64> = Graph::new();

        graph.add_vertex(1);
        graph.add_vertex(1);
        graph.add_vertex(2);

        assert_eq!(graph.order(), 2);
        assert!(graph.has_vertex(&1));
        assert!(!graph.has_vertex(&3));
        assert_eq!(graph.vertices(), vec![1, 2]);
        assert_eq!(graph.degree(), 0);
    }

    #[test]
    fn test_add_edge_creates_vertices() {
        let mut graph: Graph<&str, i32> = Graph::new();
        graph.add_edge("a", "b", 5);

        assert!(graph.has_vertex(&"a"));
        assert!(graph.has_vertex(&"b"));
        assert!(graph.has_edge(&"a", &"b"));
        assert!(!graph.has_edge(&"b", &"a"));

        let edges = graph.edges(&"a");
        assert_eq!(edges, vec![Edge::new("a", "b", 5)]);
        assert!(graph.edges(&"b").is_empty());
        assert!(graph.edges(&"zzz").is_empty());
    }

    #[test]
    fn test_parallel_edges() {
        let mut graph: Graph<i32, i32> = Graph::new();
        graph.add_edge(1, 2, 10);
        graph.add_edge(1, 2, 3);
        graph.add_edge(1, 3, 7);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_degree(&1), 3);
        assert_eq!(graph.degree(), 3);

        // 按端点删除只删第一条
        assert!(graph.remove_edge(&1, &2));
        assert_eq!(graph.edges(&1), vec![Edge::new(1, 2, 3), Edge::new(1, 3, 7)]);
        assert!(graph.has_edge(&1, &2));
    }

    #[test]
    fn test_remove_edge_exact() {
        let mut graph: Graph<i32, i32> = Graph::new();
        graph.add_edge(1, 2, 10);
        graph.add_edge(1, 2, 3);

        assert!(!graph.has_edge_exact(&Edge::new(1, 2, 4)));
        assert!(!graph.remove_edge_exact(&Edge::new(1, 2, 4)));
        assert!(graph.has_edge_exact(&Edge::new(1, 2, 3)));

        assert!(graph.remove_edge_exact(&Edge::new(1, 2, 3)));
        assert_eq!(graph.edges(&1), vec![Edge::new(1, 2, 10)]);
        assert!(!graph.has_edge_exact(&Edge::new(1, 2, 3)));
    }

    #[test]
    fn test_remove_edge_missing_vertices() {
        let mut graph: Graph<i32, i32> = Graph::new();
        graph.add_edge(1, 2, 1);

        assert!(!graph.remove_edge(&1, &9));
        assert!(!graph.remove_edge(&9, &2));
        assert!(!graph.has_edge(&9, &2));
        assert!(!graph.remove_edge(&2, &1));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_remove_vertex_strips_edges() {
        let mut graph: Graph<char, i32> = Graph::new();
        graph.add_edge('a', 'b', 1);
        graph.add_edge('b', 'c', 1);
        graph.add_edge('c', 'b', 1);
        graph.add_edge('c', 'a', 1);
        graph.add_edge('a', 'c', 1);

        assert!(graph.remove_vertex(&'b'));
        assert!(!graph.remove_vertex(&'b'));
        assert!(!graph.has_vertex(&'b'));
        assert_eq!(graph.vertices(), vec!['a', 'c']);

        for v in graph.vertices() {
            assert!(graph.edges(&v).iter().all(|e| !e.touches(&'b')));
        }
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_remove_vertex_keeps_order() {
        let mut graph: Graph<i32, i32> = Graph::new();
        for v in 0..5 {
            graph.add_vertex(v);
        }
        graph.remove_vertex(&2);
        assert_eq!(graph.vertices(), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_random_mutations_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut graph: Graph<u8, i32> = Graph::new();

        for _ in 0..2000 {
            let a: u8 = rng.gen_range(0..20);
            let b: u8 = rng.gen_range(0..20);
            match rng.gen_range(0..4) {
                0 | 1 => {
                    let d = rng.gen_range(-5..20);
                    graph.add_edge(a, b, d);
                    assert!(graph.has_edge(&a, &b));
                    assert!(graph.edges(&a).iter().any(|e| e.to == b && e.distance == d));
                }
                2 => {
                    graph.remove_edge(&a, &b);
                }
                _ => {
                    graph.remove_vertex(&a);
                    assert!(!graph.has_vertex(&a));
                    for w in graph.vertices() {
                        assert!(graph.edges(&w).iter().all(|e| !e.touches(&a)));
                    }
                }
            }

            for (v, edges) in &graph.adjacency {
                for e in edges {
                    assert_eq!(&e.from, v);
                    assert!(graph.has_vertex(&e.to));
                }
            }
        }
    }
}
