//! 深度优先遍历

use crate::bst::IntSet;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::{Distance, VertexKey};
use std::collections::HashSet;
use tracing::debug;

/// 深度优先遍历器
pub struct DepthFirst<'a, V, D> {
    graph: &'a Graph<V, D>,
}

impl<'a, V: VertexKey, D: Distance> DepthFirst<'a, V, D> {
    /// 创建遍历器
    pub fn new(graph: &'a Graph<V, D>) -> Self {
        Self { graph }
    }

    /// 从 start 出发做先序深度优先遍历，按访问顺序回调 `visit`
    ///
    /// 出边按存储顺序展开，与递归实现的访问顺序一致。
    /// start 不在图中时返回 `VertexNotFound`。
    pub fn walk_with<F>(&self, start: &V, mut visit: F) -> Result<()>
    where
        F: FnMut(&V),
    {
        if !self.graph.has_vertex(start) {
            return Err(Error::VertexNotFound(format!("{:?}", start)));
        }

        let mut visited: HashSet<V> = HashSet::new();
        visited.insert(start.clone());
        visit(start);

        // 每层保存尚未展开的出边
        let mut stack: Vec<std::slice::Iter<'a, Edge<V, D>>> =
            vec![self.graph.outgoing(start).iter()];

        loop {
            let next = match stack.last_mut() {
                Some(edges) => edges.next(),
                None => break,
            };
            match next {
                Some(edge) => {
                    if visited.insert(edge.to.clone()) {
                        visit(&edge.to);
                        stack.push(self.graph.outgoing(&edge.to).iter());
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(start = ?start, visited = visited.len(), "深度优先遍历");
        Ok(())
    }

    /// 从 start 出发的访问序列
    pub fn walk(&self, start: &V) -> Result<Vec<V>> {
        let mut order = Vec::new();
        self.walk_with(start, |v| order.push(v.clone()))?;
        Ok(order)
    }

    /// 从 start 可达的顶点集合（能放进 i32 的顶点），升序保存在 [`IntSet`] 中
    pub fn reachable_set(&self, start: &V) -> Result<IntSet>
    where
        V: TryInto<i32>,
    {
        let mut set = IntSet::new();
        self.walk_with(start, |v| {
            if let Ok(key) = v.clone().try_into() {
                set.insert(key);
            }
        })?;
        Ok(set)
    }
}
