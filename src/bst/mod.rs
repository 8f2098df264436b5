//! 二叉搜索树集合
//!
//! 与图的遍历结果组合使用：把可达顶点放进集合即可得到有序的可达集。

mod set;

pub use set::{IntSet, Iter};
