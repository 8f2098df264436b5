//! 二叉搜索树整数集合
//!
//! 不做自平衡，所有操作 O(h)。按升序插入会让树退化成链表，
//! 因此插入、删除、复制和释放都用显式循环或栈实现，不依赖递归深度。

use std::cmp::Ordering;
use std::fmt;

type Link = Option<Box<Node>>;

struct Node {
    key: i32,
    left: Link,
    right: Link,
}

impl Node {
    fn new(key: i32) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// 整数集合
#[derive(Default)]
pub struct IntSet {
    root: Link,
    len: usize,
}

impl IntSet {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 元素个数
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// 插入元素；已存在时返回 false，集合不变
    pub fn insert(&mut self, key: i32) -> bool {
        let slot = Self::find_slot(&mut self.root, key);
        if slot.is_some() {
            return false;
        }
        *slot = Some(Box::new(Node::new(key)));
        self.len += 1;
        true
    }

    /// 是否包含元素
    pub fn contains(&self, key: i32) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// 删除元素；不存在时返回 false
    ///
    /// 有两个孩子的节点：用右子树最小值替换本节点的键，再从右子树中删去该最小值。
    pub fn erase(&mut self, key: i32) -> bool {
        let slot = Self::find_slot(&mut self.root, key);
        if slot.is_none() {
            return false;
        }
        Self::unlink(slot);
        self.len -= 1;
        true
    }

    /// 最小元素
    pub fn min(&self) -> Option<i32> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(node.key)
    }

    /// 最大元素
    pub fn max(&self) -> Option<i32> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.key)
    }

    /// 树高（空树为 0）
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|n| n.left.as_deref().into_iter().chain(n.right.as_deref()))
                .collect();
        }
        height
    }

    /// 升序迭代
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }

    /// 中序遍历得到的升序元素
    pub fn sorted_elements(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// 清空集合，按后序释放节点
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            match node.left.take().or_else(|| node.right.take()) {
                Some(child) => {
                    stack.push(node);
                    stack.push(child);
                }
                None => drop(node),
            }
        }
        self.len = 0;
    }

    /// key 所在（或应当插入）的位置
    fn find_slot(mut link: &mut Link, key: i32) -> &mut Link {
        loop {
            match link.as_ref().map(|node| key.cmp(&node.key)) {
                Some(Ordering::Less) => {
                    if let Some(node) = link {
                        link = &mut node.left;
                    }
                }
                Some(Ordering::Greater) => {
                    if let Some(node) = link {
                        link = &mut node.right;
                    }
                }
                _ => return link,
            }
        }
    }

    /// 摘除 slot 处的节点
    fn unlink(slot: &mut Link) {
        let Some(mut node) = slot.take() else {
            return;
        };
        match (node.left.take(), node.right.take()) {
            (left, None) => *slot = left,
            (None, right) => *slot = right,
            (left, right) => {
                node.left = left;
                node.right = right;
                if let Some(successor) = Self::take_min(&mut node.right) {
                    node.key = successor;
                }
                *slot = Some(node);
            }
        }
    }

    /// 摘除子树中的最小节点，返回其键
    fn take_min(mut link: &mut Link) -> Option<i32> {
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            if let Some(node) = link {
                link = &mut node.left;
            }
        }
        let mut node = link.take()?;
        *link = node.right.take();
        Some(node.key)
    }
}

impl Clone for IntSet {
    /// 深拷贝：后序重建每个节点
    fn clone(&self) -> Self {
        let Some(root) = self.root.as_deref() else {
            return Self::new();
        };

        let mut work: Vec<(&Node, bool)> = vec![(root, false)];
        let mut built: Vec<Box<Node>> = Vec::new();
        while let Some((node, children_built)) = work.pop() {
            if children_built {
                let left = node.left.as_ref().and_then(|_| built.pop());
                let right = node.right.as_ref().and_then(|_| built.pop());
                built.push(Box::new(Node {
                    key: node.key,
                    left,
                    right,
                }));
            } else {
                work.push((node, true));
                // 先建右子树再建左子树，出栈时左子树在上
                if let Some(left) = node.left.as_deref() {
                    work.push((left, false));
                }
                if let Some(right) = node.right.as_deref() {
                    work.push((right, false));
                }
            }
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl Drop for IntSet {
    fn drop(&mut self) {
        self.clear();
    }
}

impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for IntSet {}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// 升序输出，空格分隔
impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl FromIterator<i32> for IntSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<i32> for IntSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 中序迭代器
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: &'a Link) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left(root.as_deref());
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.key)
    }
}
