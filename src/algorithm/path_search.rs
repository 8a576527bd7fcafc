//! 增广路径搜索
//!
//! 在残量图上做广度优先搜索，重构路径并计算瓶颈容量

use crate::error::{Error, Result};
use crate::types::{AdjacencyMap, Capacity, NodeId};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// 路径查找器
pub struct PathFinder;

impl PathFinder {
    /// BFS 查找从 source 到 sink 的增广路径
    ///
    /// 每个节点至多访问一次，只走残量大于 0 的正向边。
    /// sink 出队或队列耗尽时立即返回。邻居按标识符升序遍历，
    /// 保证相同输入产生相同的父指针表。
    ///
    /// 返回 `(是否找到, 父指针表)`；source 不在父指针表中。
    pub fn bfs_find_path(
        residual: &AdjacencyMap,
        source: &str,
        sink: &str,
    ) -> (bool, BTreeMap<NodeId, NodeId>) {
        let mut parent: BTreeMap<NodeId, NodeId> = BTreeMap::new();
        let mut visited: BTreeSet<NodeId> = BTreeSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        visited.insert(source.to_string());
        queue.push_back(source.to_string());

        while let Some(u) = queue.pop_front() {
            if u == sink {
                return (true, parent);
            }

            if let Some(neighbors) = residual.get(&u) {
                for (v, &remaining) in neighbors {
                    if remaining > 0 && !visited.contains(v) {
                        visited.insert(v.clone());
                        parent.insert(v.clone(), u.clone());
                        queue.push_back(v.clone());
                    }
                }
            }
        }

        (false, parent)
    }

    /// 沿父指针表从 sink 回溯到 source 并反转
    pub fn reconstruct_path(
        parent: &BTreeMap<NodeId, NodeId>,
        source: &str,
        sink: &str,
    ) -> Vec<NodeId> {
        let mut path = vec![sink.to_string()];
        let mut current = sink.to_string();

        while current != source {
            match parent.get(&current) {
                Some(prev) => {
                    current = prev.clone();
                    path.push(current.clone());
                }
                None => break,
            }
        }

        path.reverse();
        path
    }

    /// 计算路径的瓶颈容量（路径上各边残量的最小值）
    ///
    /// 路径少于 2 个节点、或路径上的边不在残量图中时返回错误。
    pub fn compute_bottleneck(path: &[NodeId], residual: &AdjacencyMap) -> Result<Capacity> {
        if path.len() < 2 {
            return Err(Error::PathTooShort(path.len()));
        }

        let mut bottleneck = Capacity::MAX;
        for pair in path.windows(2) {
            let (u, v) = (&pair[0], &pair[1]);
            let remaining = residual
                .get(u)
                .and_then(|m| m.get(v))
                .copied()
                .ok_or_else(|| Error::MissingResidualEdge {
                    from: u.clone(),
                    to: v.clone(),
                })?;
            bottleneck = bottleneck.min(remaining);
        }

        Ok(bottleneck)
    }
}
