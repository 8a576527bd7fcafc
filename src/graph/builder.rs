//! 邻接结构构建
//!
//! 将已通过校验的边列表转换为容量图和流量图

use crate::types::{AdjacencyMap, EdgeSpec};

/// 图构建器
///
/// 输入必须已通过 [`GraphValidator`](super::GraphValidator) 校验；
/// 构建器本身不做检查。容量图与流量图在同一趟遍历中产生，
/// 因此两者形状一致。
pub struct GraphBuilder;

impl GraphBuilder {
    /// 从边列表构建 (容量图, 初始流量图)
    ///
    /// 同一有序节点对 `(u, v)` 的后出现条目覆盖先出现条目
    /// （边列表语义，最后写入生效）。
    pub fn from_edges(edges: &[EdgeSpec]) -> (AdjacencyMap, AdjacencyMap) {
        let mut graph = AdjacencyMap::new();
        let mut flow = AdjacencyMap::new();

        for edge in edges {
            graph
                .entry(edge.from.clone())
                .or_default()
                .insert(edge.to.clone(), edge.capacity as u64);
            flow.entry(edge.from.clone())
                .or_default()
                .insert(edge.to.clone(), edge.initial_flow as u64);
        }

        (graph, flow)
    }
}
