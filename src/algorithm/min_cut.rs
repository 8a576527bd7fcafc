//! 最小割计算
//!
//! 主循环终止后，按残量可达性划分节点并用原始容量计算割值

use crate::algorithm::residual::ResidualGraph;
use crate::types::{referenced_nodes, AdjacencyMap, Capacity, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

/// 最小割结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCut {
    /// 横跨割的边 (u ∈ S, v ∈ T)，按标识符升序排列
    pub cut_edges: Vec<(NodeId, NodeId)>,
    /// 源侧分区 S
    pub source_partition: BTreeSet<NodeId>,
    /// 汇侧分区 T
    pub sink_partition: BTreeSet<NodeId>,
    /// 割值（横跨边的原始容量之和）
    pub cut_value: Capacity,
}

/// 最小割计算器
pub struct MinimumCut;

impl MinimumCut {
    /// 计算最小割
    ///
    /// 只应在主循环找不到增广路径之后调用。从 source 沿正残量边
    /// BFS 可达的节点构成 S；图中引用到的其余节点构成 T。
    /// 割值使用原始容量，而非残量。
    pub fn find(graph: &AdjacencyMap, flow: &AdjacencyMap, source: &str) -> MinCut {
        let residual = ResidualGraph::compute(graph, flow);

        let mut reachable: BTreeSet<NodeId> = BTreeSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        reachable.insert(source.to_string());
        queue.push_back(source.to_string());

        while let Some(u) = queue.pop_front() {
            if let Some(neighbors) = residual.get(&u) {
                for (v, &remaining) in neighbors {
                    if remaining > 0 && !reachable.contains(v) {
                        reachable.insert(v.clone());
                        queue.push_back(v.clone());
                    }
                }
            }
        }

        let all_nodes = referenced_nodes(graph);
        let sink_partition: BTreeSet<NodeId> =
            all_nodes.difference(&reachable).cloned().collect();

        let mut cut_edges = Vec::new();
        let mut cut_value: Capacity = 0;
        for u in &reachable {
            if let Some(neighbors) = graph.get(u) {
                for (v, &capacity) in neighbors {
                    if sink_partition.contains(v) {
                        cut_edges.push((u.clone(), v.clone()));
                        cut_value += capacity;
                    }
                }
            }
        }

        MinCut {
            cut_edges,
            source_partition: reachable,
            sink_partition,
            cut_value,
        }
    }
}
