//! 残量图计算
//!
//! 残量图只包含正向边: `remaining = capacity - flow`，仅收录
//! `remaining > 0` 的边。本引擎刻意不引入反向（抵消）边，
//! 这是与教科书 Ford-Fulkerson 的已知偏差，必须原样保持
//! （见 crate 级文档）。

use crate::types::AdjacencyMap;

/// 残量图
pub struct ResidualGraph;

impl ResidualGraph {
    /// 由容量图和当前流量计算残量图
    ///
    /// 纯函数，O(E)。流量图中缺失的条目按流量 0 处理。
    /// 结果不会包含容量图中不存在的边，也不会包含任何反向边。
    pub fn compute(graph: &AdjacencyMap, flow: &AdjacencyMap) -> AdjacencyMap {
        let mut residual = AdjacencyMap::new();

        for (u, neighbors) in graph {
            for (v, &capacity) in neighbors {
                let current = flow.get(u).and_then(|m| m.get(v)).copied().unwrap_or(0);
                let remaining = capacity.saturating_sub(current);

                if remaining > 0 {
                    residual
                        .entry(u.clone())
                        .or_default()
                        .insert(v.clone(), remaining);
                }
            }
        }

        residual
    }
}
