//! 算法步骤记录
//!
//! 每个阶段结束时追加一条不可变的快照记录，供外部回放和可视化。
//! 快照通过 `Arc` 写时复制共享，追加后不会被后续流量变更影响。

use crate::algorithm::min_cut::MinCut;
use crate::types::{AdjacencyMap, Capacity, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// 步骤类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// 初始状态
    Initial,
    /// 找到增广路径
    PathFound,
    /// 流量已更新
    FlowUpdated,
    /// 算法结束
    Complete,
}

/// 算法步骤
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// 步骤类别
    pub kind: StepKind,
    /// 迭代序号（初始状态为 0）
    pub iteration: usize,
    /// 该时刻的流量快照
    pub flow: Arc<AdjacencyMap>,
    /// 该时刻的残量图快照
    pub residual: Arc<AdjacencyMap>,
    /// 增广路径（仅 path_found / flow_updated）
    pub path: Option<Vec<NodeId>>,
    /// 瓶颈容量（无路径时为 0）
    pub bottleneck: Capacity,
    /// 累计最大流
    pub max_flow: Capacity,
    /// 人类可读的解释文本
    pub explanation: String,
    /// 最小割数据（仅终止步骤）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cut: Option<MinCut>,
}

impl Step {
    /// 初始状态步骤
    pub fn initial(
        flow: Arc<AdjacencyMap>,
        residual: Arc<AdjacencyMap>,
        source: &str,
        sink: &str,
    ) -> Self {
        let explanation = format!(
            "**Step 1-2: Initialize**\n\n\
             • Residual graph R ← Original graph G\n\
             • All flows ← 0\n\n\
             Source: {}, Sink: {}\n\n\
             **Note**: Using FORWARD EDGES ONLY (no backward edges)",
            source, sink
        );
        Self {
            kind: StepKind::Initial,
            iteration: 0,
            flow,
            residual,
            path: None,
            bottleneck: 0,
            max_flow: 0,
            explanation,
            min_cut: None,
        }
    }

    /// 找到增广路径的步骤（增广前的状态）
    pub fn path_found(
        iteration: usize,
        flow: Arc<AdjacencyMap>,
        residual: Arc<AdjacencyMap>,
        path: Vec<NodeId>,
        bottleneck: Capacity,
        max_flow: Capacity,
    ) -> Self {
        let explanation = format!(
            "**Iteration {}: Augmenting Path Found**\n\n\
             Path: {}\n\
             Bottleneck Δ = {}",
            iteration,
            path.join(" → "),
            bottleneck
        );
        Self {
            kind: StepKind::PathFound,
            iteration,
            flow,
            residual,
            path: Some(path),
            bottleneck,
            max_flow,
            explanation,
            min_cut: None,
        }
    }

    /// 流量更新后的步骤
    pub fn flow_updated(
        iteration: usize,
        flow: Arc<AdjacencyMap>,
        residual: Arc<AdjacencyMap>,
        path: Vec<NodeId>,
        bottleneck: Capacity,
        max_flow: Capacity,
    ) -> Self {
        let explanation = format!(
            "**Flow Updated**\n\n\
             Added {} units along path\n\
             Current total flow: {}\n\
             Residual capacities updated",
            bottleneck, max_flow
        );
        Self {
            kind: StepKind::FlowUpdated,
            iteration,
            flow,
            residual,
            path: Some(path),
            bottleneck,
            max_flow,
            explanation,
            min_cut: None,
        }
    }

    /// 终止步骤，携带最小割数据
    pub fn complete(
        iteration: usize,
        flow: Arc<AdjacencyMap>,
        residual: Arc<AdjacencyMap>,
        max_flow: Capacity,
        min_cut: MinCut,
    ) -> Self {
        let check = if max_flow == min_cut.cut_value {
            "✓"
        } else {
            "✗"
        };
        let explanation = format!(
            "**Algorithm Complete**\n\n\
             No forward-only augmenting path exists\n\n\
             **Final Flow Value: {}**\n\n\
             **Minimum Cut:**\n\
             • S = {{{}}}\n\
             • T = {{{}}}\n\
             • Cut edges: {:?}\n\
             • Cut capacity: {}\n\n\
             **Verification: {} = {} {}**",
            max_flow,
            join_partition(&min_cut.source_partition),
            join_partition(&min_cut.sink_partition),
            min_cut.cut_edges,
            min_cut.cut_value,
            max_flow,
            min_cut.cut_value,
            check
        );
        Self {
            kind: StepKind::Complete,
            iteration,
            flow,
            residual,
            path: None,
            bottleneck: 0,
            max_flow,
            explanation,
            min_cut: Some(min_cut),
        }
    }
}

fn join_partition(partition: &BTreeSet<NodeId>) -> String {
    partition
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
