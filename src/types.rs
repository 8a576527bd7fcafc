//! 核心类型定义
//!
//! 图描述（外部输入）与容量/流量邻接结构

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// 节点标识符（外部输入给定的不透明字符串）
pub type NodeId = String;

/// 边容量（非负整数）
pub type Capacity = u64;

/// 类型化的邻接结构: 节点 -> (邻居 -> 数值)
///
/// 容量图、流量图和残量图共用同一形状。有序 Map 保证
/// 邻居遍历按标识符升序进行，使得算法轨迹完全可复现。
pub type AdjacencyMap = BTreeMap<NodeId, BTreeMap<NodeId, Capacity>>;

/// 收集邻接结构中引用到的全部节点（含仅作为邻居出现的节点）
pub fn referenced_nodes(graph: &AdjacencyMap) -> BTreeSet<NodeId> {
    let mut nodes = BTreeSet::new();
    for (u, neighbors) in graph {
        nodes.insert(u.clone());
        for v in neighbors.keys() {
            nodes.insert(v.clone());
        }
    }
    nodes
}

/// 边描述
///
/// 外部输入中的一条边。容量和初始流量使用有符号整数，
/// 以便校验器能够报告非正容量和负初始流量；
/// 通过校验后由 [`GraphBuilder`](crate::graph::GraphBuilder) 转换为 `u64`。
///
/// JSON 表示为 3 元或 4 元数组: `["u", "v", capacity]` 或
/// `["u", "v", capacity, initial_flow]`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEdge", into = "RawEdge")]
pub struct EdgeSpec {
    /// 起点
    pub from: NodeId,
    /// 终点
    pub to: NodeId,
    /// 容量
    pub capacity: i64,
    /// 初始流量（三元组形式默认为 0）
    pub initial_flow: i64,
}

impl EdgeSpec {
    /// 创建初始流量为 0 的边
    pub fn new(from: &str, to: &str, capacity: i64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            capacity,
            initial_flow: 0,
        }
    }

    /// 创建带初始流量的边
    pub fn with_flow(from: &str, to: &str, capacity: i64, initial_flow: i64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            capacity,
            initial_flow,
        }
    }
}

/// 序列化中间表示：3 元组或 4 元组
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawEdge {
    Quad(NodeId, NodeId, i64, i64),
    Triple(NodeId, NodeId, i64),
}

impl From<RawEdge> for EdgeSpec {
    fn from(raw: RawEdge) -> Self {
        match raw {
            RawEdge::Triple(from, to, capacity) => Self {
                from,
                to,
                capacity,
                initial_flow: 0,
            },
            RawEdge::Quad(from, to, capacity, initial_flow) => Self {
                from,
                to,
                capacity,
                initial_flow,
            },
        }
    }
}

impl From<EdgeSpec> for RawEdge {
    fn from(edge: EdgeSpec) -> Self {
        if edge.initial_flow == 0 {
            RawEdge::Triple(edge.from, edge.to, edge.capacity)
        } else {
            RawEdge::Quad(edge.from, edge.to, edge.capacity, edge.initial_flow)
        }
    }
}

impl From<(&str, &str, i64)> for EdgeSpec {
    fn from((from, to, capacity): (&str, &str, i64)) -> Self {
        Self::new(from, to, capacity)
    }
}

impl From<(&str, &str, i64, i64)> for EdgeSpec {
    fn from((from, to, capacity, initial_flow): (&str, &str, i64, i64)) -> Self {
        Self::with_flow(from, to, capacity, initial_flow)
    }
}

/// 图描述
///
/// 外部协作方提供的原始输入: 节点序列、边列表、源点和汇点。
/// 构建和运行之前必须先通过 [`GraphValidator`](crate::graph::GraphValidator) 校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// 节点标识符序列（应互不相同）
    pub nodes: Vec<NodeId>,
    /// 边列表
    pub edges: Vec<EdgeSpec>,
    /// 源点
    pub source: NodeId,
    /// 汇点
    pub sink: NodeId,
}

impl GraphDescription {
    /// 创建图描述
    pub fn new(nodes: &[&str], edges: Vec<EdgeSpec>, source: &str, sink: &str) -> Self {
        Self {
            nodes: nodes.iter().map(|n| n.to_string()).collect(),
            edges,
            source: source.to_string(),
            sink: sink.to_string(),
        }
    }
}
