//! FlowTrace - 可回放的最大流计算引擎
//!
//! 在有向容量网络上计算最大流，并为每个算法阶段记录确定性的、
//! 可回放的步骤快照（增广路径、流量更新、终止时的最小割），
//! 供外部可视化与逐步讲解使用。
//!
//! # 前向残量边（与教科书算法的偏差）
//!
//! 增广路径搜索只使用正向残量边，从不引入反向（抵消）边。
//! 这是对原始行为的刻意保留：对某些网络，结果会低于经典
//! Ford-Fulkerson 的最大流，终止时的割值也可能高于报告的流值。
//! 使用方不应依赖 `max_flow == cut_value` 在任意网络上成立。
//!
//! # 确定性
//!
//! 所有邻接结构使用有序 Map，BFS 按标识符升序展开邻居，
//! 相同输入在任何平台上产生逐字节相同的步骤序列。

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    FordFulkerson, MinCut, MinimumCut, PathFinder, ResidualGraph, RunStats, Step, StepKind,
};
pub use error::{Error, Result};
pub use graph::{GraphBuilder, GraphValidator, ValidationResult};
pub use types::{AdjacencyMap, Capacity, EdgeSpec, GraphDescription, NodeId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
