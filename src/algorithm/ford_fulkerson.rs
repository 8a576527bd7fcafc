//! Ford-Fulkerson 算法编排
//!
//! 状态机: `INITIAL → (SEARCHING → AUGMENTING)* → COMPLETE`。
//! 每个阶段追加一条不可变步骤记录；增广路径搜索只使用正向残量边
//! （见 crate 级文档中对该偏差的说明）。

use crate::algorithm::min_cut::MinimumCut;
use crate::algorithm::path_search::PathFinder;
use crate::algorithm::residual::ResidualGraph;
use crate::algorithm::step::Step;
use crate::error::Result;
use crate::types::{AdjacencyMap, Capacity, NodeId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// 运行统计
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// 主循环迭代次数（含未找到路径的最后一轮）
    pub iterations: usize,
    /// 找到的增广路径数
    pub augmenting_paths: usize,
    /// 记录的步骤数
    pub steps_recorded: usize,
    /// 运行耗时（毫秒）
    pub duration_ms: u64,
}

/// Ford-Fulkerson 运行上下文
///
/// 由调用方独占持有，一次运行对应一个实例；引擎不持有任何
/// 进程级可变状态。输入应当已通过
/// [`GraphValidator`](crate::graph::GraphValidator) 校验，
/// 此处不再重复校验。
pub struct FordFulkerson {
    graph: AdjacencyMap,
    source: NodeId,
    sink: NodeId,
    flow: Arc<AdjacencyMap>,
    max_flow: Capacity,
    steps: Vec<Step>,
    stats: RunStats,
}

impl FordFulkerson {
    /// 创建运行上下文，所有边的流量清零
    pub fn new(graph: AdjacencyMap, source: &str, sink: &str) -> Self {
        let mut flow = AdjacencyMap::new();
        for (u, neighbors) in &graph {
            let entry = flow.entry(u.clone()).or_default();
            for v in neighbors.keys() {
                entry.insert(v.clone(), 0);
            }
        }
        Self::with_initial_flow(graph, flow, source, sink)
    }

    /// 创建运行上下文，保留调用方提供的初始流量
    pub fn with_initial_flow(
        graph: AdjacencyMap,
        flow: AdjacencyMap,
        source: &str,
        sink: &str,
    ) -> Self {
        Self {
            graph,
            source: source.to_string(),
            sink: sink.to_string(),
            flow: Arc::new(flow),
            max_flow: 0,
            steps: Vec::new(),
            stats: RunStats::default(),
        }
    }

    /// 执行算法直至终止，返回最大流值
    ///
    /// 同步阻塞调用。整数容量下瓶颈至少为 1，累计流量严格递增，
    /// 因此至多 `max_flow` 次迭代后必然终止。流量快照通过写时
    /// 复制共享：已记录的步骤持有旧快照时，下一次增广前才克隆
    /// 一次工作流量。
    pub fn run(&mut self) -> Result<Capacity> {
        let started = Instant::now();

        // 记录初始状态
        let residual = Arc::new(ResidualGraph::compute(&self.graph, &self.flow));
        self.steps.push(Step::initial(
            Arc::clone(&self.flow),
            residual,
            &self.source,
            &self.sink,
        ));

        let mut iteration = 0usize;
        loop {
            iteration += 1;

            // SEARCHING: 计算残量图并查找增广路径
            let residual = Arc::new(ResidualGraph::compute(&self.graph, &self.flow));
            let (found, parent) = PathFinder::bfs_find_path(&residual, &self.source, &self.sink);

            if !found {
                // COMPLETE: 无增广路径，计算最小割并终止
                let min_cut = MinimumCut::find(&self.graph, &self.flow, &self.source);
                info!(
                    iterations = iteration,
                    max_flow = self.max_flow,
                    cut_value = min_cut.cut_value,
                    "无前向增广路径, 算法终止"
                );
                self.steps.push(Step::complete(
                    iteration,
                    Arc::clone(&self.flow),
                    residual,
                    self.max_flow,
                    min_cut,
                ));
                break;
            }

            let path = PathFinder::reconstruct_path(&parent, &self.source, &self.sink);
            let bottleneck = PathFinder::compute_bottleneck(&path, &residual)?;
            debug!(iteration, path = ?path, bottleneck, "找到增广路径");

            self.steps.push(Step::path_found(
                iteration,
                Arc::clone(&self.flow),
                residual,
                path.clone(),
                bottleneck,
                self.max_flow,
            ));

            // AUGMENTING: 沿路径增加流量
            let flow = Arc::make_mut(&mut self.flow);
            for pair in path.windows(2) {
                *flow
                    .entry(pair[0].clone())
                    .or_default()
                    .entry(pair[1].clone())
                    .or_insert(0) += bottleneck;
            }
            self.max_flow += bottleneck;
            self.stats.augmenting_paths += 1;

            let residual = Arc::new(ResidualGraph::compute(&self.graph, &self.flow));
            self.steps.push(Step::flow_updated(
                iteration,
                Arc::clone(&self.flow),
                residual,
                path,
                bottleneck,
                self.max_flow,
            ));
        }

        self.stats.iterations = iteration;
        self.stats.steps_recorded = self.steps.len();
        self.stats.duration_ms = started.elapsed().as_millis() as u64;
        Ok(self.max_flow)
    }

    /// 当前累计最大流
    pub fn max_flow(&self) -> Capacity {
        self.max_flow
    }

    /// 已记录的步骤序列
    pub fn get_steps(&self) -> &[Step] {
        &self.steps
    }

    /// 最终流量
    pub fn get_final_flow(&self) -> &AdjacencyMap {
        self.flow.as_ref()
    }

    /// 运行统计
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}
