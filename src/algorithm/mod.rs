//! 最大流算法模块
//!
//! 残量图、增广路径搜索、最小割与算法编排

mod ford_fulkerson;
mod min_cut;
mod path_search;
mod residual;
mod step;

pub use ford_fulkerson::{FordFulkerson, RunStats};
pub use min_cut::{MinCut, MinimumCut};
pub use path_search::PathFinder;
pub use residual::ResidualGraph;
pub use step::{Step, StepKind};
