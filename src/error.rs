//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("图结构无效: {0}")]
    InvalidGraph(String),

    #[error("路径过短, 无法计算瓶颈容量: {0} 个节点")]
    PathTooShort(usize),

    #[error("残量图中不存在边: {from} -> {to}")]
    MissingResidualEdge { from: String, to: String },

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
