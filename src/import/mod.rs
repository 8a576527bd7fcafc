//! 图描述导入模块
//!
//! 从 JSON 加载外部协作方提供的图描述

use crate::error::{Error, Result};
use crate::types::GraphDescription;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// 从 JSON 文件加载图描述
///
/// 期望的形状:
/// `{"nodes": [...], "edges": [["u", "v", cap] 或 ["u", "v", cap, flow], ...],
/// "source": "...", "sink": "..."}`
pub fn load_description<P: AsRef<Path>>(path: P) -> Result<GraphDescription> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let description: GraphDescription =
        serde_json::from_reader(reader).map_err(|e| Error::ImportError(e.to_string()))?;

    info!(
        nodes = description.nodes.len(),
        edges = description.edges.len(),
        "图描述已加载"
    );
    Ok(description)
}

/// 从 JSON 字符串解析图描述
pub fn parse_description(json: &str) -> Result<GraphDescription> {
    serde_json::from_str(json).map_err(|e| Error::ParseError(e.to_string()))
}
