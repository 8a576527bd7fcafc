//! 图结构校验
//!
//! 在构建邻接结构之前检查图描述的良构性。
//! 校验失败以结果值返回，不作为错误抛出；消息文本是对外契约的一部分。

use crate::error::{Error, Result};
use crate::types::GraphDescription;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 校验结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// 是否通过
    pub is_valid: bool,
    /// 人类可读的原因（通过时为 "Graph is valid"）
    pub message: String,
}

impl ValidationResult {
    fn pass() -> Self {
        Self {
            is_valid: true,
            message: "Graph is valid".to_string(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// 图结构校验器
///
/// 纯函数，无副作用。按固定顺序检查，遇到第一个失败即返回:
/// 源汇非空、源汇不同、源汇存在于节点集、边列表非空、
/// 每条边的端点存在且 `0 < capacity`、`0 <= initial_flow <= capacity`。
pub struct GraphValidator;

impl GraphValidator {
    /// 校验图描述
    pub fn validate(description: &GraphDescription) -> ValidationResult {
        if description.source.is_empty() || description.sink.is_empty() {
            return ValidationResult::fail("Source or sink node not specified");
        }

        if description.source == description.sink {
            return ValidationResult::fail("Source and sink must be different nodes");
        }

        let nodes: BTreeSet<&str> = description.nodes.iter().map(|n| n.as_str()).collect();

        if !nodes.contains(description.source.as_str()) {
            return ValidationResult::fail(format!(
                "Source node '{}' not found in graph",
                description.source
            ));
        }
        if !nodes.contains(description.sink.as_str()) {
            return ValidationResult::fail(format!(
                "Sink node '{}' not found in graph",
                description.sink
            ));
        }

        if description.edges.is_empty() {
            return ValidationResult::fail("Graph has no edges");
        }

        for edge in &description.edges {
            if !nodes.contains(edge.from.as_str()) {
                return ValidationResult::fail(format!(
                    "Edge references unknown node: {}",
                    edge.from
                ));
            }
            if !nodes.contains(edge.to.as_str()) {
                return ValidationResult::fail(format!(
                    "Edge references unknown node: {}",
                    edge.to
                ));
            }

            if edge.capacity <= 0 {
                return ValidationResult::fail(format!(
                    "Edge ({}, {}) has non-positive capacity: {}",
                    edge.from, edge.to, edge.capacity
                ));
            }

            if edge.initial_flow < 0 {
                return ValidationResult::fail(format!(
                    "Edge ({}, {}) has negative initial flow: {}",
                    edge.from, edge.to, edge.initial_flow
                ));
            }
            if edge.initial_flow > edge.capacity {
                return ValidationResult::fail(format!(
                    "Edge ({}, {}) has flow ({}) exceeding capacity ({})",
                    edge.from, edge.to, edge.initial_flow, edge.capacity
                ));
            }
        }

        ValidationResult::pass()
    }

    /// 校验并将失败转换为错误，便于调用方使用 `?`
    pub fn ensure(description: &GraphDescription) -> Result<()> {
        let result = Self::validate(description);
        if result.is_valid {
            Ok(())
        } else {
            Err(Error::InvalidGraph(result.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EdgeSpec;

    fn diamond() -> GraphDescription {
        GraphDescription::new(
            &["s", "1", "2", "t"],
            vec![
                EdgeSpec::new("s", "1", 2),
                EdgeSpec::new("s", "2", 4),
                EdgeSpec::new("1", "t", 1),
                EdgeSpec::new("1", "2", 3),
                EdgeSpec::new("2", "t", 5),
            ],
            "s",
            "t",
        )
    }

    #[test]
    fn test_valid_graph() {
        let result = GraphValidator::validate(&diamond());
        assert!(result.is_valid);
        assert_eq!(result.message, "Graph is valid");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let desc = diamond();
        // 重复校验同一描述必须始终返回相同结果
        for _ in 0..3 {
            let result = GraphValidator::validate(&desc);
            assert!(result.is_valid);
            assert_eq!(result.message, "Graph is valid");
        }
    }

    #[test]
    fn test_missing_source() {
        let mut desc = diamond();
        desc.source = String::new();
        let result = GraphValidator::validate(&desc);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Source or sink node not specified");
    }

    #[test]
    fn test_source_equals_sink() {
        let mut desc = diamond();
        desc.sink = "s".to_string();
        let result = GraphValidator::validate(&desc);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Source and sink must be different nodes");
    }

    #[test]
    fn test_source_not_in_nodes() {
        let mut desc = diamond();
        desc.source = "x".to_string();
        let result = GraphValidator::validate(&desc);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Source node 'x' not found in graph");
    }

    #[test]
    fn test_sink_not_in_nodes() {
        let mut desc = diamond();
        desc.sink = "y".to_string();
        let result = GraphValidator::validate(&desc);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Sink node 'y' not found in graph");
    }

    #[test]
    fn test_no_edges() {
        let mut desc = diamond();
        desc.edges.clear();
        let result = GraphValidator::validate(&desc);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Graph has no edges");
    }

    #[test]
    fn test_edge_with_unknown_node() {
        let mut desc = diamond();
        desc.edges.push(EdgeSpec::new("1", "z", 7));
        let result = GraphValidator::validate(&desc);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Edge references unknown node: z");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut desc = diamond();
        desc.edges.push(EdgeSpec::new("1", "2", 0));
        let result = GraphValidator::validate(&desc);
        assert!(!result.is_valid);
        assert_eq!(
            result.message,
            "Edge (1, 2) has non-positive capacity: 0"
        );
    }

    #[test]
    fn test_negative_initial_flow_rejected() {
        let mut desc = diamond();
        desc.edges.push(EdgeSpec::with_flow("1", "2", 3, -1));
        let result = GraphValidator::validate(&desc);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Edge (1, 2) has negative initial flow: -1");
    }

    #[test]
    fn test_flow_exceeding_capacity_rejected() {
        let mut desc = diamond();
        desc.edges.push(EdgeSpec::with_flow("1", "2", 3, 5));
        let result = GraphValidator::validate(&desc);
        assert!(!result.is_valid);
        assert_eq!(
            result.message,
            "Edge (1, 2) has flow (5) exceeding capacity (3)"
        );
    }

    #[test]
    fn test_checks_stop_at_first_failure() {
        // 源汇相同且边列表为空时，先报告源汇问题
        let desc = GraphDescription::new(&["s"], vec![], "s", "s");
        let result = GraphValidator::validate(&desc);
        assert_eq!(result.message, "Source and sink must be different nodes");
    }

    #[test]
    fn test_ensure_maps_failure_to_error() {
        let mut desc = diamond();
        desc.sink = "s".to_string();
        let err = GraphValidator::ensure(&desc).unwrap_err();
        assert!(err.to_string().contains("Source and sink must be different"));
    }
}
