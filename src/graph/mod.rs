//! 图输入模块
//!
//! 图描述的结构校验与邻接结构构建

mod builder;
mod validator;

pub use builder::GraphBuilder;
pub use validator::{GraphValidator, ValidationResult};
