//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! generator_app (加载目录 → 生成 → 组装 → 写入 → 校验)
//!     ↓
//! services (能力层：row_generator / sql_serializer / script_assembler / script_writer / script_reader)
//!     ↓
//! models (数据：TopicCatalog / GeneratedRow)
//! ```
//!
//! 编排层只做调度和统计，不拼 SQL、不选随机值。

pub mod generator_app;

pub use generator_app::{App, GenerationReport, TopicSummary};
