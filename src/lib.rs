//! # COPA Question Bank
//!
//! 生成 COPA 题库 `INSERT` 脚本的 Rust 工具
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/catalog` - 题目目录（分类 → 知识点 → 数量），内置 COPA 目录
//! - `models/row` - 单行题目数据、难度、正确答案
//! - `models/loaders` - 从 TOML 加载自定义目录
//!
//! ### ② 业务能力层（Services）
//! - `RowGenerator` - 展开知识点为占位题目行，随机源由调用方注入
//! - `sql_serializer` - 行 → SQL 值元组（单引号转义）
//! - `ScriptBuilder` - 追加式组装单条 `INSERT` 语句
//! - `ScriptWriter` - 脚本落盘
//! - `script_reader` - 回读脚本，解析值元组
//! - `script_merger` - 英文、印地语脚本按行合并为双语脚本
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/generator_app` - 串联整个流程并输出统计；双语合并入口
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::{Config, MergeSources};
pub use error::{AppError, AppResult};
pub use models::{CorrectAnswer, Difficulty, GeneratedRow, TopicCatalog};
pub use orchestrator::{App, GenerationReport};
pub use services::{assemble, merge_bilingual, MergeOutcome, RowGenerator, ScriptBuilder};
