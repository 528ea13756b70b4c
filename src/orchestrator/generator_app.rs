//! 题库脚本生成器 - 编排层
//!
//! ## 职责
//!
//! 1. **加载目录**：内置 COPA 目录，或配置的 TOML 目录
//! 2. **准备随机源**：有种子用种子，否则用系统熵
//! 3. **逐知识点生成**：生成行后立即追加进 `ScriptBuilder`，不保留整张表
//! 4. **落盘与校验**：写文件，按需回读并核对行数
//! 5. **统计输出**：日志统计 + stdout 一行摘要
//!
//! 另有双语合并模式：读入英文、印地语两份脚本，合并后写入同一输出路径。
//!
//! 单线程，顺序执行。

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::{Config, MergeSources};
use crate::error::{AppError, ScriptError};
use crate::models::{load_catalog, TopicCatalog};
use crate::services::{
    merge_bilingual, read_value_tuples, serialize_row, MergeOutcome, RowGenerator, ScriptBuilder,
    ScriptWriter,
};
use crate::utils::logging::{
    log_catalog_loaded, log_startup, log_topic_generated, print_final_stats, truncate_text,
};

/// 单个知识点的生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub category: String,
    pub sub_topic: String,
    pub rows: usize,
}

/// 一次生成的汇总
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub total_rows: usize,
    pub per_topic: Vec<TopicSummary>,
    pub output_file: String,
    pub script_bytes: usize,
    pub verified: bool,
}

impl GenerationReport {
    /// stdout 摘要行
    pub fn summary_line(&self) -> String {
        format!("Generated SQL file with {} questions!", self.total_rows)
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    generator: RowGenerator,
    writer: ScriptWriter,
}

impl App {
    pub fn new(config: Config) -> Self {
        let writer = ScriptWriter::with_path(&config.output_file);
        Self {
            config,
            generator: RowGenerator::new(),
            writer,
        }
    }

    /// 运行完整流程，随机源按配置创建
    pub async fn run(&self) -> Result<GenerationReport> {
        log_startup(&self.config.output_file, self.config.rng_seed);

        let catalog = self.load_catalog().await?;
        let mut rng = match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let report = self.run_with(&catalog, &mut rng).await?;
        println!("{}", report.summary_line());
        Ok(report)
    }

    /// 双语合并：两份脚本按行配对后写入输出文件
    pub async fn run_merge(&self, sources: &MergeSources) -> Result<MergeOutcome> {
        info!("🔀 正在合并 {}...", sources.label);
        let english = read_script(&sources.english_file).await?;
        let hindi = read_script(&sources.hindi_file).await?;

        let outcome = merge_bilingual(&english, &hindi, &sources.label)
            .with_context(|| format!("无法合并 {} 脚本", sources.label))?;

        self.writer
            .write(&outcome.script)
            .await
            .with_context(|| format!("无法写入SQL文件: {}", self.writer.path().display()))?;

        if self.config.verify_output {
            self.verify(outcome.merged_rows).await?;
        }

        info!(
            "✅ 已合并 {} 行 (英文 {}, 印地语 {})",
            outcome.merged_rows, outcome.english_rows, outcome.hindi_rows
        );
        println!("Written to {}", self.writer.path().display());
        Ok(outcome)
    }

    /// 使用给定目录和随机源运行（生成 → 写入 → 校验）
    pub async fn run_with<R: Rng + ?Sized>(
        &self,
        catalog: &TopicCatalog,
        rng: &mut R,
    ) -> Result<GenerationReport> {
        if catalog.is_empty() {
            warn!("⚠️ 题目目录为空，将输出不含任何数据行的 INSERT 语句");
        }

        let (script, per_topic) = self.build_script(catalog, rng);
        let total_rows: usize = per_topic.iter().map(|t| t.rows).sum();

        self.writer
            .write(&script)
            .await
            .with_context(|| format!("无法写入SQL文件: {}", self.writer.path().display()))?;
        info!("💾 已写入 {} 字节", script.len());

        if self.config.verify_output {
            self.verify(total_rows).await?;
        }

        let report = GenerationReport {
            total_rows,
            per_topic,
            output_file: self.config.output_file.clone(),
            script_bytes: script.len(),
            verified: self.config.verify_output,
        };

        print_final_stats(
            report.total_rows,
            report.script_bytes,
            report.verified,
            &report.output_file,
        );

        Ok(report)
    }

    /// 加载目录
    async fn load_catalog(&self) -> Result<TopicCatalog> {
        let (catalog, source) = match &self.config.catalog_file {
            Some(path) => {
                info!("\n📁 正在加载题目目录...");
                let catalog = load_catalog(Path::new(path))
                    .await
                    .with_context(|| format!("无法加载题目目录: {}", path))?;
                (catalog, path.clone())
            }
            None => (TopicCatalog::copa(), "内置 COPA 目录".to_string()),
        };

        log_catalog_loaded(
            &source,
            catalog.categories.len(),
            catalog.topic_count(),
            catalog.total_questions(),
        );
        Ok(catalog)
    }

    /// 逐知识点生成并追加到脚本
    fn build_script<R: Rng + ?Sized>(
        &self,
        catalog: &TopicCatalog,
        rng: &mut R,
    ) -> (String, Vec<TopicSummary>) {
        let mut builder = ScriptBuilder::with_capacity(catalog.total_questions());
        let mut per_topic = Vec::with_capacity(catalog.topic_count());

        for (category, topic) in catalog.iter_topics() {
            let rows = self
                .generator
                .generate_topic(category, &topic.name, topic.effective_count(), rng);

            if let Some(first) = rows.first() {
                debug!("示例: {}", truncate_text(&serialize_row(first), 120));
            }
            builder.extend(&rows);

            log_topic_generated(category, &topic.name, rows.len());
            per_topic.push(TopicSummary {
                category: category.to_string(),
                sub_topic: topic.name.clone(),
                rows: rows.len(),
            });
        }

        debug!("共追加 {} 行", builder.row_count());
        (builder.finish(), per_topic)
    }

    /// 回读文件并核对行数
    async fn verify(&self, expected: usize) -> Result<()> {
        let written = self.writer.read_back().await?;
        let tuples = read_value_tuples(&written)
            .with_context(|| format!("无法解析已写入的SQL文件: {}", self.writer.path().display()))?;

        if tuples.len() != expected {
            return Err(ScriptError::RowCountMismatch {
                expected,
                actual: tuples.len(),
            }
            .into());
        }

        info!("🔍 回读校验通过: {} 行", tuples.len());
        Ok(())
    }
}

async fn read_script(path: &str) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path, e))
        .with_context(|| format!("无法读取待合并的脚本: {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_format() {
        let report = GenerationReport {
            total_rows: 1320,
            per_topic: Vec::new(),
            output_file: "x.sql".to_string(),
            script_bytes: 0,
            verified: false,
        };
        assert_eq!(report.summary_line(), "Generated SQL file with 1320 questions!");
    }

    #[test]
    fn build_script_reports_each_topic() {
        let app = App::new(Config::default());
        let catalog = TopicCatalog::from_table(&[
            ("Theory", &[("JavaScript", 3), ("Broken", -2)]),
            ("Practical", &[("Command Line", 1)]),
        ]);
        let (script, per_topic) = app.build_script(&catalog, &mut StdRng::seed_from_u64(4));
        assert_eq!(
            per_topic.iter().map(|t| t.rows).collect::<Vec<_>>(),
            vec![3, 0, 1]
        );
        assert_eq!(read_value_tuples(&script).unwrap().len(), 4);
    }
}
