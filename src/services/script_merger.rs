//! 双语脚本合并服务
//!
//! 把英文脚本与印地语脚本按行号配对，合成一条 `INSERT`：
//! 分类、知识点、答案、难度取英文行，题干和四个选项拼成 `"英文 | 印地语"`。
//! 两边行数不一致时按较短的一边截断。

use tracing::{info, warn};

use crate::error::ScriptError;
use crate::services::script_assembler::{ScriptBuilder, COLUMNS};
use crate::services::script_reader::read_value_tuples;

/// 题干和选项的列下标
const TEXT_COLUMNS: std::ops::Range<usize> = 2..7;

/// 合并结果
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub script: String,
    pub english_rows: usize,
    pub hindi_rows: usize,
    pub merged_rows: usize,
}

/// 双语脚本的头部注释
pub fn bilingual_header(label: &str) -> String {
    let rule = "=".repeat(60);
    format!(
        "-- {rule}\n-- COPA {} QUESTION BANK - BILINGUAL (ENGLISH | HINDI)\n-- Generated automatically\n-- {rule}\n\n",
        label.to_uppercase()
    )
}

/// 合并两份脚本文本
///
/// `label` 是题库类型（Theory / Practical），只用于头部注释。
pub fn merge_bilingual(english: &str, hindi: &str, label: &str) -> Result<MergeOutcome, ScriptError> {
    let english_tuples = complete_tuples(english, "英文")?;
    let hindi_tuples = complete_tuples(hindi, "印地语")?;
    info!("英文题目: {}", english_tuples.len());
    info!("印地语题目: {}", hindi_tuples.len());

    let count = english_tuples.len().min(hindi_tuples.len());
    if english_tuples.len() != hindi_tuples.len() {
        warn!("⚠️ 两份脚本行数不同，只合并前 {} 行", count);
    }

    let mut builder = ScriptBuilder::with_header(&bilingual_header(label), count);
    for (e, h) in english_tuples.iter().zip(&hindi_tuples) {
        let merged = merge_tuple(e, h);
        let fields: Vec<&str> = merged.iter().map(String::as_str).collect();
        builder.push_fields(&fields);
    }

    Ok(MergeOutcome {
        merged_rows: builder.row_count(),
        script: builder.finish(),
        english_rows: english_tuples.len(),
        hindi_rows: hindi_tuples.len(),
    })
}

/// 解析脚本并丢弃列数不足的元组
fn complete_tuples(script: &str, side: &str) -> Result<Vec<Vec<String>>, ScriptError> {
    let tuples = read_value_tuples(script)?;
    let total = tuples.len();
    let complete: Vec<_> = tuples
        .into_iter()
        .filter(|t| t.len() >= COLUMNS.len())
        .collect();
    if complete.len() < total {
        warn!(
            "{}脚本中有 {} 行列数不足 {}，已跳过",
            side,
            total - complete.len(),
            COLUMNS.len()
        );
    }
    Ok(complete)
}

fn merge_tuple(english: &[String], hindi: &[String]) -> Vec<String> {
    (0..COLUMNS.len())
        .map(|i| {
            if TEXT_COLUMNS.contains(&i) {
                format!("{} | {}", english[i], hindi[i])
            } else {
                english[i].clone()
            }
        })
        .collect()
}
