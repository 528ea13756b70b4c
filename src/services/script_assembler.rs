//! SQL 脚本组装
//!
//! 固定头部注释 + 单条 `INSERT ... VALUES` + 以 `,\n` 连接的值元组 + `;`。
//! 无论多少行都只生成一条语句。

use crate::models::GeneratedRow;
use crate::services::sql_serializer::{write_row, write_tuple};

/// 脚本头部注释
pub const SCRIPT_HEADER: &str = "-- COMPLETE COPA QUESTION BANK - 1200+ Questions
-- Auto-generated SQL Script
-- Run this script in Supabase SQL Editor after creating the question_bank table

";

/// 目标表名
pub const TABLE_NAME: &str = "question_bank";

/// 列顺序，与值元组字段顺序一致
pub const COLUMNS: [&str; 9] = [
    "category",
    "sub_topic",
    "question",
    "option_a",
    "option_b",
    "option_c",
    "option_d",
    "correct_answer",
    "difficulty",
];

const ROW_SEPARATOR: &str = ",\n";

/// 追加式脚本构建器
#[derive(Debug)]
pub struct ScriptBuilder {
    buf: String,
    rows: usize,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 按预计行数预分配缓冲区，使用默认头部
    pub fn with_capacity(expected_rows: usize) -> Self {
        Self::with_header(SCRIPT_HEADER, expected_rows)
    }

    /// 使用自定义头部注释
    pub fn with_header(header: &str, expected_rows: usize) -> Self {
        let mut buf = String::with_capacity(header.len() + 160 + expected_rows * 140);
        buf.push_str(header);
        buf.push_str("INSERT INTO ");
        buf.push_str(TABLE_NAME);
        buf.push_str(" (");
        buf.push_str(&COLUMNS.join(", "));
        buf.push_str(") VALUES\n");
        Self { buf, rows: 0 }
    }

    /// 追加一行
    pub fn push_row(&mut self, row: &GeneratedRow) -> &mut Self {
        self.separate();
        write_row(&mut self.buf, row);
        self.rows += 1;
        self
    }

    /// 按列顺序追加原始字段
    pub fn push_fields(&mut self, fields: &[&str]) -> &mut Self {
        self.separate();
        write_tuple(&mut self.buf, fields);
        self.rows += 1;
        self
    }

    fn separate(&mut self) {
        if self.rows > 0 {
            self.buf.push_str(ROW_SEPARATOR);
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// 结束语句并返回完整脚本
    pub fn finish(mut self) -> String {
        self.buf.push(';');
        self.buf
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Extend<&'a GeneratedRow> for ScriptBuilder {
    fn extend<I: IntoIterator<Item = &'a GeneratedRow>>(&mut self, iter: I) {
        for row in iter {
            self.push_row(row);
        }
    }
}

/// 组装完整脚本
pub fn assemble(rows: &[GeneratedRow]) -> String {
    let mut builder = ScriptBuilder::with_capacity(rows.len());
    builder.extend(rows);
    builder.finish()
}
