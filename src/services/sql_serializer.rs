//! SQL 值元组序列化

use std::borrow::Cow;

use crate::models::GeneratedRow;

/// 转义 SQL 字符串字面量：单引号加倍
pub fn escape_sql_literal(text: &str) -> Cow<'_, str> {
    if text.contains('\'') {
        Cow::Owned(text.replace('\'', "''"))
    } else {
        Cow::Borrowed(text)
    }
}

/// 把任意字段写成 `('a', 'b', ...)`，每个字段都加引号并转义
pub fn write_tuple(out: &mut String, fields: &[&str]) {
    out.push('(');
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('\'');
        out.push_str(&escape_sql_literal(field));
        out.push('\'');
    }
    out.push(')');
}

/// 按固定列序排列一行的九个字段
pub fn row_fields(row: &GeneratedRow) -> [&str; 9] {
    let [a, b, c, d] = &row.options;
    [
        &row.category,
        &row.sub_topic,
        &row.question,
        a,
        b,
        c,
        d,
        row.correct_answer.as_str(),
        row.difficulty.label(),
    ]
}

/// 把一行写成 `('category', 'sub_topic', 'question', 'a', 'b', 'c', 'd', 'X', 'Difficulty')`
pub fn write_row(out: &mut String, row: &GeneratedRow) {
    write_tuple(out, &row_fields(row));
}

/// 序列化单行为独立字符串
pub fn serialize_row(row: &GeneratedRow) -> String {
    let mut buf = String::with_capacity(128);
    write_row(&mut buf, row);
    buf
}
