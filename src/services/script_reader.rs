//! SQL 脚本回读
//!
//! 解析 `INSERT ... VALUES (...), (...);` 脚本，还原每个值元组。
//! 只支持本工具输出的格式：单引号字面量（`''` 转义）和裸值。
//! `--` 注释只在字面量之外识别，字面量内部的换行和 `--` 都是数据。

use crate::error::ScriptError;

/// 字符游标
struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_second(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// 跳过空白和 `--` 行注释
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => self.pos += 1,
                Some('-') if self.peek_second() == Some('-') => {
                    while self.bump().is_some_and(|c| c != '\n') {}
                }
                _ => return,
            }
        }
    }

    /// 跳过一个单引号字面量（已位于开头的 `'` 之后），不保留内容
    fn skip_literal(&mut self) -> bool {
        while let Some(c) = self.bump() {
            if c == '\'' {
                if self.peek() == Some('\'') {
                    self.pos += 1;
                } else {
                    return true;
                }
            }
        }
        false
    }

    /// 前进到字面量和注释之外的 `VALUES` 关键字之后
    fn seek_values_keyword(&mut self) -> Result<(), ScriptError> {
        let mut word = String::new();
        loop {
            self.skip_trivia();
            let Some(c) = self.bump() else {
                return Err(ScriptError::MissingValues);
            };
            if c.is_alphanumeric() || c == '_' {
                word.push(c);
                let at_boundary = !self
                    .peek()
                    .is_some_and(|n| n.is_alphanumeric() || n == '_');
                if at_boundary {
                    if word.eq_ignore_ascii_case("VALUES") {
                        return Ok(());
                    }
                    word.clear();
                }
            } else {
                word.clear();
                if c == '\'' && !self.skip_literal() {
                    return Err(ScriptError::MissingValues);
                }
            }
        }
    }
}

/// 读取脚本中的所有值元组
pub fn read_value_tuples(script: &str) -> Result<Vec<Vec<String>>, ScriptError> {
    let mut cursor = Cursor::new(script);
    cursor.seek_values_keyword()?;

    let mut tuples = Vec::new();
    loop {
        cursor.skip_trivia();
        match cursor.bump() {
            None | Some(';') => break,
            Some('(') => {
                let tuple = tuples.len() + 1;
                tuples.push(read_tuple(&mut cursor, tuple)?);
                cursor.skip_trivia();
                match cursor.peek() {
                    Some(',') => {
                        cursor.bump();
                    }
                    Some(';') | None => {}
                    Some(other) => {
                        return Err(ScriptError::MalformedTuple {
                            tuple,
                            reason: format!("元组之后出现意外字符 '{}'", other),
                        });
                    }
                }
            }
            Some(other) => {
                return Err(ScriptError::MalformedTuple {
                    tuple: tuples.len() + 1,
                    reason: format!("期望 '(' 但遇到 '{}'", other),
                });
            }
        }
    }

    Ok(tuples)
}

fn unclosed(tuple: usize) -> ScriptError {
    ScriptError::MalformedTuple {
        tuple,
        reason: "元组未闭合".to_string(),
    }
}

/// 读取 `(` 之后直到匹配 `)` 的字段
fn read_tuple(cursor: &mut Cursor, tuple: usize) -> Result<Vec<String>, ScriptError> {
    let mut fields = Vec::new();
    loop {
        cursor.skip_trivia();
        let field = match cursor.peek() {
            Some('\'') => {
                cursor.bump();
                read_quoted(cursor, tuple)?
            }
            Some(_) => read_bare(cursor),
            None => return Err(unclosed(tuple)),
        };
        fields.push(field);

        cursor.skip_trivia();
        match cursor.bump() {
            Some(',') => continue,
            Some(')') => return Ok(fields),
            Some(other) => {
                return Err(ScriptError::MalformedTuple {
                    tuple,
                    reason: format!("字段之后出现意外字符 '{}'", other),
                });
            }
            None => return Err(unclosed(tuple)),
        }
    }
}

/// 读取字面量主体，`''` 还原为 `'`
fn read_quoted(cursor: &mut Cursor, tuple: usize) -> Result<String, ScriptError> {
    let mut value = String::new();
    while let Some(c) = cursor.bump() {
        if c == '\'' {
            if cursor.peek() == Some('\'') {
                cursor.bump();
                value.push('\'');
            } else {
                return Ok(value);
            }
        } else {
            value.push(c);
        }
    }
    Err(ScriptError::UnterminatedLiteral { tuple })
}

fn read_bare(cursor: &mut Cursor) -> String {
    let mut value = String::new();
    while let Some(c) = cursor.peek() {
        if c == ',' || c == ')' {
            break;
        }
        value.push(c);
        cursor.bump();
    }
    value.trim_end().to_string()
}
