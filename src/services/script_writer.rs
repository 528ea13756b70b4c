//! 脚本写入服务
//!
//! 只负责"把脚本落盘"，不关心脚本内容。
//! 不做先写临时文件再重命名，失败时可能留下不完整的文件。

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 脚本写入服务
pub struct ScriptWriter {
    output_path: PathBuf,
}

impl ScriptWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    /// 写入脚本（UTF-8），必要时创建父目录
    pub async fn write(&self, script: &str) -> AppResult<()> {
        let path_display = self.output_path.display().to_string();
        debug!("写入脚本: {} ({} 字节)", path_display, script.len());

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::file_write_failed(&path_display, e))?;
            }
        }

        fs::write(&self.output_path, script.as_bytes())
            .await
            .map_err(|e| AppError::file_write_failed(&path_display, e))
    }

    /// 回读已写入的脚本
    pub async fn read_back(&self) -> AppResult<String> {
        fs::read_to_string(&self.output_path)
            .await
            .map_err(|e| AppError::file_read_failed(self.output_path.display().to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "copa_question_bank_{}_{}",
            name,
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn writes_and_reads_back_with_nested_dirs() {
        let dir = scratch_dir("writer");
        let writer = ScriptWriter::with_path(dir.join("nested").join("out.sql"));
        writer
            .write("-- hello\nINSERT INTO t (a) VALUES\n('é');")
            .await
            .unwrap();
        assert_eq!(
            writer.read_back().await.unwrap(),
            "-- hello\nINSERT INTO t (a) VALUES\n('é');"
        );
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn unwritable_path_is_write_error() {
        let dir = scratch_dir("blocked");
        std::fs::create_dir_all(&dir).unwrap();
        // 目标路径本身是目录，写入必然失败
        let writer = ScriptWriter::with_path(&dir);
        let err = writer.write("x").await.unwrap_err();
        assert!(matches!(err, AppError::File(FileError::WriteFailed { .. })));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
