use crate::error::{AppError, AppResult, CatalogError, FileError};
use crate::models::catalog::TopicCatalog;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载题目目录
pub async fn load_catalog(toml_file_path: &Path) -> AppResult<TopicCatalog> {
    let path_display = toml_file_path.display().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_display, e))?;

    let catalog = parse_catalog(&content, &path_display)?;

    tracing::info!(
        "成功加载题目目录 {}: {} 个分类, {} 个知识点",
        path_display,
        catalog.categories.len(),
        catalog.topic_count()
    );

    Ok(catalog)
}

/// 解析 TOML 文本为题目目录
///
/// `source` 只用于错误信息。
pub fn parse_catalog(content: &str, source: &str) -> AppResult<TopicCatalog> {
    let catalog: TopicCatalog =
        toml::from_str(content).map_err(|e| FileError::TomlParseFailed {
            path: source.to_string(),
            source: e,
        })?;

    if catalog.categories.is_empty() {
        return Err(CatalogError::Empty {
            path: source.to_string(),
        }
        .into());
    }

    for (index, category) in catalog.categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            return Err(CatalogError::UnnamedCategory { index: index + 1 }.into());
        }
        for (topic_index, topic) in category.topics.iter().enumerate() {
            if topic.name.trim().is_empty() {
                return Err(CatalogError::UnnamedTopic {
                    category: category.name.clone(),
                    index: topic_index + 1,
                }
                .into());
            }
            if topic.count < 0 {
                tracing::warn!(
                    "知识点 {} / {} 的数量为负 ({})，将不生成任何题目",
                    category.name,
                    topic.name,
                    topic.count
                );
            }
        }
    }

    Ok(catalog)
}
