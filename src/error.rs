use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 题目目录错误
    #[error("目录错误: {0}")]
    Catalog(#[from] CatalogError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// SQL 脚本错误
    #[error("脚本错误: {0}")]
    Script(#[from] ScriptError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 题目目录错误
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 目录中没有任何分类
    #[error("题目目录为空: {path}")]
    Empty { path: String },
    /// 分类名称为空
    #[error("第 {index} 个分类缺少名称")]
    UnnamedCategory { index: usize },
    /// 知识点名称为空
    #[error("分类 {category} 中第 {index} 个知识点缺少名称")]
    UnnamedTopic { category: String, index: usize },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 环境变量不存在
    #[error("环境变量 {var_name} 不存在")]
    EnvVarNotFound { var_name: String },
}

/// SQL 脚本错误
#[derive(Debug, Error)]
pub enum ScriptError {
    /// 找不到 VALUES 关键字
    #[error("脚本中没有 VALUES 子句")]
    MissingValues,
    /// 字符串字面量未闭合
    #[error("第 {tuple} 行存在未闭合的字符串字面量")]
    UnterminatedLiteral { tuple: usize },
    /// 值元组格式错误
    #[error("第 {tuple} 行格式错误: {reason}")]
    MalformedTuple { tuple: usize, reason: String },
    /// 回读行数与生成行数不一致
    #[error("行数不一致: 期望 {expected}, 实际 {actual}")]
    RowCountMismatch { expected: usize, actual: usize },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
