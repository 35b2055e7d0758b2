use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件相关错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 转换流程错误
    #[error("转换错误: {0}")]
    Convert(#[from] ConvertError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 输入文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// CSV 解析失败（表头或编码错误，整份文件不可用）
    #[error("CSV解析失败 ({path}): {source}")]
    CsvParseFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 创建目录失败
    #[error("创建目录失败 ({path}): {source}")]
    DirectoryCreateFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 单条记录错误
///
/// 不进入 `AppError`：这两类错误只会让当前记录被跳过，由装配结果携带。
#[derive(Debug, Error)]
pub enum RecordError {
    /// 题目或答案为空
    #[error("记录 {rank} 缺少必填字段: {field}")]
    Malformed { rank: String, field: &'static str },
    /// 其他处理失败（例如 CSV 行无法反序列化）
    #[error("记录 {rank} 处理失败: {message}")]
    Unexpected { rank: String, message: String },
}

/// 转换流程错误
#[derive(Debug, Error)]
pub enum ConvertError {
    /// 输入解析成功，但没有任何记录可用
    #[error("{path} 中没有可用的题目")]
    NoUsableRecords { path: String },
    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
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
    /// 配置值非法
    #[error("配置项 {key} 非法: {reason}")]
    InvalidValue { key: String, reason: String },
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Convert(ConvertError::Serialize(err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件不存在错误
    pub fn not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::NotFound { path: path.into() })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建 CSV 解析错误
    pub fn csv_parse_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::CsvParseFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 是否为输入缺失（批量模式下只报告，不中断）
    pub fn is_missing_input(&self) -> bool {
        matches!(self, AppError::File(FileError::NotFound { .. }))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_detection() {
        assert!(AppError::not_found("a.csv").is_missing_input());
        let err = AppError::file_write_failed(
            "out.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_missing_input());
    }

    #[test]
    fn test_display_contains_path() {
        let err = AppError::not_found("top_10.csv");
        assert!(err.to_string().contains("top_10.csv"));

        let err = RecordError::Malformed {
            rank: "7".to_string(),
            field: "answer",
        };
        assert!(err.to_string().contains("记录 7"));
    }
}
