use crate::error::{AppError, AppResult, ConfigError, FileError};
use serde::Deserialize;
use std::path::Path;

/// 批量模式下的分档映射（输入 CSV → 输出 JSON → 标题前缀）
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TierMapping {
    pub input_file: String,
    pub output_file: String,
    pub title_prefix: String,
}

impl TierMapping {
    fn top(n: usize) -> Self {
        Self {
            input_file: format!("top_{}_react_interview_questions.csv", n),
            output_file: format!("top-{}-questions.json", n),
            title_prefix: format!("Top {}", n),
        }
    }
}

/// 程序配置
///
/// 显式传入整个转换流程，同一进程内可以用不同默认值并行做多次转换。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 表格记录缺少难度时的默认值
    pub default_difficulty: String,
    /// 表格记录缺少分类时的默认值
    pub default_category: String,
    /// 块格式记录固定使用的难度
    pub block_difficulty: String,
    /// 块格式记录固定使用的分类
    pub block_category: String,
    /// 标题后缀，拼在前缀之后
    pub title_suffix: String,
    /// 数据集描述
    pub description: String,
    /// lastUpdated 字段；填 "today" 时使用当天日期
    pub last_updated: String,
    /// 批量模式的输入目录
    pub input_dir: String,
    /// 批量模式的输出目录
    pub output_dir: String,
    /// 批量模式的分档映射
    pub tiers: Vec<TierMapping>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 运行日志文件（为空则不写）
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_difficulty: "Intermediate".to_string(),
            default_category: "React Fundamentals".to_string(),
            block_difficulty: "Intermediate".to_string(),
            block_category: "React".to_string(),
            title_suffix: " React Interview Questions".to_string(),
            description: "Master the most frequently asked React interview questions with detailed explanations and examples".to_string(),
            last_updated: "2025-09-25".to_string(),
            input_dir: ".".to_string(),
            output_dir: "json_output".to_string(),
            tiers: vec![
                TierMapping::top(10),
                TierMapping::top(20),
                TierMapping::top(50),
                TierMapping::top(100),
            ],
            verbose_logging: false,
            output_log_file: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::default().merge_env()
    }

    /// 从 TOML 文件加载配置，缺失的键使用默认值，然后再叠加环境变量
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            AppError::File(FileError::TomlParseFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })?;

        config.merge_env()
    }

    fn merge_env(self) -> AppResult<Self> {
        let env = |key: &str| std::env::var(key).ok();
        let config = Self {
            default_difficulty: env("QC_DEFAULT_DIFFICULTY").unwrap_or(self.default_difficulty),
            default_category: env("QC_DEFAULT_CATEGORY").unwrap_or(self.default_category),
            block_difficulty: env("QC_BLOCK_DIFFICULTY").unwrap_or(self.block_difficulty),
            block_category: env("QC_BLOCK_CATEGORY").unwrap_or(self.block_category),
            title_suffix: env("QC_TITLE_SUFFIX").unwrap_or(self.title_suffix),
            description: env("QC_DESCRIPTION").unwrap_or(self.description),
            last_updated: env("QC_LAST_UPDATED").unwrap_or(self.last_updated),
            input_dir: env("QC_INPUT_DIR").unwrap_or(self.input_dir),
            output_dir: env("QC_OUTPUT_DIR").unwrap_or(self.output_dir),
            tiers: self.tiers,
            verbose_logging: match env("QC_VERBOSE_LOGGING") {
                Some(v) => v.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: "QC_VERBOSE_LOGGING".to_string(),
                    value: v.clone(),
                    expected_type: "bool".to_string(),
                })?,
                None => self.verbose_logging,
            },
            output_log_file: env("QC_OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_difficulty.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "default_difficulty".to_string(),
                reason: "不能为空".to_string(),
            });
        }
        if self.default_category.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "default_category".to_string(),
                reason: "不能为空".to_string(),
            });
        }
        if self.last_updated != "today"
            && chrono::NaiveDate::parse_from_str(&self.last_updated, "%Y-%m-%d").is_err()
        {
            return Err(ConfigError::InvalidValue {
                key: "last_updated".to_string(),
                reason: format!("'{}' 不是 YYYY-MM-DD 日期", self.last_updated),
            });
        }
        Ok(())
    }

    /// 解析 lastUpdated 的实际取值
    pub fn resolved_last_updated(&self) -> String {
        if self.last_updated == "today" {
            chrono::Local::now().format("%Y-%m-%d").to_string()
        } else {
            self.last_updated.clone()
        }
    }
}
