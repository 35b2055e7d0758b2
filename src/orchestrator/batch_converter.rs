//! 批量转换器 - 编排层
//!
//! ## 职责
//!
//! 按配置中的分档映射（Top 10 / 20 / 50 / 100）逐个转换文件。
//!
//! ## 核心功能
//!
//! 1. **准备目录**：创建输出目录，失败则整体中止
//! 2. **逐档转换**：委托 `file_converter` 处理单个文件
//! 3. **容错**：输入缺失或单个文件失败只记录，继续下一档
//! 4. **全局统计**：汇总成功、缺失、失败的文件

use crate::config::{Config, TierMapping};
use crate::error::{AppError, AppResult, FileError};
use crate::orchestrator::file_converter::{self, ConversionReport};
use crate::utils::logging;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// 批量转换结果
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 成功转换的文件
    pub converted: Vec<ConversionReport>,
    /// 不存在的输入文件
    pub missing: Vec<PathBuf>,
    /// 转换失败的文件及原因
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// 所有分档都转换成功
    pub fn is_success(&self) -> bool {
        self.missing.is_empty() && self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.converted.len() + self.missing.len() + self.failed.len()
    }
}

/// 批量转换器
pub struct BatchConverter {
    config: Config,
}

impl BatchConverter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 使用配置中的输入 / 输出目录运行
    pub fn run(&self) -> AppResult<BatchReport> {
        self.run_in(
            Path::new(&self.config.input_dir),
            Path::new(&self.config.output_dir),
        )
    }

    /// 在指定目录中运行全部分档
    pub fn run_in(&self, input_dir: &Path, output_dir: &Path) -> AppResult<BatchReport> {
        fs::create_dir_all(output_dir).map_err(|e| {
            AppError::File(FileError::DirectoryCreateFailed {
                path: output_dir.display().to_string(),
                source: Box::new(e),
            })
        })?;

        let tiers = &self.config.tiers;
        let mut report = BatchReport::default();

        for (idx, tier) in tiers.iter().enumerate() {
            logging::log_tier_start(idx + 1, tiers.len(), &tier.title_prefix);
            self.convert_tier(tier, input_dir, output_dir, &mut report);
        }

        Ok(report)
    }

    fn convert_tier(
        &self,
        tier: &TierMapping,
        input_dir: &Path,
        output_dir: &Path,
        report: &mut BatchReport,
    ) {
        let input = input_dir.join(&tier.input_file);
        let output = output_dir.join(&tier.output_file);

        match file_converter::convert_file(&input, &output, Some(&tier.title_prefix), &self.config)
        {
            Ok(converted) => report.converted.push(converted),
            Err(e) if e.is_missing_input() => {
                warn!("⚠️ 文件不存在，跳过: {}", input.display());
                report.missing.push(input);
            }
            Err(e) => {
                error!("❌ 转换 {} 失败: {}", input.display(), e);
                report.failed.push((input, e.to_string()));
            }
        }
    }
}
