//! 单文件转换器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责把一个输入文件转换成一个 JSON 文档，是文件级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **识别格式**：按扩展名选择表格或块格式读取
//! 2. **流程调度**：创建并复用 `RecordAssembler` / `DatasetBuilder`
//! 3. **写出文档**：先写临时文件再改名，失败时不留下半截文件
//! 4. **统计输出**：记录成功/跳过数量和分类/难度分布

use crate::config::Config;
use crate::error::{AppError, AppResult, ConvertError, FileError};
use crate::models::dataset::Dataset;
use crate::models::loaders::{load_blocks, load_csv_records, InputFormat};
use crate::utils::logging;
use crate::workflow::{DatasetBuilder, RecordAssembler, RecordStats};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 单个文件的转换结果
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: RecordStats,
    pub total_questions: usize,
}

/// 输入文件默认对应的输出路径（扩展名换成 `.json`）
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// 把输入文件解析并汇总成数据集（不写文件）
pub fn build_dataset(
    input: &Path,
    title_prefix: Option<&str>,
    config: &Config,
) -> AppResult<(Dataset, RecordStats)> {
    let assembler = RecordAssembler::new(config);

    let (questions, stats) = match InputFormat::from_path(input) {
        InputFormat::Csv => assembler.assemble_all(load_csv_records(input)?),
        InputFormat::Blocks => assembler.assemble_blocks(&load_blocks(input)?),
    };

    if questions.is_empty() && stats.skipped > 0 {
        return Err(ConvertError::NoUsableRecords {
            path: input.display().to_string(),
        }
        .into());
    }
    if stats.total() == 0 {
        warn!("⚠️ {} 中没有任何记录，将输出空数据集", input.display());
    }

    let dataset = DatasetBuilder::new(config).build(questions, title_prefix);
    Ok((dataset, stats))
}

/// 转换单个文件
///
/// # 参数
/// - `input`: 输入文件（CSV 或块格式）
/// - `output`: 输出 JSON 路径
/// - `title_prefix`: 标题前缀，`None` 时使用 `Top {题目数}`
/// - `config`: 配置
pub fn convert_file(
    input: &Path,
    output: &Path,
    title_prefix: Option<&str>,
    config: &Config,
) -> AppResult<ConversionReport> {
    logging::log_file_start(input, output);

    let (dataset, stats) = build_dataset(input, title_prefix, config)?;
    write_dataset(output, &dataset)?;

    logging::log_file_complete(output, &stats, &dataset.summary());

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats,
        total_questions: dataset.total_questions,
    })
}

/// 写出数据集 JSON
///
/// 先写入同目录下的临时文件，成功后再改名覆盖目标文件。
pub fn write_dataset(output: &Path, dataset: &Dataset) -> AppResult<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::File(FileError::DirectoryCreateFailed {
                path: parent.display().to_string(),
                source: Box::new(e),
            })
        })?;
    }

    let json = dataset.to_pretty_json()?;
    let tmp_path = output.with_extension("json.tmp");
    let output_name = output.display().to_string();

    if let Err(e) = fs::write(&tmp_path, json).and_then(|_| fs::rename(&tmp_path, output)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(AppError::file_write_failed(output_name, e));
    }

    info!("✓ 已写入 {}", output.display());
    Ok(())
}
