//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use crate::error::{AppError, AppResult};
use crate::models::dataset::DatasetSummary;
use crate::orchestrator::{BatchReport, ConversionReport};
use crate::workflow::RecordStats;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing
///
/// 默认级别为 info（verbose 时为 debug），可用 `RUST_LOG` 覆盖。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> AppResult<()> {
    let log_header = format!(
        "{}\n题目转换日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .map_err(|e| AppError::file_write_failed(log_file_path, e))?;
    Ok(())
}

/// 向日志文件追加一行
pub fn append_log_line(log_file_path: &str, line: &str) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .map_err(|e| AppError::file_write_failed(log_file_path, e))?;
    writeln!(file, "{}", line).map_err(|e| AppError::file_write_failed(log_file_path, e))?;
    Ok(())
}

/// 向日志文件追加一个文件的转换结果
pub fn append_conversion(log_file_path: &str, report: &ConversionReport) -> AppResult<()> {
    let line = format!(
        "[{}] {} → {}: 成功 {}, 跳过 {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        report.input.display(),
        report.output.display(),
        report.stats.processed,
        report.stats.skipped
    );
    append_log_line(log_file_path, &line)
}

/// 记录程序启动信息
///
/// # 参数
/// - `mode`: 运行模式（单文件 / 批量）
pub fn log_startup(mode: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - {}", mode);
    info!("{}", "=".repeat(60));
}

/// 记录分档开始信息
pub fn log_tier_start(tier_num: usize, total_tiers: usize, title_prefix: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📦 开始处理第 {}/{} 档: {}", tier_num, total_tiers, title_prefix);
}

/// 记录单个文件开始转换
pub fn log_file_start(input: &Path, output: &Path) {
    info!("📄 正在转换 {} → {}", input.display(), output.display());
}

/// 记录单个文件转换完成
pub fn log_file_complete(output: &Path, stats: &RecordStats, summary: &DatasetSummary) {
    info!(
        "✓ {} 转换完成: 成功 {}, 跳过 {}, 总计 {}",
        output.display(),
        stats.processed,
        stats.skipped,
        stats.total()
    );
    info!("📊 {}", summary);
}

/// 打印批量模式的最终统计信息
///
/// # 参数
/// - `report`: 批量转换结果
/// - `log_file_path`: 日志文件路径（为空则不写）
pub fn print_final_stats(report: &BatchReport, log_file_path: &str) {
    let finished_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!("完成时间: {}", finished_at);
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", report.converted.len(), report.total());
    for converted in &report.converted {
        info!(
            "   - {} ({} 道题)",
            converted.output.display(),
            converted.total_questions
        );
    }
    info!("⚠️ 缺失: {}", report.missing.len());
    info!("❌ 失败: {}", report.failed.len());
    info!("{}", "=".repeat(60));

    if !log_file_path.is_empty() {
        for converted in &report.converted {
            if let Err(e) = append_conversion(log_file_path, converted) {
                tracing::warn!("写入日志文件失败: {}", e);
            }
        }
        let line = format!(
            "[{}] 成功 {}, 缺失 {}, 失败 {}",
            finished_at,
            report.converted.len(),
            report.missing.len(),
            report.failed.len()
        );
        match append_log_line(log_file_path, &line) {
            Ok(()) => info!("\n日志已保存至: {}", log_file_path),
            Err(e) => tracing::warn!("写入日志文件失败: {}", e),
        }
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("组件化架构设计", 3), "组件化...");
    }

    #[test]
    fn test_log_file_header_and_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convert.log");
        let path = path.to_str().unwrap();

        init_log_file(path).unwrap();
        append_log_line(path, "done").unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("题目转换日志"));
        assert!(content.ends_with("done\n"));
    }

    #[test]
    fn test_append_conversion_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convert.log");
        let path = path.to_str().unwrap();
        init_log_file(path).unwrap();

        let report = ConversionReport {
            input: "top_10.csv".into(),
            output: "top-10-questions.json".into(),
            stats: RecordStats { processed: 9, skipped: 1 },
            total_questions: 9,
        };
        append_conversion(path, &report).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("top_10.csv → top-10-questions.json: 成功 9, 跳过 1"));
    }
}
