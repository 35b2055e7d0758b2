//! 命令行入口
//!
//! 只负责解析参数和分发，不做任何转换逻辑

use crate::config::Config;
use crate::orchestrator::{self, BatchConverter};
use crate::utils::logging;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};

#[derive(Parser, Debug)]
#[command(
    name = "question-convert",
    version,
    about = "Convert interview question CSV / block files into the front-end JSON format"
)]
pub struct Cli {
    /// TOML 配置文件
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 显示详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 转换单个文件
    Convert {
        /// 输入文件（.csv 为表格，.md / .txt 为块格式）
        input: PathBuf,
        /// 输出 JSON，默认与输入同名
        output: Option<PathBuf>,
        /// 标题前缀，默认为 "Top {题目数}"
        #[arg(long)]
        title_prefix: Option<String>,
    },
    /// 按分档批量转换
    Batch {
        /// 输入目录
        #[arg(long)]
        input_dir: Option<PathBuf>,
        /// 输出目录
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

impl Cli {
    /// 加载配置，命令行参数优先
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_toml_file(path)
                .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
            None => Config::from_env().context("无法从环境变量加载配置")?,
        };
        if self.verbose {
            config.verbose_logging = true;
        }
        Ok(config)
    }

    pub fn run(self) -> Result<ExitCode> {
        let mut config = self.load_config()?;
        logging::init(config.verbose_logging);

        if !config.output_log_file.is_empty() {
            logging::init_log_file(&config.output_log_file)?;
        }

        match self.command {
            Commands::Convert {
                input,
                output,
                title_prefix,
            } => {
                logging::log_startup("单文件转换模式");
                let output = output.unwrap_or_else(|| orchestrator::default_output_path(&input));

                match orchestrator::convert_file(&input, &output, title_prefix.as_deref(), &config)
                {
                    Ok(report) => {
                        if !config.output_log_file.is_empty() {
                            logging::append_conversion(&config.output_log_file, &report)?;
                        }
                        Ok(ExitCode::SUCCESS)
                    }
                    Err(e) => {
                        error!("❌ {}", e);
                        Ok(ExitCode::FAILURE)
                    }
                }
            }
            Commands::Batch {
                input_dir,
                output_dir,
            } => {
                logging::log_startup("批量转换模式");
                if let Some(dir) = input_dir {
                    config.input_dir = dir.display().to_string();
                }
                if let Some(dir) = output_dir {
                    config.output_dir = dir.display().to_string();
                }
                let log_file = config.output_log_file.clone();

                let report = BatchConverter::new(config)
                    .run()
                    .context("批量转换中止")?;
                logging::print_final_stats(&report, &log_file);

                if report.is_success() {
                    Ok(ExitCode::SUCCESS)
                } else {
                    warn!("⚠️ 部分分档未能转换");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "question-convert",
            "convert",
            "top_10.csv",
            "out.json",
            "--title-prefix",
            "Top 10",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert {
                input,
                output,
                title_prefix,
            } => {
                assert_eq!(input, PathBuf::from("top_10.csv"));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert_eq!(title_prefix.as_deref(), Some("Top 10"));
            }
            other => panic!("解析错误: {:?}", other),
        }
    }

    #[test]
    fn test_parse_batch_with_global_flags() {
        let cli = Cli::try_parse_from([
            "question-convert",
            "batch",
            "--output-dir",
            "json_output",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Batch { input_dir: None, output_dir: Some(_) }
        ));
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(Cli::try_parse_from(["question-convert"]).is_err());
    }
}
