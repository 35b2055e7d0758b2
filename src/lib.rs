//! # Question Convert
//!
//! 把面试题语料（分档 CSV 或 `---` 分隔的块格式）转换成前端使用的 JSON 文档
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 原始记录、题目、数据集，以及两种读取器
//! - `csv_loader` / `block_loader` - 两种互相独立的记录来源
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数，只处理一段文本
//! - `normalize` - 文本清洗
//! - `extract_code` / `extract_key_points` / `generate_follow_ups` - 三个抽取器
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一条记录"和"一个数据集"的处理流程
//! - `RecordAssembler` - 清洗 → 抽取 → 装配
//! - `DatasetBuilder` - 汇总元数据
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_converter` - 分档批量转换
//! - `orchestrator/file_converter` - 单文件转换与写出
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{CodeExample, Dataset, Question, RawRecord};
pub use orchestrator::{convert_file, BatchConverter, BatchReport};
pub use workflow::{AssembleOutcome, DatasetBuilder, RecordAssembler};
