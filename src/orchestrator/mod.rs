//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_converter` - 批量转换器
//! - 按分档映射遍历输入文件
//! - 输入缺失只报告，不中断
//! - 汇总全局统计
//!
//! ### `file_converter` - 单文件转换器
//! - 读取一个文件的全部记录（Vec<RawRecord>）
//! - 委托流程层装配和汇总
//! - 写出 JSON
//!
//! ## 层次关系
//!
//! ```text
//! batch_converter (处理多个文件)
//!     ↓
//! file_converter (处理一个文件)
//!     ↓
//! workflow::RecordAssembler / DatasetBuilder (处理记录)
//!     ↓
//! services (能力层：清洗 / 代码 / 要点 / 追问)
//! ```

pub mod batch_converter;
pub mod file_converter;

pub use batch_converter::{BatchConverter, BatchReport};
pub use file_converter::{build_dataset, convert_file, default_output_path, ConversionReport};
