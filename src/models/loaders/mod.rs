pub mod block_loader;
pub mod csv_loader;

pub use block_loader::{load_blocks, parse_blocks, BlockRecord};
pub use csv_loader::{load_csv_records, parse_csv_records, RowResult};

use std::path::Path;

/// 输入文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// 表格（CSV）
    Csv,
    /// `---` 分隔的块格式
    Blocks,
}

impl InputFormat {
    /// 按扩展名判断格式，`.md` / `.txt` 为块格式，其余一律按 CSV 处理
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
            .as_deref()
        {
            Some("md") | Some("markdown") | Some("txt") => InputFormat::Blocks,
            _ => InputFormat::Csv,
        }
    }
}
