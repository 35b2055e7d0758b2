//! 块格式读取
//!
//! 文档按单独一行的 `---` 切成若干块，每块使用以下标签：
//!
//! ```text
//! Q: 题目（单行）
//! A: 答案（可多行，直到下一个标签）
//! Code Example:
//! 代码（多行）
//! Key Points:
//! - 要点
//! Follow Up:
//! - 追问
//! ```

use crate::error::{AppError, AppResult};
use std::path::Path;

/// 块格式的一条记录
///
/// 与表格记录不同：标识是新生成的 UUID，代码、要点、追问直接由文档给出。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRecord {
    pub id: String,
    /// 块在文档中的位置（从1开始，仅用于日志）
    pub position: usize,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub code: Option<String>,
    pub key_points: Vec<String>,
    pub follow_ups: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Answer,
    Code,
    KeyPoints,
    FollowUp,
}

/// 从文件读取块格式文档
pub fn load_blocks(path: &Path) -> AppResult<Vec<BlockRecord>> {
    if !path.exists() {
        return Err(AppError::not_found(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let blocks = parse_blocks(&content);
    tracing::debug!("从 {} 读取 {} 个块", path.display(), blocks.len());
    Ok(blocks)
}

/// 解析块格式文本
pub fn parse_blocks(text: &str) -> Vec<BlockRecord> {
    split_blocks(text)
        .into_iter()
        .filter(|lines| lines.iter().any(|l| !l.trim().is_empty()))
        .enumerate()
        .map(|(idx, lines)| parse_block(&lines, idx + 1))
        .collect()
}

fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = vec![Vec::new()];
    for line in text.lines() {
        if line.trim_end() == "---" {
            blocks.push(Vec::new());
        } else if let Some(current) = blocks.last_mut() {
            current.push(line);
        }
    }
    blocks
}

fn parse_block(lines: &[&str], position: usize) -> BlockRecord {
    let mut record = BlockRecord {
        id: uuid::Uuid::new_v4().to_string(),
        position,
        question: None,
        answer: None,
        code: None,
        key_points: Vec::new(),
        follow_ups: Vec::new(),
    };

    let mut section = Section::None;
    let mut answer_lines: Vec<&str> = Vec::new();
    let mut code_lines: Vec<&str> = Vec::new();

    for &line in lines {
        if let Some(rest) = line.strip_prefix("Q:") {
            // 只取第一个 Q:
            if record.question.is_none() {
                record.question = Some(rest.trim().to_string());
            }
            section = Section::None;
        } else if let Some(rest) = line.strip_prefix("A:") {
            answer_lines.push(rest);
            section = Section::Answer;
        } else if let Some(rest) = line.strip_prefix("Code Example:") {
            code_lines.push(rest);
            section = Section::Code;
        } else if line.starts_with("Key Points:") {
            section = Section::KeyPoints;
        } else if line.starts_with("Follow Up:") {
            section = Section::FollowUp;
        } else {
            match section {
                Section::Answer => answer_lines.push(line),
                Section::Code => code_lines.push(line),
                Section::KeyPoints => push_list_item(&mut record.key_points, line),
                Section::FollowUp => push_list_item(&mut record.follow_ups, line),
                Section::None => {}
            }
        }
    }

    record.answer = non_empty(answer_lines.join("\n").trim());
    record.code = non_empty(code_lines.join("\n").trim());
    record
}

fn push_list_item(items: &mut Vec<String>, line: &str) {
    let item = line.trim_matches(|c: char| c == '-' || c == ' ').trim();
    if !item.is_empty() {
        items.push(item.to_string());
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
