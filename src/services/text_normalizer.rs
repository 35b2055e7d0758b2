//! 文本清洗 - 业务能力层
//!
//! 所有字段进入抽取器前都先经过这里

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// 合并连续空白为单个空格、去掉首尾空白，并把 `\"` 和 `""` 还原为 `"`
///
/// 空输入返回空串，不会失败。
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    whitespace_re()
        .replace_all(text.trim(), " ")
        .replace("\\\"", "\"")
        .replace("\"\"", "\"")
}
