use crate::utils::truncate_text;
use serde::{Deserialize, Serialize};

/// 外部读取的一条原始记录（表格的一行）
///
/// 难度和分类在读取时可能缺失，由装配阶段按配置补默认值。
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawRecord {
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl RawRecord {
    pub fn new(rank: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            rank: rank.into(),
            question: question.into(),
            answer: answer.into(),
            difficulty: None,
            category: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeExample {
    pub title: String,
    pub code: String,
}

/// 输出 JSON 中的一道题
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub difficulty: String,
    pub category: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code_example: Option<CodeExample>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub key_points: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub follow_up_questions: Vec<String>,
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题目内容以便显示（最多80个字符）
        let preview = truncate_text(&self.question, 80);
        write!(f, "[{}] {} ({} / {})", self.id, preview, self.category, self.difficulty)
    }
}
