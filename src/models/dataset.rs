use crate::models::question::Question;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 最终写出的 JSON 文档
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub title: String,
    pub description: String,
    pub last_updated: String,
    pub total_questions: usize,
    pub categories: Vec<String>,
    pub difficulties: Vec<String>,
    pub questions: Vec<Question>,
}

/// 分类 / 难度分布统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub by_category: BTreeMap<String, usize>,
    pub by_difficulty: BTreeMap<String, usize>,
}

impl Dataset {
    pub fn summary(&self) -> DatasetSummary {
        let mut summary = DatasetSummary::default();
        for q in &self.questions {
            *summary.by_category.entry(q.category.clone()).or_insert(0) += 1;
            *summary.by_difficulty.entry(q.difficulty.clone()).or_insert(0) += 1;
        }
        summary
    }

    /// 序列化为带缩进的 JSON，非 ASCII 字符原样保留
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |map: &BTreeMap<String, usize>| {
            map.iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(
            f,
            "Categories: {{{}}} | Difficulties: {{{}}}",
            join(&self.by_category),
            join(&self.by_difficulty)
        )
    }
}
