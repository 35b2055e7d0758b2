//! 数据集汇总 - 流程层
//!
//! 把装配好的题目收拢成最终文档，分类和难度按字典序排列，保证输出可复现。

use std::collections::BTreeSet;

use crate::config::Config;
use crate::models::dataset::Dataset;
use crate::models::question::Question;

pub struct DatasetBuilder {
    title_suffix: String,
    description: String,
    last_updated: String,
}

impl DatasetBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            title_suffix: config.title_suffix.clone(),
            description: config.description.clone(),
            last_updated: config.resolved_last_updated(),
        }
    }

    /// 汇总题目；未给出前缀时使用 `Top {题目数}`
    pub fn build(&self, questions: Vec<Question>, title_prefix: Option<&str>) -> Dataset {
        let title_prefix = match title_prefix {
            Some(prefix) if !prefix.trim().is_empty() => prefix.to_string(),
            _ => format!("Top {}", questions.len()),
        };

        let categories: BTreeSet<&str> = questions.iter().map(|q| q.category.as_str()).collect();
        let difficulties: BTreeSet<&str> =
            questions.iter().map(|q| q.difficulty.as_str()).collect();

        Dataset {
            title: format!("{}{}", title_prefix, self.title_suffix),
            description: self.description.clone(),
            last_updated: self.last_updated.clone(),
            total_questions: questions.len(),
            categories: categories.into_iter().map(str::to_string).collect(),
            difficulties: difficulties.into_iter().map(str::to_string).collect(),
            questions,
        }
    }
}
