//! 追问生成 - 业务能力层
//!
//! 分类表 + 难度补充 + 题目关键词，最多 3 条。

use crate::models::category::Category;

/// 追问数量上限
pub const MAX_FOLLOW_UPS: usize = 3;

/// 每个分类取前几条
const PER_CATEGORY: usize = 2;

const BEGINNER: &str = "Beginner";
const ADVANCED: &str = "Advanced";

fn mentions_use_effect(q: &str) -> bool {
    q.contains("useEffect")
}

fn mentions_virtual_dom(q: &str) -> bool {
    q.contains("Virtual DOM")
}

fn mentions_component(q: &str) -> bool {
    q.to_lowercase().contains("component")
}

/// 按题目文本触发的追问，只取第一个命中的
const QUESTION_RULES: &[(fn(&str) -> bool, &str)] = &[
    (mentions_use_effect, "How do you clean up effects?"),
    (mentions_virtual_dom, "How does reconciliation work?"),
    (mentions_component, "What are the lifecycle methods?"),
];

fn difficulty_follow_up(difficulty: &str) -> Option<&'static str> {
    match difficulty {
        BEGINNER => Some("Can you provide a simple example?"),
        ADVANCED => Some("How would you implement this in a production app?"),
        _ => None,
    }
}

fn question_follow_up(question: &str) -> Option<&'static str> {
    QUESTION_RULES
        .iter()
        .find(|(fires, _)| fires(question))
        .map(|(_, follow_up)| *follow_up)
}

/// 生成 0~3 条追问
pub fn generate_follow_ups(question: &str, category: &str, difficulty: &str) -> Vec<String> {
    let from_category = Category::from_label(category)
        .map(|c| &c.follow_ups()[..PER_CATEGORY])
        .unwrap_or_default();

    from_category
        .iter()
        .copied()
        .chain(difficulty_follow_up(difficulty))
        .chain(question_follow_up(question))
        .take(MAX_FOLLOW_UPS)
        .map(str::to_string)
        .collect()
}
