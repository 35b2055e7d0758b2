//! 要点抽取 - 业务能力层
//!
//! 先找列表结构，找不到再按关键词补充，结果最多 4 条。

use crate::services::text_normalizer::normalize;
use regex::Regex;
use std::sync::OnceLock;

/// 要点数量上限
pub const MAX_KEY_POINTS: usize = 4;

/// 列表模式，按 `ALL` 的顺序尝试
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPattern {
    /// `1. xxx`
    Numbered,
    /// `- xxx`
    Dashed,
    /// `* xxx`
    Asterisk,
    /// `• xxx`
    Bullet,
}

impl ListPattern {
    pub const ALL: [ListPattern; 4] = [
        ListPattern::Numbered,
        ListPattern::Dashed,
        ListPattern::Asterisk,
        ListPattern::Bullet,
    ];

    fn regex(self) -> &'static Regex {
        static NUMBERED: OnceLock<Regex> = OnceLock::new();
        static DASHED: OnceLock<Regex> = OnceLock::new();
        static ASTERISK: OnceLock<Regex> = OnceLock::new();
        static BULLET: OnceLock<Regex> = OnceLock::new();

        let (cell, pattern) = match self {
            ListPattern::Numbered => (&NUMBERED, r"\d+\. ([^\n]+)"),
            ListPattern::Dashed => (&DASHED, r"- ([^\n]+)"),
            ListPattern::Asterisk => (&ASTERISK, r"\* ([^\n]+)"),
            ListPattern::Bullet => (&BULLET, r"• ([^\n]+)"),
        };
        cell.get_or_init(|| Regex::new(pattern).expect("valid list regex"))
    }

    /// 该模式的全部匹配项（未清洗），按出现顺序
    pub fn items(self, answer: &str) -> Vec<&str> {
        self.regex()
            .captures_iter(answer)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }
}

/// 关键词触发条件
#[derive(Debug, Clone, Copy)]
enum Trigger {
    /// 区分大小写的原文匹配
    Exact(&'static str),
    /// 忽略大小写（关键词本身为小写）
    AnyCase(&'static str),
}

impl Trigger {
    fn fires(self, text: &str, lowered: &str) -> bool {
        match self {
            Trigger::Exact(needle) => text.contains(needle),
            Trigger::AnyCase(needle) => lowered.contains(needle),
        }
    }
}

/// 没有列表时的第一轮关键词，全部命中的都会加入
const PRIMARY_TRIGGERS: &[(Trigger, &str)] = &[
    (Trigger::Exact("Virtual DOM"), "Virtual DOM for performance"),
    (Trigger::AnyCase("component"), "Component-based architecture"),
    (Trigger::AnyCase("state"), "State management"),
    (Trigger::AnyCase("hook"), "React Hooks"),
    (Trigger::AnyCase("prop"), "Props and data flow"),
];

/// 不足 2 条时的第二轮关键词
const SECONDARY_TRIGGERS: &[(Trigger, &str)] = &[
    (Trigger::AnyCase("performance"), "Performance optimization"),
    (Trigger::AnyCase("render"), "Efficient rendering"),
];

/// 仍然为空时，按题目文本兜底
const QUESTION_TRIGGERS: &[(Trigger, &str)] = &[
    (Trigger::AnyCase("what is"), "Core concept understanding"),
    (Trigger::AnyCase("how"), "Implementation knowledge"),
];

fn apply_triggers(triggers: &[(Trigger, &str)], text: &str, points: &mut Vec<String>) {
    let lowered = text.to_lowercase();
    points.extend(
        triggers
            .iter()
            .filter(|(trigger, _)| trigger.fires(text, &lowered))
            .map(|(_, point)| point.to_string()),
    );
}

/// 从答案（和题目）中抽取 0~4 条要点
pub fn extract_key_points(answer: &str, question: &str) -> Vec<String> {
    // 1. 列表结构：第一个有匹配的模式胜出
    if let Some(items) = ListPattern::ALL
        .iter()
        .map(|pattern| pattern.items(answer))
        .find(|items| !items.is_empty())
    {
        return items
            .into_iter()
            .take(MAX_KEY_POINTS)
            .map(normalize)
            .collect();
    }

    // 2. 关键词
    let mut points = Vec::new();
    apply_triggers(PRIMARY_TRIGGERS, answer, &mut points);

    // 3. 补充
    if points.len() < 2 {
        apply_triggers(SECONDARY_TRIGGERS, answer, &mut points);
        if points.is_empty() {
            apply_triggers(QUESTION_TRIGGERS, question, &mut points);
        }
    }

    points.truncate(MAX_KEY_POINTS);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const REACT_ANSWER: &str = "React is a JavaScript library developed by Facebook for building user interfaces, particularly single-page applications. It uses a component-based architecture, Virtual DOM for efficient updates, and follows a declarative programming paradigm. Key benefits include reusable components, better performance through Virtual DOM, strong community support, and excellent developer tools.";

    #[test]
    fn test_keyword_fallback() {
        let points = extract_key_points(REACT_ANSWER, "What is React and why would you use it?");
        assert_eq!(
            points,
            vec!["Virtual DOM for performance", "Component-based architecture"]
        );
    }

    #[test]
    fn test_numbered_list_wins() {
        let answer = "Steps:\n1. Install React\n2. Create a component\n- not this";
        let points = extract_key_points(answer, "How?");
        assert_eq!(points, vec!["Install React", "Create a component"]);
    }

    #[test]
    fn test_dashed_list_limited_to_four() {
        let answer = "- a one\n- b two\n- c three\n- d four\n- e five";
        let points = extract_key_points(answer, "");
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], "d four");
    }

    #[test]
    fn test_bullet_list() {
        let answer = "Benefits:\n• Fast  updates\n• Simple";
        assert_eq!(extract_key_points(answer, ""), vec!["Fast updates", "Simple"]);
    }

    #[test]
    fn test_all_primary_triggers_truncated() {
        let answer = "Virtual DOM, Component, STATE, useHook, props and more";
        let points = extract_key_points(answer, "");
        assert_eq!(
            points,
            vec![
                "Virtual DOM for performance",
                "Component-based architecture",
                "State management",
                "React Hooks",
            ]
        );
    }

    #[test]
    fn test_virtual_dom_is_case_sensitive() {
        let points = extract_key_points("the virtual dom is fast", "");
        assert!(!points.contains(&"Virtual DOM for performance".to_string()));
    }

    #[test]
    fn test_secondary_pass() {
        let points = extract_key_points("Improves performance when you re-render", "");
        assert_eq!(points, vec!["Performance optimization", "Efficient rendering"]);

        // 第一轮只有 1 条时也会进入第二轮
        let points = extract_key_points("state changes cause a render", "");
        assert_eq!(points, vec!["State management", "Efficient rendering"]);
    }

    #[test]
    fn test_question_fallback() {
        let points = extract_key_points("It is a library.", "What is Redux and how is it used?");
        assert_eq!(
            points,
            vec!["Core concept understanding", "Implementation knowledge"]
        );
        assert!(extract_key_points("Nothing here.", "Why?").is_empty());
    }

    #[test]
    fn test_what_is_matched_anywhere() {
        assert_eq!(
            extract_key_points("It is a library.", "So what is X?"),
            vec!["Core concept understanding"]
        );
        assert_eq!(
            extract_key_points("It is a library.", "Explain WHAT IS meant by X"),
            vec!["Core concept understanding"]
        );
    }

    #[test]
    fn test_length_bound() {
        for answer in ["", "1. a\n2. b\n3. c\n4. d\n5. e\n6. f", REACT_ANSWER] {
            assert!(extract_key_points(answer, "how what is").len() <= MAX_KEY_POINTS);
        }
    }
}
