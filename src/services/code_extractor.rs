//! 代码示例抽取 - 业务能力层
//!
//! 按优先级依次尝试几种文本模式，第一个通过校验的结果胜出。

use crate::models::question::CodeExample;
use crate::services::text_normalizer::normalize;
use regex::Regex;
use std::sync::OnceLock;

/// 抽取出的代码示例统一使用的标题
pub const CODE_EXAMPLE_TITLE: &str = "Code Example";

/// 候选代码的最小长度（不含）
const MIN_CODE_LEN: usize = 10;

/// 代码匹配策略，按 `ALL` 的顺序尝试
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMatcher {
    /// `Example:` 之后到下一个句号为止
    ExampleMarker,
    /// 三个反引号包裹的代码块
    FencedBlock,
    /// 尖括号中的单个标签片段
    AngleTag,
    /// 形如 `name(args) { ... }` 的函数定义或调用
    CallWithBlock,
}

impl CodeMatcher {
    pub const ALL: [CodeMatcher; 4] = [
        CodeMatcher::ExampleMarker,
        CodeMatcher::FencedBlock,
        CodeMatcher::AngleTag,
        CodeMatcher::CallWithBlock,
    ];

    fn regex(self) -> &'static Regex {
        static EXAMPLE: OnceLock<Regex> = OnceLock::new();
        static FENCED: OnceLock<Regex> = OnceLock::new();
        static ANGLE: OnceLock<Regex> = OnceLock::new();
        static CALL: OnceLock<Regex> = OnceLock::new();

        match self {
            CodeMatcher::ExampleMarker => EXAMPLE
                .get_or_init(|| Regex::new(r"Example:\s*([^.]+)").expect("valid example regex")),
            CodeMatcher::FencedBlock => FENCED
                .get_or_init(|| Regex::new(r"```([\s\S]*?)```").expect("valid fenced regex")),
            CodeMatcher::AngleTag => {
                ANGLE.get_or_init(|| Regex::new(r"<([^>]+)>").expect("valid angle regex"))
            }
            CodeMatcher::CallWithBlock => CALL.get_or_init(|| {
                Regex::new(r"\w+\([^)]*\)\s*\{[^}]*\}").expect("valid call regex")
            }),
        }
    }

    /// 该策略在文本中的第一个候选（已去掉首尾空白），没有匹配时返回 `None`
    pub fn candidate(self, answer: &str) -> Option<&str> {
        let caps = self.regex().captures(answer)?;
        // 函数调用模式没有捕获组，取整段匹配
        let m = caps.get(1).or_else(|| caps.get(0))?;
        Some(m.as_str().trim())
    }
}

/// 候选是否像代码：足够长，且含有 `{`、`<` 或 `function`
pub fn looks_like_code(candidate: &str) -> bool {
    candidate.chars().count() > MIN_CODE_LEN
        && (candidate.contains('{') || candidate.contains('<') || candidate.contains("function"))
}

/// 从答案中抽取至多一个代码示例
pub fn extract_code(answer: &str) -> Option<CodeExample> {
    CodeMatcher::ALL.iter().find_map(|matcher| {
        let candidate = matcher.candidate(answer)?;
        if !looks_like_code(candidate) {
            return None;
        }
        tracing::debug!("代码示例命中策略 {:?}", matcher);
        Some(CodeExample {
            title: CODE_EXAMPLE_TITLE.to_string(),
            code: normalize(candidate),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_marker_wins() {
        let answer = "JSX gets transpiled by Babel. Example: <div>Hello World</div> becomes React.createElement('div', null, 'Hello World').";
        let code = extract_code(answer).unwrap();
        assert_eq!(code.title, "Code Example");
        assert!(code.code.starts_with("<div>Hello World</div>"));
        assert_eq!(code.code, "<div>Hello World</div> becomes React");
    }

    #[test]
    fn test_fenced_block() {
        let answer = "Use it like this ```function App() { return null; }``` and done";
        assert_eq!(
            CodeMatcher::FencedBlock.candidate(answer),
            Some("function App() { return null; }")
        );
        let code = extract_code(answer).unwrap();
        assert_eq!(code.code, "function App() { return null; }");
    }

    #[test]
    fn test_angle_tag_needs_code_marker() {
        // 标签内部不含 { < function，校验失败
        assert_eq!(
            CodeMatcher::AngleTag.candidate("Render <MyComponent prop=1>"),
            Some("MyComponent prop=1")
        );
        assert!(extract_code("Render <MyComponent prop=1> here").is_none());

        let answer = "Render <Item onClick={handle} /> in a list";
        let code = extract_code(answer).unwrap();
        assert_eq!(code.code, "Item onClick={handle} /");
    }

    #[test]
    fn test_call_with_block() {
        let answer = "Define handleClick() { setCount(count + 1) } inside the component";
        let code = extract_code(answer).unwrap();
        assert_eq!(code.code, "handleClick() { setCount(count + 1) }");
    }

    #[test]
    fn test_short_candidate_rejected() {
        assert!(!looks_like_code("<a>"));
        assert!(!looks_like_code("plain text that is long"));
        assert!(looks_like_code("function foo"));
        assert!(extract_code("Example: {x}.").is_none());
    }

    #[test]
    fn test_falls_through_to_later_matcher() {
        // Example: 的候选不像代码，继续尝试后面的策略
        let answer = "Example: plain words only. Then ```const x = { a: 1 };```";
        let code = extract_code(answer).unwrap();
        assert_eq!(code.code, "const x = { a: 1 };");
    }

    #[test]
    fn test_no_code() {
        let answer = "React is a JavaScript library developed by Facebook for building user interfaces.";
        assert!(extract_code(answer).is_none());
        assert!(extract_code("").is_none());
    }
}
