/// 有固定追问表的题目分类
///
/// 其他分类值照样可以出现在数据里，只是不会产生基于分类的追问。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ReactFundamentals,
    ReactHooks,
    StateManagement,
    Performance,
    Forms,
}

static CATEGORY_LABELS: phf::Map<&'static str, Category> = phf::phf_map! {
    "React Fundamentals" => Category::ReactFundamentals,
    "React Hooks" => Category::ReactHooks,
    "State Management" => Category::StateManagement,
    "Performance" => Category::Performance,
    "Forms" => Category::Forms,
};

impl Category {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Category::ReactFundamentals => "React Fundamentals",
            Category::ReactHooks => "React Hooks",
            Category::StateManagement => "State Management",
            Category::Performance => "Performance",
            Category::Forms => "Forms",
        }
    }

    /// 从标签解析分类（精确匹配，区分大小写）
    pub fn from_label(label: &str) -> Option<Self> {
        CATEGORY_LABELS.get(label).copied()
    }

    /// 该分类的候选追问，按优先级排列
    pub fn follow_ups(self) -> &'static [&'static str] {
        match self {
            Category::ReactFundamentals => &[
                "How does React differ from vanilla JavaScript?",
                "What are the benefits of using React?",
                "When would you choose React over other frameworks?",
            ],
            Category::ReactHooks => &[
                "What are the rules of hooks?",
                "How do custom hooks work?",
                "When should you use useCallback vs useMemo?",
            ],
            Category::StateManagement => &[
                "What are the different ways to manage state in React?",
                "When should you lift state up?",
                "How do you avoid prop drilling?",
            ],
            Category::Performance => &[
                "How do you measure React performance?",
                "What causes unnecessary re-renders?",
                "How do you optimize large lists?",
            ],
            Category::Forms => &[
                "How do you handle form validation?",
                "What's the difference between controlled and uncontrolled components?",
                "How do you handle file uploads?",
            ],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
