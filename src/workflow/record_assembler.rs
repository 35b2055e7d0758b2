//! 记录装配 - 流程层
//!
//! 定义"一条记录"的完整处理流程：
//! 1. 清洗题目和答案，空则跳过
//! 2. 生成 id，补齐难度 / 分类
//! 3. 代码示例、要点、追问三个抽取器各自独立运行
//! 4. 只挂上非空的可选字段

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::RecordError;
use crate::models::loaders::{BlockRecord, RowResult};
use crate::models::question::{CodeExample, Question, RawRecord};
use crate::services::follow_up_generator::MAX_FOLLOW_UPS;
use crate::services::key_point_extractor::MAX_KEY_POINTS;
use crate::services::{extract_code, extract_key_points, generate_follow_ups, normalize};

/// 单条记录的装配结果
#[derive(Debug)]
pub enum AssembleOutcome {
    /// 装配成功
    Assembled(Question),
    /// 跳过（缺少必填内容或读取失败）
    Skipped(RecordError),
}

/// 记录处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecordStats {
    pub processed: usize,
    pub skipped: usize,
}

impl RecordStats {
    pub fn total(&self) -> usize {
        self.processed + self.skipped
    }
}

/// 记录装配器
///
/// 只持有默认值，不持有任何记录
pub struct RecordAssembler {
    default_difficulty: String,
    default_category: String,
    block_difficulty: String,
    block_category: String,
    verbose_logging: bool,
}

impl RecordAssembler {
    pub fn new(config: &Config) -> Self {
        Self {
            default_difficulty: config.default_difficulty.clone(),
            default_category: config.default_category.clone(),
            block_difficulty: config.block_difficulty.clone(),
            block_category: config.block_category.clone(),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 装配一条表格记录
    pub fn assemble(&self, raw: &RawRecord) -> AssembleOutcome {
        let rank = raw.rank.trim();
        let question = normalize(&raw.question);
        let answer = normalize(&raw.answer);

        if let Some(field) = missing_field(&question, &answer) {
            return AssembleOutcome::Skipped(RecordError::Malformed {
                rank: rank.to_string(),
                field,
            });
        }

        let difficulty = or_default(raw.difficulty.as_deref(), &self.default_difficulty);
        let category = or_default(raw.category.as_deref(), &self.default_category);

        let code_example = extract_code(&answer);
        let key_points = extract_key_points(&answer, &question);
        let follow_up_questions = generate_follow_ups(&question, &category, &difficulty);

        AssembleOutcome::Assembled(Question {
            id: format!("q{}", rank),
            question,
            difficulty,
            category,
            answer,
            code_example,
            key_points,
            follow_up_questions,
        })
    }

    /// 装配一个块格式记录
    ///
    /// 块自带代码、要点、追问，不再运行抽取器；难度和分类固定取块默认值。
    /// 要点和追问按与抽取器相同的上限截断。
    pub fn assemble_block(&self, block: &BlockRecord) -> AssembleOutcome {
        let question = normalize(block.question.as_deref().unwrap_or_default());
        let answer = normalize(block.answer.as_deref().unwrap_or_default());

        if let Some(field) = missing_field(&question, &answer) {
            return AssembleOutcome::Skipped(RecordError::Malformed {
                rank: format!("块 {}", block.position),
                field,
            });
        }

        AssembleOutcome::Assembled(Question {
            id: block.id.clone(),
            question,
            difficulty: self.block_difficulty.clone(),
            category: self.block_category.clone(),
            answer,
            code_example: block.code.as_ref().map(|code| CodeExample {
                title: String::new(),
                code: code.clone(),
            }),
            key_points: block.key_points.iter().take(MAX_KEY_POINTS).cloned().collect(),
            follow_up_questions: block
                .follow_ups
                .iter()
                .take(MAX_FOLLOW_UPS)
                .cloned()
                .collect(),
        })
    }

    /// 按输入顺序装配全部表格记录，坏记录只记警告
    pub fn assemble_all(&self, rows: Vec<RowResult>) -> (Vec<Question>, RecordStats) {
        let outcomes = rows.into_iter().map(|row| match row {
            Ok(raw) => self.assemble(&raw),
            Err(e) => AssembleOutcome::Skipped(e),
        });
        self.tally(outcomes)
    }

    /// 按文档顺序装配全部块
    pub fn assemble_blocks(&self, blocks: &[BlockRecord]) -> (Vec<Question>, RecordStats) {
        let outcomes = blocks.iter().map(|block| self.assemble_block(block));
        self.tally(outcomes)
    }

    fn tally(
        &self,
        outcomes: impl Iterator<Item = AssembleOutcome>,
    ) -> (Vec<Question>, RecordStats) {
        let mut questions = Vec::new();
        let mut stats = RecordStats::default();

        for outcome in outcomes {
            match outcome {
                AssembleOutcome::Assembled(question) => {
                    if self.verbose_logging {
                        debug!("✓ {}", question);
                    }
                    stats.processed += 1;
                    questions.push(question);
                }
                AssembleOutcome::Skipped(e) => {
                    warn!("⚠️ 跳过记录: {}", e);
                    stats.skipped += 1;
                }
            }
        }

        (questions, stats)
    }
}

fn missing_field(question: &str, answer: &str) -> Option<&'static str> {
    if question.is_empty() {
        Some("question")
    } else if answer.is_empty() {
        Some("answer")
    } else {
        None
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
