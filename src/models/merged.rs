//! 合并结果
//!
//! 在渲染阶段由去重集合生成，编号从1开始连续递增

use crate::models::question::{QuestionBlock, UniqueQuestionSet};

/// 重新编号后的题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedQuestion {
    pub index: usize,
    pub question: QuestionBlock,
}

/// 最终合并结果
#[derive(Debug, Clone, Default)]
pub struct MergedOutput {
    questions: Vec<NumberedQuestion>,
}

impl MergedOutput {
    pub fn questions(&self) -> &[NumberedQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 文本产物内容：`{编号}. {题目}\n\n` 依次拼接
    pub fn to_text(&self) -> String {
        self.questions
            .iter()
            .map(|q| format!("{}. {}\n\n", q.index, q.question.body()))
            .collect()
    }
}

impl From<UniqueQuestionSet> for MergedOutput {
    fn from(set: UniqueQuestionSet) -> Self {
        let questions = set
            .into_questions()
            .into_iter()
            .enumerate()
            .map(|(i, question)| NumberedQuestion {
                index: i + 1,
                question,
            })
            .collect();
        Self { questions }
    }
}

/// 一次运行的统计信息
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeStats {
    /// 扫描到的文件数
    pub files_found: usize,
    /// 成功读取的文件数
    pub files_read: usize,
    /// 读取失败被跳过的文件数
    pub files_skipped: usize,
    /// 提取到的题目总数（含重复）
    pub questions_extracted: usize,
    /// 被丢弃的重复题目数
    pub duplicates_dropped: usize,
    /// 去重后的题目数
    pub unique_questions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renumbering_is_contiguous() {
        let mut set = UniqueQuestionSet::new();
        for body in ["Q7 stem\nA) a", "Q3 stem", "Q7 stem\nB) b", "Q1 stem"] {
            set.insert(QuestionBlock::new(body));
        }

        let merged = MergedOutput::from(set);
        let indices: Vec<_> = merged.questions().iter().map(|q| q.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(
            merged.to_text(),
            "1. Q7 stem\nA) a\n\n2. Q3 stem\n\n3. Q1 stem\n\n"
        );
    }

    #[test]
    fn test_empty_output_has_empty_text() {
        let merged = MergedOutput::from(UniqueQuestionSet::new());
        assert!(merged.is_empty());
        assert_eq!(merged.to_text(), "");
    }
}
