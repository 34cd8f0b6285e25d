//! 去重服务 - 业务能力层
//!
//! 持有本次运行的去重集合，按文件顺序逐个吸收题目

use crate::models::{QuestionBlock, SourceFile, UniqueQuestionSet};
use crate::utils::logging::truncate_text;
use tracing::debug;

/// 单个文件的去重结果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AbsorbResult {
    pub added: usize,
    pub duplicates: usize,
}

/// 题目去重器
///
/// 以第一行（去除首尾空白）作为身份键，先到先得
#[derive(Debug, Default)]
pub struct Deduplicator {
    unique: UniqueQuestionSet,
    verbose_logging: bool,
}

impl Deduplicator {
    pub fn new(verbose_logging: bool) -> Self {
        Self {
            unique: UniqueQuestionSet::new(),
            verbose_logging,
        }
    }

    /// 吸收一个文件中提取出的全部题目（保持提取顺序）
    pub fn absorb(&mut self, source: &SourceFile, questions: Vec<QuestionBlock>) -> AbsorbResult {
        let mut result = AbsorbResult::default();

        for question in questions {
            let key_preview = self
                .verbose_logging
                .then(|| truncate_text(question.identity_key(), 60));

            if self.unique.insert(question) {
                result.added += 1;
            } else {
                result.duplicates += 1;
                if let Some(preview) = key_preview {
                    debug!("{} 重复题目已跳过: {}", source, preview);
                }
            }
        }

        result
    }

    pub fn unique_count(&self) -> usize {
        self.unique.len()
    }

    pub fn finish(self) -> UniqueQuestionSet {
        self.unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::extractor::extract_questions;
    use std::path::PathBuf;

    fn source(name: &str, order: usize) -> SourceFile {
        SourceFile::new(PathBuf::from(name), order)
    }

    #[test]
    fn test_two_files_merge_in_order() {
        let mut dedup = Deduplicator::new(false);

        let a = extract_questions("1. What is X?\nA) foo\nB) bar\n2. What is Y?\nC) baz\n");
        let b = extract_questions("1. What is X?\nA) foo\nB) bar\n2. What is Z?\nD) qux\n");

        assert_eq!(
            dedup.absorb(&source("a.txt", 0), a),
            AbsorbResult { added: 2, duplicates: 0 }
        );
        assert_eq!(
            dedup.absorb(&source("b.txt", 1), b),
            AbsorbResult { added: 1, duplicates: 1 }
        );

        let keys: Vec<String> = dedup
            .finish()
            .iter()
            .map(|q| q.identity_key().to_string())
            .collect();
        assert_eq!(keys, vec!["What is X?", "What is Y?", "What is Z?"]);
    }

    #[test]
    fn test_kept_entry_is_the_earliest() {
        let mut dedup = Deduplicator::new(true);
        dedup.absorb(
            &source("a.txt", 0),
            vec![
                QuestionBlock::new("Stem\nA) first"),
                QuestionBlock::new("Stem \nA) same file later"),
            ],
        );
        dedup.absorb(&source("b.txt", 1), vec![QuestionBlock::new("Stem\nA) other file")]);

        let unique = dedup.finish();
        assert_eq!(unique.len(), 1);
        assert_eq!(unique.iter().next().unwrap().body(), "Stem\nA) first");
    }
}
