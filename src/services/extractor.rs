//! 题目提取服务 - 业务能力层
//!
//! 只负责把单个文件的文本切分为题目，不关心去重和输出

use crate::models::QuestionBlock;
use regex::Regex;
use std::sync::LazyLock;

/// 行首题号：`数字. ` 后跟任意空白
static RE_ORDINAL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\.\s").unwrap());

/// 完整题目：题号 + 空白 + 剩余内容（可跨行）
static RE_NUMBERED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A\d+\.\s+(.*)").unwrap());

/// 按题号切分文本，返回去掉题号后的题目
///
/// 不以题号开头的片段（如文件头部说明）会被静默丢弃
pub fn extract_questions(content: &str) -> Vec<QuestionBlock> {
    split_raw_blocks(content)
        .into_iter()
        .filter_map(|raw| {
            let block = raw.trim();
            if block.is_empty() {
                return None;
            }
            RE_NUMBERED_BLOCK
                .captures(block)
                .and_then(|caps| caps.get(1))
                .map(|body| QuestionBlock::new(body.as_str()))
        })
        .collect()
}

/// 在每个题号行之前切分，切分点前的换行符不保留
fn split_raw_blocks(content: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;

    for m in RE_ORDINAL_LINE.find_iter(content) {
        // 多行模式下 `^` 只在文本开头或换行之后匹配
        if m.start() > 0 {
            blocks.push(&content[start..m.start() - 1]);
        }
        start = m.start();
    }
    blocks.push(&content[start..]);

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies(content: &str) -> Vec<String> {
        extract_questions(content)
            .into_iter()
            .map(QuestionBlock::into_body)
            .collect()
    }

    #[test]
    fn test_basic_split() {
        let content = "1. What is X?\nA) foo\nB) bar\n2. What is Y?\nC) baz\n";
        assert_eq!(
            bodies(content),
            vec!["What is X?\nA) foo\nB) bar", "What is Y?\nC) baz"]
        );
    }

    #[test]
    fn test_leading_header_is_discarded() {
        let content = "Крок Б. Лабораторна діагностика\n\n1. Перше питання\nA) так\n";
        assert_eq!(bodies(content), vec!["Перше питання\nA) так"]);
    }

    #[test]
    fn test_embedded_blank_lines_are_kept() {
        let content = "12. Stem\n\nA) one\n\nB) two\n13. Next";
        assert_eq!(bodies(content), vec!["Stem\n\nA) one\n\nB) two", "Next"]);
    }

    #[test]
    fn test_ordinal_must_start_a_line() {
        let content = "1. See item 2. below\nA) x\n";
        assert_eq!(bodies(content), vec!["See item 2. below\nA) x"]);
    }

    #[test]
    fn test_number_without_space_is_not_a_marker() {
        let content = "1. Dose is\n3.5 mg\n2.Missing space\n";
        assert_eq!(bodies(content), vec!["Dose is\n3.5 mg\n2.Missing space"]);
    }

    #[test]
    fn test_marker_without_body_is_dropped() {
        let content = "1. \n2. Real question\n";
        assert_eq!(bodies(content), vec!["Real question"]);
    }

    #[test]
    fn test_marker_followed_by_newline() {
        // `\s` 也匹配换行，题号独占一行时题干在下一行
        let content = "1.\nStem on next line\nA) a\n";
        assert_eq!(bodies(content), vec!["Stem on next line\nA) a"]);
    }

    #[test]
    fn test_consecutive_markers() {
        let content = "1.\n2. Second\n";
        assert_eq!(bodies(content), vec!["Second"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "1. First\r\nA) a\r\n2. Second\r\n";
        let got = bodies(content);
        assert_eq!(got, vec!["First\r\nA) a", "Second"]);
        assert_eq!(extract_questions(content)[0].identity_key(), "First");
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(bodies("").is_empty());
        assert!(bodies("   \n\n").is_empty());
        assert!(bodies("no numbered questions here\nat all").is_empty());
    }
}
