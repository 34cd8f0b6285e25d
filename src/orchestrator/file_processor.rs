//! 单个文件处理器 - 编排层
//!
//! 读取一个题库文件 → 提取题目 → 交给去重器

use crate::error::{AppError, AppResult};
use crate::models::SourceFile;
use crate::services::{extract_questions, AbsorbResult, Deduplicator};
use tokio::fs;
use tracing::debug;

/// 单个文件的处理结果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileOutcome {
    pub extracted: usize,
    pub absorbed: AbsorbResult,
}

/// 处理单个文件
///
/// 文件无法读取或不是合法 UTF-8 时返回 `FileRead`，由调用方决定跳过
pub async fn process_file(source: &SourceFile, dedup: &mut Deduplicator) -> AppResult<FileOutcome> {
    let content = fs::read_to_string(source.path())
        .await
        .map_err(|e| AppError::file_read(source.path(), e))?;

    let questions = extract_questions(&content);
    let extracted = questions.len();
    let absorbed = dedup.absorb(source, questions);

    debug!(
        "{} 提取 {} 道题，新增 {}，重复 {}",
        source, extracted, absorbed.added, absorbed.duplicates
    );

    Ok(FileOutcome {
        extracted,
        absorbed,
    })
}
