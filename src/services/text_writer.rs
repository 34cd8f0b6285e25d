//! 文本产物写入服务 - 业务能力层
//!
//! 只负责"写合并后的 txt"能力，不关心 PDF

use crate::error::{AppError, AppResult};
use crate::models::MergedOutput;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 文本产物写入服务
pub struct TextWriter {
    output_path: PathBuf,
}

impl TextWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// 写入合并结果，已存在的文件直接覆盖
    pub async fn write(&self, merged: &MergedOutput) -> AppResult<()> {
        let content = merged.to_text();
        debug!(
            "写入文本产物: {} | 题目数: {} | 字节数: {}",
            self.output_path.display(),
            merged.len(),
            content.len()
        );

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::output_write(parent, e))?;
            }
        }

        fs::write(&self.output_path, content)
            .await
            .map_err(|e| AppError::output_write(&self.output_path, e))
    }
}
