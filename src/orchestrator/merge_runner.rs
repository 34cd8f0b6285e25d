//! 题库合并主流程 - 编排层
//!
//! ## 职责
//!
//! 1. **扫描**：递归收集源目录下的题库文件，并按路径排序
//! 2. **提取 + 去重**：逐个文件委托 file_processor 处理，单个文件失败只跳过该文件
//! 3. **输出**：先写文本产物，再生成 PDF；PDF 失败不影响已写入的文本
//! 4. **统计**：汇总本次运行的结果
//!
//! 整个流程在单一执行上下文中顺序运行，不并发处理文件

use crate::config::Config;
use crate::error::{AppError, AppResult, RenderError};
use crate::infrastructure::{collect_source_files, FontStore};
use crate::models::{MergeStats, MergedOutput, SourceFile};
use crate::orchestrator::file_processor;
use crate::services::{Deduplicator, DocumentPlan, PdfRenderer, TextWriter};
use crate::utils::logging::{log_files_found, log_startup, print_final_stats};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 一次运行的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub stats: MergeStats,
    /// 已写入的文本产物
    pub text_path: Option<PathBuf>,
    /// 已生成的 PDF；渲染失败时为空
    pub pdf_path: Option<PathBuf>,
}

/// 应用主结构
pub struct App {
    config: Config,
    renderer: PdfRenderer,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);
        Self {
            config,
            renderer: PdfRenderer::default(),
        }
    }

    /// 运行完整流程：扫描 → 提取 → 去重 → 输出
    pub async fn run(&self) -> AppResult<RunReport> {
        let files = collect_source_files(&self.config.source_dir, &self.config.file_extension)
            .inspect_err(|e| error!("❌ {}", e))?;

        if files.is_empty() {
            let reason = AppError::NoInputFiles {
                path: self.config.source_dir.clone(),
                extension: self.config.file_extension.clone(),
            };
            warn!("⚠️ {}，程序结束", reason);
            return Ok(RunReport::default());
        }

        log_files_found(files.len(), &self.config.file_extension);

        let (merged, mut stats) = self
            .merge_files(&files)
            .await
            .inspect_err(|e| error!("❌ {}", e))?;
        info!("✓ 去重后共 {} 道题", merged.len());

        let text_path = self.config.text_output_path();
        TextWriter::new(&text_path)
            .write(&merged)
            .await
            .inspect_err(|e| error!("❌ {}", e))?;
        info!("✓ 已生成 TXT: {}", text_path.display());

        let pdf_path = match self.render_pdf(&merged).await.map_err(AppError::from) {
            Ok(path) => Some(path),
            Err(e) if !e.is_fatal() => {
                error!("❌ {}", e);
                warn!("⚠️ 文本产物已保存，PDF 未生成");
                None
            }
            Err(e) => return Err(e),
        };

        stats.unique_questions = merged.len();
        print_final_stats(&stats);

        Ok(RunReport {
            stats,
            text_path: Some(text_path),
            pdf_path,
        })
    }

    /// 按排序顺序逐个处理文件
    ///
    /// 可恢复的错误（单个文件读取失败）只跳过该文件，其余错误终止运行
    async fn merge_files(&self, files: &[SourceFile]) -> AppResult<(MergedOutput, MergeStats)> {
        let mut dedup = Deduplicator::new(self.config.verbose_logging);
        let mut stats = MergeStats {
            files_found: files.len(),
            ..Default::default()
        };

        for source in files {
            match file_processor::process_file(source, &mut dedup).await {
                Ok(outcome) => {
                    stats.files_read += 1;
                    stats.questions_extracted += outcome.extracted;
                    stats.duplicates_dropped += outcome.absorbed.duplicates;
                }
                Err(e) if !e.is_fatal() => {
                    warn!("⚠️ {}，已跳过", e);
                    stats.files_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok((MergedOutput::from(dedup.finish()), stats))
    }

    /// 准备字体并生成 PDF
    ///
    /// 先删除上次运行留下的 PDF，渲染失败时不会留下题目数过期的旧文件
    async fn render_pdf(&self, merged: &MergedOutput) -> Result<PathBuf, RenderError> {
        let pdf_path = self.config.pdf_output_path();
        remove_stale_pdf(&pdf_path).await;

        let font = FontStore::new(&self.config).ensure().await?;
        if font.downloaded() {
            info!("🔤 使用本次下载的字体: {}", font.path().display());
        }

        let result = self
            .renderer
            .render(DocumentPlan::from_merged(merged), font.path(), &pdf_path)
            .await;
        font.release().await;

        result.map(|()| pdf_path)
    }
}

async fn remove_stale_pdf(pdf_path: &Path) {
    match tokio::fs::remove_file(pdf_path).await {
        Ok(()) => info!("🗑️ 已删除旧的 PDF: {}", pdf_path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("⚠️ 无法删除旧的 PDF ({})，该文件已过期: {}", pdf_path.display(), e),
    }
}
