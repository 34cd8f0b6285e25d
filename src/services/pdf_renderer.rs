//! PDF 渲染服务 - 业务能力层
//!
//! 版式：居中标题（题目总数）→ 每道题的题干（稍大字号）+ 每个选项一段（小字号）→ 固定题间距。
//! 渲染前统一替换破折号和右单引号，避免字体缺字。

use crate::error::RenderError;
use crate::models::MergedOutput;
use crate::services::typography::normalize_typography;
use genpdf::{elements, fonts, style, Alignment, Document, Element, SimplePageDecorator};
use std::path::Path;
use tracing::{debug, info};

/// 版式参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfLayout {
    pub title_font_size: u8,
    pub stem_font_size: u8,
    pub option_font_size: u8,
    /// 页边距（毫米）
    pub margins_mm: i32,
    /// 标题之后的空行数
    pub title_gap_lines: f64,
    /// 每道题之后的空行数
    pub question_gap_lines: f64,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self {
            title_font_size: 16,
            stem_font_size: 11,
            option_font_size: 10,
            margins_mm: 10,
            title_gap_lines: 1.0,
            question_gap_lines: 0.5,
        }
    }
}

/// 单道题在 PDF 中的渲染块（文本已替换排版字符）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBlock {
    /// `{编号}. {题干}`
    pub stem: String,
    pub options: Vec<String>,
}

/// 整份文档的渲染内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPlan {
    pub title: String,
    pub blocks: Vec<RenderBlock>,
}

impl DocumentPlan {
    /// 由合并结果生成渲染内容
    pub fn from_merged(merged: &MergedOutput) -> Self {
        let blocks = merged
            .questions()
            .iter()
            .map(|q| RenderBlock {
                stem: normalize_typography(&format!("{}. {}", q.index, q.question.stem_line())),
                options: q
                    .question
                    .option_lines()
                    .map(normalize_typography)
                    .collect(),
            })
            .collect();

        Self {
            title: format!("Merged Database: {} Questions", merged.len()),
            blocks,
        }
    }
}

/// PDF 渲染器
pub struct PdfRenderer {
    layout: PdfLayout,
}

impl PdfRenderer {
    pub fn new(layout: PdfLayout) -> Self {
        Self { layout }
    }

    /// 在阻塞线程池中渲染，避免占用异步运行时
    pub async fn render(
        &self,
        plan: DocumentPlan,
        font_path: &Path,
        output_path: &Path,
    ) -> Result<(), RenderError> {
        let layout = self.layout;
        let font_path = font_path.to_path_buf();
        let output_path = output_path.to_path_buf();

        tokio::task::spawn_blocking(move || {
            Self::render_blocking(layout, &plan, &font_path, &output_path)
        })
        .await?
    }

    fn render_blocking(
        layout: PdfLayout,
        plan: &DocumentPlan,
        font_path: &Path,
        output_path: &Path,
    ) -> Result<(), RenderError> {
        let font_bytes = std::fs::read(font_path).map_err(|source| RenderError::FontIo {
            path: font_path.to_path_buf(),
            source,
        })?;
        let font = fonts::FontData::new(font_bytes, None)?;

        // 只有一个字重，四种样式共用
        let family = fonts::FontFamily {
            regular: font.clone(),
            bold: font.clone(),
            italic: font.clone(),
            bold_italic: font,
        };

        let mut doc = Document::new(family);
        doc.set_title(plan.title.clone());
        doc.set_minimal_conformance();
        doc.set_font_size(layout.option_font_size);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(layout.margins_mm);
        doc.set_page_decorator(decorator);

        doc.push(
            elements::Paragraph::new(plan.title.clone())
                .aligned(Alignment::Center)
                .styled(style::Style::new().with_font_size(layout.title_font_size)),
        );
        doc.push(elements::Break::new(layout.title_gap_lines));

        for block in &plan.blocks {
            doc.push(
                elements::Paragraph::new(block.stem.clone())
                    .styled(style::Style::new().with_font_size(layout.stem_font_size)),
            );
            for option in &block.options {
                if option.trim().is_empty() {
                    doc.push(elements::Break::new(1.0));
                    continue;
                }
                doc.push(
                    elements::Paragraph::new(option.clone())
                        .styled(style::Style::new().with_font_size(layout.option_font_size)),
                );
            }
            doc.push(elements::Break::new(layout.question_gap_lines));
        }

        debug!("PDF 排版完成，共 {} 道题", plan.blocks.len());
        doc.render_to_file(output_path)?;
        info!("✓ 已生成 PDF: {}", output_path.display());

        Ok(())
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new(PdfLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionBlock, UniqueQuestionSet};
    use std::path::PathBuf;

    fn test_font_path() -> Option<PathBuf> {
        let path = std::env::var("FONT_FILE").unwrap_or_else(|_| "DejaVuSans.ttf".to_string());
        Some(PathBuf::from(path)).filter(|p| p.exists())
    }

    fn merged(bodies: &[&str]) -> MergedOutput {
        let mut set = UniqueQuestionSet::new();
        for body in bodies {
            set.insert(QuestionBlock::new(*body));
        }
        MergedOutput::from(set)
    }

    #[test]
    fn test_plan_numbers_and_normalizes() {
        let plan = DocumentPlan::from_merged(&merged(&[
            "Норма \u{2013} скільки?\nA) 1\u{2014}2\nB) м\u{2019}яз",
            "Без варіантів",
        ]));

        assert_eq!(plan.title, "Merged Database: 2 Questions");
        assert_eq!(
            plan.blocks,
            vec![
                RenderBlock {
                    stem: "1. Норма - скільки?".to_string(),
                    options: vec!["A) 1-2".to_string(), "B) м'яз".to_string()],
                },
                RenderBlock {
                    stem: "2. Без варіантів".to_string(),
                    options: vec![],
                },
            ]
        );
    }

    #[test]
    fn test_plan_keeps_blank_option_lines() {
        let plan = DocumentPlan::from_merged(&merged(&["Stem\n\nA) a"]));
        assert_eq!(plan.blocks[0].options, vec!["".to_string(), "A) a".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_font_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let plan = DocumentPlan::from_merged(&merged(&["Stem"]));
        let output = dir.path().join("out.pdf");

        let err = PdfRenderer::default()
            .render(plan, &dir.path().join("absent.ttf"), &output)
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::FontIo { .. }));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_invalid_font_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("broken.ttf");
        std::fs::write(&font, b"not a font").unwrap();

        let result = PdfRenderer::default()
            .render(
                DocumentPlan::from_merged(&merged(&["Stem"])),
                &font,
                &dir.path().join("out.pdf"),
            )
            .await;

        assert!(matches!(result, Err(RenderError::Engine(_))));
    }

    /// 需要本地 DejaVuSans.ttf（或 FONT_FILE 指定的字体）
    #[tokio::test]
    #[ignore]
    async fn test_render_with_real_font() {
        let _ = tracing_subscriber::fmt::try_init();

        let font = test_font_path().expect("需要可用的 TTF 字体");
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("Merged.pdf");

        PdfRenderer::default()
            .render(
                DocumentPlan::from_merged(&merged(&[
                    "Який показник гемоглобіну \u{2013} норма?\nA) 120\u{2014}140 г/л\nB) 50 г/л",
                    "Друге питання\nA) так\nB) ні",
                ])),
                &font,
                &output,
            )
            .await
            .unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
