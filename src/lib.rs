//! # Question Bank Merger
//!
//! 把分散在目录树中的纯文本题库合并为一份去重后的 txt 和一份 PDF
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 文件系统与外部资源
//! - `collect_source_files` - 递归扫描并排序题库文件
//! - `FontStore` - 准备 PDF 渲染所需字体（本地或下载）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `extract_questions` - 按题号切分单个文件
//! - `Deduplicator` - 以题干首行去重，先到先得
//! - `TextWriter` / `PdfRenderer` - 输出两种产物
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/merge_runner` - 扫描 → 提取 → 去重 → 输出
//! - `orchestrator/file_processor` - 单个文件的读取与提取
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, RenderError};
pub use models::{MergeStats, MergedOutput, QuestionBlock, SourceFile, UniqueQuestionSet};
pub use orchestrator::{App, RunReport};
