//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `merge_runner` - 主流程
//! - 扫描源目录，得到排序后的文件列表
//! - 逐个文件委托 file_processor，汇总统计
//! - 写文本产物，再生成 PDF
//!
//! ### `file_processor` - 单个文件处理器
//! - 读取文件、提取题目、交给去重器
//! - 读取失败返回错误，由 merge_runner 跳过该文件
//!
//! ## 层次关系
//!
//! ```text
//! merge_runner (处理 Vec<SourceFile>)
//!     ↓
//! file_processor (处理单个文件)
//!     ↓
//! services (能力层：extract / dedup / text / pdf)
//!     ↓
//! infrastructure (基础设施：目录扫描、字体)
//! ```

pub mod file_processor;
pub mod merge_runner;

// 重新导出主要类型
pub use file_processor::{process_file, FileOutcome};
pub use merge_runner::{App, RunReport};
