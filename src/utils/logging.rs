//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use crate::config::Config;
use crate::models::MergeStats;
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 本次运行的配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库合并去重");
    info!("📁 源目录: {}", config.source_dir.display());
    info!("📂 输出目录: {}", config.output_dir.display());
    info!("{}", "=".repeat(60));
}

/// 记录文件扫描结果
///
/// # 参数
/// - `total`: 文件总数
/// - `extension`: 文件后缀
pub fn log_files_found(total: usize, extension: &str) {
    info!("✓ 找到 {} 个 {} 文件，开始处理...", total, extension);
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 运行统计
pub fn print_final_stats(stats: &MergeStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 合并完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📄 文件: 读取 {}/{}，跳过 {}", stats.files_read, stats.files_found, stats.files_skipped);
    info!("🧩 提取题目: {}", stats.questions_extracted);
    info!("♻️ 重复题目: {}", stats.duplicates_dropped);
    info!("✅ 去重后题目: {}", stats.unique_questions);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_text("Лабораторна", 4), "Лабо...");
        assert_eq!(truncate_text("коротко", 20), "коротко");
    }
}
