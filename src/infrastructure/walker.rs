//! 目录扫描 - 基础设施层
//!
//! 只读遍历源目录，返回按完整路径字符串排序的文件列表

use crate::error::{AppError, AppResult};
use crate::models::SourceFile;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// 递归收集文件名以 `extension` 结尾的文件（区分大小写）
///
/// 只收集普通文件（以及指向普通文件的符号链接）；
/// 源路径不存在或不是目录时返回 `SourceMissing`，附带当前工作目录及其条目，便于排查路径问题
pub fn collect_source_files(root: &Path, extension: &str) -> AppResult<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(source_missing(root));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("⚠️ 无法访问目录条目，已跳过: {}", e);
                continue;
            }
        };

        let is_file = entry.file_type().is_file() || entry.path().is_file();
        if !is_file {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(extension) {
            paths.push(entry.into_path());
        }
    }

    // 按完整路径字符串排序，保证去重优先级与遍历顺序无关
    paths.sort_by_cached_key(|p| p.to_string_lossy().into_owned());
    debug!("在 {} 中找到 {} 个文件", root.display(), paths.len());

    Ok(paths
        .into_iter()
        .enumerate()
        .map(|(order, path)| SourceFile::new(path, order))
        .collect())
}

fn source_missing(root: &Path) -> AppError {
    let cwd = std::env::current_dir().unwrap_or_default();
    let mut available: Vec<String> = std::fs::read_dir(&cwd)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    available.sort();

    AppError::SourceMissing {
        path: root.to_path_buf(),
        cwd,
        available,
    }
}
