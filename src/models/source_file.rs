use std::fmt::Display;
use std::path::{Path, PathBuf};

/// 待处理的题库文件
///
/// `order` 为排序后的位置（从0开始），决定去重时的优先级
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    order: usize,
}

impl SourceFile {
    pub fn new(path: PathBuf, order: usize) -> Self {
        Self { path, order }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// 相对于源目录的显示路径，无法剥离前缀时返回完整路径
    pub fn display_relative(&self, root: &Path) -> String {
        self.path
            .strip_prefix(root)
            .unwrap_or(&self.path)
            .display()
            .to_string()
    }
}

impl Display for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文件#{} {}]", self.order + 1, self.path.display())
    }
}
