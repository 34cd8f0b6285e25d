use std::path::{Path, PathBuf};
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题库源目录不存在
    #[error("源目录不存在: {} (当前工作目录: {}, 可用条目: {})", .path.display(), .cwd.display(), .available.join(", "))]
    SourceMissing {
        path: PathBuf,
        cwd: PathBuf,
        available: Vec<String>,
    },

    /// 源目录中没有匹配的文件
    #[error("在 {} 中没有找到 {extension} 文件", .path.display())]
    NoInputFiles { path: PathBuf, extension: String },

    /// 单个文件读取或解码失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 输出文件写入失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PDF 渲染失败
    #[error("PDF 渲染失败: {0}")]
    Render(#[from] RenderError),

    /// 配置文件无法读取或解析
    #[error("配置错误 ({}): {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// 环境变量取值非法
    #[error("环境变量 {name} 的值无效: {value:?} ({expected})")]
    InvalidSetting {
        name: String,
        value: String,
        expected: &'static str,
    },
}

/// PDF 渲染阶段的错误
#[derive(Debug, Error)]
pub enum RenderError {
    /// 本地字体不存在，且未配置下载地址
    #[error("字体文件不存在: {}", .path.display())]
    FontMissing { path: PathBuf },

    /// 字体下载失败（已重试）
    #[error("字体下载失败 ({url}, 尝试 {attempts} 次): {source}")]
    FontFetch {
        url: String,
        attempts: usize,
        #[source]
        source: reqwest::Error,
    },

    /// 字体文件读写失败
    #[error("字体文件读写失败 ({}): {source}", .path.display())]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 排版引擎报错
    #[error("排版引擎错误: {0}")]
    Engine(String),

    /// 渲染任务异常退出
    #[error("渲染任务执行失败: {0}")]
    Task(#[from] tokio::task::JoinError),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AppError::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 创建文件写入错误
    pub fn output_write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AppError::OutputWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 创建配置错误
    pub fn config(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        AppError::Config {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// 是否为致命错误（需要终止整个运行）
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::FileRead { .. } | AppError::Render(_))
    }
}

impl From<genpdf::error::Error> for RenderError {
    fn from(err: genpdf::error::Error) -> Self {
        // 附带底层原因
        let message = match std::error::Error::source(&err) {
            Some(source) => format!("{}: {}", err, source),
            None => err.to_string(),
        };
        RenderError::Engine(message)
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
