//! 程序配置
//!
//! 配置按 默认值 → TOML 配置文件 → 环境变量 的顺序逐层覆盖

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "merger.toml";

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题库源目录（递归扫描）
    pub source_dir: PathBuf,
    /// 输出目录
    pub output_dir: PathBuf,
    /// 输出文件名（不含扩展名）
    pub output_basename: String,
    /// 参与合并的文件后缀（区分大小写）
    pub file_extension: String,
    /// PDF 渲染使用的 TTF 字体路径
    pub font_file: PathBuf,
    /// 本地字体不存在时的下载地址
    pub font_url: Option<String>,
    /// 渲染完成后是否删除本次下载的字体
    pub discard_downloaded_font: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: ["Українська", "Крок Б", "Лабораторна діагностика"]
                .iter()
                .collect(),
            output_dir: ["Українська", "Крок Б"].iter().collect(),
            output_basename: "Merged_Lab_Diagnostics".to_string(),
            file_extension: ".txt".to_string(),
            font_file: PathBuf::from("DejaVuSans.ttf"),
            font_url: None,
            discard_downloaded_font: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载完整配置：默认值 → 配置文件 → 环境变量
    pub fn load() -> AppResult<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// 按给定的变量来源加载配置
    ///
    /// `MERGER_CONFIG` 显式指定的文件必须存在；只有默认的 `merger.toml` 可以缺省
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let base = match lookup("MERGER_CONFIG") {
            Some(explicit) => {
                let path = PathBuf::from(explicit);
                if !path.is_file() {
                    return Err(AppError::config(&path, "配置文件不存在"));
                }
                Self::from_toml_file(&path)?
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_toml_file(path)?
                } else {
                    Self::default()
                }
            }
        };

        base.with_overrides(lookup)
    }

    /// 从 TOML 文件读取配置，缺省字段取默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::config(path, e.to_string()))?;
        Self::from_toml_str(&content).map_err(|e| AppError::config(path, e))
    }

    /// 解析 TOML 文本
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// 用外部变量覆盖已有配置，布尔开关取值非法时报错
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let flag = |name: &str, current: bool| -> AppResult<bool> {
            match lookup(name) {
                Some(value) => parse_flag(name, &value),
                None => Ok(current),
            }
        };

        Ok(Self {
            discard_downloaded_font: flag("DISCARD_DOWNLOADED_FONT", self.discard_downloaded_font)?,
            verbose_logging: flag("VERBOSE_LOGGING", self.verbose_logging)?,
            source_dir: lookup("SOURCE_DIR").map(PathBuf::from).unwrap_or(self.source_dir),
            output_dir: lookup("OUTPUT_DIR").map(PathBuf::from).unwrap_or(self.output_dir),
            output_basename: lookup("OUTPUT_BASENAME").unwrap_or(self.output_basename),
            file_extension: lookup("FILE_EXTENSION").unwrap_or(self.file_extension),
            font_file: lookup("FONT_FILE").map(PathBuf::from).unwrap_or(self.font_file),
            font_url: lookup("FONT_URL").or(self.font_url),
        })
    }

    /// 文本产物路径
    pub fn text_output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.txt", self.output_basename))
    }

    /// PDF 产物路径
    pub fn pdf_output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.pdf", self.output_basename))
    }
}

fn parse_flag(name: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AppError::InvalidSetting {
            name: name.to_string(),
            value: value.to_string(),
            expected: "true/false/1/0",
        }),
    }
}
