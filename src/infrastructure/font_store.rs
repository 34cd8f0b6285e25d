//! 字体资源 - 基础设施层
//!
//! 渲染西里尔字母需要 TTF 字体：本地存在则直接使用，否则按配置下载一次（失败重试一次）

use crate::config::Config;
use crate::error::RenderError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// 下载尝试次数（首次 + 重试一次）
const FETCH_ATTEMPTS: usize = 2;

/// 下载超时
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// 已就绪的字体
#[derive(Debug)]
pub struct FontHandle {
    path: PathBuf,
    downloaded: bool,
    discard_after_use: bool,
}

impl FontHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 是否为本次运行下载的字体
    pub fn downloaded(&self) -> bool {
        self.downloaded
    }

    /// 释放字体：只删除本次下载且配置要求丢弃的文件
    pub async fn release(self) {
        if !(self.downloaded && self.discard_after_use) {
            return;
        }
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => info!("🗑️ 已删除下载的字体: {}", self.path.display()),
            Err(e) => warn!("⚠️ 删除字体失败 ({}): {}", self.path.display(), e),
        }
    }
}

/// 字体获取
pub struct FontStore {
    font_file: PathBuf,
    font_url: Option<String>,
    discard_after_use: bool,
}

impl FontStore {
    pub fn new(config: &Config) -> Self {
        Self {
            font_file: config.font_file.clone(),
            font_url: config.font_url.clone(),
            discard_after_use: config.discard_downloaded_font,
        }
    }

    /// 确保字体在本地可用
    pub async fn ensure(&self) -> Result<FontHandle, RenderError> {
        if self.font_file.exists() {
            return Ok(self.handle(false));
        }

        let Some(url) = self.font_url.as_deref() else {
            return Err(RenderError::FontMissing {
                path: self.font_file.clone(),
            });
        };

        info!("⬇️ 本地字体不存在，正在下载: {}", url);
        let bytes = fetch_with_retry(url).await?;

        if let Some(parent) = self.font_file.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| self.io_error(source))?;
            }
        }
        tokio::fs::write(&self.font_file, &bytes)
            .await
            .map_err(|source| self.io_error(source))?;

        info!(
            "✓ 字体已保存: {} ({} 字节)",
            self.font_file.display(),
            bytes.len()
        );
        Ok(self.handle(true))
    }

    fn handle(&self, downloaded: bool) -> FontHandle {
        FontHandle {
            path: self.font_file.clone(),
            downloaded,
            discard_after_use: self.discard_after_use,
        }
    }

    fn io_error(&self, source: std::io::Error) -> RenderError {
        RenderError::FontIo {
            path: self.font_file.clone(),
            source,
        }
    }
}

async fn fetch_with_retry(url: &str) -> Result<Vec<u8>, RenderError> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|source| RenderError::FontFetch {
            url: url.to_string(),
            attempts: 0,
            source,
        })?;

    let mut attempt = 1;
    loop {
        match fetch_once(&client, url).await {
            Ok(bytes) => return Ok(bytes),
            Err(e) if attempt < FETCH_ATTEMPTS => {
                warn!(
                    "字体下载失败 (尝试 {}/{})，重试中: {}",
                    attempt, FETCH_ATTEMPTS, e
                );
                attempt += 1;
            }
            Err(source) => {
                return Err(RenderError::FontFetch {
                    url: url.to_string(),
                    attempts: attempt,
                    source,
                })
            }
        }
    }
}

async fn fetch_once(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}
