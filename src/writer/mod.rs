//! 文档写入器 - 带时间戳版本与latest别名的落盘持久化

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// 文档写入器 - 将Markdown内容写入输出目录
pub struct DocWriter {
    output_dir: PathBuf,
}

impl DocWriter {
    /// 创建新的文档写入器
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 保存文档：写入带毫秒时间戳的版本文件，并覆盖latest别名，返回版本文件的绝对路径。
    /// 同一毫秒内对同一主干的两次写入会静默覆盖，后写者胜。
    pub fn save(&self, content: &str, stem: &str) -> Result<PathBuf> {
        let output_dir = std::path::absolute(&self.output_dir)
            .with_context(|| format!("无法解析输出目录: {:?}", self.output_dir))?;

        fs::create_dir_all(&output_dir)
            .with_context(|| format!("无法创建输出目录: {:?}", output_dir))?;

        let timestamp = chrono::Utc::now().timestamp_millis();
        let versioned_path = output_dir.join(format!("{}-{}.md", stem, timestamp));
        let latest_path = output_dir.join(format!("{}-latest.md", stem));

        fs::write(&versioned_path, content)
            .with_context(|| format!("无法写入文档: {:?}", versioned_path))?;
        println!("💾 已保存文档: {}", versioned_path.display());

        fs::write(&latest_path, content)
            .with_context(|| format!("无法写入文档: {:?}", latest_path))?;
        println!("💾 已更新最新版本: {}", latest_path.display());

        Ok(versioned_path)
    }
}
