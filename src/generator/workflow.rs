//! 文档生成工作流

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::generator::{DocGenerator, DocRequest};
use crate::llm::client::{ChatModel, LLMClient};
use crate::writer::DocWriter;

/// 启动文档生成工作流
pub async fn launch(config: &Config) -> Result<()> {
    println!(
        "🤖 正在为 {} 起草文档 (provider: {}, model: {})...",
        config.package_name, config.llm.provider, config.llm.model
    );

    let client = LLMClient::new(config.clone())?;
    let versioned_path = execute(&client, config).await?;

    println!("✅ 文档已保存至: {}", versioned_path.display());

    Ok(())
}

/// 执行工作流：构建请求 → 调用模型 → 写入两份文件，返回带时间戳版本文件的绝对路径
pub async fn execute(model: &dyn ChatModel, config: &Config) -> Result<PathBuf> {
    let request = DocRequest::new(&config.package_name, config.package_url.clone());
    let generator = DocGenerator::new(request);

    let markdown = generator.generate(model).await?;

    let writer = DocWriter::new(&config.output_path);
    writer.save(&markdown, &generator.request().file_stem())
}
