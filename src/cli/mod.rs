use crate::config::{Config, LLMProvider};
use clap::Parser;
use std::path::PathBuf;

/// Quill - 由LLM驱动的软件包文档起草工具
#[derive(Parser, Debug)]
#[command(name = "Quill (autodoc-rs)")]
#[command(
    about = "LLM-based documentation drafting tool. Give it a package name and it asks a chat model to draft structured Markdown documentation, saved with timestamp-based versioning and a latest alias."
)]
#[command(version)]
pub struct Args {
    /// 软件包名称（例如 @rescui/use-glow-hover）
    pub package: String,

    /// 输出目录
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 软件包参考URL（默认按npm registry地址推导）
    #[arg(long)]
    pub package_url: Option<String>,

    /// LLM Provider (openai, anthropic, deepseek, mistral, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 模型名称
    #[arg(long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path)
                .unwrap_or_else(|e| panic!("❌ 无法读取配置文件 {:?}: {}", config_path, e))
        } else {
            // 未显式指定时，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("quill.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|e| {
                    panic!("❌ 无法读取配置文件 {:?}: {}", default_config_path, e)
                })
            } else {
                // 默认配置文件不存在，使用默认值
                Config::default()
            }
        };

        // 包名只来自CLI位置参数，始终覆盖配置文件
        config.package_name = self.package;

        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }
        if let Some(package_url) = self.package_url {
            config.package_url = Some(package_url);
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        config
    }
}

/// 处理参数解析失败：缺少软件包名称时以退出码1结束，并向stderr输出用法提示
pub fn exit_on_parse_error(err: clap::Error) -> ! {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::MissingRequiredArgument => {
            eprintln!("❌ 请提供软件包名称作为参数，例如:");
            eprintln!("   autodoc-rs @rescui/use-glow-hover");
            eprintln!();
            eprintln!("{err}");
            std::process::exit(1);
        }
        // --help / --version 及其余解析错误沿用clap默认行为
        _ => err.exit(),
    }
}
