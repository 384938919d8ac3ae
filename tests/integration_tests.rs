use std::fs;
use std::process::Command;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use clap::error::ErrorKind;
use tempfile::TempDir;

use autodoc_rs::cli::Args;
use autodoc_rs::config::Config;
use autodoc_rs::generator::workflow::execute;
use autodoc_rs::llm::client::{ChatMessage, ChatModel, MessageRole};
use autodoc_rs::writer::DocWriter;

/// 返回固定文本并记录收到消息的模型桩
struct StubModel {
    reply: String,
    seen: Mutex<Vec<ChatMessage>>,
}

impl StubModel {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatModel for StubModel {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.seen.lock().unwrap().extend_from_slice(messages);
        Ok(self.reply.clone())
    }
}

/// 模拟后端故障的模型桩
struct RejectingModel;

#[async_trait]
impl ChatModel for RejectingModel {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String> {
        anyhow::bail!("simulated backend failure")
    }
}

fn create_test_config(temp_dir: &TempDir, package: &str) -> Config {
    let mut config = Config::default();
    config.package_name = package.to_string();
    config.output_path = temp_dir.path().join("docs");
    config
}

#[tokio::test]
async fn test_execute_writes_versioned_and_latest() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir, "pkg");
    let model = StubModel::new("# Hello");

    let versioned_path = execute(&model, &config).await.unwrap();

    // 返回的是带版本号文件的绝对路径
    assert!(versioned_path.is_absolute());
    assert!(versioned_path.exists());

    let entries: Vec<String> = fs::read_dir(&config.output_path)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().any(|name| name == "pkg-latest.md"));

    assert_eq!(fs::read_to_string(&versioned_path).unwrap(), "# Hello");
    assert_eq!(
        fs::read_to_string(config.output_path.join("pkg-latest.md")).unwrap(),
        "# Hello"
    );
}

#[tokio::test]
async fn test_execute_sends_ordered_instruction_pair() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir, "left-pad");
    let model = StubModel::new("docs");

    execute(&model, &config).await.unwrap();

    let seen = model.seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].role, MessageRole::System);
    assert_eq!(seen[1].role, MessageRole::User);

    // system指令包含全部六个章节标题
    let system = &seen[0].content;
    assert!(system.contains("## Overview"));
    assert!(system.contains("## Installation"));
    assert!(system.contains("## Compatibility"));
    assert!(system.contains("## API Reference"));
    assert!(system.contains("## Usage Examples"));
    assert!(system.contains("## Additional Notes"));

    // user指令嵌入按npm规则推导的默认URL
    assert!(seen[1]
        .content
        .contains("https://www.npmjs.com/package/left-pad"));
}

#[tokio::test]
async fn test_execute_uses_explicit_package_url() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&temp_dir, "left-pad");
    config.package_url = Some("https://example.com/docs/left-pad".to_string());
    let model = StubModel::new("docs");

    execute(&model, &config).await.unwrap();

    let seen = model.seen.lock().unwrap();
    assert!(seen[1].content.contains("https://example.com/docs/left-pad"));
    assert!(!seen[1]
        .content
        .contains("https://www.npmjs.com/package/left-pad"));
}

#[tokio::test]
async fn test_execute_scoped_package_stem() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir, "@rescui/use-glow-hover");
    let model = StubModel::new("docs");

    let versioned_path = execute(&model, &config).await.unwrap();

    // scoped包名中的`/`替换为`-`，不产生子目录
    let versioned_name = versioned_path.file_name().unwrap().to_str().unwrap();
    assert!(versioned_name.starts_with("@rescui-use-glow-hover-"));
    assert!(config
        .output_path
        .join("@rescui-use-glow-hover-latest.md")
        .exists());
}

#[tokio::test]
async fn test_rejecting_backend_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir, "pkg");

    let result = execute(&RejectingModel, &config).await;

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("simulated backend failure"));
    // 后端失败时不应有任何文件系统写入
    assert!(!config.output_path.exists());
}

#[test]
fn test_writer_double_save_preserves_versions() {
    let temp_dir = TempDir::new().unwrap();
    let writer = DocWriter::new(temp_dir.path());

    let first_path = writer.save("first", "pkg").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second_path = writer.save("second", "pkg").unwrap();

    assert_ne!(first_path, second_path);
    assert_eq!(fs::read_to_string(&first_path).unwrap(), "first");
    assert_eq!(fs::read_to_string(&second_path).unwrap(), "second");
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("pkg-latest.md")).unwrap(),
        "second"
    );
}

#[test]
fn test_missing_package_argument() {
    let err = Args::try_parse_from(["autodoc-rs"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_missing_package_argument_exit_code() {
    let temp_dir = TempDir::new().unwrap();

    // 不带参数运行二进制，工作目录指向空白临时目录
    let output = Command::new(env!("CARGO_BIN_EXE_autodoc-rs"))
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
    assert!(stderr.contains("请提供软件包名称"));

    // 缺少参数时不产生任何文件系统写入
    let entries = fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(entries, 0);
}
