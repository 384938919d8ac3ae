//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;

mod providers;
pub mod types;

pub use types::{ChatMessage, ChatModel, MessageRole};

use providers::ProviderClient;

/// LLM客户端 - 提供统一的LLM服务接口
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ChatModel for LLMClient {
    /// 单轮对话：system消息折叠为preamble，user消息折叠为prompt
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let (system_prompt, user_prompt) = fold_messages(messages)?;

        let agent = self
            .client
            .create_agent(&self.config.llm.model, &system_prompt, &self.config.llm);

        agent.prompt(&user_prompt).await
    }
}

/// 将有序消息列表折叠为(preamble, prompt)对，同角色消息以空行连接
fn fold_messages(messages: &[ChatMessage]) -> Result<(String, String)> {
    let mut system_parts = Vec::new();
    let mut user_parts = Vec::new();

    for message in messages {
        match message.role {
            MessageRole::System => system_parts.push(message.content.as_str()),
            MessageRole::User => user_parts.push(message.content.as_str()),
        }
    }

    if user_parts.is_empty() {
        anyhow::bail!("消息列表中缺少user角色的指令");
    }

    Ok((system_parts.join("\n\n"), user_parts.join("\n\n")))
}
