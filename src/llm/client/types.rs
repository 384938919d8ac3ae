//! 模型后端能力接口与指令消息类型

use anyhow::Result;
use async_trait::async_trait;

/// 指令消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
}

/// 发送给模型后端的一条指令消息
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    /// 创建system角色消息
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// 创建user角色消息
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// 模型后端能力接口：接收有序指令消息，返回一段文本补全。
/// 任何具体后端（云端API或本地模型服务）都可以实现该接口，
/// 文档生成器只依赖这一窄接口，不依赖具体客户端类型。
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}
