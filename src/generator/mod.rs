//! 文档生成器 - 为指定软件包起草Markdown文档

use anyhow::Result;

use crate::llm::client::{ChatMessage, ChatModel};

pub mod prompts;
pub mod workflow;

/// 文档生成请求描述符，构造后不可变
#[derive(Debug, Clone)]
pub struct DocRequest {
    doc_name: String,
    package_url: Option<String>,
}

impl DocRequest {
    /// 创建请求描述符，可选字段在构造时一次性给定
    pub fn new(doc_name: impl Into<String>, package_url: Option<String>) -> Self {
        Self {
            doc_name: doc_name.into(),
            package_url,
        }
    }

    /// 软件包名称
    pub fn doc_name(&self) -> &str {
        &self.doc_name
    }

    /// 参考URL：优先使用显式提供的地址，否则按npm registry规则推导
    pub fn reference_url(&self) -> String {
        match &self.package_url {
            Some(url) => url.clone(),
            None => format!("https://www.npmjs.com/package/{}", self.doc_name),
        }
    }

    /// 文件名主干：包名中的`/`替换为`-`，兼容scoped包
    pub fn file_stem(&self) -> String {
        self.doc_name.replace('/', "-")
    }
}

/// 文档生成器 - 渲染提示词并调用一次模型后端
pub struct DocGenerator {
    request: DocRequest,
}

impl DocGenerator {
    /// 创建新的文档生成器
    pub fn new(request: DocRequest) -> Self {
        Self { request }
    }

    /// 当前请求描述符
    pub fn request(&self) -> &DocRequest {
        &self.request
    }

    /// 生成Markdown文档：发送有序的[system, user]消息对，原样返回模型文本
    pub async fn generate(&self, model: &dyn ChatModel) -> Result<String> {
        let messages = [
            ChatMessage::system(prompts::render_system_instruction(&self.request)),
            ChatMessage::user(prompts::render_user_instruction(&self.request)),
        ];

        model.complete(&messages).await
    }
}
