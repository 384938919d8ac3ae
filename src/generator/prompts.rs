//! 提示词模板 - 固定的文档结构指令与每次运行插值的用户指令

use crate::generator::DocRequest;

/// 渲染system指令：约定六个必需章节与排版规则
pub fn render_system_instruction(request: &DocRequest) -> String {
    format!(
        r#"You are a senior technical writer and documentation expert.

Your task is to generate high-quality, production-ready Markdown documentation for the `{}` npm package.

Your output must be **well-structured** and follow this format strictly:

## Overview
- What the package does
- Why it is useful

## Installation
- How to install the package with npm and/or yarn

## Compatibility
- Supported frameworks (e.g., React, Vue, etc.)
- Environment requirements (e.g., Node version, browser support)

## API Reference
- Use a Markdown table
- Include function/method name, parameter names, types, and descriptions
- If available, include return types

## Usage Examples
- Show at least one basic and one advanced example
- Use valid syntax highlighting (e.g., ```ts or ```jsx)
- Add a short explanation above or below each example

## Additional Notes
- Mention any caveats, edge cases, or limitations
- Provide tips for integration or performance considerations if relevant

### Output Instructions:
- Use **Markdown** syntax correctly
- Use proper headings, bullet points, and code blocks
- Be concise but informative
- Do not add unrelated commentary or markdown artifacts"#,
        request.doc_name()
    )
}

/// 渲染user指令：嵌入参考URL，并说明可使用公开信息
pub fn render_user_instruction(request: &DocRequest) -> String {
    format!(
        "The npm package is available at:\n{}\n\nYou may also look at its README or source code from the npm registry.\n\nGenerate documentation based on public info.",
        request.reference_url()
    )
}
