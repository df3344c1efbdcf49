//! AI nodes

use workflow_core::{truncate_text, ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary::{self, SUMMARY_MAX_CHARS};

/// LLM completion over the incoming data
///
/// # Config
/// - `llmPrompt` (required) - Prompt template
pub struct LlmNode;

impl LlmNode {
    pub const NODE_TYPE: &'static str = "llm";
    pub const PROMPT: &'static str = "llmPrompt";

    /// The prompt, cut to 50 characters
    pub fn summarize(config: &ConfigMap) -> Option<String> {
        summary::text(config, Self::PROMPT).map(|prompt| truncate_text(prompt, SUMMARY_MAX_CHARS))
    }
}

impl NodeTypeDescriptor for LlmNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Ai, "AI (LLM)")
            .with_description("Generates text from a prompt and the incoming data")
            .require(Self::PROMPT)
    }
}

inventory::submit!(workflow_core::DescriptorFn(LlmNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: LlmNode::NODE_TYPE,
    summarize: LlmNode::summarize,
});
