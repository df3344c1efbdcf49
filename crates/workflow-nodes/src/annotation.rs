use workflow_core::{truncate_text, ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary::{self, SUMMARY_MAX_CHARS};

/// Free-text note on the canvas; never connected
pub struct CommentNode;

impl CommentNode {
    pub const NODE_TYPE: &'static str = "comment";
    pub const TEXT: &'static str = "commentText";

    pub fn summarize(config: &ConfigMap) -> Option<String> {
        summary::text(config, Self::TEXT).map(|text| truncate_text(text, SUMMARY_MAX_CHARS))
    }
}

impl NodeTypeDescriptor for CommentNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Annotation, "Comment")
            .with_description("A note for readers of the workflow")
            .max_inputs(0)
            .max_outputs(0)
    }
}

inventory::submit!(workflow_core::DescriptorFn(CommentNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: CommentNode::NODE_TYPE,
    summarize: CommentNode::summarize,
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comment_is_unconnectable() {
        let def = CommentNode::descriptor();
        assert_eq!(def.category, NodeCategory::Annotation);
        assert_eq!(def.input_limit(), 0);
        assert_eq!(def.output_limit(), Some(0));
    }

    #[test]
    fn test_summary() {
        let config = json!({"commentText": "Runs every Monday"});
        assert_eq!(
            CommentNode::summarize(config.as_object().unwrap()).as_deref(),
            Some("Runs every Monday")
        );
    }
}
