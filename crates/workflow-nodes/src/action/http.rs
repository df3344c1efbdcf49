//! HTTP Request node

use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

/// Calls an HTTP endpoint with the incoming data
///
/// # Config
/// - `httpUrl` (required) - Endpoint to call
/// - `httpMethod` - Request method, `GET` when unset
pub struct HttpNode;

impl HttpNode {
    pub const NODE_TYPE: &'static str = "http";
    pub const URL: &'static str = "httpUrl";
    pub const METHOD: &'static str = "httpMethod";
    pub const DEFAULT_METHOD: &'static str = "GET";

    /// `"<METHOD> <url>"`
    pub fn summarize(config: &ConfigMap) -> Option<String> {
        let url = summary::text(config, Self::URL)?;
        let method = summary::text(config, Self::METHOD).unwrap_or(Self::DEFAULT_METHOD);
        Some(format!("{} {}", method.to_ascii_uppercase(), url))
    }
}

impl NodeTypeDescriptor for HttpNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Action, "HTTP Request")
            .with_description("Sends an HTTP request")
            .require(Self::URL)
    }
}

inventory::submit!(workflow_core::DescriptorFn(HttpNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: HttpNode::NODE_TYPE,
    summarize: HttpNode::summarize,
});
