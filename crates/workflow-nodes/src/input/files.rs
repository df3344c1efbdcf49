//! File input nodes

use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

/// Config key for the uploaded file, shared by every file input
pub const FILE_NAME: &str = "fileName";

fn file_definition(node_type: &str, label: &str, description: &str) -> NodeTypeDefinition {
    NodeTypeDefinition::new(node_type, NodeCategory::Input, label)
        .with_description(description)
        .require(FILE_NAME)
        .max_inputs(0)
}

fn summarize_file(config: &ConfigMap) -> Option<String> {
    summary::text(config, FILE_NAME).map(str::to_string)
}

/// Reads rows from an uploaded spreadsheet
pub struct ExcelInputNode;

impl ExcelInputNode {
    pub const NODE_TYPE: &'static str = "excelInput";
}

impl NodeTypeDescriptor for ExcelInputNode {
    fn descriptor() -> NodeTypeDefinition {
        file_definition(Self::NODE_TYPE, "Excel Input", "Reads rows from a spreadsheet")
    }
}

inventory::submit!(workflow_core::DescriptorFn(ExcelInputNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: ExcelInputNode::NODE_TYPE,
    summarize: summarize_file,
});

/// Extracts text from an uploaded PDF
pub struct PdfInputNode;

impl PdfInputNode {
    pub const NODE_TYPE: &'static str = "pdfInput";
}

impl NodeTypeDescriptor for PdfInputNode {
    fn descriptor() -> NodeTypeDefinition {
        file_definition(Self::NODE_TYPE, "PDF Input", "Extracts text from a PDF document")
    }
}

inventory::submit!(workflow_core::DescriptorFn(PdfInputNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: PdfInputNode::NODE_TYPE,
    summarize: summarize_file,
});
