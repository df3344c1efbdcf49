//! Input nodes
//!
//! Nodes that bring data into a run: user-entered values, entity fetches
//! and uploaded files.

mod fetch_data;
mod files;
mod manual_input;

pub use fetch_data::FetchDataNode;
pub use files::{ExcelInputNode, PdfInputNode};
pub use manual_input::ManualInputNode;
