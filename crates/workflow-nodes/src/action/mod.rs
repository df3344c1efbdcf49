//! Action nodes
//!
//! Nodes with an external side effect: HTTP calls, scripts, notifications
//! and plant equipment models.

mod http;
mod messaging;
mod plant;
mod python;

pub use http::HttpNode;
pub use messaging::{SendEmailNode, SendSmsNode, SendWhatsAppNode};
pub use plant::{ConveyorNode, FranmitNode};
pub use python::PythonNode;
