//! Logic nodes
//!
//! Branching, merging and reshaping of the data flowing through a run.

mod add_field;
mod condition;
mod join;
mod split_columns;

pub use add_field::AddFieldNode;
pub use condition::ConditionNode;
pub use join::JoinNode;
pub use split_columns::SplitColumnsNode;
