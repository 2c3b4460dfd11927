//! Errors raised while assembling a diagram description.

use thiserror::Error;

use crate::identifier::Id;

/// Construction errors reported by [`DiagramBuilder`](crate::builder::DiagramBuilder).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("node `{0}` is already declared in this diagram")]
    DuplicateNode(Id),

    #[error("edge endpoint `{0}` is not declared in this diagram")]
    UnknownNode(Id),

    #[error("no cluster is open")]
    NoOpenCluster,

    #[error("cluster `{0}` was never closed")]
    UnclosedCluster(String),
}
