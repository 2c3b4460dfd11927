//! Semantic model of an architecture diagram.
//!
//! A [`Diagram`] owns a table of [`Node`]s, a tree of top-level [`Item`]s in
//! which [`Cluster`]s group nodes visually, and a flat list of directed
//! [`Edge`]s. Cluster membership never restricts which nodes an edge may
//! connect.

mod diagram;
mod element;

pub use diagram::{Cluster, Diagram, Direction, Item};
pub use element::{ArrowDirection, Edge, Label, LineStyle, Node, NodeCategory};
