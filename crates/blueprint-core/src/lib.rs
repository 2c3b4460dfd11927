//! Blueprint Core Types and Definitions
//!
//! This crate provides the data model used to describe architecture diagrams
//! before they are handed to a graph renderer. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Semantic**: Nodes, edges, clusters and diagrams ([`semantic`] module)
//! - **Builder**: Scoped construction of diagrams ([`builder::DiagramBuilder`])

pub mod builder;
pub mod color;
pub mod error;
pub mod identifier;
pub mod semantic;

pub use error::DiagramError;
