//! Scoped construction of [`Diagram`]s.
//!
//! [`DiagramBuilder`] keeps a stack of open clusters. Entering a cluster
//! pushes a new scope, exiting pops it and appends the finished cluster to
//! the scope below. Nodes are always appended to the scope on top of the
//! stack, or to the diagram itself when no cluster is open.
//!
//! # Examples
//!
//! ```
//! use blueprint_core::{
//!     builder::DiagramBuilder,
//!     semantic::{ArrowDirection, Direction, Label, Node, NodeCategory},
//! };
//!
//! # fn main() -> Result<(), blueprint_core::DiagramError> {
//! let mut builder = DiagramBuilder::new("Shop").with_direction(Direction::TopToBottom);
//!
//! let customer = builder.node(Node::new("customer", NodeCategory::Person, "Customer"))?;
//! let (api, orders) = builder.cluster(Label::new("Backend"), |b| {
//!     let api = b.node(Node::new("api", NodeCategory::Server, "API"))?;
//!     let orders = b.node(Node::new("orders", NodeCategory::Queue, "Orders"))?;
//!     Ok((api, orders))
//! })?;
//!
//! builder.connect(customer, api)?;
//! builder.declare(orders, ArrowDirection::Backward, api)?;
//!
//! let diagram = builder.build()?;
//! assert_eq!(diagram.filename(), "shop");
//! assert_eq!(diagram.node_count(), 3);
//! assert_eq!(diagram.edges()[1].source(), api);
//! # Ok(())
//! # }
//! ```

use indexmap::{IndexMap, map::Entry};
use log::{debug, trace};

use crate::{
    error::DiagramError,
    identifier::Id,
    semantic::{ArrowDirection, Cluster, Diagram, Direction, Edge, Item, Label, Node},
};

/// Builds a [`Diagram`] one declaration at a time.
#[derive(Debug)]
pub struct DiagramBuilder {
    title: String,
    filename: String,
    direction: Direction,
    nodes: IndexMap<Id, Node>,
    items: Vec<Item>,
    open_clusters: Vec<Cluster>,
    edges: Vec<Edge>,
}

impl DiagramBuilder {
    /// Start a diagram with the given title.
    ///
    /// The output filename defaults to the title's words joined with
    /// underscores and lowercased. The layout direction defaults to
    /// left-to-right.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let filename = default_filename(&title);
        Self {
            title,
            filename,
            direction: Direction::default(),
            nodes: IndexMap::new(),
            items: Vec::new(),
            open_clusters: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Override the output filename (without extension).
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Declare a node in the current scope and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::DuplicateNode`] if a node with the same id has
    /// already been declared anywhere in this diagram.
    pub fn node(&mut self, node: Node) -> Result<Id, DiagramError> {
        let id = node.id();
        match self.nodes.entry(id) {
            Entry::Occupied(_) => return Err(DiagramError::DuplicateNode(id)),
            Entry::Vacant(entry) => {
                entry.insert(node);
            }
        }

        trace!(node:% = id, depth = self.open_clusters.len(); "Declared node");
        self.push_item(Item::Node(id));
        Ok(id)
    }

    /// Open a cluster. Subsequent nodes are placed inside it until
    /// [`exit_cluster`](Self::exit_cluster) is called.
    pub fn enter_cluster(&mut self, label: impl Into<Label>) {
        let cluster = Cluster::new(label);
        debug!(cluster = cluster.label().name(); "Entering cluster");
        self.open_clusters.push(cluster);
    }

    /// Close the innermost open cluster.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::NoOpenCluster`] if no cluster is open.
    pub fn exit_cluster(&mut self) -> Result<(), DiagramError> {
        let cluster = self
            .open_clusters
            .pop()
            .ok_or(DiagramError::NoOpenCluster)?;
        debug!(cluster = cluster.label().name(), items = cluster.items().len(); "Leaving cluster");
        self.push_item(Item::Cluster(cluster));
        Ok(())
    }

    /// Run `populate` inside a fresh cluster and close it afterwards.
    ///
    /// The cluster is closed whether or not `populate` succeeds, so a failed
    /// population never leaves later nodes inside it.
    pub fn cluster<T, F>(&mut self, label: impl Into<Label>, populate: F) -> Result<T, DiagramError>
    where
        F: FnOnce(&mut Self) -> Result<T, DiagramError>,
    {
        self.enter_cluster(label);
        let populated = populate(self);
        self.exit_cluster()?;
        populated
    }

    /// Add an edge flowing from `source` to `target`.
    pub fn connect(&mut self, source: Id, target: Id) -> Result<(), DiagramError> {
        self.add_edge(Edge::new(source, target))
    }

    /// Add an edge written as `left <direction> right`.
    ///
    /// Backward arrows are normalized so the recorded source is the producer.
    pub fn declare(
        &mut self,
        left: Id,
        direction: ArrowDirection,
        right: Id,
    ) -> Result<(), DiagramError> {
        self.add_edge(Edge::declared(left, direction, right))
    }

    /// Add a fully configured edge.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownNode`] if either endpoint has not been
    /// declared in this diagram yet.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), DiagramError> {
        for endpoint in [edge.source(), edge.target()] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(DiagramError::UnknownNode(endpoint));
            }
        }

        trace!(edge:% = edge; "Declared edge");
        self.edges.push(edge);
        Ok(())
    }

    /// Finish the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnclosedCluster`] if a cluster is still open.
    pub fn build(self) -> Result<Diagram, DiagramError> {
        if let Some(cluster) = self.open_clusters.last() {
            return Err(DiagramError::UnclosedCluster(
                cluster.label().name().to_string(),
            ));
        }

        debug!(
            title = self.title.as_str(),
            nodes = self.nodes.len(),
            edges = self.edges.len();
            "Diagram built"
        );

        Ok(Diagram::new(
            self.title,
            self.filename,
            self.direction,
            self.nodes,
            self.items,
            self.edges,
        ))
    }

    fn push_item(&mut self, item: Item) {
        match self.open_clusters.last_mut() {
            Some(cluster) => cluster.push(item),
            None => self.items.push(item),
        }
    }
}

/// Derive an output filename from a diagram title.
fn default_filename(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}
