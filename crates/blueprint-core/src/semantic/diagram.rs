//! Core diagram structure types.
//!
//! This module contains the root of the semantic model:
//! - [`Diagram`] - Title, output name, layout direction, nodes, items and edges
//! - [`Item`] - An entry of a scope: a bare node or a cluster
//! - [`Cluster`] - A labelled visual grouping of items
//! - [`Direction`] - Enumeration of layout directions

use std::{fmt, str::FromStr};

use indexmap::IndexMap;

use crate::{
    identifier::Id,
    semantic::element::{Edge, Label, Node},
};

/// Direction in which the renderer ranks nodes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    LeftToRight,
    TopToBottom,
    RightToLeft,
    BottomToTop,
}

impl Direction {
    /// Returns the two-letter code used by layout engines (`LR`, `TB`, ...).
    pub fn code(self) -> &'static str {
        match self {
            Self::LeftToRight => "LR",
            Self::TopToBottom => "TB",
            Self::RightToLeft => "RL",
            Self::BottomToTop => "BT",
        }
    }
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LR" => Ok(Self::LeftToRight),
            "TB" => Ok(Self::TopToBottom),
            "RL" => Ok(Self::RightToLeft),
            "BT" => Ok(Self::BottomToTop),
            _ => Err("Unsupported layout direction"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An entry of a scope: either a reference to a node or a nested cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Node(Id),
    Cluster(Cluster),
}

/// A labelled grouping of items drawn inside a common boundary.
///
/// Clusters are visual only. Edges may freely cross their boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    label: Label,
    items: Vec<Item>,
}

impl Cluster {
    /// Create an empty cluster.
    pub fn new(label: impl Into<Label>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Borrow the items declared directly inside this cluster.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Ids of the nodes declared directly inside this cluster.
    pub fn node_ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.items.iter().filter_map(|item| match item {
            Item::Node(id) => Some(*id),
            Item::Cluster(_) => None,
        })
    }

    /// Clusters nested directly inside this cluster.
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.items.iter().filter_map(|item| match item {
            Item::Cluster(cluster) => Some(cluster),
            Item::Node(_) => None,
        })
    }

    /// Ids of every node inside this cluster, nested clusters included.
    pub fn all_node_ids(&self) -> Vec<Id> {
        let mut ids = Vec::new();
        collect_node_ids(&self.items, &mut ids);
        ids
    }
}

fn collect_node_ids(items: &[Item], ids: &mut Vec<Id>) {
    for item in items {
        match item {
            Item::Node(id) => ids.push(*id),
            Item::Cluster(cluster) => collect_node_ids(cluster.items(), ids),
        }
    }
}

/// A complete diagram description, ready to be handed to a renderer.
///
/// Diagrams are produced by [`DiagramBuilder`](crate::builder::DiagramBuilder),
/// which guarantees that node ids are unique and that every edge endpoint
/// names a declared node.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    filename: String,
    direction: Direction,
    nodes: IndexMap<Id, Node>,
    items: Vec<Item>,
    edges: Vec<Edge>,
}

impl Diagram {
    pub(crate) fn new(
        title: String,
        filename: String,
        direction: Direction,
        nodes: IndexMap<Id, Node>,
        items: Vec<Item>,
        edges: Vec<Edge>,
    ) -> Self {
        Self {
            title,
            filename,
            direction,
            nodes,
            items,
            edges,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Output file name without extension.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Look up a node by id.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Iterate over all nodes in declaration order, wherever they are declared.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Borrow the top-level items in declaration order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Ids of the nodes declared outside of every cluster.
    pub fn top_level_nodes(&self) -> impl Iterator<Item = Id> + '_ {
        self.items.iter().filter_map(|item| match item {
            Item::Node(id) => Some(*id),
            Item::Cluster(_) => None,
        })
    }

    /// Top-level clusters in declaration order.
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.items.iter().filter_map(|item| match item {
            Item::Cluster(cluster) => Some(cluster),
            Item::Node(_) => None,
        })
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} nodes, {} edges, {})",
            self.title,
            self.nodes.len(),
            self.edges.len(),
            self.direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_codes() {
        for direction in [
            Direction::LeftToRight,
            Direction::TopToBottom,
            Direction::RightToLeft,
            Direction::BottomToTop,
        ] {
            assert_eq!(direction.code().parse(), Ok(direction));
        }
        assert!("lr".parse::<Direction>().is_err());
    }

    #[test]
    fn test_cluster_node_ids_skip_nested() {
        let mut inner = Cluster::new("inner");
        inner.push(Item::Node(Id::new("deep")));

        let mut outer = Cluster::new("outer");
        outer.push(Item::Node(Id::new("shallow")));
        outer.push(Item::Cluster(inner));

        let direct: Vec<Id> = outer.node_ids().collect();
        assert_eq!(direct, vec![Id::new("shallow")]);
        assert_eq!(outer.all_node_ids(), vec![Id::new("shallow"), Id::new("deep")]);
        assert_eq!(outer.clusters().count(), 1);
    }
}
