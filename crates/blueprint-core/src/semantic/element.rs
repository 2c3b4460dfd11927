//! Diagram element types for the semantic model.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::identifier::Id;

/// Display text of a node or cluster.
///
/// A label is a name optionally followed by a type annotation, rendered in
/// brackets, and a detail line such as the technology in use.
///
/// # Examples
///
/// ```
/// use blueprint_core::semantic::Label;
///
/// let label = Label::new("Backend API")
///     .with_kind("Container")
///     .with_detail("ASP.NET Core");
/// assert_eq!(label.to_string(), "Backend API\n[Container]\nASP.NET Core");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    name: String,
    kind: Option<String>,
    detail: Option<String>,
}

impl Label {
    /// Create a label holding only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            detail: None,
        }
    }

    /// Set the type annotation, e.g. `Container` or `Deployment Node`.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the free-form detail line, e.g. the technology stack.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(kind) = &self.kind {
            write!(f, "\n[{kind}]")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, "\n{detail}")?;
        }
        Ok(())
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Visual category of a node.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    /// A human actor.
    Person,
    /// A server, process or software system.
    Server,
    /// A database or other persistent store.
    Datastore,
    /// A message queue or broker.
    Queue,
    /// A system outside the one being described.
    External,
}

impl NodeCategory {
    /// All categories, in declaration order.
    pub const ALL: [NodeCategory; 5] = [
        Self::Person,
        Self::Server,
        Self::Datastore,
        Self::Queue,
        Self::External,
    ];
}

impl FromStr for NodeCategory {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "person" => Ok(Self::Person),
            "server" => Ok(Self::Server),
            "datastore" => Ok(Self::Datastore),
            "queue" => Ok(Self::Queue),
            "external" => Ok(Self::External),
            _ => Err("Unsupported node category"),
        }
    }
}

impl From<NodeCategory> for &'static str {
    fn from(val: NodeCategory) -> Self {
        match val {
            NodeCategory::Person => "person",
            NodeCategory::Server => "server",
            NodeCategory::Datastore => "datastore",
            NodeCategory::Queue => "queue",
            NodeCategory::External => "external",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A labelled diagram node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: Id,
    label: Label,
    category: NodeCategory,
}

impl Node {
    /// Create a new Node.
    pub fn new(id: impl Into<Id>, category: NodeCategory, label: impl Into<Label>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category,
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn category(&self) -> NodeCategory {
        self.category
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Arrow direction as written at the declaration site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Forward,  // ->
    Backward, // <-
}

impl FromStr for ArrowDirection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "->" | ">>" => Ok(Self::Forward),
            "<-" | "<<" => Ok(Self::Backward),
            _ => Err("Invalid arrow direction"),
        }
    }
}

impl fmt::Display for ArrowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("->"),
            Self::Backward => f.write_str("<-"),
        }
    }
}

/// Line style used to draw an edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

/// A directed relationship from `source` to `target`.
///
/// The source is always the side that invokes or sends, whatever token order
/// the edge was declared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: Id,
    target: Id,
    label: Option<String>,
    color: Option<String>,
    line_style: LineStyle,
}

impl Edge {
    /// Create an edge flowing from `source` to `target`.
    pub fn new(source: impl Into<Id>, target: impl Into<Id>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
            color: None,
            line_style: LineStyle::default(),
        }
    }

    /// Create an edge from its written form `left <direction> right`.
    ///
    /// A backward arrow names the consumer first, so `worker <- queue`
    /// records the flow `queue -> worker`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_core::semantic::{ArrowDirection, Edge};
    ///
    /// let written_backward = Edge::declared("worker", ArrowDirection::Backward, "queue");
    /// let written_forward = Edge::declared("queue", ArrowDirection::Forward, "worker");
    /// assert_eq!(written_backward, written_forward);
    /// assert_eq!(written_backward.source(), "queue");
    /// ```
    pub fn declared(left: impl Into<Id>, direction: ArrowDirection, right: impl Into<Id>) -> Self {
        match direction {
            ArrowDirection::Forward => Self::new(left, right),
            ArrowDirection::Backward => Self::new(right, left),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the line color, in any CSS notation.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Get the source node Id of this edge.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node Id of this edge.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the `(source, target)` pair.
    pub fn endpoints(&self) -> (Id, Id) {
        (self.source, self.target)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_label_without_annotations() {
        assert_eq!(Label::new("User").to_string(), "User");
    }

    #[test]
    fn test_label_detail_without_kind() {
        let label = Label::new("Web Browser").with_detail("(hosts Frontend Application)");
        assert_eq!(
            label.to_string(),
            "Web Browser\n(hosts Frontend Application)"
        );
        assert_eq!(label.kind(), None);
    }

    #[test]
    fn test_node_category_names() {
        for category in NodeCategory::ALL {
            let name = category.to_string();
            assert_eq!(name.parse::<NodeCategory>(), Ok(category));
        }
        assert!("printer".parse::<NodeCategory>().is_err());
    }

    #[test]
    fn test_arrow_direction_tokens() {
        assert_eq!("->".parse(), Ok(ArrowDirection::Forward));
        assert_eq!("<<".parse(), Ok(ArrowDirection::Backward));
        assert!("<->".parse::<ArrowDirection>().is_err());
    }

    #[test]
    fn test_edge_display_follows_flow() {
        let edge = Edge::declared("worker", ArrowDirection::Backward, "queue");
        assert_eq!(edge.to_string(), "queue -> worker");
    }

    proptest! {
        #[test]
        fn prop_backward_declaration_matches_forward(
            producer in "[a-z_]{1,12}",
            consumer in "[a-z_]{1,12}",
        ) {
            let backward = Edge::declared(consumer.as_str(), ArrowDirection::Backward, producer.as_str());
            let forward = Edge::declared(producer.as_str(), ArrowDirection::Forward, consumer.as_str());

            prop_assert_eq!(backward.endpoints(), forward.endpoints());
            prop_assert_eq!(backward.source(), Id::new(&producer));
            prop_assert_eq!(backward.target(), Id::new(&consumer));
        }
    }
}
