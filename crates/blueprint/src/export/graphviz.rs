//! Graphviz export backend.
//!
//! [`to_graph`] translates a [`Diagram`] into a [`dot_structures::Graph`]:
//! one `subgraph cluster_N` per cluster, one styled node per declared node and
//! one edge per relationship. [`GraphvizExporter`] prints that graph and runs
//! the Graphviz `dot` executable once per configured [`OutputFormat`].

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use dot_structures as dot;
use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec_dot,
    printer::{DotPrinter, PrinterContext},
};
use log::{debug, info};

use blueprint_core::{
    identifier::Id,
    semantic::{Cluster, Diagram, Edge, Item, LineStyle, Node, NodeCategory},
};

use super::{Error, Exporter};
use crate::config::{AppConfig, OutputFormat, StyleConfig};

/// Background colors for clusters, cycled by nesting depth.
const CLUSTER_BACKGROUNDS: [&str; 4] = ["#E5F5FD", "#EBF3E7", "#ECE8F6", "#FDF7E3"];
const CLUSTER_BORDER: &str = "#AEB6BE";
const CLUSTER_FONT_SIZE: f32 = 12.0;
const NODE_FONT_COLOR: &str = "#FFFFFF";
const TITLE_FONT_COLOR: &str = "#2D3436";

/// Shape, style and default fill of a node category.
struct CategoryStyle {
    shape: &'static str,
    style: &'static str,
    fill: &'static str,
}

fn category_style(category: NodeCategory) -> CategoryStyle {
    match category {
        NodeCategory::Person => CategoryStyle {
            shape: "box",
            style: "rounded,filled",
            fill: "#08427B",
        },
        NodeCategory::Server => CategoryStyle {
            shape: "box",
            style: "rounded,filled",
            fill: "#1168BD",
        },
        NodeCategory::Datastore => CategoryStyle {
            shape: "cylinder",
            style: "filled",
            fill: "#438DD5",
        },
        NodeCategory::Queue => CategoryStyle {
            shape: "cds",
            style: "filled",
            fill: "#438DD5",
        },
        NodeCategory::External => CategoryStyle {
            shape: "box",
            style: "rounded,filled,dashed",
            fill: "#999999",
        },
    }
}

/// Escape text for use inside a double-quoted DOT string.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn quoted(text: &str) -> dot::Id {
    dot::Id::Escaped(format!("\"{}\"", escape(text)))
}

fn plain(text: impl ToString) -> dot::Id {
    dot::Id::Plain(text.to_string())
}

fn attr(key: &str, value: dot::Id) -> dot::Attribute {
    dot::Attribute(plain(key), value)
}

fn node_id(id: Id) -> dot::NodeId {
    dot::NodeId(quoted(&id.as_string()), None)
}

/// Translate a diagram into a Graphviz directed graph.
///
/// The translation is deterministic: the same diagram and style always
/// produce the same graph, statement for statement.
///
/// # Errors
///
/// Returns [`Error::Render`] if a configured or edge color cannot be parsed,
/// or if an item references a node missing from the diagram.
pub fn to_graph(diagram: &Diagram, style: &StyleConfig) -> Result<dot::Graph, Error> {
    let mut stmts = vec![
        dot::Stmt::GAttribute(dot::GraphAttributes::Graph(graph_attributes(diagram, style)?)),
        dot::Stmt::GAttribute(dot::GraphAttributes::Node(vec![
            attr("fontname", quoted(style.font_name())),
            attr("fontsize", plain(style.node_font_size())),
            attr("fontcolor", quoted(NODE_FONT_COLOR)),
            attr("margin", quoted("0.3,0.15")),
        ])),
        dot::Stmt::GAttribute(dot::GraphAttributes::Edge(vec![
            attr("color", quoted(&style.edge_color().map_err(Error::Render)?.to_hex())),
            attr("fontname", quoted(style.font_name())),
            attr("fontsize", plain(style.node_font_size())),
        ])),
    ];

    let mut translator = Translator {
        diagram,
        style,
        next_cluster: 0,
    };
    stmts.extend(translator.items(diagram.items(), 0)?);

    for edge in diagram.edges() {
        stmts.push(dot::Stmt::Edge(edge_stmt(edge)?));
    }

    Ok(dot::Graph::DiGraph {
        id: quoted(diagram.filename()),
        strict: false,
        stmts,
    })
}

/// Print a diagram as Graphviz source text.
pub fn to_dot(diagram: &Diagram, style: &StyleConfig) -> Result<String, Error> {
    let graph = to_graph(diagram, style)?;
    Ok(graph.print(&mut PrinterContext::default()))
}

fn graph_attributes(diagram: &Diagram, style: &StyleConfig) -> Result<Vec<dot::Attribute>, Error> {
    let mut attributes = vec![
        attr("label", quoted(diagram.title())),
        attr("labelloc", plain("t")),
        attr("fontname", quoted(style.font_name())),
        attr("fontsize", plain(style.font_size())),
        attr("fontcolor", quoted(TITLE_FONT_COLOR)),
        attr("rankdir", plain(diagram.direction().code())),
        attr("splines", quoted(style.splines())),
        attr("nodesep", plain(style.node_separation())),
        attr("ranksep", plain(style.rank_separation())),
        attr("pad", plain("2.0")),
    ];

    if let Some(background) = style.background_color().map_err(Error::Render)? {
        attributes.push(attr("bgcolor", quoted(&background.to_hex())));
    }

    Ok(attributes)
}

fn edge_stmt(edge: &Edge) -> Result<dot::Edge, Error> {
    let mut attributes = Vec::new();
    if let Some(label) = edge.label() {
        attributes.push(attr("label", quoted(label)));
    }
    if let Some(color) = edge.color() {
        let color = blueprint_core::color::Color::new(color).map_err(Error::Render)?;
        attributes.push(attr("color", quoted(&color.to_hex())));
    }
    if edge.line_style() != LineStyle::Solid {
        attributes.push(attr("style", plain(edge.line_style().as_str())));
    }

    Ok(dot::Edge {
        ty: dot::EdgeTy::Pair(
            dot::Vertex::N(node_id(edge.source())),
            dot::Vertex::N(node_id(edge.target())),
        ),
        attributes,
    })
}

/// Walks the item tree, numbering clusters in declaration order.
struct Translator<'a> {
    diagram: &'a Diagram,
    style: &'a StyleConfig,
    next_cluster: usize,
}

impl Translator<'_> {
    fn items(&mut self, items: &[Item], depth: usize) -> Result<Vec<dot::Stmt>, Error> {
        items
            .iter()
            .map(|item| match item {
                Item::Node(id) => {
                    let node = self.diagram.node(*id).ok_or_else(|| {
                        Error::Render(format!("node `{id}` is not declared in the diagram"))
                    })?;
                    self.node(node).map(dot::Stmt::Node)
                }
                Item::Cluster(cluster) => self.cluster(cluster, depth).map(dot::Stmt::Subgraph),
            })
            .collect()
    }

    fn node(&self, node: &Node) -> Result<dot::Node, Error> {
        let category = category_style(node.category());
        let fill = match self
            .style
            .category_fill(node.category())
            .map_err(Error::Render)?
        {
            Some(color) => color.to_hex(),
            None => category.fill.to_string(),
        };

        Ok(dot::Node {
            id: node_id(node.id()),
            attributes: vec![
                attr("label", quoted(&node.label().to_string())),
                attr("shape", plain(category.shape)),
                attr("style", quoted(category.style)),
                attr("fillcolor", quoted(&fill)),
            ],
        })
    }

    fn cluster(&mut self, cluster: &Cluster, depth: usize) -> Result<dot::Subgraph, Error> {
        let index = self.next_cluster;
        self.next_cluster += 1;

        let background = CLUSTER_BACKGROUNDS[depth % CLUSTER_BACKGROUNDS.len()];
        let mut stmts: Vec<dot::Stmt> = [
            attr("label", quoted(&cluster.label().to_string())),
            attr("labeljust", plain("l")),
            attr("style", plain("rounded")),
            attr("pencolor", quoted(CLUSTER_BORDER)),
            attr("bgcolor", quoted(background)),
            attr("fontname", quoted(self.style.font_name())),
            attr("fontsize", plain(CLUSTER_FONT_SIZE)),
        ]
        .into_iter()
        .map(dot::Stmt::Attribute)
        .collect();
        stmts.extend(self.items(cluster.items(), depth + 1)?);

        Ok(dot::Subgraph {
            id: plain(format!("cluster_{index}")),
            stmts,
        })
    }
}

/// Writes diagrams to `<output_dir>/<filename>.<ext>` for every configured format.
pub struct GraphvizExporter<'a> {
    config: &'a AppConfig,
    output_dir: PathBuf,
}

impl<'a> GraphvizExporter<'a> {
    pub fn new(config: &'a AppConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn write(&self, source: &str, format: OutputFormat, path: &Path) -> Result<(), Error> {
        let format = match format {
            OutputFormat::Dot => {
                fs::write(path, source)?;
                return Ok(());
            }
            OutputFormat::Png => Format::Png,
            OutputFormat::Svg => Format::Svg,
            OutputFormat::Jpg => Format::Jpg,
            OutputFormat::Pdf => Format::Pdf,
        };

        let args = vec![
            CommandArg::Format(format),
            CommandArg::Output(path.to_string_lossy().to_string()),
        ];
        exec_dot(source.to_string(), args).map_err(|err| dot_failure(&err, path))?;
        Ok(())
    }
}

/// Describes a failed `dot` invocation for `path`.
fn dot_failure(err: &io::Error, path: &Path) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => Error::Render(
            "Graphviz `dot` executable not found; install Graphviz and add it to PATH".to_string(),
        ),
        _ => Error::Render(format!("Graphviz failed to render `{}`: {err}", path.display())),
    }
}

impl Exporter for GraphvizExporter<'_> {
    fn export(&mut self, diagram: &Diagram) -> Result<Vec<PathBuf>, Error> {
        let source = to_dot(diagram, self.config.style())?;
        debug!(diagram = diagram.title(), bytes = source.len(); "Translated diagram to DOT");

        fs::create_dir_all(&self.output_dir)?;

        let mut written = Vec::with_capacity(self.config.render().formats().len());
        for &format in self.config.render().formats() {
            let path = self
                .output_dir
                .join(format!("{}.{}", diagram.filename(), format.extension()));
            self.write(&source, format, &path)?;
            info!(output_file = path.display().to_string(); "Diagram exported");
            written.push(path);
        }

        Ok(written)
    }
}
