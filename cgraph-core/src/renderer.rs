//! Graphviz DOT renderer for colored graph descriptions

use std::fmt::Write;

use tracing::debug;

use crate::ast::*;
use crate::theme::Theme;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Wrap each tree in a cluster labelled with its root
    pub clusters: bool,
    /// Keep nodes of equal depth on the same rank
    pub rank_same: bool,
    /// Graph name used in the `digraph` header
    pub graph_name: String,
    /// Theme for styling
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clusters: true,
            rank_same: true,
            graph_name: "G".to_string(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_clusters(mut self, clusters: bool) -> Self {
        self.clusters = clusters;
        self
    }

    pub fn with_rank_same(mut self, rank_same: bool) -> Self {
        self.rank_same = rank_same;
        self
    }
}

/// Escape special characters for DOT strings
fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Make a string usable as a bare DOT identifier
fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

fn node_id(id: NodeId) -> String {
    format!("n{}", id.index())
}

/// Render a description to DOT with default config
pub fn render(description: &Description) -> String {
    render_with_config(description, Config::default())
}

/// Render a description to DOT with custom config
pub fn render_with_config(description: &Description, config: Config) -> String {
    let forest = &description.forest;
    let theme = &config.theme;
    let mut dot = String::with_capacity(256 + forest.len() * 96);

    let _ = writeln!(dot, "digraph {} {{", sanitize_id(&config.graph_name));
    let _ = writeln!(dot, "  rankdir={};", theme.rank_dir.as_str());
    if let Some(background) = &theme.background {
        let _ = writeln!(dot, "  bgcolor=\"{}\";", escape_label(background));
    }
    let _ = write!(
        dot,
        "  node [shape={}, fontname=\"{}\", color=\"{}\", fontcolor=\"{}\"",
        theme.node_shape.as_str(),
        escape_label(&theme.font_family),
        escape_label(&theme.default_color),
        escape_label(&theme.default_color),
    );
    if let Some(style) = theme.node_shape.style() {
        let _ = write!(dot, ", style=\"{}\"", style);
    }
    dot.push_str("];\n");
    let _ = writeln!(
        dot,
        "  edge [color=\"{}\"];",
        escape_label(&theme.default_color)
    );

    for (index, &root) in forest.roots().iter().enumerate() {
        dot.push('\n');
        if config.clusters {
            render_cluster(&mut dot, description, root, index, &config);
        } else {
            render_tree(&mut dot, description, root, 1, &config);
        }
    }

    dot.push_str("}\n");

    debug!(
        roots = forest.roots().len(),
        nodes = forest.len(),
        bytes = dot.len(),
        "rendered dot"
    );
    dot
}

/// Render one tree inside a `subgraph cluster_N` block
fn render_cluster(
    dot: &mut String,
    description: &Description,
    root: NodeId,
    index: usize,
    config: &Config,
) {
    let Some(root_node) = description.forest.get(root) else {
        return;
    };
    let color = root_node
        .color_name()
        .unwrap_or(config.theme.default_color.as_str());

    let _ = writeln!(dot, "  subgraph cluster_{} {{", index);
    let _ = writeln!(dot, "    label=\"{}\";", escape_label(&root_node.label));
    let _ = writeln!(dot, "    color=\"{}\";", escape_label(color));
    let _ = writeln!(dot, "    fontcolor=\"{}\";", escape_label(color));
    render_tree(dot, description, root, 2, config);
    dot.push_str("  }\n");
}

/// Render the vertices, edges and rank constraints of one tree
fn render_tree(
    dot: &mut String,
    description: &Description,
    root: NodeId,
    indent: usize,
    config: &Config,
) {
    let forest = &description.forest;
    let mut edges = Vec::new();

    forest.walk_tree(root, |id, node| {
        write_indent(dot, indent);
        let _ = write!(
            dot,
            "{} [label=\"{}\"",
            node_id(id),
            escape_label(&node.label)
        );
        if let Some(color) = node.color_name() {
            let color = escape_label(color);
            let _ = write!(dot, ", color=\"{}\", fontcolor=\"{}\"", color, color);
        }
        let _ = writeln!(dot, ", group=\"{}\"];", node.depth);

        if let Some(parent) = node.parent {
            edges.push((parent, id));
        }
    });

    for (parent, child) in edges {
        write_indent(dot, indent);
        let _ = write!(dot, "{} -> {}", node_id(parent), node_id(child));
        // Edges take the color of their source node
        match forest.get(parent).and_then(Node::color_name) {
            Some(color) => {
                let _ = writeln!(dot, " [color=\"{}\"];", escape_label(color));
            }
            None => dot.push_str(";\n"),
        }
    }

    if config.rank_same {
        for level in forest.levels(root).iter().filter(|level| level.len() > 1) {
            write_indent(dot, indent);
            dot.push_str("{rank = same;");
            for id in level {
                let _ = write!(dot, " {};", node_id(*id));
            }
            dot.push_str("}\n");
        }
    }
}
