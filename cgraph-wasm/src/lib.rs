//! WebAssembly bindings for colored-graph

use cgraph_core::{Config, Description, NodeId, Theme};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Render a description to Graphviz DOT
///
/// # Arguments
/// * `input` - The description source
///
/// # Returns
/// The DOT source as a string, or an error message
#[wasm_bindgen]
pub fn render(input: &str) -> Result<String, String> {
    match cgraph_core::parse(input) {
        Ok(description) => Ok(cgraph_core::render(&description)),
        Err(e) => Err(e.to_string()),
    }
}

/// Render a description to DOT with a specific theme
///
/// # Arguments
/// * `input` - The description source
/// * `theme_name` - The name of the theme to use (e.g., "default", "rounded", "dark")
///
/// # Returns
/// The DOT source as a string, or an error message
#[wasm_bindgen]
pub fn render_with_theme(input: &str, theme_name: &str) -> Result<String, String> {
    let theme = Theme::by_name(theme_name).unwrap_or_else(Theme::default);
    let config = Config::default().with_theme(theme);

    match cgraph_core::parse(input) {
        Ok(description) => Ok(cgraph_core::render_with_config(&description, config)),
        Err(e) => Err(e.to_string()),
    }
}

/// Get a list of available theme names
#[wasm_bindgen]
pub fn available_themes() -> Vec<String> {
    Theme::available_themes()
        .into_iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Serialize)]
struct JsonDescription<'a> {
    aliases: Vec<JsonAlias<'a>>,
    roots: Vec<JsonNode<'a>>,
    #[serde(rename = "nodeCount")]
    node_count: usize,
}

#[derive(Serialize)]
struct JsonAlias<'a> {
    alias: &'a str,
    color: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonNode<'a> {
    label: &'a str,
    color: Option<&'a str>,
    line: usize,
    children: Vec<JsonNode<'a>>,
}

fn json_node(description: &Description, id: NodeId) -> Option<JsonNode<'_>> {
    let forest = &description.forest;
    let node = forest.get(id)?;
    Some(JsonNode {
        label: &node.label,
        color: node.color_name(),
        line: node.line,
        children: forest
            .children(id)
            .iter()
            .filter_map(|child| json_node(description, *child))
            .collect(),
    })
}

/// Parse a description and return a nested JSON representation
///
/// # Arguments
/// * `input` - The description source
///
/// # Returns
/// The parsed forest as JSON, or an error message
#[wasm_bindgen]
pub fn parse_to_json(input: &str) -> Result<String, String> {
    let description = cgraph_core::parse(input).map_err(|e| e.to_string())?;

    let json = JsonDescription {
        aliases: description
            .aliases
            .iter()
            .map(|(alias, color)| JsonAlias {
                alias,
                color: color.map(|c| c.as_str()),
            })
            .collect(),
        roots: description
            .forest
            .roots()
            .iter()
            .filter_map(|root| json_node(&description, *root))
            .collect(),
        node_count: description.forest.len(),
    };

    serde_json::to_string(&json).map_err(|e| e.to_string())
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
