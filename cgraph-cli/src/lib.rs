//! Library side of the `cgraph` command: read a description file, render it
//! to DOT and hand it to Graphviz.

pub mod error;
pub mod graphviz;
pub mod watch;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cgraph_core::{parse_with_options, render_with_config, Config, ParseOptions, Theme};
use colored::Colorize;
use tracing::{debug, info};

pub use error::CliError;

/// Everything needed to turn one description file into an image.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Description file
    pub input: PathBuf,
    /// Output base name without extension, defaults to the input path
    pub output: Option<PathBuf>,
    /// Graphviz output format (`pdf`, `png`, `svg`, ...)
    pub format: String,
    /// Graphviz executable
    pub dot_bin: String,
    /// Keep the intermediate `.gv` file
    pub keep_source: bool,
    pub parse: ParseOptions,
    pub config: Config,
}

impl RenderRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            format: "pdf".to_string(),
            dot_bin: "dot".to_string(),
            keep_source: false,
            parse: ParseOptions::default(),
            config: Config::default(),
        }
    }

    /// Output path without extension
    pub fn output_base(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension(""))
    }

    /// Path of the intermediate DOT file
    pub fn source_path(&self) -> PathBuf {
        append_extension(&self.output_base(), "gv")
    }

    /// Path of the rendered image
    pub fn image_path(&self) -> PathBuf {
        append_extension(&self.output_base(), &self.format)
    }
}

/// `name.ext` without replacing an existing dot in `name`
fn append_extension(base: &Path, extension: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

/// Resolve a theme name, listing the choices on failure
pub fn theme_by_name(name: &str) -> Result<Theme, CliError> {
    Theme::by_name(name).ok_or_else(|| CliError::UnknownTheme {
        name: name.to_string(),
        available: Theme::available_themes().join(", "),
    })
}

/// The red `Error: ...` line shown for a failed render, with the full context chain
pub fn error_line(error: &anyhow::Error) -> String {
    format!("Error: {error:#}").red().to_string()
}

/// Read and parse the description, returning the DOT source
pub fn load_dot(request: &RenderRequest) -> anyhow::Result<String> {
    let text = fs::read_to_string(&request.input)
        .with_context(|| format!("failed to read {}", request.input.display()))?;
    let description = parse_with_options(&text, &request.parse)
        .with_context(|| format!("invalid description {}", request.input.display()))?;
    debug!(
        nodes = description.forest.len(),
        roots = description.forest.roots().len(),
        "description loaded"
    );
    Ok(render_with_config(&description, request.config.clone()))
}

/// Render the description to an image through Graphviz and return the image path
pub fn render_file(request: &RenderRequest) -> anyhow::Result<PathBuf> {
    let dot = load_dot(request)?;

    let source = request.source_path();
    fs::write(&source, &dot).with_context(|| format!("failed to write {}", source.display()))?;

    let image = request.image_path();
    let result = graphviz::run_dot(&request.dot_bin, &source, &request.format, &image);

    if !request.keep_source {
        if let Err(e) = fs::remove_file(&source) {
            debug!(error = %e, path = %source.display(), "could not remove dot source");
        }
    }
    result?;

    info!(input = %request.input.display(), image = %image.display(), "rendered");
    Ok(image)
}
