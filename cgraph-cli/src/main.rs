use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cgraph_cli::graphviz::open_viewer;
use cgraph_cli::watch::{watch, FileWatcher};
use cgraph_cli::{error_line, load_dot, render_file, theme_by_name, RenderRequest};
use cgraph_core::{Config, ParseOptions};

#[derive(Parser, Debug)]
#[command(
    name = "cgraph",
    about = "Generate colored graph from description",
    version
)]
pub struct Cli {
    /// Graph description file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Graph output file base name (no extension)
    #[arg(short = 'o', long = "output", value_name = "BASE")]
    output: Option<PathBuf>,

    /// Graph output format
    #[arg(short = 'f', long = "format", default_value = "pdf")]
    format: String,

    /// View generated graph
    #[arg(short = 'v', long = "view")]
    view: bool,

    /// Watch graph description file for changes and regenerate graph
    #[arg(short = 'w', long = "watch")]
    watch: bool,

    /// Theme: 'default', 'rounded' or 'dark'
    #[arg(short = 't', long = "theme", default_value = "default")]
    theme: String,

    /// Spaces per indentation level (a tab is always one level)
    #[arg(long = "indent", default_value_t = 4)]
    indent: usize,

    /// Do not wrap each tree in a cluster
    #[arg(long = "no-clusters")]
    no_clusters: bool,

    /// Do not align nodes of equal depth
    #[arg(long = "no-rank-same")]
    no_rank_same: bool,

    /// Print the DOT source to stdout instead of running Graphviz
    #[arg(long = "dot-only", conflicts_with_all = ["view", "watch"])]
    dot_only: bool,

    /// Keep the intermediate .gv file next to the image
    #[arg(long = "keep-source")]
    keep_source: bool,

    /// Graphviz executable
    #[arg(long = "dot-bin", env = "CGRAPH_DOT", default_value = "dot")]
    dot_bin: String,

    /// Debug level: -d info, -dd debug, -ddd trace (RUST_LOG overrides)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("{}", error_line(&e));
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::default()
        .with_theme(theme_by_name(&cli.theme)?)
        .with_clusters(!cli.no_clusters)
        .with_rank_same(!cli.no_rank_same);

    let request = RenderRequest {
        input: cli.file.clone(),
        output: cli.output.clone(),
        format: cli.format.clone(),
        dot_bin: cli.dot_bin.clone(),
        keep_source: cli.keep_source,
        parse: ParseOptions::default().with_indent_width(cli.indent),
        config,
    };

    if cli.dot_only {
        print!("{}", load_dot(&request)?);
        return Ok(());
    }

    let image = render_file(&request)?;
    if cli.view {
        open_viewer(&image)?;
    }

    if cli.watch {
        info!(file = %cli.file.display(), "watching for changes");
        let watcher = FileWatcher::new(&cli.file);
        watch(watcher, Duration::from_secs(1), || {
            let image = render_file(&request)?;
            if cli.view {
                open_viewer(&image)?;
            }
            Ok(())
        });
    }

    Ok(())
}
