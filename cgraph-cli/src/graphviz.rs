//! Driving the external Graphviz `dot` program and the platform viewer.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::CliError;

/// Lay out `source` with `program -T<format>` and write the image to `output`.
pub fn run_dot(program: &str, source: &Path, format: &str, output: &Path) -> Result<(), CliError> {
    debug!(program, source = %source.display(), format, "running graphviz");

    let result = Command::new(program)
        .arg(format!("-T{format}"))
        .arg(source)
        .arg("-o")
        .arg(output)
        .output();

    let output_status = match result {
        Ok(out) => out,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CliError::GraphvizNotFound {
                program: program.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if !output_status.status.success() {
        return Err(CliError::GraphvizFailed {
            status: output_status.status,
            stderr: String::from_utf8_lossy(&output_status.stderr).trim().to_string(),
        });
    }

    info!(output = %output.display(), "graph written");
    Ok(())
}

/// Open `path` with the platform's default application without waiting for it.
pub fn open_viewer(path: &Path) -> Result<(), CliError> {
    let (program, mut command) = viewer_command(path);
    debug!(program, path = %path.display(), "opening viewer");
    command
        .spawn()
        .map(|_| ())
        .map_err(|source| CliError::Viewer {
            program: program.to_string(),
            source,
        })
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> (&'static str, Command) {
    let mut command = Command::new("open");
    command.arg(path);
    ("open", command)
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> (&'static str, Command) {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    ("cmd", command)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> (&'static str, Command) {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    ("xdg-open", command)
}
