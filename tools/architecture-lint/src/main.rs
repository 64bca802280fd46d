//! CLI entry point for the repo-local architecture lint.

use std::env;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};

/// Directory crate location relative to the workspace root.
const DIRECTORY_CRATE: &str = "directory";

fn main() -> ExitCode {
    let outcome = locate_workspace()
        .map_err(|err| err.to_string())
        .and_then(|root| {
            architecture_lint::lint_directory_sources(&root.join(DIRECTORY_CRATE))
                .map_err(|err| err.to_string())
        });
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            let _ = writeln!(io::stderr().lock(), "{report}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct WorkspaceNotFound;

impl fmt::Display for WorkspaceNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no UTF-8 directory with a workspace Cargo.toml found above the lint")
    }
}

impl std::error::Error for WorkspaceNotFound {}

/// Search upwards from `CARGO_WORKSPACE_DIR`, the working directory, and the
/// lint's own manifest, in that order.
fn locate_workspace() -> Result<Utf8PathBuf, WorkspaceNotFound> {
    let starts = [
        env::var("CARGO_WORKSPACE_DIR").ok().map(Utf8PathBuf::from),
        env::current_dir()
            .ok()
            .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok()),
        Some(Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
    ];

    starts
        .iter()
        .flatten()
        .find_map(|start| workspace_above(start))
        .ok_or(WorkspaceNotFound)
}

fn workspace_above(start: &Utf8Path) -> Option<Utf8PathBuf> {
    start
        .ancestors()
        .find(|dir| declares_workspace(&dir.join("Cargo.toml")))
        .map(Utf8Path::to_path_buf)
}

fn declares_workspace(manifest: &Utf8Path) -> bool {
    fs::read_to_string(manifest).is_ok_and(|contents| contents.contains("[workspace]"))
}
