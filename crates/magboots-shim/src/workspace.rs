//! Workspace tool tables, found by walking up from a start directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::ini;
use crate::layout::ShimLayout;
use crate::resolver::{TargetResolver, non_empty};

/// Resolves commands from `<dir>/.magboots/tools.ini`, nearest directory first.
///
/// Every ancestor of the start directory is probed, the filesystem root
/// included. A table that exists but has no usable entry does not stop the
/// walk. An error while probing abandons the walk.
#[derive(Clone, Debug)]
pub struct WorkspaceResolver {
    start: PathBuf,
    layout: ShimLayout,
}

impl WorkspaceResolver {
    pub fn new(start: impl Into<PathBuf>, layout: ShimLayout) -> Self {
        Self {
            start: start.into(),
            layout,
        }
    }

    /// Candidate table paths in priority order.
    pub fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.start.ancestors().map(|dir| {
            dir.join(&self.layout.workspace_dir)
                .join(&self.layout.workspace_file)
        })
    }
}

impl TargetResolver for WorkspaceResolver {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        for candidate in self.candidates() {
            match candidate.try_exists() {
                Ok(true) => {}
                Ok(false) => continue,
                // A stray `.magboots` file is not a table; keep walking.
                Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                    continue;
                }
                Err(e) => {
                    debug!(path = %candidate.display(), error = %e, "workspace walk aborted");
                    return None;
                }
            }

            if let Some(target) = non_empty(ini::lookup(&candidate, command)) {
                debug!(
                    command,
                    table = %candidate.display(),
                    resolved = %target.display(),
                    "workspace match"
                );
                return Some(target);
            }
        }
        None
    }
}
