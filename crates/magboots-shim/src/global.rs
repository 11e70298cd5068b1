//! The fallback tool table that sits next to the shim binary.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ini;
use crate::layout::ShimLayout;
use crate::resolver::{TargetResolver, non_empty};

#[derive(Clone, Debug)]
pub struct GlobalResolver {
    table: PathBuf,
}

impl GlobalResolver {
    /// `dir` is the directory containing the shim executable.
    pub fn new(dir: impl AsRef<Path>, layout: &ShimLayout) -> Self {
        Self {
            table: dir.as_ref().join(&layout.global_file),
        }
    }

    pub fn table(&self) -> &Path {
        &self.table
    }
}

impl TargetResolver for GlobalResolver {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        let target = non_empty(ini::lookup(&self.table, command))?;
        debug!(
            command,
            table = %self.table.display(),
            resolved = %target.display(),
            "global match"
        );
        Some(target)
    }
}
