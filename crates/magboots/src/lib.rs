//! The magboots shim.
//!
//! One binary, installed under many names (`git.exe`, `php.exe`, ...). The
//! name it runs as picks the tool; the tool's path comes from the nearest
//! `.magboots/tools.ini` above the current directory, or from `tools.ini`
//! beside the binary. The tool then runs with this process's streams,
//! environment and arguments, and its exit code becomes ours.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use magboots_platform::command::{self, Command};
use magboots_platform::exe;
use magboots_shim::{
    GlobalResolver, PairResolver, ShimLayout, TargetResolver, WorkspaceResolver,
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot identify the shim: {0}")]
    Identify(#[from] magboots_platform::Error),

    #[error("no path configured for '{0}'")]
    NotConfigured(String),

    #[error("target not found: {}", .0.display())]
    TargetNotFound(PathBuf),

    #[error(transparent)]
    Launch(magboots_platform::Error),
}

impl Error {
    /// Exit status for every failure the shim itself reports.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Follow-up line telling the user how to fix the failure, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Error::NotConfigured(tool) => {
                Some(format!("add '{tool} = /path/to/executable' to tools.ini"))
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Everything one shim run needs to know about how it was started.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub tool: String,
    pub exe_dir: PathBuf,
    /// `None` when the working directory cannot be read; only the global
    /// table is consulted then.
    pub cwd: Option<PathBuf>,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn from_env() -> Result<Self> {
        let exe = exe::current_exe()?;
        let tool = exe::tool_name(&exe)?;
        let cwd = match std::env::current_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                debug!(error = %e, "working directory unavailable, skipping workspace search");
                None
            }
        };

        Ok(Self {
            tool,
            exe_dir: exe::exe_dir(&exe),
            cwd,
            args: std::env::args_os().skip(1).collect(),
        })
    }

    fn resolver(&self, layout: &ShimLayout) -> impl TargetResolver {
        let workspace = self
            .cwd
            .as_ref()
            .map(|cwd| WorkspaceResolver::new(cwd, layout.clone()));
        PairResolver::new(workspace, GlobalResolver::new(&self.exe_dir, layout))
    }

    /// Resolve the tool without launching it.
    pub fn resolve(&self, layout: &ShimLayout) -> Result<PathBuf> {
        let target = self
            .resolver(layout)
            .resolve(&self.tool)
            .ok_or_else(|| Error::NotConfigured(self.tool.clone()))?;

        validate(&target)?;
        Ok(target)
    }
}

/// Resolve and run the tool, returning the child's exit code.
pub fn try_run(invocation: Invocation, layout: &ShimLayout) -> Result<i32> {
    let target = invocation.resolve(layout)?;
    debug!(tool = %invocation.tool, resolved = %target.display(), "launching tool");
    exec(&target, invocation.args)
}

fn validate(target: &Path) -> Result<()> {
    if !target.exists() {
        return Err(Error::TargetNotFound(target.to_path_buf()));
    }
    Ok(())
}

fn exec(target: &Path, args: Vec<OsString>) -> Result<i32> {
    let status = Command::new(target)
        .args(args)
        .status()
        .map_err(Error::Launch)?;
    Ok(command::exit_code(status))
}
