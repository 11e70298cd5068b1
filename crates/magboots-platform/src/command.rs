//! Transparent launching of the resolved tool.
//!
//! Arguments go to the OS as a vector; no command line is rebuilt by hand.
//! Standard streams and the environment are inherited untouched, and the
//! call blocks until the child exits.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command as StdCommand, ExitStatus, Stdio};

use tracing::debug;

#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl AsRef<Path>) -> Self {
        let program = program.as_ref();
        let mut inner = StdCommand::new(program);
        inner
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        Self {
            inner,
            program: program.display().to_string(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    /// Run to completion with inherited stdio and environment.
    pub fn status(&mut self) -> Result<ExitStatus> {
        debug!(
            program = %self.program,
            args = ?self.inner.get_args().collect::<Vec<_>>(),
            "launching"
        );
        let status = self.inner.status().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })?;
        debug!(program = %self.program, %status, "child exited");
        Ok(status)
    }
}

/// Exit code to report for a finished child.
///
/// On Unix a child killed by a signal has no code; it maps to `128 + signal`
/// the way shells report it.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
