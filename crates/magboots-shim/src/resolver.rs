//! Target resolver abstraction for the shim binary.
//!
//! A resolver maps a command name to the executable that should run in its
//! place. Resolvers compose: [`PairResolver`] asks its primary first and only
//! falls back when the primary has nothing.

use std::path::PathBuf;

pub trait TargetResolver {
    fn resolve(&self, command: &str) -> Option<PathBuf>;
}

impl<R: TargetResolver> TargetResolver for Option<R> {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        self.as_ref().and_then(|r| r.resolve(command))
    }
}

#[derive(Clone, Debug)]
pub struct PairResolver<R1, R2> {
    primary: R1,
    fallback: R2,
}

impl<R1, R2> PairResolver<R1, R2>
where
    R1: TargetResolver,
    R2: TargetResolver,
{
    pub fn new(primary: R1, fallback: R2) -> Self {
        Self { primary, fallback }
    }
}

impl<R1, R2> TargetResolver for PairResolver<R1, R2>
where
    R1: TargetResolver,
    R2: TargetResolver,
{
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        self.primary
            .resolve(command)
            .or_else(|| self.fallback.resolve(command))
    }
}

/// Treat a looked-up value as a target path; empty values count as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
