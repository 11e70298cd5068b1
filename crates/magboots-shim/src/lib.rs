//! Tool resolution for the magboots shim.
//!
//! # Architecture
//!
//! The shim is installed under many names. The name it runs as is the
//! command, and a [`TargetResolver`] turns that command into the executable
//! to launch. Two resolvers cover the search order:
//!
//! - [`WorkspaceResolver`] walks from a start directory to the filesystem
//!   root looking for `.magboots/tools.ini`, nearest first.
//! - [`GlobalResolver`] reads `tools.ini` next to the shim binary.
//!
//! [`PairResolver`] chains them so the workspace wins.
//!
//! # Example
//!
//! ```
//! use magboots_shim::{
//!     GlobalResolver, PairResolver, ShimLayout, TargetResolver, WorkspaceResolver,
//! };
//!
//! let dir = std::env::temp_dir();
//! let layout = ShimLayout::default();
//! let resolver = PairResolver::new(
//!     WorkspaceResolver::new(&dir, layout.clone()),
//!     GlobalResolver::new(&dir, &layout),
//! );
//! assert!(resolver.resolve("magboots-doc-unpinned-tool").is_none());
//! ```

pub use global::GlobalResolver;
pub use layout::ShimLayout;
pub use resolver::{PairResolver, TargetResolver};
pub use workspace::WorkspaceResolver;

mod global;
pub mod ini;
pub mod layout;
mod resolver;
mod workspace;
