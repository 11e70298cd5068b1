//! File names the resolvers search for.

pub const WORKSPACE_DIR: &str = ".magboots";
pub const WORKSPACE_FILE: &str = "tools.ini";
pub const GLOBAL_FILE: &str = "tools.ini";

/// Where tool tables live, relative to a workspace directory and to the shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimLayout {
    pub workspace_dir: String,
    pub workspace_file: String,
    pub global_file: String,
}

impl Default for ShimLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ShimLayout {
    pub fn new() -> Self {
        Self {
            workspace_dir: WORKSPACE_DIR.to_string(),
            workspace_file: WORKSPACE_FILE.to_string(),
            global_file: GLOBAL_FILE.to_string(),
        }
    }

    pub fn workspace_dir(mut self, name: impl Into<String>) -> Self {
        self.workspace_dir = name.into();
        self
    }

    pub fn workspace_file(mut self, name: impl Into<String>) -> Self {
        self.workspace_file = name.into();
        self
    }

    pub fn global_file(mut self, name: impl Into<String>) -> Self {
        self.global_file = name.into();
        self
    }
}
