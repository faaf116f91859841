//! Interpreter configuration

use std::path::{Path, PathBuf};

/// Where the embedded interpreter should look for natasha
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NatashaConfig {
    /// Root of a virtual environment whose `site-packages` should be
    /// searched first
    pub python_home: Option<PathBuf>,

    /// Additional directories prepended to `sys.path`
    pub extra_python_paths: Vec<PathBuf>,
}

impl NatashaConfig {
    /// Use the site-packages of the given virtual environment
    pub fn with_python_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.python_home = Some(home.into());
        self
    }

    /// Add a directory to the front of `sys.path`
    pub fn with_extra_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.extra_python_paths.push(path.into());
        self
    }
}

/// Unix layout of a virtual environment's package directory
pub(crate) fn site_packages(python_home: &Path, major: u8, minor: u8) -> PathBuf {
    python_home
        .join("lib")
        .join(format!("python{major}.{minor}"))
        .join("site-packages")
}
