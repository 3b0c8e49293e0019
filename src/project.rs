use std::path::{Path, PathBuf};

use crate::{
    cli::Args,
    constants::PROJECT_NAME_KEY,
    error::{Error, Result},
};

/// The project being generated.
///
/// The name is kept exactly as given and doubles as the root directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Resolves the project from parsed command line arguments.
    ///
    /// Only the presence of the name is checked; it is not trimmed or validated.
    pub fn from_args(args: &Args) -> Result<Self> {
        args.project_name.as_deref().map(Self::new).ok_or(Error::MissingProjectName)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root directory of the project under `base_dir`.
    pub fn root_in<P: AsRef<Path>>(&self, base_dir: P) -> PathBuf {
        base_dir.as_ref().join(&self.name)
    }

    /// Template context exposing the project name.
    pub fn context(&self) -> serde_json::Value {
        let mut context = serde_json::Map::new();
        context.insert(PROJECT_NAME_KEY.to_string(), self.name.clone().into());
        serde_json::Value::Object(context)
    }
}
