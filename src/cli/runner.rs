use crate::{
    cli::Args,
    error::{Error, Result},
    project::Project,
    renderer::MiniJinjaRenderer,
    skeleton::{create_project_dirs, FileEmitter},
};
use std::path::{Path, PathBuf};

/// Main CLI runner that orchestrates the skeleton generation workflow
pub struct Runner {
    args: Args,
    base_dir: PathBuf,
}

impl Runner {
    /// Creates a runner generating relative to the current working directory.
    pub fn new(args: Args) -> Self {
        Self { args, base_dir: PathBuf::new() }
    }

    /// Generates under `base_dir` instead of the current working directory.
    pub fn with_base_dir<P: AsRef<Path>>(mut self, base_dir: P) -> Self {
        self.base_dir = base_dir.as_ref().to_path_buf();
        self
    }

    /// Resolves the project, creates its directories, then writes every file.
    ///
    /// Returns the project root. The first error is returned as is; anything already
    /// created stays on disk.
    pub fn run(self) -> Result<PathBuf> {
        let project = Project::from_args(&self.args)?;
        let engine = MiniJinjaRenderer::new();
        let project_root = project.root_in(&self.base_dir);
        log::debug!("Generating '{}' in '{}'", project.name(), project_root.display());

        // An empty name joins to `base_dir` itself, which must not become the root.
        if project.name().is_empty() {
            return Err(Error::CreateDirectoryError {
                path: project_root,
                source: std::io::ErrorKind::NotFound.into(),
            });
        }

        create_project_dirs(&project_root)?;

        let emitter = FileEmitter::new(&engine, &project_root, &project);
        emitter.emit_all()?;

        println!("Project skeleton created successfully in {}.", project_root.display());
        Ok(project_root)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run().map(|_| ())
}

/// Like [`run`], with the project root placed under `base_dir`.
pub fn run_in<P: AsRef<Path>>(args: Args, base_dir: P) -> Result<PathBuf> {
    Runner::new(args).with_base_dir(base_dir).run()
}
