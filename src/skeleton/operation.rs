use std::path::{Path, PathBuf};

/// A filesystem change performed while laying out a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkeletonOperation {
    CreateDirectory { target: PathBuf, target_exists: bool },
    Write { target: PathBuf, target_exists: bool },
}

impl SkeletonOperation {
    pub fn target(&self) -> &Path {
        match self {
            SkeletonOperation::CreateDirectory { target, .. }
            | SkeletonOperation::Write { target, .. } => target,
        }
    }

    /// Gets a message describing the operation and its outcome.
    pub fn get_message(&self) -> String {
        match self {
            SkeletonOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "Skipping directory creation '{}' (already exists)",
                        target.display()
                    )
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }
            SkeletonOperation::Write { target, target_exists } => {
                if *target_exists {
                    format!("Writing to '{}' (overwriting existing file)", target.display())
                } else {
                    format!("Writing to '{}'", target.display())
                }
            }
        }
    }
}
