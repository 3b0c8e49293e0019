//! Project skeleton generation
//!
//! - `directories`: creates the project root and its fixed subdirectories
//! - `files`: the fixed set of generated files and the emitter that writes them
//! - `operation`: filesystem operations performed, used for reporting

pub mod directories;
pub mod files;
pub mod operation;

pub use directories::create_project_dirs;
pub use files::{Content, FileEmitter, FileSpec, FILE_SPECS};
pub use operation::SkeletonOperation;
