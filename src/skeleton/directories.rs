use std::path::Path;

use crate::{
    constants::INNER_DIRS, error::Result, ioutils::create_dir,
    skeleton::operation::SkeletonOperation,
};

/// Creates the project root and then each of [`INNER_DIRS`] beneath it, in order.
///
/// A directory that already exists is skipped. Any other failure, such as a missing
/// ancestor of `root`, stops the run before the next directory is attempted.
pub fn create_project_dirs(root: &Path) -> Result<Vec<SkeletonOperation>> {
    let targets = std::iter::once(root.to_path_buf())
        .chain(INNER_DIRS.iter().map(|dir| root.join(dir)));

    let mut operations = Vec::with_capacity(INNER_DIRS.len() + 1);
    for target in targets {
        let created = create_dir(&target)?;
        let operation =
            SkeletonOperation::CreateDirectory { target, target_exists: !created };
        log::info!("{}", operation.get_message());
        operations.push(operation);
    }
    Ok(operations)
}
