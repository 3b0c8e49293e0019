use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Creates a single directory with [`DIR_MODE`](crate::constants::DIR_MODE) permissions.
///
/// Returns `Ok(true)` when the directory was created and `Ok(false)` when it already
/// existed. Any other failure, a missing parent included, is an error. Parents are
/// never created.
pub fn create_dir<P: AsRef<Path>>(dest_path: P) -> Result<bool> {
    let dest_path = dest_path.as_ref();
    let mut builder = std::fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(crate::constants::DIR_MODE);
    }

    match builder.create(dest_path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(source) => {
            Err(Error::CreateDirectoryError { path: dest_path.to_path_buf(), source })
        }
    }
}

/// Writes `content` to `dest_path`, truncating an existing file.
///
/// The parent directory must already exist.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::write(dest_path, content)
        .map_err(|source| Error::WriteFileError { path: dest_path.to_path_buf(), source })
}
