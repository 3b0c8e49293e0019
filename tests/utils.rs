use pds_skeleton::cli::{run_in, Args};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory holding the expected tree for the `test_project` name.
pub fn expected_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/expected/test_project")
}

pub fn args_for(project_name: Option<&str>) -> Args {
    Args { project_name: project_name.map(str::to_string), verbose: 2 }
}

fn relative_files(dir: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Lists every entry below `dir`, relative to it.
pub fn relative_entries(dir: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) -> bool {
    let files1 = relative_files(dir1);
    let files2 = relative_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    let mut different = false;
    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
        different = true;
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
        different = true;
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&content1));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&content2));
            different = true;
        }
    }
    println!("=== End of Comparison ===\n");
    different
}

/// Generates `test_project` under `base_dir` and asserts the files match the expected tree.
pub fn run_and_assert(base_dir: &Path) -> PathBuf {
    let root = run_in(args_for(Some("test_project")), base_dir).unwrap();
    if print_dir_diff(&root, &expected_dir()) {
        panic!("Directories differ. See above for details.");
    }
    root
}
