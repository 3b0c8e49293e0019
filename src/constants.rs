//! Constants used throughout pds-skeleton

/// Subdirectories created under the project root, in creation order
pub const INNER_DIRS: &[&str] = &["bin", "config", "public", "resources", "src", "tests"];

/// Permission bits for every created directory (owner rwx, group/other r-x before umask)
pub const DIR_MODE: u32 = 0o750;

/// Context key the templates substitute the project name into
pub const PROJECT_NAME_KEY: &str = "project_name";

/// Content of the generated PHP entry points
pub const PHP_STUB: &str = "<?php\n";

/// Generated file names, relative to the project root
pub mod files {
    pub const PUBLIC_INDEX_PHP: &str = "public/index.php";
    pub const CONFIG_APP_PHP: &str = "config/app.php";
    pub const README_MD: &str = "README.md";
    pub const GITIGNORE: &str = ".gitignore";
    pub const GITATTRIBUTES: &str = ".gitattributes";
    pub const EDITORCONFIG: &str = ".editorconfig";
    pub const COMPOSER_JSON: &str = "composer.json";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
