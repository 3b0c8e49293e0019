//! Template rendering for the generated files.
//!
//! - `interface`: the `TemplateRenderer` trait
//! - `minijinja`: the MiniJinja-backed implementation

pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use self::minijinja::MiniJinjaRenderer;
