use crate::{error::Result, renderer::interface::TemplateRenderer};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
///
/// Output is never escaped and the trailing newline of a template is kept, so a
/// rendered file matches its template byte for byte outside the substitutions.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let mut env = self.env.clone();
        let name = template_name.unwrap_or("temp");
        env.add_template(name, template)?;

        let tmpl = env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}
