use std::path::Path;

use crate::{
    constants::{files, PHP_STUB},
    error::Result,
    ioutils::write_file,
    project::Project,
    renderer::TemplateRenderer,
    skeleton::operation::SkeletonOperation,
};

/// How the content of a generated file is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    /// Written as is.
    Static(&'static str),
    /// A template rendered with the project context.
    Template(&'static str),
}

/// A file to generate, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpec {
    pub path: &'static str,
    pub content: Content,
}

/// Every generated file, in write order. Parents must be created beforehand.
pub const FILE_SPECS: &[FileSpec] = &[
    FileSpec { path: files::PUBLIC_INDEX_PHP, content: Content::Static(PHP_STUB) },
    FileSpec { path: files::CONFIG_APP_PHP, content: Content::Static(PHP_STUB) },
    FileSpec {
        path: files::README_MD,
        content: Content::Template(include_str!("templates/README.md.j2")),
    },
    FileSpec {
        path: files::GITIGNORE,
        content: Content::Static(include_str!("templates/gitignore")),
    },
    FileSpec {
        path: files::GITATTRIBUTES,
        content: Content::Static(include_str!("templates/gitattributes")),
    },
    FileSpec {
        path: files::EDITORCONFIG,
        content: Content::Static(include_str!("templates/editorconfig")),
    },
    FileSpec {
        path: files::COMPOSER_JSON,
        content: Content::Template(include_str!("templates/composer.json.j2")),
    },
];

impl FileSpec {
    /// Produces the full content of this file for the given context.
    pub fn render(
        &self,
        engine: &dyn TemplateRenderer,
        context: &serde_json::Value,
    ) -> Result<String> {
        match self.content {
            Content::Static(text) => Ok(text.to_string()),
            Content::Template(template) => engine.render(template, context, Some(self.path)),
        }
    }
}

/// Writes [`FileSpec`]s into an existing project tree.
pub struct FileEmitter<'a> {
    engine: &'a dyn TemplateRenderer,
    root: &'a Path,
    context: serde_json::Value,
}

impl<'a> FileEmitter<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, root: &'a Path, project: &Project) -> Self {
        Self { engine, root, context: project.context() }
    }

    /// Renders `spec` in memory, then writes it in one go.
    ///
    /// A render failure leaves the filesystem untouched.
    pub fn emit(&self, spec: &FileSpec) -> Result<SkeletonOperation> {
        let content = spec.render(self.engine, &self.context)?;
        let target = self.root.join(spec.path);
        let target_exists = target.exists();
        log::debug!("Rendered {} ({} bytes)", spec.path, content.len());

        write_file(&content, &target)?;
        let operation = SkeletonOperation::Write { target, target_exists };
        log::info!("{}", operation.get_message());
        Ok(operation)
    }

    /// Emits every entry of [`FILE_SPECS`], stopping at the first failure.
    pub fn emit_all(&self) -> Result<Vec<SkeletonOperation>> {
        FILE_SPECS.iter().map(|spec| self.emit(spec)).collect()
    }
}
