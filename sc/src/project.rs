//! Project creation: input validation, template selection and the
//! copy-then-rewrite pipeline

use log::{info, trace};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::copier::copy_recursive;
use crate::error::{Result, ScaffoldError};
use crate::rewriter::rewrite_descriptor;

/// Directory under the root that holds the templates
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Descriptor file at the root of every template
pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// Selects one of the shipped templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSelector {
    Java7,
    Java8,
}

impl TemplateSelector {
    pub fn version(self) -> u32 {
        match self {
            Self::Java7 => 7,
            Self::Java8 => 8,
        }
    }

    /// Template directory name, e.g. `template-java8`
    pub fn dir_name(self) -> String {
        format!("template-java{}", self.version())
    }
}

impl TryFrom<u32> for TemplateSelector {
    type Error = ScaffoldError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            7 => Ok(Self::Java7),
            8 => Ok(Self::Java8),
            other => Err(ScaffoldError::InvalidArgument(format!(
                "Java version needs to be 7 or 8, got {}",
                other
            ))),
        }
    }
}

impl FromStr for TemplateSelector {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        let version: u32 = s
            .trim()
            .parse()
            .map_err(|_| ScaffoldError::InvalidArgument(format!("Template selector must be a number, got '{}'", s)))?;
        Self::try_from(version)
    }
}

impl fmt::Display for TemplateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Java {}", self.version())
    }
}

/// A validated request to create a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    template: TemplateSelector,
    namespace: String,
    artifact_id: String,
}

impl ProjectRequest {
    /// Validate the inputs; nothing touches the filesystem
    ///
    /// Surrounding whitespace is trimmed. What remains must be non-empty and
    /// contain no whitespace at all.
    pub fn new(template: TemplateSelector, namespace: &str, artifact_id: &str) -> Result<Self> {
        let namespace = validate_identifier("namespace", namespace)?;
        let artifact_id = validate_identifier("artifactId", artifact_id)?;
        Ok(Self {
            template,
            namespace,
            artifact_id,
        })
    }

    pub fn template(&self) -> TemplateSelector {
        self.template
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }
}

fn validate_identifier(what: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ScaffoldError::InvalidArgument(format!("{} may not be empty", what)));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ScaffoldError::InvalidArgument(format!(
            "{} may not contain space characters, got '{}'",
            what, value
        )));
    }
    Ok(value.to_string())
}

/// Where templates are read from and projects are written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    templates: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_templates(root, DEFAULT_TEMPLATES_DIR)
    }

    /// Use a templates directory other than `templates`; relative paths are
    /// resolved against the root
    pub fn with_templates(root: impl Into<PathBuf>, templates: impl AsRef<Path>) -> Self {
        let root = root.into();
        let templates = root.join(templates);
        Self { root, templates }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn template_dir(&self, template: TemplateSelector) -> PathBuf {
        self.templates.join(template.dir_name())
    }

    pub fn project_dir(&self, namespace: &str, artifact_id: &str) -> PathBuf {
        self.root.join(namespace).join(artifact_id)
    }

    pub fn descriptor_path(project_dir: &Path) -> PathBuf {
        project_dir.join(DESCRIPTOR_FILE)
    }
}

/// Copy the selected template into `<root>/<namespace>/<artifact_id>` and
/// rewrite its descriptor. Returns the new project root.
///
/// A failed rewrite leaves the copied tree in place.
pub fn create_project(layout: &Layout, request: &ProjectRequest) -> Result<PathBuf> {
    info!(
        "Will create a {} project {} for {}",
        request.template(),
        request.artifact_id(),
        request.namespace()
    );

    let source = layout.template_dir(request.template());
    let target = layout.project_dir(request.namespace(), request.artifact_id());
    trace!("Template copy from {} to {}", source.display(), target.display());
    copy_recursive(&source, &target)?;

    rewrite_descriptor(Layout::descriptor_path(&target), request.namespace(), request.artifact_id())?;

    info!("Created project at {}", target.display());
    Ok(target)
}
