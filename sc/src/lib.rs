//! Scaffold - create projects from a template tree
//!
//! A template directory is copied to `<root>/<namespace>/<artifact_id>` and the
//! `groupId` / `artifactId` lines of its `pom.xml` are rewritten.
//!
//! # Layout
//!
//! ```text
//! <root>/
//! ├── templates/
//! │   ├── template-java7/
//! │   │   └── pom.xml
//! │   └── template-java8/
//! │       └── pom.xml
//! └── <namespace>/
//!     └── <artifact_id>/      # created by create_project
//!         └── pom.xml
//! ```
//!
//! # Example
//!
//! ```ignore
//! use scaffold::{Layout, ProjectRequest, TemplateSelector, create_project};
//!
//! let request = ProjectRequest::new(TemplateSelector::Java8, "acme", "my-service")?;
//! let project = create_project(&Layout::new("."), &request)?;
//! ```

pub mod cli;
pub mod config;
pub mod copier;
pub mod error;
pub mod project;
pub mod rewriter;

pub use copier::{copy_recursive, copy_single};
pub use error::{Result, ScaffoldError};
pub use project::{DESCRIPTOR_FILE, Layout, ProjectRequest, TemplateSelector, create_project};
pub use rewriter::rewrite_descriptor;
