//! CLI argument parsing for scaffold

use clap::Parser;
use std::path::PathBuf;

/// Create a new project from a template
#[derive(Parser, Debug)]
#[command(name = "sc")]
#[command(author, version, about = "Create a new project from a template", long_about = None)]
pub struct Cli {
    /// Template selector (7 or 8)
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Group id extension; also the directory the project is created in
    #[arg(value_name = "NAMESPACE")]
    pub namespace: String,

    /// Artifact id; also the project directory name
    #[arg(value_name = "ARTIFACT_ID")]
    pub artifact_id: String,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root holding the templates directory (overrides config)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["sc", "8", "acme", "my-service", "-l", "debug"]).unwrap();

        assert_eq!(cli.template, "8");
        assert_eq!(cli.namespace, "acme");
        assert_eq!(cli.artifact_id, "my-service");
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.root.is_none());
    }

    #[test]
    fn test_argument_count_enforced() {
        assert!(Cli::try_parse_from(["sc", "8", "acme"]).is_err());
        assert!(Cli::try_parse_from(["sc", "8", "acme", "svc", "extra"]).is_err());
    }
}
