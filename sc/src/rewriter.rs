//! Line-oriented rewrite of the project descriptor
//!
//! The descriptor is not parsed as XML. Each line is matched whole against two
//! fixed patterns, and only matching lines change. The same literal appearing
//! in another block with the same shape (a dependency's `groupId`, say) gets
//! rewritten as well.

use log::{Level, debug, log_enabled, trace};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{Result, ScaffoldError};

/// Group id every template starts out with
pub const BASE_GROUP_ID: &str = "eu.atbk.duopoly";

/// Artifact ids the templates start out with
pub const TEMPLATE_ARTIFACT_IDS: [&str; 2] = ["template-java7", "template-java8"];

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

static GROUP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?P<prefix>\s+<groupId>{})(?P<postfix></groupId>)$",
        regex::escape(BASE_GROUP_ID)
    );
    Regex::new(&pattern).expect("group id pattern is valid")
});

static ARTIFACT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = TEMPLATE_ARTIFACT_IDS.map(regex::escape).join("|");
    let pattern = format!(
        r"^(?P<prefix>\s+<artifactId>)(?:{})(?P<postfix></artifactId>)$",
        alternatives
    );
    Regex::new(&pattern).expect("artifact id pattern is valid")
});

/// Which rewrite applies to a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRewrite {
    /// `<groupId>` carrying the base group id; gets `.namespace` appended
    ExtendNamespace,
    /// `<artifactId>` carrying a template artifact id; gets replaced
    RenameArtifact,
}

impl LineRewrite {
    /// Evaluation order; the first pattern that matches a line wins
    const ORDER: [Self; 2] = [Self::ExtendNamespace, Self::RenameArtifact];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::ExtendNamespace => &*GROUP_PATTERN,
            Self::RenameArtifact => &*ARTIFACT_PATTERN,
        }
    }
}

/// Rewrite a single line, borrowing it back unchanged when nothing matches
pub fn rewrite_line<'a>(line: &'a str, namespace: &str, artifact_id: &str) -> Cow<'a, str> {
    for rewrite in LineRewrite::ORDER {
        let Some(caps) = rewrite.pattern().captures(line) else {
            continue;
        };

        let (prefix, postfix) = affixes(&caps);
        let rewritten = match rewrite {
            LineRewrite::ExtendNamespace => format!("{}.{}{}", prefix, namespace, postfix),
            LineRewrite::RenameArtifact => format!("{}{}{}", prefix, artifact_id, postfix),
        };
        trace!("Rewrote {:?} -> {:?}", line, rewritten);
        return Cow::Owned(rewritten);
    }

    Cow::Borrowed(line)
}

fn affixes<'a>(caps: &Captures<'a>) -> (&'a str, &'a str) {
    let prefix = caps.name("prefix").map_or("", |m| m.as_str());
    let postfix = caps.name("postfix").map_or("", |m| m.as_str());
    (prefix, postfix)
}

/// Rewrite descriptor content in memory
///
/// Every output line, including the last, is followed by the platform line
/// terminator. The line count is unchanged.
pub fn rewrite_content(content: &str, namespace: &str, artifact_id: &str) -> String {
    let mut out = String::with_capacity(content.len() + namespace.len() + artifact_id.len() + 1);
    for line in content.lines() {
        out.push_str(&rewrite_line(line, namespace, artifact_id));
        out.push_str(LINE_ENDING);
    }
    out
}

/// Rewrite the descriptor at `path` in place
///
/// The new content is built completely before the file is touched, so a read
/// failure never leads to a write. The write itself is not atomic.
pub fn rewrite_descriptor(path: impl AsRef<Path>, namespace: &str, artifact_id: &str) -> Result<()> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
    let rewritten = rewrite_content(&content, namespace, artifact_id);

    if log_enabled!(Level::Trace) {
        trace!("Rewritten descriptor {}:{}{}", path.display(), LINE_ENDING, rewritten);
    }

    fs::write(path, rewritten).map_err(|e| ScaffoldError::io(path, e))?;
    debug!("Updated descriptor {}", path.display());
    Ok(())
}
