//! Report-type layout rewriter: load the component file, substitute the old
//! layout block once, store the result at the same path.

pub mod pattern;

use std::borrow::Cow;
use std::path::Path;

use regex::Regex;
use tracing::{debug, info};

use crate::errors::RewriteError;
use pattern::{NEW_LAYOUT_TEMPLATE, OLD_LAYOUT_PATTERN};

/// Compiled old-layout pattern. Build once, transform any number of texts.
#[derive(Debug, Clone)]
pub struct LayoutRewriter {
    pattern: Regex,
}

impl LayoutRewriter {
    pub fn new() -> Result<Self, RewriteError> {
        Ok(LayoutRewriter {
            pattern: Regex::new(OLD_LAYOUT_PATTERN)?,
        })
    }

    /// Replaces the first old layout block in `text` with the new structure.
    ///
    /// Text without the block comes back borrowed and unchanged. Captured
    /// payloads are reinserted verbatim; only the wrapper tags change.
    pub fn transform<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let rewritten = self.pattern.replacen(text, 1, NEW_LAYOUT_TEMPLATE);
        match &rewritten {
            Cow::Owned(_) => debug!("Report type layout block matched"),
            Cow::Borrowed(_) => debug!("Report type layout block not found"),
        }
        rewritten
    }
}

/// Reads `path`, transforms it, and writes the result back unconditionally.
///
/// The write truncates in place: no backup, no temp file.
pub fn run(path: &Path) -> Result<(), RewriteError> {
    let rewriter = LayoutRewriter::new()?;

    info!("Reading {}", path.display());
    let content =
        std::fs::read_to_string(path).map_err(|e| RewriteError::file_access(path, e))?;

    let modified = rewriter.transform(&content);

    std::fs::write(path, modified.as_bytes()).map_err(|e| RewriteError::file_access(path, e))?;
    info!("Wrote {} bytes to {}", modified.len(), path.display());

    Ok(())
}
