//! Shared test utilities for integration tests.
//!
//! Provides helper functions for creating temporary content directories
//! with README fixtures used across multiple test files.

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Creates temporary content directory for README fixtures.
///
/// # Returns
///
/// Temporary directory to hold per-project markdown files
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_content_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes a README fixture for a repository into the content directory.
///
/// # Arguments
///
/// * `content_dir`: Content directory path
/// * `repo`: Repository name (file is written as `<repo>.md`)
/// * `markdown`: README markdown content
///
/// # Errors
///
/// Returns error if the file write fails
pub fn write_content(content_dir: &Path, repo: &str, markdown: &str) -> Result<()> {
    std::fs::write(content_dir.join(format!("{}.md", repo)), markdown)?;
    Ok(())
}

/// Builds a representative README with media, math, and code.
///
/// Covers the markup a real project README exercises: a video attachment,
/// a relative image, a fenced code block, and an inline formula.
///
/// # Arguments
///
/// * `title`: Heading for the README
///
/// # Returns
///
/// Markdown content as string
pub fn sample_readme(title: &str) -> String {
    format!(
        "# {}\n\n\
         ![demo video](https://github.com/user-attachments/assets/sample-clip)\n\n\
         ![results](plots/results.png)\n\n\
         Loss is $L = -\\log p(x)$ per step.\n\n\
         ```python\n\
         def train(steps):\n    \
             return steps\n\
         ```\n",
        title
    )
}
