//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const CARDS: &str = include_str!("../assets/components/cards.css");

const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const PROJECT_PAGE: &str = include_str!("../assets/page-project.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "index.css", &[BASE, LAYOUT, CARDS, INDEX_PAGE])?;
    write_bundled(
        assets_dir,
        "project.css",
        &[BASE, LAYOUT, NAV, PROJECT_PAGE],
    )?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_css_assets() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp dir");

        // Act
        write_css_assets(dir.path()).expect("Should write assets");

        // Assert: every referenced bundle exists and is non-empty
        for name in ["index.css", "project.css", "markdown.css"] {
            let css = fs::read_to_string(dir.path().join(name))
                .unwrap_or_else(|_| panic!("Missing asset {}", name));
            assert!(!css.is_empty(), "{} should not be empty", name);
        }
    }

    #[test]
    fn test_markdown_css_styles_videos() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp dir");

        // Act
        write_css_assets(dir.path()).expect("Should write assets");

        // Assert: rewritten video tags have a matching style rule
        let css = fs::read_to_string(dir.path().join("markdown.css")).expect("Should read css");
        assert!(
            css.contains(".markdown-video"),
            "markdown.css should style rewritten videos"
        );
    }
}
