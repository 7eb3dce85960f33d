//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::catalog;

/// Command line configuration for Foliodoc.
#[derive(Debug, Clone, Parser)]
#[command(name = "foliodoc", version, about, long_about = None)]
pub struct Config {
    /// Content directory holding one <repo>.md README per project
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site title
    #[arg(long, default_value = "Projects")]
    pub title: String,

    /// GitHub owner used in raw-content URLs
    #[arg(long)]
    pub owner: Option<String>,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.content.exists() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        Ok(())
    }

    /// Returns the GitHub owner from configuration or the catalog default.
    pub fn site_owner(&self) -> &str {
        self.owner.as_deref().unwrap_or(catalog::OWNER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            content: PathBuf::from("."),
            output: PathBuf::from("dist"),
            title: "Projects".to_string(),
            owner: None,
            no_open: false,
        }
    }

    #[test]
    fn test_site_owner_with_explicit_owner() {
        // Arrange
        let config = Config {
            owner: Some("octocat".to_string()),
            ..base_config()
        };

        // Act
        let owner = config.site_owner();

        // Assert
        assert_eq!(owner, "octocat");
    }

    #[test]
    fn test_site_owner_defaults_to_catalog() {
        // Arrange
        let config = base_config();

        // Act
        let owner = config.site_owner();

        // Assert
        assert_eq!(owner, catalog::OWNER, "Should fall back to catalog owner");
    }

    #[test]
    fn test_config_clone() {
        // Arrange
        let original = Config {
            content: PathBuf::from("/test/path"),
            output: PathBuf::from("output"),
            title: "My Projects".to_string(),
            owner: Some("owner".to_string()),
            no_open: true,
        };

        // Act
        let cloned = original.clone();

        // Assert
        assert_eq!(cloned.content, original.content);
        assert_eq!(cloned.output, original.output);
        assert_eq!(cloned.title, original.title);
        assert_eq!(cloned.owner, original.owner);
        assert_eq!(cloned.no_open, original.no_open);
    }

    #[test]
    fn test_config_debug_format() {
        // Arrange
        let config = base_config();

        // Act
        let debug_str = format!("{:?}", config);

        // Assert
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("title"));
    }

    #[test]
    fn test_validate_existing_path() {
        // Arrange
        let config = base_config();

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Current directory should be valid");
    }

    #[test]
    fn test_validate_missing_path() {
        // Arrange
        let config = Config {
            content: PathBuf::from("/nonexistent/foliodoc-content"),
            ..base_config()
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Missing content directory should fail");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Content directory"),
            "Error should name the content directory"
        );
    }
}
