//! Project documentation page generation

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};
use std::path::Path;

use crate::catalog::Project;
use crate::components::layout::page_wrapper;
use crate::components::nav::breadcrumb;
use crate::markdown::MarkdownRenderer;

/// Data container for project page generation
pub struct ProjectPageData<'a> {
    pub site_title: &'a str,
    pub project: &'a Project,
    pub readme_html: &'a str,
}

/// Generates project documentation page HTML
///
/// Creates a page with breadcrumb navigation back to the index, the
/// project's description and tag list, and the rendered README content.
///
/// # Arguments
///
/// * `data`: Project page data container with all required fields
///
/// # Returns
///
/// Complete HTML markup for project page
pub fn generate(data: ProjectPageData<'_>) -> Markup {
    let title = format!("{} - {}", data.project.name, data.site_title);

    page_wrapper(
        &title,
        &["../assets/project.css", "../assets/markdown.css"],
        html! {
            (breadcrumb(
                data.site_title,
                "../index.html",
                data.project.name,
                data.project.github_url,
            ))

            main {
                section class="project-intro" {
                    p class="project-description" { (data.project.description) }
                    div class="project-tags" {
                        @for tag in data.project.tags {
                            span class="project-tag" { (tag) }
                        }
                    }
                }

                section class="readme-section" {
                    div class="readme-card" {
                        div class="readme-header" {
                            i class="ph ph-info" {}
                            span class="readme-title" { "README.md" }
                        }
                        div class="readme-content" {
                            (PreEscaped(data.readme_html))
                        }
                    }
                }
            }
        },
    )
}

/// Reads and renders a project's README from the content directory
///
/// Looks for `<repo>.md` in the content directory and renders it with
/// media rewriting for the project's repository. Projects without a
/// content file yet are skipped rather than treated as errors.
///
/// # Arguments
///
/// * `content_dir`: Directory holding per-project README files
/// * `project`: Catalog entry being rendered
/// * `owner`: GitHub owner for raw-content URLs
///
/// # Returns
///
/// Optional rendered README HTML string, or None if no content file found
///
/// # Errors
///
/// Returns error if the file cannot be read or rendering fails
pub fn render_readme(
    content_dir: impl AsRef<Path>,
    project: &Project,
    owner: &str,
) -> Result<Option<String>> {
    let path = content_dir.as_ref().join(format!("{}.md", project.repo));
    if !path.exists() {
        return Ok(None);
    }

    let renderer = MarkdownRenderer::with_media_rewriter(owner, project.repo);
    let rendered = renderer
        .render_file(&path)
        .with_context(|| format!("Failed to render README: {}", path.display()))?;

    Ok(Some(rendered))
}
