//! Navigation breadcrumb component

use maud::{Markup, html};

/// Renders breadcrumb navigation for a project page
///
/// Displays the site title as a root link back to the index with the
/// project name as the current trail entry. The right side links to the
/// project's repository on GitHub.
///
/// # Arguments
///
/// * `site_title`: Site title for the root breadcrumb link
/// * `index_path`: Relative path back to index.html
/// * `current`: Current project name (not linked)
/// * `github_url`: Repository URL for the GitHub link
///
/// # Returns
///
/// Breadcrumb navigation markup with links and separator
pub fn breadcrumb(site_title: &str, index_path: &str, current: &str, github_url: &str) -> Markup {
    html! {
        header {
            div class="breadcrumb" {
                a href=(index_path) class="breadcrumb-link" { (site_title) }
                span class="breadcrumb-separator" { "/" }
                span class="breadcrumb-current" { (current) }
            }
            div class="repo-info" {
                a href=(github_url) class="repo-link" {
                    i class="ph ph-github-logo" {}
                    " View on GitHub"
                }
            }
        }
    }
}
