//! Project card components

use maud::{Markup, html};

use crate::catalog::Project;

/// Wraps project cards in grid container
///
/// Provides the card grid structure with consistent styling. The container
/// handles the grid layout while individual cards are rendered by
/// `project_card`.
///
/// # Arguments
///
/// * `cards`: Markup containing individual project card elements
///
/// # Returns
///
/// Card grid wrapper with cards
pub fn card_grid(cards: Markup) -> Markup {
    html! {
        div class="card-grid" {
            (cards)
        }
    }
}

/// Renders single project card
///
/// Displays project name, one-line description, and topic tags, with a
/// GitHub link to the repository. The name links to the project's
/// documentation page when one was generated; projects without rendered
/// content keep the card but show a plain name.
///
/// # Arguments
///
/// * `project`: Catalog entry to display
/// * `docs_href`: Link target for the documentation page, if rendered
///
/// # Returns
///
/// Project card with all metadata displayed
pub fn project_card(project: &Project, docs_href: Option<&str>) -> Markup {
    html! {
        div class="project-card" {
            div class="card-title" {
                @if let Some(href) = docs_href {
                    a href=(href) class="card-name" {
                        (project.name)
                        " "
                        i class="ph ph-arrow-right card-arrow" {}
                    }
                } @else {
                    span class="card-name" { (project.name) }
                }
                a href=(project.github_url) class="card-github" title="View on GitHub" {
                    i class="ph ph-github-logo" {}
                }
            }
            p class="card-description" { (project.description) }
            div class="card-tags" {
                @for tag in project.tags {
                    span class="card-tag" { (tag) }
                }
            }
        }
    }
}
