//! Portfolio index page generation

use maud::{Markup, html};

use crate::catalog::Project;
use crate::components::cards::{card_grid, project_card};
use crate::components::layout::page_wrapper;

/// Data container for index page generation
pub struct IndexPageData<'a> {
    pub title: &'a str,
    pub owner: &'a str,
    pub projects: &'a [Project],
    /// Repository names whose documentation pages were generated
    pub rendered: &'a [&'a str],
}

/// Generates portfolio index page HTML
///
/// Creates the landing page listing every cataloged project as a card.
/// Cards link to the documentation page under projects/ when one was
/// rendered for that repository; every card links to GitHub.
///
/// # Arguments
///
/// * `data`: Index page data container with all required fields
///
/// # Returns
///
/// Complete HTML markup for index page
pub fn generate(data: IndexPageData<'_>) -> Markup {
    page_wrapper(
        data.title,
        &["assets/index.css"],
        html! {
            header class="site-header" {
                span class="site-owner" { (data.owner) " / " }
                h1 class="site-title" { (data.title) }
            }

            main {
                @if data.projects.is_empty() {
                    p class="empty-state" { "No projects in the catalog" }
                } @else {
                    (card_grid(html! {
                        @for project in data.projects {
                            @let page = format!("projects/{}.html", project.repo);
                            @let docs = data.rendered.contains(&project.repo).then_some(page.as_str());
                            (project_card(project, docs))
                        }
                    }))
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PROJECTS;

    const TEST_PROJECT: Project = Project {
        name: "Demo Project",
        description: "A short demo summary",
        repo: "demo",
        tags: &["Rust", "Testing"],
        github_url: "https://github.com/testuser/demo",
    };

    #[test]
    fn test_index_page_basic() {
        // Arrange
        let projects = [TEST_PROJECT];

        // Act
        let html = generate(IndexPageData {
            title: "Projects",
            owner: "testuser",
            projects: &projects,
            rendered: &["demo"],
        });
        let html_string = html.into_string();

        // Assert
        assert!(
            html_string.contains("Demo Project"),
            "Should contain project name"
        );
        assert!(html_string.contains("testuser"), "Should contain owner");
        assert!(
            html_string.contains("A short demo summary"),
            "Should contain description"
        );
        assert!(
            html_string.contains("href=\"projects/demo.html\""),
            "Should link to the project page"
        );
        assert!(
            html_string.contains("href=\"https://github.com/testuser/demo\""),
            "Should link to the repository"
        );
    }

    #[test]
    fn test_index_page_card_structure() {
        // Arrange
        let projects = [TEST_PROJECT];

        // Act
        let html = generate(IndexPageData {
            title: "Projects",
            owner: "testuser",
            projects: &projects,
            rendered: &["demo"],
        });
        let html_string = html.into_string();

        // Assert: card grid structure is present
        assert!(
            html_string.contains("card-grid"),
            "Should contain card grid"
        );
        assert!(
            html_string.contains("project-card"),
            "Should contain project cards"
        );
        assert!(
            html_string.contains("card-tag"),
            "Should contain tag elements"
        );
        assert!(html_string.contains("Rust"), "Should contain tag text");
    }

    #[test]
    fn test_index_page_unrendered_project() {
        // Arrange: project without a generated documentation page
        let projects = [TEST_PROJECT];

        // Act
        let html = generate(IndexPageData {
            title: "Projects",
            owner: "testuser",
            projects: &projects,
            rendered: &[],
        });
        let html_string = html.into_string();

        // Assert: card is listed, GitHub link present, no dead docs link
        assert!(
            html_string.contains("Demo Project"),
            "Unrendered project should still be listed"
        );
        assert!(
            html_string.contains("href=\"https://github.com/testuser/demo\""),
            "Should keep the GitHub link"
        );
        assert!(
            !html_string.contains("projects/demo.html"),
            "Should not link to a page that was not generated"
        );
    }

    #[test]
    fn test_index_page_empty_catalog() {
        // Arrange & Act
        let html = generate(IndexPageData {
            title: "Projects",
            owner: "testuser",
            projects: &[],
            rendered: &[],
        });
        let html_string = html.into_string();

        // Assert
        assert!(
            html_string.contains("No projects in the catalog"),
            "Should show empty state"
        );
    }

    #[test]
    fn test_index_page_full_catalog() {
        // Arrange
        let rendered: Vec<&str> = PROJECTS.iter().map(|p| p.repo).collect();

        // Act
        let html = generate(IndexPageData {
            title: "Projects",
            owner: "yuvalm11",
            projects: PROJECTS,
            rendered: &rendered,
        });
        let html_string = html.into_string();

        // Assert: every cataloged project gets a card with both links
        for project in PROJECTS {
            assert!(
                html_string.contains(project.name),
                "Should list {}",
                project.repo
            );
            assert!(
                html_string.contains(&format!("href=\"projects/{}.html\"", project.repo)),
                "Should link {}",
                project.repo
            );
            assert!(
                html_string.contains(&format!("href=\"{}\"", project.github_url)),
                "Should link the repository of {}",
                project.repo
            );
        }
    }
}
