//! Static catalog of the portfolio projects.

/// GitHub owner all cataloged repositories live under.
pub const OWNER: &str = "yuvalm11";

/// A portfolio project backed by a GitHub repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Display name shown on the index page.
    pub name: &'static str,
    /// One-line summary for the project card.
    pub description: &'static str,
    /// Repository name, also used as the content file stem and page slug.
    pub repo: &'static str,
    /// Topic tags for the project card.
    pub tags: &'static [&'static str],
    /// Link to the repository on GitHub.
    pub github_url: &'static str,
}

/// All cataloged projects in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        name: "Inverted Pendulum",
        description: "Policy Gradient RL algorithm for the cartpole problem",
        repo: "inverted-pendulum",
        tags: &["Reinforcement Learning", "JAX", "Control Theory"],
        github_url: "https://github.com/yuvalm11/inverted-pendulum",
    },
    Project {
        name: "Hemingway LLM",
        description: "Fine tuning an LLM that generates Hemingway-style text",
        repo: "hemingway",
        tags: &["LLM", "Fine Tuning", "Transformers", "Generative AI"],
        github_url: "https://github.com/yuvalm11/hemingway",
    },
    Project {
        name: "Prompter Plotter",
        description: "Use AI image generation to create a real life drawing",
        repo: "prompter-plotter",
        tags: &[
            "Generative AI",
            "Machine building",
            "Control Systems",
            "Image processing",
        ],
        github_url: "https://github.com/yuvalm11/prompter-plotter",
    },
    Project {
        name: "MNIST Variational Autoencoder",
        description: "Variational Autoencoder for MNIST image generation with a lightweight CNN classifier",
        repo: "mnist-vae",
        tags: &["Variational Autoencoder", "Computer Vision", "PyTorch", "CNN"],
        github_url: "https://github.com/yuvalm11/mnist-vae",
    },
    Project {
        name: "Motor Position Correction",
        description: "Error correction algorithm using Fourier analysis for accurate stepper motor control",
        repo: "motor-position-correction",
        tags: &[
            "Signal Processing",
            "Control Systems",
            "Python",
            "Fourier Analysis",
        ],
        github_url: "https://github.com/yuvalm11/motor-position-correction",
    },
    Project {
        name: "Insta Bot",
        description: "An automation script to post my photos daily on my Instagram account",
        repo: "insta-bot",
        tags: &[
            "Instagram Graph API",
            "Automation",
            "Photography",
            "GitHub Actions",
        ],
        github_url: "https://github.com/yuvalm11/insta-bot",
    },
    Project {
        name: "Table Timer",
        description: "A tiny desk clock to remind me to stay mobile in my office work",
        repo: "table-timer",
        tags: &["Embedded systems", "Electronics", "Product Design"],
        github_url: "https://github.com/yuvalm11/table-timer",
    },
    Project {
        name: "Personal Website",
        description: "It's this website! Renders my GitHub READMEs into a documentation site",
        repo: "foliodoc",
        tags: &["Rust", "Static Site Generation", "GitHub Actions"],
        github_url: "https://github.com/yuvalm11/foliodoc",
    },
    // Add more projects here as they become available
];

/// Finds a cataloged project by its repository name.
pub fn find_project(repo: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.repo == repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_repository() {
        // Act
        let project = find_project("mnist-vae");

        // Assert
        assert!(project.is_some(), "Cataloged repository should be found");
        assert_eq!(
            project.map(|p| p.name),
            Some("MNIST Variational Autoencoder")
        );
    }

    #[test]
    fn test_find_unknown_repository() {
        // Act
        let project = find_project("does-not-exist");

        // Assert
        assert!(project.is_none(), "Unknown repository should not be found");
    }

    #[test]
    fn test_repository_names_are_unique() {
        // Arrange
        let mut repos: Vec<&str> = PROJECTS.iter().map(|p| p.repo).collect();

        // Act
        repos.sort_unstable();
        repos.dedup();

        // Assert
        assert_eq!(
            repos.len(),
            PROJECTS.len(),
            "Each project should have a distinct repository name"
        );
    }

    #[test]
    fn test_entries_are_fully_populated() {
        for project in PROJECTS {
            // Assert
            assert!(!project.name.is_empty(), "Name missing for {}", project.repo);
            assert!(
                !project.description.is_empty(),
                "Description missing for {}",
                project.repo
            );
            assert!(
                !project.tags.is_empty(),
                "Tags missing for {}",
                project.repo
            );
            assert_eq!(
                project.github_url,
                format!("https://github.com/{}/{}", OWNER, project.repo),
                "GitHub URL should match owner and repository"
            );
        }
    }
}
