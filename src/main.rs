use anyhow::{Context, Result};
use foliodoc::pages::index::{self, IndexPageData};
use foliodoc::pages::project::{self, ProjectPageData};
use foliodoc::{Config, PROJECTS};
use std::fs;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let owner = config.site_owner().to_string();

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    foliodoc::write_css_assets(&assets_dir)?;

    let projects_dir = config.output.join("projects");
    fs::create_dir_all(&projects_dir).context("Failed to create projects directory")?;

    println!(
        "Rendering {} cataloged projects from {}",
        PROJECTS.len(),
        config.content.display()
    );

    let mut rendered: Vec<&str> = Vec::new();
    for entry in PROJECTS {
        let readme_html = match project::render_readme(&config.content, entry, &owner) {
            Ok(Some(html)) => html,
            Ok(None) => {
                eprintln!(
                    "Warning: No content for {} (expected {})",
                    entry.repo,
                    config.content.join(format!("{}.md", entry.repo)).display()
                );
                continue;
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to render README for {}: {:#}",
                    entry.repo, e
                );
                continue;
            }
        };

        let html = project::generate(ProjectPageData {
            site_title: &config.title,
            project: entry,
            readme_html: &readme_html,
        });

        let page_path = projects_dir.join(format!("{}.html", entry.repo));
        fs::write(&page_path, html.into_string())
            .with_context(|| format!("Failed to write project page to {}", page_path.display()))?;

        rendered.push(entry.repo);
    }

    println!("Generated {} project pages", rendered.len());

    let html = index::generate(IndexPageData {
        title: &config.title,
        owner: &owner,
        projects: PROJECTS,
        rendered: &rendered,
    });

    let index_path = config.output.join("index.html");
    fs::write(&index_path, html.into_string())
        .with_context(|| format!("Failed to write index page to {}", index_path.display()))?;

    println!("Generated: {}", index_path.display());

    if !config.no_open
        && let Err(e) = open::that(&index_path)
    {
        eprintln!("Warning: Failed to open {}: {}", index_path.display(), e);
    }

    Ok(())
}
