//! Static documentation site generator for project READMEs.

mod assets;
pub mod catalog;
pub mod components;
mod config;
mod markdown;
pub mod pages;

pub use assets::write_css_assets;
pub use catalog::{OWNER, PROJECTS, Project, find_project};
pub use config::Config;
pub use markdown::{
    DEFAULT_VIDEO_FILE, MarkdownRenderer, MediaRewriter, VideoSources, default_sources,
};
