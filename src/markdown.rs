//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module provides markdown rendering using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists), math spans, heading
//! anchors, and media URL rewriting for README images and videos.

mod media;
mod renderer;

pub use media::{DEFAULT_VIDEO_FILE, MediaRewriter, VideoSources, default_sources};
pub use renderer::MarkdownRenderer;
