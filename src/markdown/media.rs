//! Media URL rewriting for rendered README HTML.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Global fallback filename when no video mapping matches.
pub const DEFAULT_VIDEO_FILE: &str = "demo_video.mp4";

/// Branch segment used in raw-content URLs.
const DEFAULT_BRANCH: &str = "main";

/// Marker identifying GitHub user-attachment upload URLs.
const ATTACHMENT_MARKER: &str = "github.com/user-attachments/assets/";

// Cached patterns for the four rewrite passes. Matching is textual over the
// rendered fragment; a pattern never spans past the closing `>` of its tag.
static RE_ATTACHMENT_VIDEO_IMG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)<img[^>]+src="(https://github\.com/user-attachments/assets/[^"]+)"[^>]*alt="[^"]*video[^"]*"[^>]*>"#,
    )
    .expect("valid regex")
});
static RE_ATTACHMENT_IMG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<img[^>]+src="(https://github\.com/user-attachments/assets/[^"]+)"[^>]*>"#)
        .expect("valid regex")
});
static RE_IMG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<img[^>]+src="([^"]+)"[^>]*>"#).expect("valid regex"));
static RE_VIDEO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<video[^>]*src="([^"]+)"[^>]*>"#).expect("valid regex"));

/// Lookup table from repository videos to raw-content filenames.
///
/// Resolution is three-tiered: a specific (repository, attachment id) entry
/// first, then the repository's default filename, then
/// [`DEFAULT_VIDEO_FILE`]. Lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct VideoSources {
    attachments: HashMap<String, HashMap<String, String>>,
    defaults: HashMap<String, String>,
}

impl VideoSources {
    /// Creates an empty source table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a specific attachment identifier to a filename.
    ///
    /// # Arguments
    ///
    /// * `repo`: Repository the attachment belongs to
    /// * `attachment_id`: Opaque identifier from the user-attachment URL
    /// * `file`: Video filename on the repository's default branch
    pub fn map_attachment(
        &mut self,
        repo: impl Into<String>,
        attachment_id: impl Into<String>,
        file: impl Into<String>,
    ) {
        self.attachments
            .entry(repo.into())
            .or_default()
            .insert(attachment_id.into(), file.into());
    }

    /// Sets the repository-wide default video filename.
    pub fn set_default(&mut self, repo: impl Into<String>, file: impl Into<String>) {
        self.defaults.insert(repo.into(), file.into());
    }

    /// Resolves the video filename for an attachment.
    ///
    /// Falls back to the repository default, then to
    /// [`DEFAULT_VIDEO_FILE`]. Never fails.
    ///
    /// # Arguments
    ///
    /// * `repo`: Repository name
    /// * `attachment_id`: Attachment identifier (last URL path segment)
    ///
    /// # Returns
    ///
    /// Resolved video filename
    pub fn resolve(&self, repo: &str, attachment_id: &str) -> &str {
        if let Some(files) = self.attachments.get(repo)
            && let Some(file) = files.get(attachment_id)
        {
            return file;
        }

        self.defaults
            .get(repo)
            .map(String::as_str)
            .unwrap_or(DEFAULT_VIDEO_FILE)
    }
}

static DEFAULT_SOURCES: Lazy<VideoSources> = Lazy::new(|| {
    let mut sources = VideoSources::new();
    sources.set_default("inverted-pendulum", DEFAULT_VIDEO_FILE);
    sources.set_default("mnist-vae", DEFAULT_VIDEO_FILE);
    sources.set_default("motor-position-correction", DEFAULT_VIDEO_FILE);
    sources.set_default("prompter-plotter", DEFAULT_VIDEO_FILE);
    sources.map_attachment(
        "prompter-plotter",
        "8c2e9f4a-31d6-4b7e-9a05-ec1f52a80b19",
        "plotting_demo.mp4",
    );
    sources
});

/// Returns the built-in video source table for the cataloged repositories.
pub fn default_sources() -> &'static VideoSources {
    &DEFAULT_SOURCES
}

/// Rewrites image and video sources in rendered README HTML.
///
/// Transforms GitHub user-attachment URLs and repository-relative paths into
/// absolute raw-content URLs on the repository's default branch
/// (`https://raw.githubusercontent.com/<owner>/<repo>/main/...`). Attachment
/// images whose alt text mentions "video" become `<video>` elements backed by
/// the [`VideoSources`] table.
pub struct MediaRewriter {
    owner: String,
    repo: String,
    sources: VideoSources,
}

impl MediaRewriter {
    /// Creates rewriter for a repository using the built-in video sources.
    ///
    /// # Arguments
    ///
    /// * `owner`: GitHub owner the raw-content URLs are qualified with
    /// * `repo`: Repository name
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::with_sources(owner, repo, default_sources().clone())
    }

    /// Creates rewriter with an explicit video source table.
    pub fn with_sources(
        owner: impl Into<String>,
        repo: impl Into<String>,
        sources: VideoSources,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            sources,
        }
    }

    /// Rewrites all media references in an HTML fragment.
    ///
    /// Applies four passes in order:
    /// 1. User-attachment `<img>` tags with "video" in the alt text are
    ///    replaced by `<video>` tags backed by the resolved video file
    /// 2. Remaining user-attachment `<img>` tags point at `assets/<id>`
    ///    on the default branch, where `<id>` is the last path segment
    /// 3. Remaining relative `<img>` sources become absolute raw-content
    ///    URLs; absolute sources are left alone
    /// 4. `<video>` tags are resolved the same way and normalized to
    ///    `controls playsinline class="markdown-video"`
    ///
    /// Unmatched tags pass through unchanged and lookups fall back to
    /// defaults, so rewriting never fails.
    ///
    /// # Arguments
    ///
    /// * `html`: Rendered HTML fragment
    ///
    /// # Returns
    ///
    /// Fragment with media sources resolved to absolute URLs
    pub fn rewrite(&self, html: &str) -> String {
        let html = RE_ATTACHMENT_VIDEO_IMG.replace_all(html, |caps: &Captures| {
            self.video_tag(&self.resolve_attachment(&caps[1]))
        });

        let html = RE_ATTACHMENT_IMG.replace_all(&html, |caps: &Captures| {
            let asset_path = format!("assets/{}", last_segment(&caps[1]));
            caps[0].replacen(&caps[1], &self.raw_url(&asset_path), 1)
        });

        let html = RE_IMG.replace_all(&html, |caps: &Captures| {
            let src = &caps[1];
            if src.starts_with("http") {
                return caps[0].to_string();
            }
            caps[0].replacen(src, &self.resolve_relative(src), 1)
        });

        let html = RE_VIDEO.replace_all(&html, |caps: &Captures| {
            let src = &caps[1];
            if src.starts_with("http") {
                if src.contains(ATTACHMENT_MARKER) {
                    return self.video_tag(&self.resolve_attachment(src));
                }
                return caps[0].to_string();
            }
            self.video_tag(&self.resolve_relative(src))
        });

        html.into_owned()
    }

    /// Resolves a user-attachment URL to the raw-content URL of its video.
    fn resolve_attachment(&self, src: &str) -> String {
        let file = self.sources.resolve(&self.repo, last_segment(src));
        self.raw_url(file)
    }

    /// Resolves a relative source to an absolute raw-content URL.
    ///
    /// Root-relative sources append to the default-branch root; other
    /// relative sources join under it.
    fn resolve_relative(&self, src: &str) -> String {
        if let Some(rooted) = src.strip_prefix('/') {
            self.raw_url(rooted)
        } else {
            self.raw_url(src)
        }
    }

    /// Builds the raw-content URL for a path on the default branch.
    fn raw_url(&self, path: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{}",
            self.owner, self.repo, DEFAULT_BRANCH, path
        )
    }

    /// Builds a normalized video element for a resolved source URL.
    fn video_tag(&self, src: &str) -> String {
        format!(
            r#"<video controls playsinline class="markdown-video" src="{}"></video>"#,
            src
        )
    }
}

/// Returns the last `/`-separated segment of a URL or path.
fn last_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
