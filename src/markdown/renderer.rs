//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::Options;
use std::path::Path;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::{MediaRewriter, VideoSources};

/// Opening of the code tag comrak emits for fenced blocks with a language.
const CODE_OPEN: &str = "<code class=\"language-";
const CODE_CLOSE: &str = "</code>";

/// Renders README markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Provides GFM extensions including tables, strikethrough, autolinks,
/// task lists, footnotes, and description lists, plus dollar-delimited math
/// and slugified heading anchors. Uses syntect for code block syntax
/// highlighting when language is specified. Optionally rewrites media
/// sources to raw-content URLs when configured with MediaRewriter.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
    media_rewriter: Option<MediaRewriter>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures all GFM extensions and rendering behavior:
    /// - Tables, strikethrough, autolinks, task lists, footnotes
    /// - Dollar math spans and heading anchors with slug ids
    /// - Smart punctuation for quotes and dashes
    /// - Raw HTML preserved, READMEs embed their own media tags
    /// - Syntax highlighting with syntect using CSS classes
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        // Math spans for client-side KaTeX, heading ids for anchor links
        options.extension.math_dollars = true;
        options.extension.header_ids = Some(String::new());

        // Parse options (smart punctuation)
        options.parse.smart = true;

        // Render options (raw HTML passes through, content is trusted)
        options.render.unsafe_ = true;

        // Load syntax definitions for highlighting
        let syntax_set = SyntaxSet::load_defaults_newlines();

        Self {
            options,
            syntax_set,
            media_rewriter: None,
        }
    }

    /// Creates renderer with media rewriting for a repository's README.
    ///
    /// Image and video sources in the rendered HTML (user-attachment
    /// uploads, repository-relative paths) are rewritten to absolute
    /// raw-content URLs on the repository's default branch. Uses the
    /// built-in video source table.
    ///
    /// # Arguments
    ///
    /// * `owner`: GitHub owner for raw-content URLs
    /// * `repo`: Repository the README belongs to
    pub fn with_media_rewriter(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        let mut renderer = Self::new();
        renderer.media_rewriter = Some(MediaRewriter::new(owner, repo));
        renderer
    }

    /// Creates renderer with media rewriting and an explicit video table.
    ///
    /// Like [`MarkdownRenderer::with_media_rewriter`] but attachment video
    /// lookups go through the given table instead of the built-in one.
    ///
    /// # Arguments
    ///
    /// * `owner`: GitHub owner for raw-content URLs
    /// * `repo`: Repository the README belongs to
    /// * `sources`: Video source table for attachment lookups
    pub fn with_media_sources(
        owner: impl Into<String>,
        repo: impl Into<String>,
        sources: VideoSources,
    ) -> Self {
        let mut renderer = Self::new();
        renderer.media_rewriter = Some(MediaRewriter::with_sources(owner, repo, sources));
        renderer
    }

    /// Renders markdown content to HTML string.
    ///
    /// Parses markdown and renders to HTML with GFM extensions, rewrites
    /// media sources when a rewriter is configured, then syntax highlights
    /// code blocks with CSS class names.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML as string with syntax highlighted code blocks
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let mut html = comrak::markdown_to_html(content, &self.options);

        // Rewrite media sources if a rewriter is configured
        if let Some(rewriter) = &self.media_rewriter {
            html = rewriter.rewrite(&html);
        }

        // Post-process HTML to add syntax highlighting with CSS classes
        self.highlight_code_blocks(&html)
    }

    /// Replaces the plain text inside `<code class="language-X">` blocks
    /// with syntect highlighted markup. Blocks whose markup cannot be
    /// parsed are passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns error if highlighting a block fails
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut out = String::with_capacity(html.len());
        let mut rest = html;

        while let Some(open) = rest.find(CODE_OPEN) {
            let lang_from = open + CODE_OPEN.len();

            // Language runs to the closing quote, the body from the end of
            // the opening tag to the closing </code>
            let block = rest[lang_from..].find('"').and_then(|quote| {
                let language = &rest[lang_from..lang_from + quote];
                let tag_close = rest[lang_from + quote..].find('>')?;
                let body_from = lang_from + quote + tag_close + 1;
                let body_len = rest[body_from..].find(CODE_CLOSE)?;
                Some((language, body_from, body_len))
            });

            let Some((language, body_from, body_len)) = block else {
                // Truncated block, emit through the marker and keep scanning
                out.push_str(&rest[..lang_from]);
                rest = &rest[lang_from..];
                continue;
            };

            // Comrak escaped the body, decode before handing it to syntect
            let code = decode_entities(&rest[body_from..body_from + body_len]);
            let highlighted = self
                .highlight(&code, language)
                .context("Failed to highlight code block")?;

            out.push_str(&rest[..open]);
            out.push_str(CODE_OPEN);
            out.push_str(language);
            out.push_str("\">");
            out.push_str(&highlighted);
            out.push_str(CODE_CLOSE);

            rest = &rest[body_from + body_len + CODE_CLOSE.len()..];
        }

        out.push_str(rest);
        Ok(out)
    }

    /// Highlights one code block, producing `<span class="hljs-*">` markup.
    ///
    /// The hljs- prefix matches the highlight.js color classes in
    /// markdown.css. Languages syntect does not know fall back to escaped
    /// plain text.
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to parse a line
    fn highlight(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        // Token lookup covers names ("python"), extension covers "py"
        let Some(syntax) = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        else {
            return Ok(escape_code(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }

    /// Renders the markdown file at the given path.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or rendering fails
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read markdown file")?;
        self.render(&content)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes the entities comrak escapes inside code blocks.
///
/// `&amp;` goes last so a literal `&lt;` in the source code comes back out
/// as those four characters rather than a bare `<`.
fn decode_entities(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Escapes code for direct HTML embedding when no syntax definition matched.
fn escape_code(code: &str) -> String {
    let mut escaped = String::with_capacity(code.len());
    for c in code.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
