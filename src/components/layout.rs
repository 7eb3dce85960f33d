//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::footer::footer;

/// KaTeX release pinned for math typesetting.
const KATEX_VERSION: &str = "0.16.11";

/// Typesets the math spans the markdown renderer emits.
const MATH_RENDER_SCRIPT: &str = r#"
document.addEventListener("DOMContentLoaded", function () {
    if (typeof katex === "undefined") return;
    document.querySelectorAll("[data-math-style]").forEach(function (el) {
        katex.render(el.textContent, el, {
            displayMode: el.getAttribute("data-math-style") === "display",
            throwOnError: false,
        });
    });
});
"#;

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// all page types. The wrapper handles viewport configuration, charset,
/// stylesheet loading, and the icon and math runtimes while the caller
/// provides page-specific body content.
///
/// # Arguments
///
/// * `title`: Full page title text
/// * `stylesheets`: Array of CSS file paths to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                link rel="stylesheet"
                    href=(format!("https://cdn.jsdelivr.net/npm/katex@{}/dist/katex.min.css", KATEX_VERSION));
                script defer
                    src=(format!("https://cdn.jsdelivr.net/npm/katex@{}/dist/katex.min.js", KATEX_VERSION)) {}
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="container" {
                    (body)
                }
                (footer())
                script { (PreEscaped(MATH_RENDER_SCRIPT)) }
            }
        }
    }
}
