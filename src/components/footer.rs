//! Site footer component

use maud::{Markup, html};

/// Renders the shared site footer
///
/// Shows a generator credit linking back to the Foliodoc repository.
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            span { "Built with " }
            a href="https://github.com/yuvalm11/foliodoc" class="footer-link" { "foliodoc" }
        }
    }
}
