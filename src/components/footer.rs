//! Page footer component

use maud::{Markup, html};

/// Renders the standard generator attribution footer
pub fn footer() -> Markup {
    html! {
        footer {
            p {
                "Generated by "
                a href="https://github.com/chaletmiage/chantier" target="_blank" { "Chantier" }
            }
        }
    }
}
