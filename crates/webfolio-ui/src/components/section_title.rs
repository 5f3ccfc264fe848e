//! Section heading with accent underline

use dioxus::prelude::*;

#[component]
pub fn SectionTitle(
    /// Heading text
    title: String,
    /// Optional line under the heading
    #[props(default)]
    subtitle: Option<String>,
) -> Element {
    rsx! {
        div { class: "section-title",
            h2 { "{title}" }
            div { class: "underline" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
