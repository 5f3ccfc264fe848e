//! Floating "back to top" control, shown past the scroll threshold.

use dioxus::prelude::*;

use crate::context::use_page_layout;

#[component]
pub fn BackToTop() -> Element {
    let layout = use_page_layout();
    let visible = (layout.snapshot)().back_to_top_visible;

    rsx! {
        a {
            class: if visible { "back-to-top active" } else { "back-to-top" },
            href: "#home",
            "aria-label": "Back to top",
            onclick: move |evt| {
                evt.prevent_default();
                if let Some(node) = layout.section("home") {
                    spawn(async move {
                        if let Err(e) = node.scroll_to(ScrollBehavior::Smooth).await {
                            tracing::debug!("Scroll to top failed: {:?}", e);
                        }
                    });
                }
            },
            "\u{2191}"
        }
    }
}
