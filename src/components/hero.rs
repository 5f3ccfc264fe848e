//! Hero section: greeting, rotating titles and the two calls to action.

use dioxus::prelude::*;
use webfolio_core::Typewriter;
use webfolio_ui::{Button, ButtonVariant};

use crate::components::PageSection;
use crate::context::{use_page_layout, use_site};

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let layout = use_page_layout();
    let mut typed = use_signal(String::new);

    let hero = site.config.hero.clone();
    use_future(move || {
        let hero = hero.clone();
        async move {
            let mut typewriter = match Typewriter::new(&hero.titles, hero.typing.clone()) {
                Ok(t) => t,
                Err(e) => {
                    tracing::debug!("Typing effect disabled: {}", e);
                    return;
                }
            };
            while let Some(wait) = typewriter.step() {
                typed.set(typewriter.text());
                tokio::time::sleep(wait).await;
            }
            typed.set(typewriter.text());
        }
    });

    let scroll_to = move |id: &'static str| {
        if let Some(node) = layout.section(id) {
            spawn(async move {
                if let Err(e) = node.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!("Scroll to {} failed: {:?}", id, e);
                }
            });
        }
    };

    rsx! {
        PageSection { id: "home".to_string(), class: "hero".to_string(),
            div { class: "hero-content",
                p { class: "hero-greeting", "Hello, I'm" }
                h1 { class: "hero-name", "{site.config.owner.name}" }
                h2 { class: "hero-title",
                    span { class: "typing", "{typed}" }
                    span { class: "typing-cursor", "|" }
                }
                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| scroll_to("contact"),
                        "Hire Me"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| scroll_to("portfolio"),
                        "View My Work"
                    }
                }
            }
        }
    }
}
