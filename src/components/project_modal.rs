//! Project detail overlay.
//!
//! Dismissed by the close control, a click on the backdrop, or Escape
//! (handled by the page). Clicks inside the panel never reach the backdrop.

use dioxus::prelude::*;
use webfolio_core::{DismissTrigger, ProjectView};
use webfolio_ui::CloseButton;

use crate::context::use_modal;

#[component]
pub fn ProjectModal(#[props(!optional)] view: Option<ProjectView>) -> Element {
    let modal = use_modal();
    let Some(view) = view else {
        return rsx! {};
    };

    let dismiss = move |trigger: DismissTrigger| {
        modal.borrow_mut().dismiss(trigger);
    };
    let dismiss_backdrop = dismiss.clone();
    let dismiss_close = dismiss;

    rsx! {
        div {
            class: "modal active",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "modal-title",
            onclick: move |_| dismiss_backdrop(DismissTrigger::Backdrop),
            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),
                CloseButton { onclick: move |_| dismiss_close(DismissTrigger::CloseControl) }
                div { class: "modal-body",
                    img { class: "modal-image", src: "{view.image}", alt: "{view.image_alt}" }
                    h2 { id: "modal-title", "{view.title}" }
                    div { class: "project-info",
                        h3 { "Project Info" }
                        ul {
                            for (label, value) in view.info.iter() {
                                li { strong { "{label}: " } "{value}" }
                            }
                        }
                    }
                    div { class: "project-description",
                        h3 { "Description" }
                        div { dangerous_inner_html: "{view.description_html}" }
                    }
                    div { class: "project-technologies",
                        h3 { "Technologies" }
                        div { class: "tech-tags",
                            for tech in view.technologies.iter() {
                                span { class: "tech-tag", "{tech}" }
                            }
                        }
                    }
                    a {
                        class: "btn btn-primary",
                        href: "{view.link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        onmounted: move |evt: MountedEvent| async move {
                            let _ = evt.set_focus(true).await;
                        },
                        "{view.link_label}"
                    }
                }
            }
        }
    }
}
