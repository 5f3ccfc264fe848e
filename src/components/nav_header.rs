//! Navigation Header Component
//!
//! Fixed header with the owner's name, section links and the mobile
//! hamburger. Gains a shadow once the page is scrolled, and highlights the
//! link of the section under the probe line.

use dioxus::prelude::*;
use webfolio_core::nav::{NavLink, NAV_LINKS};
use webfolio_core::NavMenu;

use crate::context::{use_page_layout, use_site};
use crate::theme::colors::{HEADER_BACKGROUND, HEADER_SHADOW};

/// Navigation Header component
#[component]
pub fn NavHeader() -> Element {
    let site = use_site();
    let layout = use_page_layout();
    let mut menu = use_signal(NavMenu::default);

    let snapshot = (layout.snapshot)();
    let shadow = if snapshot.header_elevated { HEADER_SHADOW } else { "none" };
    let header_style = format!("box-shadow: {}; background-color: {};", shadow, HEADER_BACKGROUND);
    let open = menu().is_open();
    let active_section = snapshot.active_section.clone();

    let mut go_to = move |link: &NavLink| {
        menu.write().close();
        if let Some(node) = layout.section(link.section_id) {
            spawn(async move {
                if let Err(e) = node.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!("Scroll to section failed: {:?}", e);
                }
            });
        }
    };

    rsx! {
        header { id: "header", class: "header", style: "{header_style}",
            nav { class: "navbar",
                a { class: "logo", href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        go_to(&NAV_LINKS[0]);
                    },
                    "{site.config.owner.name}"
                }

                ul { class: if open { "nav-links active" } else { "nav-links" },
                    for link in NAV_LINKS.iter() {
                        li {
                            a {
                                href: "{link.href()}",
                                class: if active_section.as_deref() == Some(link.section_id) { "active" } else { "" },
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    go_to(link);
                                },
                                "{link.label}"
                            }
                        }
                    }
                }

                button {
                    class: if open { "hamburger active" } else { "hamburger" },
                    "aria-label": "Toggle navigation",
                    "aria-expanded": if open { "true" } else { "false" },
                    onclick: move |_| menu.write().toggle(),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}
