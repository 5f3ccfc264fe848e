//! About section with the owner's contact details.

use dioxus::prelude::*;
use webfolio_ui::SectionTitle;

use crate::components::{CvDownloadButton, PageSection};
use crate::context::use_site;

#[component]
pub fn About() -> Element {
    let site = use_site();
    let owner = &site.config.owner;

    rsx! {
        PageSection { id: "about".to_string(),
            SectionTitle { title: "About Me".to_string() }
            div { class: "about-content",
                div { class: "about-image",
                    img { src: "assets/profile.jpg", alt: "{owner.name}" }
                }
                div { class: "about-text",
                    h3 { "{owner.headline}" }
                    p {
                        "I build fast, accessible websites and applications, and care about "
                        "the details that make an interface feel effortless."
                    }
                    ul { class: "about-details",
                        li { strong { "Name: " } "{owner.name}" }
                        li { strong { "Email: " } "{owner.email}" }
                        li { strong { "Phone: " } "{owner.phone}" }
                        li { strong { "Location: " } "{owner.location}" }
                    }
                    CvDownloadButton {}
                }
            }
        }
    }
}
