//! A `section[id]` that registers itself for scroll tracking.

use dioxus::prelude::*;

use crate::context::{use_page_layout, SectionNode};

#[component]
pub fn PageSection(
    /// Section id, the target of `#id` nav links
    id: String,
    /// Extra classes on the section element
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let layout = use_page_layout();
    let section_id = id.clone();
    let full_class = webfolio_ui::with_extra_class("section", class.as_deref());

    rsx! {
        section {
            id: "{id}",
            class: "{full_class}",
            onmounted: move |evt: MountedEvent| {
                let mut sections = layout.sections;
                let mut list = sections.write();
                list.retain(|s| s.id != section_id);
                list.push(SectionNode { id: section_id.clone(), node: evt.data() });
            },
            {children}
        }
    }
}
