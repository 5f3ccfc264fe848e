//! Skills section: progress bars that fill once they scroll into view.

use dioxus::prelude::*;
use webfolio_core::Skill;
use webfolio_ui::SectionTitle;

use crate::components::PageSection;
use crate::context::{use_page_layout, use_site, BarNode};
use crate::scroll_sync::sync_scroll;

#[component]
pub fn Skills() -> Element {
    let site = use_site();

    rsx! {
        PageSection { id: "skills".to_string(),
            SectionTitle { title: "My Skills".to_string() }
            div { class: "skills-content",
                for (index, skill) in site.registry.skills.iter().enumerate() {
                    SkillBar { key: "{index}", id: format!("skill-{}", index), skill: skill.clone() }
                }
            }
        }
    }
}

/// One bar. Starts at 0% and is filled by the reveal tracker.
#[component]
fn SkillBar(id: String, skill: Skill) -> Element {
    let site = use_site();
    let layout = use_page_layout();
    let width = use_signal(|| 0u8);

    let percent = skill.percent;
    let on_mounted = move |evt: MountedEvent| {
        let mut bars = layout.bars;
        let mut reveal = layout.reveal;
        reveal.write().observe(id.clone(), percent);
        let mut list = bars.write();
        list.retain(|bar| bar.id != id);
        list.push(BarNode {
            id: id.clone(),
            node: evt.data(),
            width,
        });
        drop(list);
        // Bars already in view fill without waiting for a scroll
        spawn(sync_scroll(layout, site.scheduler.clone()));
    };

    rsx! {
        div { class: "skill",
            div { class: "skill-info",
                span { class: "skill-name", "{skill.name}" }
                span { class: "skill-percent", "{skill.percent}%" }
            }
            div { class: "skill-bar",
                div {
                    class: "skill-progress",
                    "data-width": "{skill.percent}%",
                    style: "width: {width}%;",
                    onmounted: on_mounted,
                }
            }
        }
    }
}
