//! Measures the page and feeds the scroll effects.
//!
//! Runs on every scroll event of the page container and whenever a skill bar
//! mounts. Section offsets are converted to document coordinates by adding
//! the container's scroll offset to each section's viewport-relative top.

use std::rc::Rc;

use dioxus::prelude::*;
use webfolio_core::nav::linked_sections;
use webfolio_core::scroll::{intersection_ratio, REVEAL_DELAY};
use webfolio_core::{Scheduler, ScrollEffects, SectionBounds};

use crate::context::PageLayout;
use crate::scheduler::RuntimeScheduler;

pub async fn sync_scroll(layout: PageLayout, scheduler: Rc<RuntimeScheduler>) {
    let Some(page) = layout.page.peek().clone() else {
        return;
    };
    let (Ok(offset), Ok(viewport)) = (page.get_scroll_offset().await, page.get_client_rect().await)
    else {
        tracing::debug!("Page geometry unavailable, skipping scroll sync");
        return;
    };
    let scroll_y = offset.y;
    let view_top = viewport.origin.y;

    let sections = layout.sections.peek().clone();
    let mut bounds = Vec::with_capacity(sections.len());
    for section in sections {
        if let Ok(rect) = section.node.get_client_rect().await {
            bounds.push(SectionBounds::new(
                section.id,
                rect.origin.y - view_top + scroll_y,
                rect.size.height,
            ));
        }
    }

    let snapshot = ScrollEffects::new(linked_sections()).evaluate(scroll_y, &bounds);
    let mut snapshot_signal = layout.snapshot;
    if *snapshot_signal.peek() != snapshot {
        snapshot_signal.set(snapshot);
    }

    let bars = layout.bars.peek().clone();
    let mut reveal = layout.reveal;
    for bar in bars {
        if !reveal.peek().is_observing(&bar.id) {
            continue;
        }
        let Ok(rect) = bar.node.get_client_rect().await else {
            continue;
        };
        let ratio = intersection_ratio(
            rect.origin.y,
            rect.size.height,
            view_top,
            viewport.size.height,
        );
        if let Some(percent) = reveal.write().on_intersection(&bar.id, ratio) {
            let mut width = bar.width;
            scheduler.schedule_once(REVEAL_DELAY, Box::new(move || width.set(percent)));
        }
    }
}
