//! Portfolio Gallery Component
//!
//! Filterable grid of project cards. Fade and collapse timings come from the
//! site config; each card's inline style is written by the filter
//! controller through a [`StyleSignal`].

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use webfolio_core::{FilterController, ItemStyle, Scheduler};
use webfolio_ui::{filter_choices, FilterOption, FilterPills, SectionTitle};

use crate::bindings::{marker_signals, MarkerSignal, StyleSignal};
use crate::components::PageSection;
use crate::context::{use_modal, use_site};

type SharedFilter = Rc<RefCell<Option<FilterController<MarkerSignal, StyleSignal>>>>;

#[component]
pub fn Portfolio() -> Element {
    let site = use_site();
    let modal = use_modal();

    let choices = use_hook(|| filter_choices(&site.registry.categories()));
    let markers = use_hook(|| marker_signals(choices.len()));
    let styles = use_hook(|| {
        (0..site.registry.projects.len())
            .map(|_| Signal::new(ItemStyle::default()))
            .collect::<Vec<_>>()
    });

    let controller: SharedFilter = use_hook(|| {
        let controls = choices
            .iter()
            .zip(&markers)
            .map(|((tag, _), marker)| (tag.clone(), MarkerSignal(*marker)))
            .collect();
        let items = site
            .registry
            .projects
            .iter()
            .zip(&styles)
            .map(|(project, style)| (project.filter_tag(), StyleSignal(*style)))
            .collect();
        let scheduler: Rc<dyn Scheduler> = site.scheduler.clone();

        match FilterController::init(controls, items, scheduler, site.config.filter) {
            Ok(controller) => Rc::new(RefCell::new(Some(controller))),
            Err(e) => {
                tracing::debug!("Portfolio filter not installed: {}", e);
                Rc::new(RefCell::new(None))
            }
        }
    });

    use_drop({
        let controller = controller.clone();
        move || {
            if let Some(controller) = controller.borrow_mut().as_mut() {
                controller.dispose();
            }
        }
    });

    let options: Vec<FilterOption> = choices
        .iter()
        .zip(&markers)
        .map(|((tag, label), marker)| FilterOption {
            tag: tag.as_str().to_string(),
            label: label.clone(),
            active: *marker.read(),
        })
        .collect();

    let on_select = {
        let controller = controller.clone();
        move |tag: String| {
            if let Some(controller) = controller.borrow_mut().as_mut() {
                if let Err(e) = controller.apply_filter(&tag) {
                    tracing::warn!("Filter ignored: {}", e);
                }
            }
        }
    };

    rsx! {
        PageSection { id: "portfolio".to_string(),
            SectionTitle {
                title: "My Portfolio".to_string(),
                subtitle: "A selection of recent work".to_string(),
            }
            FilterPills { options, on_select }
            div { class: "portfolio-grid",
                for (project, style) in site.registry.projects.iter().zip(&styles) {
                    {
                        let modal = modal.clone();
                        let project_id = project.id.clone();
                        let category = project.filter_tag();
                        let css = style.read().css();
                        rsx! {
                            div {
                                key: "{project.id}",
                                class: "portfolio-item",
                                "data-category": "{category}",
                                style: "{css}",
                                div { class: "portfolio-img",
                                    img { src: "{project.image}", alt: "{project.title}" }
                                    div { class: "portfolio-overlay",
                                        div { class: "portfolio-info",
                                            h3 { "{project.title}" }
                                            p { "{project.category}" }
                                            a {
                                                class: "portfolio-link",
                                                href: "#",
                                                "data-project": "{project.id}",
                                                onclick: move |evt| {
                                                    evt.prevent_default();
                                                    modal.borrow_mut().open(&project_id);
                                                },
                                                "View Details"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
