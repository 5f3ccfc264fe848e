//! Testimonial carousel with dots, prev/next controls and autoplay that
//! pauses while the pointer is over it.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use webfolio_core::{CarouselController, Scheduler};
use webfolio_ui::{IconButton, SectionTitle};

use crate::bindings::{marker_signals, MarkerSignal};
use crate::components::PageSection;
use crate::context::use_site;

type SharedCarousel = Rc<RefCell<Option<CarouselController<MarkerSignal>>>>;

#[component]
pub fn Testimonials() -> Element {
    let site = use_site();
    let count = site.registry.testimonials.len();

    let entries = use_hook(|| marker_signals(count));
    let dots = use_hook(|| marker_signals(count));

    let carousel: SharedCarousel = use_hook(|| {
        let scheduler: Rc<dyn Scheduler> = site.scheduler.clone();
        let controller = CarouselController::init(
            entries.iter().copied().map(MarkerSignal).collect(),
            dots.iter().copied().map(MarkerSignal).collect(),
            scheduler,
            site.config.carousel.interval(),
        );
        match controller {
            Ok(controller) => Rc::new(RefCell::new(Some(controller))),
            Err(e) => {
                tracing::debug!("Testimonial carousel not installed: {}", e);
                Rc::new(RefCell::new(None))
            }
        }
    });

    use_drop({
        let carousel = carousel.clone();
        move || {
            if let Some(carousel) = carousel.borrow_mut().as_mut() {
                carousel.dispose();
            }
        }
    });

    let on_prev = carousel.clone();
    let on_next = carousel.clone();
    let on_enter = carousel.clone();
    let on_leave = carousel.clone();

    rsx! {
        PageSection { id: "testimonials".to_string(),
            SectionTitle { title: "Testimonials".to_string() }
            div {
                class: "testimonial-slider",
                onmouseenter: move |_| drive(&on_enter, |c| c.pointer_enter()),
                onmouseleave: move |_| drive(&on_leave, |c| c.pointer_leave()),

                for (index, testimonial) in site.registry.testimonials.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if *entries[index].read() { "testimonial-item active" } else { "testimonial-item" },
                        div { class: "testimonial-content",
                            p { class: "testimonial-text", "\u{201C}{testimonial.quote}\u{201D}" }
                        }
                        div { class: "testimonial-author",
                            h4 { "{testimonial.author}" }
                            p { "{testimonial.role}" }
                        }
                    }
                }

                div { class: "testimonial-controls",
                    IconButton {
                        class: "testimonial-prev".to_string(),
                        aria_label: "Previous testimonial".to_string(),
                        onclick: move |_| drive(&on_prev, |c| c.prev()),
                        "\u{2039}"
                    }
                    div { class: "testimonial-dots",
                        for index in 0..count {
                            {
                                let on_dot = carousel.clone();
                                let label = format!("Show testimonial {}", index + 1);
                                rsx! {
                                    span {
                                        key: "{index}",
                                        class: if *dots[index].read() { "dot active" } else { "dot" },
                                        role: "button",
                                        "aria-label": "{label}",
                                        onclick: move |_| drive(&on_dot, |c| {
                                            if let Err(e) = c.jump(index) {
                                                tracing::warn!("Testimonial jump ignored: {}", e);
                                            }
                                        }),
                                    }
                                }
                            }
                        }
                    }
                    IconButton {
                        class: "testimonial-next".to_string(),
                        aria_label: "Next testimonial".to_string(),
                        onclick: move |_| drive(&on_next, |c| c.next()),
                        "\u{203A}"
                    }
                }
            }
        }
    }
}

/// Run `action` against the controller, if one was installed
fn drive(carousel: &SharedCarousel, action: impl FnOnce(&mut CarouselController<MarkerSignal>)) {
    if let Some(controller) = carousel.borrow_mut().as_mut() {
        action(controller);
    }
}
