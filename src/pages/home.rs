//! The portfolio page.
//!
//! Owns the page layout signals and the project modal, and lays out every
//! section inside one scrolling container.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use webfolio_core::{DismissTrigger, ModalController, ProjectView};

use crate::bindings::ModalSignals;
use crate::components::{
    About, BackToTop, Contact, Hero, NavHeader, Portfolio, ProjectModal, Skills, Testimonials,
};
use crate::context::{use_page_layout_provider, use_site, SharedModal};
use crate::scroll_sync::sync_scroll;

/// Portfolio page with the modal open on `id`
#[component]
pub fn ProjectPage(id: String) -> Element {
    rsx! {
        Home { initial_project: id }
    }
}

/// Portfolio page
#[component]
pub fn Home(#[props(default)] initial_project: Option<String>) -> Element {
    let site = use_site();
    let layout = use_page_layout_provider();
    let modal_view: Signal<Option<ProjectView>> = use_signal(|| None);

    let modal: SharedModal = use_hook(|| {
        Rc::new(RefCell::new(ModalController::new(
            Rc::clone(&site.registry),
            ModalSignals {
                view: modal_view,
                scroll_locked: layout.scroll_locked,
            },
        )))
    });
    use_context_provider(|| Rc::clone(&modal));

    // Deep link: open the requested project once mounted
    let deep_link_modal = Rc::clone(&modal);
    use_effect(move || {
        if let Some(id) = &initial_project {
            deep_link_modal.borrow_mut().open(id);
        }
    });

    let scheduler = Rc::clone(&site.scheduler);
    let on_scroll = move |_| {
        spawn(sync_scroll(layout, Rc::clone(&scheduler)));
    };

    let mount_scheduler = Rc::clone(&site.scheduler);
    let on_mounted = move |evt: MountedEvent| {
        let mut page = layout.page;
        page.set(Some(evt.data()));
        spawn(sync_scroll(layout, Rc::clone(&mount_scheduler)));
    };

    let key_modal = Rc::clone(&modal);
    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            key_modal.borrow_mut().dismiss(DismissTrigger::CancelKey);
        }
    };

    let page_class = if (layout.scroll_locked)() { "page no-scroll" } else { "page" };
    let owner = site.config.owner.name.clone();

    rsx! {
        div {
            class: "{page_class}",
            tabindex: "0",
            onscroll: on_scroll,
            onmounted: on_mounted,
            onkeydown: on_keydown,

            NavHeader {}
            Hero {}
            About {}
            Skills {}
            Portfolio {}
            Testimonials {}
            Contact {}

            footer { class: "footer",
                p { "\u{00A9} {owner}. All rights reserved." }
            }

            BackToTop {}
            ProjectModal { view: modal_view() }
        }
    }
}
