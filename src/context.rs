//! Context providers for the portfolio page.
//!
//! [`SiteContext`] is created once by `App` and shared with every section.
//! [`PageLayout`] belongs to the page and collects the mounted nodes that
//! scroll effects measure.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let site = use_site();
//! let layout = use_page_layout();
//! ```

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use dioxus::prelude::*;
use webfolio_core::{ContentRegistry, ModalController, RevealTracker, ScrollSnapshot, SiteConfig};

use crate::bindings::ModalSignals;
use crate::scheduler::RuntimeScheduler;

/// Get the launch settings.
pub fn get_settings() -> crate::AppSettings {
    crate::get_settings()
}

/// Read-only site data and the shared scheduler.
#[derive(Clone)]
pub struct SiteContext {
    pub config: Rc<SiteConfig>,
    pub registry: Rc<ContentRegistry>,
    pub scheduler: Rc<RuntimeScheduler>,
    pub assets_dir: PathBuf,
    pub downloads_dir: PathBuf,
}

impl SiteContext {
    pub fn from_settings(settings: crate::AppSettings) -> Self {
        Self {
            config: Rc::new(settings.config),
            registry: Rc::new(ContentRegistry::builtin()),
            scheduler: Rc::new(RuntimeScheduler::default()),
            assets_dir: settings.assets_dir,
            downloads_dir: settings.downloads_dir,
        }
    }
}

/// Hook to access the site context.
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}

/// A mounted `section[id]`
#[derive(Clone)]
pub struct SectionNode {
    pub id: String,
    pub node: Rc<MountedData>,
}

/// A mounted skill bar and the signal holding its fill
#[derive(Clone)]
pub struct BarNode {
    pub id: String,
    pub node: Rc<MountedData>,
    pub width: Signal<u8>,
}

/// Geometry and scroll-derived state of the page.
#[derive(Clone, Copy)]
pub struct PageLayout {
    /// The scrolling page container
    pub page: Signal<Option<Rc<MountedData>>>,
    pub sections: Signal<Vec<SectionNode>>,
    pub bars: Signal<Vec<BarNode>>,
    pub reveal: Signal<RevealTracker>,
    pub snapshot: Signal<ScrollSnapshot>,
    /// Set while the project modal is open
    pub scroll_locked: Signal<bool>,
}

impl PageLayout {
    /// Mounted node of a section, for smooth scrolling to it
    pub fn section(&self, id: &str) -> Option<Rc<MountedData>> {
        self.sections
            .peek()
            .iter()
            .find(|s| s.id == id)
            .map(|s| Rc::clone(&s.node))
    }
}

/// Create the page layout signals and provide them to children.
pub fn use_page_layout_provider() -> PageLayout {
    let page = use_signal(|| None);
    let sections = use_signal(Vec::new);
    let bars = use_signal(Vec::new);
    let reveal = use_signal(RevealTracker::new);
    let snapshot = use_signal(ScrollSnapshot::default);
    let scroll_locked = use_signal(|| false);

    use_context_provider(|| PageLayout {
        page,
        sections,
        bars,
        reveal,
        snapshot,
        scroll_locked,
    })
}

/// Hook to access the page layout.
pub fn use_page_layout() -> PageLayout {
    use_context::<PageLayout>()
}

/// The page's project modal controller.
pub type SharedModal = Rc<RefCell<ModalController<ModalSignals>>>;

/// Hook to access the project modal.
pub fn use_modal() -> SharedModal {
    use_context::<SharedModal>()
}
