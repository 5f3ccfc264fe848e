//! Core adapter traits implemented on Dioxus signals.
//!
//! Controllers write through these handles; components read the signals.

use dioxus::prelude::*;
use webfolio_core::{ActiveMarker, ItemStyle, ItemSurface, ModalSurface, ProjectView};

/// `.active` class of one element in a group
#[derive(Clone, Copy)]
pub struct MarkerSignal(pub Signal<bool>);

impl ActiveMarker for MarkerSignal {
    fn set_active(&mut self, active: bool) {
        if *self.0.peek() != active {
            self.0.set(active);
        }
    }
}

/// Inline style of one portfolio item
#[derive(Clone, Copy)]
pub struct StyleSignal(pub Signal<ItemStyle>);

impl ItemSurface for StyleSignal {
    fn set_displayed(&mut self, displayed: bool) {
        self.0.write().set_displayed(displayed);
    }

    fn set_emphasis(&mut self, opacity: f32, scale: f32) {
        self.0.write().set_emphasis(opacity, scale);
    }
}

/// Modal content slot plus the page's scroll lock
#[derive(Clone, Copy)]
pub struct ModalSignals {
    pub view: Signal<Option<ProjectView>>,
    pub scroll_locked: Signal<bool>,
}

impl ModalSurface for ModalSignals {
    fn show(&mut self, view: ProjectView) {
        self.view.set(Some(view));
    }

    fn hide(&mut self) {
        self.view.set(None);
    }

    fn set_background_scroll(&mut self, enabled: bool) {
        self.scroll_locked.set(!enabled);
    }
}

/// One signal per element, created in the current scope
pub fn marker_signals(count: usize) -> Vec<Signal<bool>> {
    (0..count).map(|_| Signal::new(false)).collect()
}
