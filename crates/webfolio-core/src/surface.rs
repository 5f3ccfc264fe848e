//! Handles to page regions.
//!
//! Controllers never look elements up. The page hands them implementations
//! of these traits at construction time, so the same controller drives Dioxus
//! signals in the app and in-memory fakes in tests.

use crate::render::ProjectView;

/// One member of a mutually exclusive group (entry, dot, filter button, link)
pub trait ActiveMarker {
    fn set_active(&mut self, active: bool);
}

/// Layout and appearance of a single portfolio item
pub trait ItemSurface {
    /// Whether the item takes part in layout at all (`display`)
    fn set_displayed(&mut self, displayed: bool);

    /// Opacity and scale of a displayed item
    fn set_emphasis(&mut self, opacity: f32, scale: f32);
}

/// The project detail overlay and the page behind it
pub trait ModalSurface {
    fn show(&mut self, view: ProjectView);
    fn hide(&mut self);
    fn set_background_scroll(&mut self, enabled: bool);
}

/// Snapshot of an item's visual state, rendered to inline CSS by the page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemStyle {
    pub displayed: bool,
    pub opacity: f32,
    pub scale: f32,
}

impl ItemStyle {
    pub const SHOWN: ItemStyle = ItemStyle {
        displayed: true,
        opacity: 1.0,
        scale: 1.0,
    };

    pub const FADED_SCALE: f32 = 0.8;

    /// Inline style for the item's container
    pub fn css(&self) -> String {
        format!(
            "display: {}; opacity: {}; transform: scale({});",
            if self.displayed { "block" } else { "none" },
            self.opacity,
            self.scale
        )
    }
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self::SHOWN
    }
}

impl ItemSurface for ItemStyle {
    fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }

    fn set_emphasis(&mut self, opacity: f32, scale: f32) {
        self.opacity = opacity;
        self.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_style_css() {
        assert_eq!(
            ItemStyle::SHOWN.css(),
            "display: block; opacity: 1; transform: scale(1);"
        );
    }

    #[test]
    fn faded_hidden_style_css() {
        let mut style = ItemStyle::default();
        style.set_emphasis(0.0, ItemStyle::FADED_SCALE);
        style.set_displayed(false);
        assert_eq!(style.css(), "display: none; opacity: 0; transform: scale(0.8);");
    }
}
