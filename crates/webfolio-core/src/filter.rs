//! Portfolio category filter.
//!
//! Selecting a tag marks its filter control active and moves every item
//! towards Visible or Hidden through a two-phase transition:
//!
//! ```text
//! show: display:block now   -> reveal_delay -> opacity 1, scale 1   (FadingIn  -> Visible)
//! hide: opacity 0, scale .8 -> hide_delay   -> display:none         (FadingOut -> Hidden)
//! ```
//!
//! Each item owns at most one pending delayed phase. A new target cancels
//! the stale phase first, so rapid filter changes cannot leave an item
//! half-shown.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::config::FilterTiming;
use crate::error::{CoreError, CoreResult};
use crate::schedule::{Scheduler, TaskHandle};
use crate::surface::{ActiveMarker, ItemStyle, ItemSurface};

/// Sentinel tag that matches every item
pub const ALL_TAG: &str = "all";

/// A selectable filter
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterTag {
    All,
    Category(String),
}

impl FilterTag {
    pub fn parse(tag: &str) -> Self {
        if tag == ALL_TAG {
            FilterTag::All
        } else {
            FilterTag::Category(tag.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterTag::All => ALL_TAG,
            FilterTag::Category(tag) => tag,
        }
    }

    /// Whether an item in `category` is shown under this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            FilterTag::All => true,
            FilterTag::Category(tag) => tag == category,
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an item is in its show/hide transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityPhase {
    Visible,
    FadingOut,
    Hidden,
    FadingIn,
}

impl VisibilityPhase {
    /// The phase this one settles into once its pending step fires
    pub fn destination(self) -> VisibilityPhase {
        match self {
            VisibilityPhase::Visible | VisibilityPhase::FadingIn => VisibilityPhase::Visible,
            VisibilityPhase::Hidden | VisibilityPhase::FadingOut => VisibilityPhase::Hidden,
        }
    }
}

struct FilterControl<C> {
    tag: FilterTag,
    marker: C,
}

struct FilterItem<S> {
    category: String,
    surface: S,
    phase: Rc<Cell<VisibilityPhase>>,
    pending: Option<TaskHandle>,
}

/// Owns the filter controls, the portfolio items and their transitions
pub struct FilterController<C, S>
where
    C: ActiveMarker,
    S: ItemSurface + Clone + 'static,
{
    controls: Vec<FilterControl<C>>,
    items: Vec<FilterItem<S>>,
    selected: FilterTag,
    scheduler: Rc<dyn Scheduler>,
    timing: FilterTiming,
}

impl<C, S> FilterController<C, S>
where
    C: ActiveMarker,
    S: ItemSurface + Clone + 'static,
{
    /// Wire filter controls `(tag, marker)` and items `(category, surface)`.
    ///
    /// The first control starts active and every item starts Visible. Fails
    /// with `MissingElement` if either group is empty.
    pub fn init(
        controls: Vec<(FilterTag, C)>,
        items: Vec<(String, S)>,
        scheduler: Rc<dyn Scheduler>,
        timing: FilterTiming,
    ) -> CoreResult<Self> {
        if controls.is_empty() {
            return Err(CoreError::MissingElement("filter controls".to_string()));
        }
        if items.is_empty() {
            return Err(CoreError::MissingElement("portfolio items".to_string()));
        }

        let mut controls: Vec<FilterControl<C>> = controls
            .into_iter()
            .map(|(tag, marker)| FilterControl { tag, marker })
            .collect();
        let selected = controls[0].tag.clone();
        for (i, control) in controls.iter_mut().enumerate() {
            control.marker.set_active(i == 0);
        }

        let items = items
            .into_iter()
            .map(|(category, mut surface)| {
                surface.set_displayed(true);
                surface.set_emphasis(ItemStyle::SHOWN.opacity, ItemStyle::SHOWN.scale);
                FilterItem {
                    category,
                    surface,
                    phase: Rc::new(Cell::new(VisibilityPhase::Visible)),
                    pending: None,
                }
            })
            .collect();

        let mut controller = Self {
            controls,
            items,
            selected: FilterTag::All,
            scheduler,
            timing,
        };
        if selected != FilterTag::All {
            controller.apply(selected);
        }
        Ok(controller)
    }

    pub fn selected(&self) -> &FilterTag {
        &self.selected
    }

    /// Current phase of every item, in item order
    pub fn phases(&self) -> Vec<VisibilityPhase> {
        self.items.iter().map(|item| item.phase.get()).collect()
    }

    /// Select `tag` and start the matching transitions.
    ///
    /// Fails with `UnknownFilter`, changing nothing, when no control carries
    /// the tag.
    pub fn apply_filter(&mut self, tag: &str) -> CoreResult<()> {
        let tag = FilterTag::parse(tag);
        if !self.controls.iter().any(|c| c.tag == tag) {
            return Err(CoreError::UnknownFilter(tag.to_string()));
        }
        self.apply(tag);
        Ok(())
    }

    /// Cancel every pending transition
    pub fn dispose(&mut self) {
        for item in &mut self.items {
            if let Some(handle) = item.pending.take() {
                self.scheduler.cancel(handle);
            }
        }
    }

    fn apply(&mut self, tag: FilterTag) {
        for control in &mut self.controls {
            control.marker.set_active(control.tag == tag);
        }

        let mut shown = 0usize;
        for i in 0..self.items.len() {
            if tag.matches(&self.items[i].category) {
                shown += 1;
                self.reveal(i);
            } else {
                self.conceal(i);
            }
        }

        tracing::info!(filter = %tag, shown, total = self.items.len(), "Portfolio filter applied");
        self.selected = tag;
    }

    fn reveal(&mut self, index: usize) {
        let delay = self.timing.reveal_delay();
        let scheduler = Rc::clone(&self.scheduler);
        let item = &mut self.items[index];
        if item.phase.get().destination() == VisibilityPhase::Visible {
            return;
        }
        if let Some(stale) = item.pending.take() {
            scheduler.cancel(stale);
        }

        item.surface.set_displayed(true);
        item.phase.set(VisibilityPhase::FadingIn);

        let mut surface = item.surface.clone();
        let phase = Rc::clone(&item.phase);
        let handle = scheduler.schedule_once(
            delay,
            Box::new(move || {
                surface.set_emphasis(ItemStyle::SHOWN.opacity, ItemStyle::SHOWN.scale);
                phase.set(VisibilityPhase::Visible);
            }),
        );
        item.pending = Some(handle);
    }

    fn conceal(&mut self, index: usize) {
        let delay = self.timing.hide_delay();
        let scheduler = Rc::clone(&self.scheduler);
        let item = &mut self.items[index];
        if item.phase.get().destination() == VisibilityPhase::Hidden {
            return;
        }
        if let Some(stale) = item.pending.take() {
            scheduler.cancel(stale);
        }

        item.surface.set_emphasis(0.0, ItemStyle::FADED_SCALE);
        item.phase.set(VisibilityPhase::FadingOut);

        let mut surface = item.surface.clone();
        let phase = Rc::clone(&item.phase);
        let handle = scheduler.schedule_once(
            delay,
            Box::new(move || {
                surface.set_displayed(false);
                phase.set(VisibilityPhase::Hidden);
            }),
        );
        item.pending = Some(handle);
    }
}

impl<C, S> Drop for FilterController<C, S>
where
    C: ActiveMarker,
    S: ItemSurface + Clone + 'static,
{
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;
    use std::cell::RefCell;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct Flag(Rc<RefCell<bool>>);

    impl ActiveMarker for Flag {
        fn set_active(&mut self, active: bool) {
            *self.0.borrow_mut() = active;
        }
    }

    #[derive(Clone, Default)]
    struct Surface(Rc<RefCell<ItemStyle>>);

    impl ItemSurface for Surface {
        fn set_displayed(&mut self, displayed: bool) {
            self.0.borrow_mut().set_displayed(displayed);
        }

        fn set_emphasis(&mut self, opacity: f32, scale: f32) {
            self.0.borrow_mut().set_emphasis(opacity, scale);
        }
    }

    struct Fixture {
        scheduler: Rc<ManualScheduler>,
        controls: Vec<Flag>,
        surfaces: Vec<Surface>,
        controller: FilterController<Flag, Surface>,
    }

    fn fixture() -> Fixture {
        let scheduler = Rc::new(ManualScheduler::new());
        let tags = ["all", "web", "app", "design"];
        let categories = ["web", "app", "design", "web"];
        let controls: Vec<Flag> = tags.iter().map(|_| Flag::default()).collect();
        let surfaces: Vec<Surface> = categories.iter().map(|_| Surface::default()).collect();

        let controller = FilterController::init(
            tags.iter()
                .zip(controls.iter())
                .map(|(t, f)| (FilterTag::parse(t), f.clone()))
                .collect(),
            categories
                .iter()
                .zip(surfaces.iter())
                .map(|(c, s)| (c.to_string(), s.clone()))
                .collect(),
            scheduler.clone(),
            FilterTiming::default(),
        )
        .unwrap();

        Fixture {
            scheduler,
            controls,
            surfaces,
            controller,
        }
    }

    fn active_controls(flags: &[Flag]) -> Vec<usize> {
        flags
            .iter()
            .enumerate()
            .filter(|(_, f)| *f.0.borrow())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn starts_with_all_selected_and_everything_visible() {
        let f = fixture();
        assert_eq!(f.controller.selected(), &FilterTag::All);
        assert_eq!(active_controls(&f.controls), vec![0]);
        assert!(f.controller.phases().iter().all(|p| *p == VisibilityPhase::Visible));
    }

    #[test]
    fn hide_fades_before_removing_from_layout() {
        let mut f = fixture();
        f.controller.apply_filter("web").unwrap();

        let app = f.surfaces[1].0.borrow().clone();
        assert!(app.displayed);
        assert_eq!(app.opacity, 0.0);
        assert_eq!(app.scale, ItemStyle::FADED_SCALE);
        assert_eq!(f.controller.phases()[1], VisibilityPhase::FadingOut);

        f.scheduler.advance(Duration::from_millis(300));
        assert!(!f.surfaces[1].0.borrow().displayed);
        assert_eq!(
            f.controller.phases(),
            vec![
                VisibilityPhase::Visible,
                VisibilityPhase::Hidden,
                VisibilityPhase::Hidden,
                VisibilityPhase::Visible,
            ]
        );
    }

    #[test]
    fn show_displays_before_fading_in() {
        let mut f = fixture();
        f.controller.apply_filter("design").unwrap();
        f.scheduler.advance(Duration::from_millis(300));

        f.controller.apply_filter("web").unwrap();
        let web = f.surfaces[0].0.borrow().clone();
        assert!(web.displayed);
        assert_eq!(web.opacity, 0.0);
        assert_eq!(f.controller.phases()[0], VisibilityPhase::FadingIn);

        f.scheduler.advance(Duration::from_millis(200));
        assert_eq!(*f.surfaces[0].0.borrow(), ItemStyle::SHOWN);
        assert_eq!(f.controller.phases()[0], VisibilityPhase::Visible);
    }

    #[test]
    fn exactly_one_control_active_after_each_filter() {
        let mut f = fixture();
        for (i, tag) in ["web", "app", "design", "all"].iter().enumerate() {
            f.controller.apply_filter(tag).unwrap();
            let expected = (i + 1) % 4;
            assert_eq!(active_controls(&f.controls), vec![expected]);
        }
    }

    #[test]
    fn unknown_filter_changes_nothing() {
        let mut f = fixture();
        f.controller.apply_filter("app").unwrap();
        let err = f.controller.apply_filter("games").unwrap_err();
        assert!(matches!(err, CoreError::UnknownFilter(ref t) if t == "games"));
        assert_eq!(f.controller.selected(), &FilterTag::parse("app"));
        assert_eq!(active_controls(&f.controls), vec![2]);
    }

    #[test]
    fn superseding_hide_cancels_stale_reveal() {
        let mut f = fixture();
        f.controller.apply_filter("app").unwrap();
        f.scheduler.advance(Duration::from_millis(300));

        // Web item starts fading in, then is hidden again before the fade fires
        f.controller.apply_filter("web").unwrap();
        f.scheduler.advance(Duration::from_millis(100));
        f.controller.apply_filter("app").unwrap();
        f.scheduler.advance(Duration::from_millis(1000));

        let web = f.surfaces[0].0.borrow().clone();
        assert!(!web.displayed);
        assert_eq!(web.opacity, 0.0);
        assert_eq!(f.controller.phases()[0], VisibilityPhase::Hidden);
    }

    #[test]
    fn superseding_reveal_cancels_stale_hide() {
        let mut f = fixture();
        f.controller.apply_filter("app").unwrap();
        f.scheduler.advance(Duration::from_millis(100));
        f.controller.apply_filter("all").unwrap();
        f.scheduler.advance(Duration::from_millis(1000));

        for surface in &f.surfaces {
            assert_eq!(*surface.0.borrow(), ItemStyle::SHOWN);
        }
        assert_eq!(f.scheduler.pending(), 0);
    }

    #[test]
    fn repeated_filter_is_idempotent() {
        let mut f = fixture();
        f.controller.apply_filter("web").unwrap();
        let pending = f.scheduler.pending();
        f.controller.apply_filter("web").unwrap();
        assert_eq!(f.scheduler.pending(), pending);
    }

    #[test]
    fn empty_groups_install_nothing() {
        let scheduler = Rc::new(ManualScheduler::new());
        let result = FilterController::<Flag, Surface>::init(
            Vec::new(),
            vec![("web".to_string(), Surface::default())],
            scheduler,
            FilterTiming::default(),
        );
        assert!(matches!(result, Err(CoreError::MissingElement(_))));
    }

    #[test]
    fn filter_tag_matching() {
        assert!(FilterTag::All.matches("anything"));
        assert!(FilterTag::parse("web").matches("web"));
        assert!(!FilterTag::parse("web").matches("design"));
        assert_eq!(FilterTag::parse("all"), FilterTag::All);
        assert_eq!(FilterTag::All.to_string(), "all");
    }
}
