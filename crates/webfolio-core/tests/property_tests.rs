//! Property-based tests for the carousel and filter controllers
//!
//! Uses proptest to check cursor bounds, cycling, and filter partitions
//! under arbitrary operation sequences.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use proptest::prelude::*;
use webfolio_core::{
    ActiveMarker, Carousel, FilterController, FilterTag, FilterTiming, ItemStyle, ItemSurface,
    ManualScheduler, VisibilityPhase,
};

// ============================================================================
// Fakes
// ============================================================================

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
        self.0.borrow_mut().displayed = displayed;
    }

    fn set_emphasis(&mut self, opacity: f32, scale: f32) {
        let mut style = self.0.borrow_mut();
        style.opacity = opacity;
        style.scale = scale;
    }
}

fn flags(n: usize) -> Vec<Flag> {
    (0..n).map(|_| Flag::default()).collect()
}

fn active_count(flags: &[Flag]) -> usize {
    flags.iter().filter(|f| *f.0.borrow()).count()
}

// ============================================================================
// Strategy Generators
// ============================================================================

#[derive(Debug, Clone)]
enum CarouselOp {
    Next,
    Prev,
    Jump(usize), // Reduced modulo N
}

fn carousel_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CarouselOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(CarouselOp::Next),
            2 => Just(CarouselOp::Prev),
            1 => (0..100usize).prop_map(CarouselOp::Jump),
        ],
        0..max_ops,
    )
}

const CATEGORIES: [&str; 3] = ["web", "app", "design"];

fn categories_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(CATEGORIES.to_vec()), 1..12)
}

fn filter_sequence_strategy() -> impl Strategy<Value = Vec<(&'static str, u64)>> {
    let tags = ["all", "web", "app", "design"];
    prop::collection::vec((prop::sample::select(tags.to_vec()), 0..400u64), 1..10)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The cursor stays in [0, N) and exactly one entry and dot are active
    #[test]
    fn carousel_index_stays_in_bounds(n in 1..10usize, ops in carousel_ops_strategy(50)) {
        let entries = flags(n);
        let dots = flags(n);
        let mut carousel = Carousel::new(entries.clone(), dots.clone()).unwrap();

        for op in ops {
            match op {
                CarouselOp::Next => carousel.next(),
                CarouselOp::Prev => carousel.prev(),
                CarouselOp::Jump(i) => carousel.jump(i % n).unwrap(),
            }
            prop_assert!(carousel.current_index() < n);
            prop_assert_eq!(active_count(&entries), 1);
            prop_assert_eq!(active_count(&dots), 1);
            prop_assert!(*entries[carousel.current_index()].0.borrow());
        }
    }

    /// next() applied N times returns to the starting index, as does prev()
    #[test]
    fn carousel_cycles_with_period_n(n in 1..10usize, start in 0..10usize) {
        let mut carousel = Carousel::new(flags(n), flags(n)).unwrap();
        let start = start % n;
        carousel.jump(start).unwrap();

        for _ in 0..n {
            carousel.next();
        }
        prop_assert_eq!(carousel.current_index(), start);

        for _ in 0..n {
            carousel.prev();
        }
        prop_assert_eq!(carousel.current_index(), start);
    }

    /// jump(i) lands exactly on i regardless of prior state
    #[test]
    fn carousel_jump_is_exact(n in 1..10usize, ops in carousel_ops_strategy(20), target in 0..10usize) {
        let mut carousel = Carousel::new(flags(n), flags(n)).unwrap();
        for op in ops {
            match op {
                CarouselOp::Next => carousel.next(),
                CarouselOp::Prev => carousel.prev(),
                CarouselOp::Jump(i) => carousel.jump(i % n).unwrap(),
            }
        }
        let target = target % n;
        carousel.jump(target).unwrap();
        prop_assert_eq!(carousel.current_index(), target);
    }

    /// Once transitions settle, exactly the matching items are Visible,
    /// however fast the filters were changed
    #[test]
    fn filter_settles_to_exact_partition(
        categories in categories_strategy(),
        sequence in filter_sequence_strategy(),
    ) {
        let scheduler = Rc::new(ManualScheduler::new());
        let tags = ["all", "web", "app", "design"];
        let controls = flags(tags.len());
        let surfaces: Vec<Surface> = categories.iter().map(|_| Surface::default()).collect();

        let mut controller = FilterController::init(
            tags.iter().zip(&controls).map(|(t, f)| (FilterTag::parse(t), f.clone())).collect(),
            categories.iter().zip(&surfaces).map(|(c, s)| (c.to_string(), s.clone())).collect(),
            scheduler.clone(),
            FilterTiming::default(),
        ).unwrap();

        for (tag, pause_ms) in &sequence {
            controller.apply_filter(tag).unwrap();
            prop_assert_eq!(active_count(&controls), 1);
            scheduler.advance(Duration::from_millis(*pause_ms));
        }
        scheduler.advance(Duration::from_secs(1));

        let last = FilterTag::parse(sequence.last().unwrap().0);
        for ((category, surface), phase) in categories.iter().zip(&surfaces).zip(controller.phases()) {
            let style = *surface.0.borrow();
            if last.matches(category) {
                prop_assert_eq!(phase, VisibilityPhase::Visible);
                prop_assert_eq!(style, ItemStyle::SHOWN);
            } else {
                prop_assert_eq!(phase, VisibilityPhase::Hidden);
                prop_assert!(!style.displayed);
                prop_assert_eq!(style.opacity, 0.0);
            }
        }
        prop_assert_eq!(scheduler.pending(), 0);
    }
}
