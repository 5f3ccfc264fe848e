//! Testimonial carousel.
//!
//! [`Carousel`] is the cursor itself: a current index over N entries, each
//! paired 1:1 with an indicator dot. [`CarouselController`] adds the
//! autoplay timer that advances the cursor and pauses while the pointer is
//! over the carousel.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::schedule::{Scheduler, TaskHandle};
use crate::surface::ActiveMarker;

/// Index cursor over testimonial entries and their indicators.
///
/// Exactly one entry and the matching indicator are active at any time.
pub struct Carousel<M: ActiveMarker> {
    entries: Vec<M>,
    indicators: Vec<M>,
    current: usize,
}

impl<M: ActiveMarker> Carousel<M> {
    /// Take ownership of the entry and indicator handles and activate the first.
    ///
    /// Fails with `MissingElement` when there are no entries, and with
    /// `RegionMismatch` when indicators do not pair 1:1 with entries.
    pub fn new(entries: Vec<M>, indicators: Vec<M>) -> CoreResult<Self> {
        if entries.is_empty() {
            return Err(CoreError::MissingElement("testimonial entries".to_string()));
        }
        if indicators.len() != entries.len() {
            return Err(CoreError::RegionMismatch {
                region: "testimonial indicators",
                expected: entries.len(),
                found: indicators.len(),
            });
        }

        let mut carousel = Self {
            entries,
            indicators,
            current: 0,
        };
        carousel.activate(0);
        Ok(carousel)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Make `index` the single active entry
    pub fn show(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.activate(index);
        Ok(())
    }

    /// Advance one entry, wrapping past the end
    pub fn next(&mut self) {
        let index = (self.current + 1) % self.len();
        self.activate(index);
    }

    /// Go back one entry, wrapping before the start
    pub fn prev(&mut self) {
        let len = self.len();
        let index = (self.current + len - 1) % len;
        self.activate(index);
    }

    /// Indicator click
    pub fn jump(&mut self, index: usize) -> CoreResult<()> {
        self.show(index)
    }

    fn activate(&mut self, index: usize) {
        for (i, (entry, dot)) in self
            .entries
            .iter_mut()
            .zip(self.indicators.iter_mut())
            .enumerate()
        {
            let active = i == index;
            entry.set_active(active);
            dot.set_active(active);
        }
        self.current = index;
    }
}

/// Carousel plus its autoplay timer.
///
/// At most one autoplay timer exists. Pointer enter cancels it; pointer leave
/// starts a fresh interval with no catch-up for the paused time.
pub struct CarouselController<M: ActiveMarker + 'static> {
    carousel: Rc<RefCell<Carousel<M>>>,
    scheduler: Rc<dyn Scheduler>,
    interval: Duration,
    timer: Option<TaskHandle>,
}

impl<M: ActiveMarker + 'static> CarouselController<M> {
    /// Build the carousel and start autoplay
    pub fn init(
        entries: Vec<M>,
        indicators: Vec<M>,
        scheduler: Rc<dyn Scheduler>,
        interval: Duration,
    ) -> CoreResult<Self> {
        let carousel = Carousel::new(entries, indicators)?;
        let mut controller = Self {
            carousel: Rc::new(RefCell::new(carousel)),
            scheduler,
            interval,
            timer: None,
        };
        controller.start_autoplay();
        tracing::debug!(
            entries = controller.len(),
            interval_ms = interval.as_millis() as u64,
            "Testimonial carousel initialized"
        );
        Ok(controller)
    }

    pub fn len(&self) -> usize {
        self.carousel.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousel.borrow().is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.carousel.borrow().current_index()
    }

    pub fn autoplay_active(&self) -> bool {
        self.timer.is_some()
    }

    pub fn show(&mut self, index: usize) -> CoreResult<()> {
        self.carousel.borrow_mut().show(index)
    }

    pub fn next(&mut self) {
        self.carousel.borrow_mut().next();
    }

    pub fn prev(&mut self) {
        self.carousel.borrow_mut().prev();
    }

    pub fn jump(&mut self, index: usize) -> CoreResult<()> {
        self.carousel.borrow_mut().jump(index)
    }

    /// Pointer entered the carousel region: suspend autoplay
    pub fn pointer_enter(&mut self) {
        self.stop_autoplay();
    }

    /// Pointer left the carousel region: resume with a fresh interval
    pub fn pointer_leave(&mut self) {
        self.start_autoplay();
    }

    /// Cancel the timer. The controller stays usable for manual navigation.
    pub fn dispose(&mut self) {
        self.stop_autoplay();
    }

    fn start_autoplay(&mut self) {
        self.stop_autoplay();
        let carousel = Rc::clone(&self.carousel);
        let handle = self.scheduler.schedule_every(
            self.interval,
            Box::new(move || {
                // Skip the tick if a handler is mid-update
                if let Ok(mut carousel) = carousel.try_borrow_mut() {
                    carousel.next();
                }
            }),
        );
        self.timer = Some(handle);
    }

    fn stop_autoplay(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<M: ActiveMarker + 'static> Drop for CarouselController<M> {
    fn drop(&mut self) {
        self.dispose();
    }
}
