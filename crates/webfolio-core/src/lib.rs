//! WebFolio Core Library
//!
//! Headless controllers behind a single-page personal portfolio.
//!
//! ## Overview
//!
//! Every piece of page behaviour lives here as an owned controller that talks
//! to the page only through small adapter traits (see [`surface`]) and a
//! cancellable [`schedule::Scheduler`]. The Dioxus front end implements those
//! traits on signals; tests implement them on plain `Rc<RefCell<_>>` fakes and
//! drive time with [`schedule::ManualScheduler`].
//!
//! - **Content**: static project records, testimonials and skills
//! - **Carousel**: testimonial cursor with hover-suspended autoplay
//! - **Filter**: category filter with two-phase, cancellable transitions
//! - **Modal**: project detail overlay that locks background scroll
//! - **Scroll**: header shadow, nav highlight, back-to-top, progress reveal
//! - **Form / CV**: contact validation and the CV placeholder fallback
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::rc::Rc;
//! use webfolio_core::{CarouselController, ManualScheduler};
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let mut carousel = CarouselController::init(entries, dots, scheduler.clone(), interval)?;
//! carousel.next();
//! scheduler.advance(interval);
//! ```

pub mod carousel;
pub mod config;
pub mod content;
pub mod cv;
pub mod error;
pub mod filter;
pub mod form;
pub mod modal;
pub mod nav;
pub mod render;
pub mod schedule;
pub mod scroll;
pub mod surface;
pub mod typewriter;

// Re-exports
pub use carousel::{Carousel, CarouselController};
pub use config::{CarouselConfig, CvConfig, FilterTiming, HeroConfig, OwnerProfile, SiteConfig};
pub use content::{ContentRegistry, ProjectRecord, Skill, Testimonial};
pub use cv::{AssetProbe, CvDownloader, CvOutcome, FsProbe, PlaceholderDocument};
pub use error::{CoreError, CoreResult};
pub use filter::{FilterController, FilterTag, VisibilityPhase};
pub use form::{ContactForm, FormField, LogSink, MessageSink, ValidationError};
pub use modal::{DismissTrigger, ModalController, ModalState};
pub use nav::{NavLink, NavMenu};
pub use render::{render_project, ProjectView};
pub use schedule::{ManualScheduler, Scheduler, TaskHandle};
pub use scroll::{RevealTracker, ScrollEffects, ScrollSnapshot, SectionBounds};
pub use surface::{ActiveMarker, ItemStyle, ItemSurface, ModalSurface};
pub use typewriter::{Typewriter, TypingConfig};
