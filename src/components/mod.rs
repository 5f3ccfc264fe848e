//! Page sections and overlays of the portfolio.

mod about;
mod back_to_top;
mod contact;
mod cv_download;
mod hero;
mod nav_header;
mod page_section;
mod portfolio;
mod project_modal;
mod skills;
mod testimonials;

pub use about::About;
pub use back_to_top::BackToTop;
pub use contact::Contact;
pub use cv_download::CvDownloadButton;
pub use hero::Hero;
pub use nav_header::NavHeader;
pub use page_section::PageSection;
pub use portfolio::Portfolio;
pub use project_modal::ProjectModal;
pub use skills::Skills;
pub use testimonials::Testimonials;
